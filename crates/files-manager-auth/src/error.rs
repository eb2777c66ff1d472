//! Authentication and session error types.
//!
//! Every authentication-domain failure (bad header, wrong credentials, unknown
//! token) surfaces to HTTP callers as the same `401 Unauthorized`. Collaborator
//! failures stay distinct so operators can tell "bad credentials" apart from
//! "store down".

use std::fmt;

/// Errors that can occur while verifying credentials or managing sessions.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The `Authorization` header is missing or cannot be parsed.
    #[error("Malformed credentials: {message}")]
    MalformedPresentation {
        /// Description of what was wrong with the presentation.
        message: String,
    },

    /// The credentials are well-formed but match no user.
    #[error("Invalid credentials")]
    Unauthenticated,

    /// The session token was never issued, has been revoked, or has expired.
    #[error("Unknown or expired session")]
    UnknownSession,

    /// The session store could not be reached or rejected the command.
    #[error("Session store unavailable: {message}")]
    StoreUnavailable {
        /// Description of the store failure.
        message: String,
    },

    /// The user lookup collaborator could not be reached.
    #[error("User lookup unavailable: {message}")]
    LookupUnavailable {
        /// Description of the lookup failure.
        message: String,
    },
}

impl AuthError {
    /// Creates a new `MalformedPresentation` error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPresentation {
            message: message.into(),
        }
    }

    /// Creates a new `StoreUnavailable` error.
    #[must_use]
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    /// Creates a new `LookupUnavailable` error.
    #[must_use]
    pub fn lookup_unavailable(message: impl Into<String>) -> Self {
        Self::LookupUnavailable {
            message: message.into(),
        }
    }

    /// Returns `true` if this error must be reported to the caller as
    /// `Unauthorized`.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::MalformedPresentation { .. } | Self::Unauthenticated | Self::UnknownSession
        )
    }

    /// Returns `true` if this is a collaborator failure (5xx category).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable { .. } | Self::LookupUnavailable { .. }
        )
    }

    /// Returns the error category for logging.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedPresentation { .. } => ErrorCategory::Authentication,
            Self::Unauthenticated => ErrorCategory::Authentication,
            Self::UnknownSession => ErrorCategory::Session,
            Self::StoreUnavailable { .. } => ErrorCategory::Infrastructure,
            Self::LookupUnavailable { .. } => ErrorCategory::Infrastructure,
        }
    }
}

/// Categories of auth errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Credential presentation or verification failed.
    Authentication,
    /// The presented session token is not active.
    Session,
    /// A collaborator (session store, user lookup) failed.
    Infrastructure,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication => write!(f, "authentication"),
            Self::Session => write!(f, "session"),
            Self::Infrastructure => write!(f, "infrastructure"),
        }
    }
}
