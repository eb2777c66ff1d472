//! Axum extractors for session-authenticated requests.
//!
//! - [`SessionAuth`] - resolves the `X-Token` header to the caller's identity
//!
//! ### Usage Example
//!
//! ```ignore
//! use files_manager_auth::extractors::SessionAuth;
//!
//! async fn handler(SessionAuth(identity): SessionAuth) -> String {
//!     format!("Hello, {identity}!")
//! }
//! ```

mod session_auth;

pub use session_auth::SessionAuth;
