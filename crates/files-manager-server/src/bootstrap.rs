//! Seeds the user directory from configuration at startup.

use files_manager_auth::{ConfigError, Identity};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::BootstrapConfig;
use crate::users::{InMemoryUserDirectory, UserRecord};

/// Builds the user directory from `[[bootstrap.users]]` entries.
///
/// Users without an `id` get a random UUID, regenerated on every restart.
pub fn seed_user_directory(
    config: &BootstrapConfig,
) -> Result<InMemoryUserDirectory, ConfigError> {
    config.validate()?;

    let directory = InMemoryUserDirectory::new();
    for user in &config.users {
        let id = match &user.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => {
                let generated = Uuid::new_v4().to_string();
                warn!(email = %user.email, id = %generated, "Bootstrap user has no id, generated one");
                generated
            }
        };

        directory.insert(UserRecord {
            id: Identity::new(id),
            email: user.email.clone(),
            password_hash: user.password_hash()?,
        });
    }

    if directory.is_empty() {
        warn!("No bootstrap users configured, every /connect will be rejected");
    } else {
        info!(users = directory.len(), "User directory seeded");
    }

    Ok(directory)
}
