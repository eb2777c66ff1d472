pub mod bootstrap;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod session_store;
pub mod users;

pub use bootstrap::seed_user_directory;
pub use config::{
    AppConfig, BootstrapConfig, BootstrapUser, LoggingConfig, RedisConfig, ServerConfig,
};
pub use observability::{apply_logging_level, init_tracing};
pub use server::{AppState, FilesManagerServer, ServerBuilder, build_app};
pub use session_store::{
    LocalEntry, SessionBackend, SessionBackendError, create_session_backend,
};
pub use users::{InMemoryUserDirectory, UserRecord};
