use files_manager_auth::{ConfigError, SessionConfig};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, time::Duration};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// Session token lifetime
    #[serde(default)]
    pub session: SessionConfig,
    /// Redis session store configuration
    #[serde(default)]
    pub redis: RedisConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Users seeded into the in-memory directory at startup
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        // Server validations
        if self.server.port == 0 {
            return Err("server.port must be > 0".into());
        }
        if self.server.body_limit_bytes == 0 {
            return Err("server.body_limit_bytes must be > 0".into());
        }
        // Session validation
        self.session
            .validate()
            .map_err(|e| format!("session config error: {e}"))?;
        // Redis validation
        if self.redis.enabled {
            if self.redis.url.is_empty() {
                return Err("redis.enabled=true requires redis.url".into());
            }
            if self.redis.pool_size == 0 {
                return Err("redis.pool_size must be > 0".into());
            }
        }
        // Logging validation
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(format!("logging.level must be one of {valid_levels:?}"));
        }
        // Bootstrap validation
        self.bootstrap
            .validate()
            .map_err(|e| format!("bootstrap config error: {e}"))?;
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        use std::net::{IpAddr, Ipv4Addr};
        let host: IpAddr = self
            .server
            .host
            .parse()
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        SocketAddr::from((host, self.server.port))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    5000
}
fn default_body_limit() -> usize {
    1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

/// Redis configuration for the shared session store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Store sessions in Redis. When disabled, sessions live in process
    /// memory and are lost on restart.
    /// Default: false
    #[serde(default = "default_redis_enabled")]
    pub enabled: bool,

    /// Redis connection URL (e.g., "redis://localhost:6379")
    #[serde(default = "default_redis_url")]
    pub url: String,

    /// Connection pool size
    #[serde(default = "default_redis_pool_size")]
    pub pool_size: usize,

    /// Pool wait/create/recycle timeout in milliseconds
    #[serde(default = "default_redis_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_redis_enabled() -> bool {
    false
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_redis_pool_size() -> usize {
    10
}

fn default_redis_timeout_ms() -> u64 {
    5000
}

impl RedisConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            enabled: default_redis_enabled(),
            url: default_redis_url(),
            pool_size: default_redis_pool_size(),
            timeout_ms: default_redis_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}
fn default_log_level() -> String {
    "info".into()
}
impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Bootstrap configuration for the user directory
///
/// Prefer `password_hash` over `password` in shared configuration files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BootstrapConfig {
    #[serde(default)]
    pub users: Vec<BootstrapUser>,
}

impl BootstrapConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for user in &self.users {
            user.password_hash()?;
            if !seen.insert(user.email.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "duplicate bootstrap user email '{}'",
                    user.email
                )));
            }
        }
        Ok(())
    }
}

/// A user record seeded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapUser {
    /// Stable user id. Generated when omitted.
    #[serde(default)]
    pub id: Option<String>,
    /// Login email
    pub email: String,
    /// Plain-text password (digested before storage)
    #[serde(default)]
    pub password: Option<String>,
    /// Pre-computed SHA-1 hex digest of the password
    #[serde(default)]
    pub password_hash: Option<String>,
}

impl BootstrapUser {
    /// Returns the stored digest for this user, computing it from `password`
    /// when no `password_hash` is given.
    pub fn password_hash(&self) -> Result<String, ConfigError> {
        if self.email.is_empty() {
            return Err(ConfigError::Missing("bootstrap user email".into()));
        }
        match (&self.password, &self.password_hash) {
            (Some(password), None) if !password.is_empty() => {
                Ok(files_manager_auth::hash_secret(password))
            }
            (None, Some(hash)) => {
                let hash = hash.to_ascii_lowercase();
                if hash.len() != 40 || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(ConfigError::InvalidValue(format!(
                        "password_hash for '{}' must be 40 hex characters",
                        self.email
                    )));
                }
                Ok(hash)
            }
            (Some(_), Some(_)) => Err(ConfigError::InvalidValue(format!(
                "user '{}' sets both password and password_hash",
                self.email
            ))),
            _ => Err(ConfigError::Missing(format!(
                "password or password_hash for user '{}'",
                self.email
            ))),
        }
    }
}

pub mod loader {
    use super::AppConfig;
    use config::{Config, Environment, File};
    use std::path::PathBuf;

    /// Default configuration file name.
    pub const DEFAULT_CONFIG_FILE: &str = "files-manager.toml";

    pub fn load_config(path: Option<&str>) -> Result<AppConfig, String> {
        let mut builder = Config::builder();
        let pathbuf = PathBuf::from(path.unwrap_or(DEFAULT_CONFIG_FILE));
        if pathbuf.exists() {
            builder = builder.add_source(File::from(pathbuf));
        }
        // Environment variable overrides, e.g., FILES_MANAGER__SERVER__PORT=9090
        builder = builder.add_source(
            Environment::with_prefix("FILES_MANAGER")
                .try_parsing(true)
                .separator("__"),
        );
        let cfg = builder
            .build()
            .map_err(|e| format!("config build error: {e}"))?;
        let merged: AppConfig = cfg
            .try_deserialize()
            .map_err(|e| format!("config deserialize error: {e}"))?;
        merged.validate()?;
        Ok(merged)
    }
}
