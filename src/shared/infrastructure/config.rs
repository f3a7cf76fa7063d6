use axum::http::HeaderValue;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a host name or IP address, got {value:?}")]
    InvalidHost { key: &'static str, value: String },

    #[error("{key} must be a port number, got {value:?}")]
    InvalidPort { key: &'static str, value: String },

    #[error("{key} contains an invalid origin: {value:?}")]
    InvalidCorsOrigin { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// | Env var                  | Default                  |
/// |--------------------------|--------------------------|
/// | `BOOKSHELF_HOST`         | `0.0.0.0`                |
/// | `BOOKSHELF_PORT`         | `9000`                   |
/// | `BOOKSHELF_CORS_ORIGINS` | empty, any origin is allowed |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host name or IP literal, resolved when the listener binds.
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9000,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub const HOST: &'static str = "BOOKSHELF_HOST";
    pub const PORT: &'static str = "BOOKSHELF_PORT";
    pub const CORS_ORIGINS: &'static str = "BOOKSHELF_CORS_ORIGINS";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup(Self::HOST) {
            Some(value) => {
                let host = value.trim();
                if host.is_empty() || host.contains(|c: char| c.is_whitespace() || c == '/') {
                    return Err(ConfigError::InvalidHost {
                        key: Self::HOST,
                        value,
                    });
                }
                host.to_string()
            }
            None => defaults.host,
        };

        let port = match lookup(Self::PORT) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                key: Self::PORT,
                value,
            })?,
            None => defaults.port,
        };

        let cors_origins = lookup(Self::CORS_ORIGINS)
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidCorsOrigin {
                    key: Self::CORS_ORIGINS,
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host,
            port,
            cors_origins,
        })
    }

    /// Address to hand to `TcpListener::bind`; host names resolve there.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
