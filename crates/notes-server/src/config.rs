//! Server configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use http::HeaderValue;

/// Default port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime mode of the server. Selects the default log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerMode {
    Debug,
    #[default]
    Release,
    Test,
}

impl ServerMode {
    /// Log level used when `LOG_LEVEL` is not set.
    pub fn default_log_level(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "info",
            Self::Test => "warn",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for ServerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidValue {
                name: "SERVER_MODE".to_string(),
                reason: format!("expected debug, release or test, got {other:?}"),
            }),
        }
    }
}

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl FromStr for CorsOrigins {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "*" {
            return Ok(Self::Any);
        }

        // Parse comma-separated origins
        let origins = s
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|e| ConfigError::InvalidValue {
                    name: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: format!("{origin:?}: {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::List(origins))
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Runtime mode (debug, release, test).
    pub mode: ServerMode,
    /// Log level (trace, debug, info, warn, error) or any `EnvFilter` directive.
    pub log_level: String,
    /// CORS allowed origins.
    pub cors_allowed_origins: CorsOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let mode = ServerMode::default();
        Self {
            port: DEFAULT_PORT,
            mode,
            log_level: mode.default_log_level().to_string(),
            cors_allowed_origins: CorsOrigins::Any,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 8080)
    /// - `SERVER_MODE`: debug, release or test (default: "release")
    /// - `LOG_LEVEL`: Logging level (default depends on mode)
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("{raw:?} is not a valid port"),
            })?,
            None => DEFAULT_PORT,
        };

        let mode = match lookup("SERVER_MODE") {
            Some(raw) => raw.parse()?,
            None => ServerMode::default(),
        };

        let log_level =
            lookup("LOG_LEVEL").unwrap_or_else(|| mode.default_log_level().to_string());

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw.parse()?,
            None => CorsOrigins::Any,
        };

        Ok(Self {
            port,
            mode,
            log_level,
            cors_allowed_origins,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.mode, ServerMode::Release);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, CorsOrigins::Any);
    }

    #[test]
    fn test_explicit_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("SERVER_MODE", "Debug"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.mode, ServerMode::Debug);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.cors_allowed_origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("http://a.test"),
                HeaderValue::from_static("http://b.test"),
            ])
        );
        assert_eq!(config.socket_addr().port(), 9000);
    }

    #[test]
    fn test_log_level_overrides_mode() {
        let config =
            ServerConfig::from_lookup(lookup(&[("SERVER_MODE", "test"), ("LOG_LEVEL", "trace")]))
                .unwrap();

        assert_eq!(config.mode, ServerMode::Test);
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "PORT"));
    }

    #[test]
    fn test_invalid_mode() {
        let err = ServerConfig::from_lookup(lookup(&[("SERVER_MODE", "turbo")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "SERVER_MODE"));
    }

    #[test]
    fn test_invalid_cors_origin() {
        let origins = "http://ok.test,http://bad\u{7f}.test";
        let err =
            ServerConfig::from_lookup(lookup(&[("CORS_ALLOWED_ORIGINS", origins)])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref name, .. } if name == "CORS_ALLOWED_ORIGINS"
        ));
    }
}
