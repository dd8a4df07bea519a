//! Service configuration, read once from the process environment at startup.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const ENV_ENVIRONMENT: &str = "FLASK_ENV";
pub const ENV_PORT: &str = "PORT";
pub const ENV_DEBUG: &str = "FLASK_DEBUG";
pub const ENV_TESTING: &str = "FLASK_TESTING";

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a TCP port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be a boolean flag, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployment environment name, informational only.
    pub environment: String,
    pub port: u16,
    pub debug: bool,
    pub testing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            port: DEFAULT_PORT,
            debug: true,
            testing: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset and empty values
    /// both fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let environment = get(ENV_ENVIRONMENT).unwrap_or(defaults.environment);

        let port = match get(ENV_PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: ENV_PORT,
                value: raw,
            })?,
            None => defaults.port,
        };

        let debug = match get(ENV_DEBUG) {
            Some(raw) => parse_flag(ENV_DEBUG, raw)?,
            None => defaults.debug,
        };

        let testing = match get(ENV_TESTING) {
            Some(raw) => parse_flag(ENV_TESTING, raw)?,
            None => defaults.testing,
        };

        Ok(Self {
            environment,
            port,
            debug,
            testing,
        })
    }

    /// All interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Outcome of loading `.env`: a missing file means nothing was loaded, any
/// other failure (unreadable file, bad line) is returned to the caller.
pub fn dotenv_outcome(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

fn parse_flag(var: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.environment, "development");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("FLASK_ENV", "production"),
            ("PORT", "8080"),
            ("FLASK_DEBUG", "off"),
            ("FLASK_TESTING", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.environment, "production");
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
        assert!(config.testing);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            AppConfig::from_lookup(lookup(&[("FLASK_ENV", ""), ("PORT", "  ")])).unwrap();
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                var: "PORT",
                value: "70000".to_string()
            }
        );
    }

    #[test]
    fn rejects_bad_flag() {
        let err = AppConfig::from_lookup(lookup(&[("FLASK_DEBUG", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { var: "FLASK_DEBUG", .. }));
    }

    #[test]
    fn missing_dotenv_is_not_an_error() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(dotenv_outcome(Err(missing)), Ok(None)));
    }

    #[test]
    fn malformed_dotenv_is_reported() {
        let malformed = dotenvy::Error::LineParse("PORT 5000".to_string(), 5);
        assert!(matches!(
            dotenv_outcome(Err(malformed)),
            Err(dotenvy::Error::LineParse(..))
        ));
    }

    #[test]
    fn loaded_dotenv_reports_its_path() {
        let path = PathBuf::from("/srv/app/.env");
        assert_eq!(dotenv_outcome(Ok(path.clone())).unwrap(), Some(path));
    }

    #[test]
    fn binds_all_interfaces() {
        let config = AppConfig {
            port: 7000,
            ..AppConfig::default()
        };
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:7000");
    }
}
