use crate::{env_or_default, env_parse, ConfigError, FromEnv};
use std::net::Ipv4Addr;
use std::time::Duration;

/// HTTP listener settings shared by every API binary.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for post-signal cleanup (closing database clients, etc.)
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// "host:port" as accepted by `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// - HOST: defaults to 0.0.0.0
    /// - PORT: defaults to 8080
    /// - SHUTDOWN_TIMEOUT_SECS: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse("PORT", "8080")?;
        let shutdown_timeout = Duration::from_secs(env_parse("SHUTDOWN_TIMEOUT_SECS", "30")?);

        Ok(Self {
            host,
            port,
            shutdown_timeout,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
            shutdown_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_env_with_defaults() {
        temp_env::with_vars(
            [
                ("HOST", None::<&str>),
                ("PORT", None),
                ("SHUTDOWN_TIMEOUT_SECS", None),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "0.0.0.0:8080");
                assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
            },
        );
    }

    #[test]
    fn test_server_config_from_env_with_custom_values() {
        temp_env::with_vars(
            [
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("3000")),
                ("SHUTDOWN_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "127.0.0.1:3000");
                assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_server_config_from_env_port_out_of_range() {
        temp_env::with_var("PORT", Some("99999"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }

    #[test]
    fn test_server_config_new_keeps_default_timeout() {
        let config = ServerConfig::new("localhost", 5000);
        assert_eq!(config.address(), "localhost:5000");
        assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
    }
}
