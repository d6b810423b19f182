use crate::ConfigError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Host to bind the HTTP server to
    ///
    /// Env: AUCTION_HTTP_BIND_HOST
    /// Default: 127.0.0.1
    #[serde(default = "default_bind_host")]
    pub bind_host: String,

    /// Port to bind the HTTP server to
    ///
    /// Env: AUCTION_HTTP_PORT
    /// Default: 3001
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

impl HttpConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ValidateError(
                "HTTP port cannot be 0".to_string(),
            ));
        }

        if self.bind_host.is_empty() {
            return Err(ConfigError::ValidateError(
                "HTTP bind host cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_http_config() {
        let config = HttpConfig::default();
        assert_eq!(config.bind_host, "127.0.0.1");
        assert_eq!(config.port, 3001);
    }

    #[test]
    fn test_validate_port_zero() {
        let config = HttpConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_host() {
        let config = HttpConfig {
            bind_host: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = HttpConfig {
            bind_host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert!(config.validate().is_ok())
    }
}
