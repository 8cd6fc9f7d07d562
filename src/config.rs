use serde::Deserialize;
use std::fs;

/// Application configuration.
///
/// Loaded from `config.toml` in the working directory; a missing file
/// or missing fields fall back to defaults, and the
/// `ROSTER_SERVER_HOST` / `ROSTER_SERVER_PORT` environment variables
/// override whatever the file says.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let mut config = match fs::read_to_string("config.toml") {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(%err, "config.toml is invalid, using defaults");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        };

        config.server.apply_env_overrides();
        config
    }
}

impl ServerConfig {
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("ROSTER_SERVER_HOST") {
            if !host.is_empty() {
                self.host = host;
            }
        }
        if let Ok(port) = std::env::var("ROSTER_SERVER_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!(value = %port, "ignoring unparseable ROSTER_SERVER_PORT"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_parse_full_file() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "roster.internal"
            port = 9090
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "roster.internal");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 3000
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server, ServerConfig::default());
    }
}
