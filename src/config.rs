//! Configuration module for pingreport.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port for the web server (default: 8080)
    pub http_port: u16,
    /// Ping utility to execute (default: "ping", resolved through PATH)
    pub ping_bin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            ping_bin: "ping".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PINGREPORT_HTTP_PORT`: HTTP port (default: 8080)
    /// - `PINGREPORT_PING_BIN`: ping executable (default: "ping")
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(port_str) = lookup("PINGREPORT_HTTP_PORT") {
            match port_str.parse() {
                Ok(port) => cfg.http_port = port,
                Err(_) => tracing::warn!("Ignoring invalid PINGREPORT_HTTP_PORT: {}", port_str),
            }
        }

        if let Some(ping_bin) = lookup("PINGREPORT_PING_BIN") {
            if !ping_bin.trim().is_empty() {
                cfg.ping_bin = ping_bin;
            }
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.http_port, 8080);
        assert_eq!(cfg.ping_bin, "ping");
    }

    #[test]
    fn test_env_overrides() {
        let cfg = load_from(&[
            ("PINGREPORT_HTTP_PORT", "9090"),
            ("PINGREPORT_PING_BIN", "/usr/bin/ping"),
        ]);
        assert_eq!(cfg.http_port, 9090);
        assert_eq!(cfg.ping_bin, "/usr/bin/ping");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = load_from(&[("PINGREPORT_HTTP_PORT", "not-a-port"), ("PINGREPORT_PING_BIN", "  ")]);
        assert_eq!(cfg.http_port, 8080);
        assert_eq!(cfg.ping_bin, "ping");
    }
}
