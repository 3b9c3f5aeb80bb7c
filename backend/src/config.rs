//! Server configuration: compiled-in defaults, overridable through environment variables.
//!
//! | Variable             | Default       |
//! |----------------------|---------------|
//! | `PANEL_HOST`         | `127.0.0.1`   |
//! | `PANEL_PORT`         | `8080`        |
//! | `PANEL_STATIC_DIR`   | `static/dist` |
//! | `PANEL_OPEN_BROWSER` | `true`        |

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{name}` has an invalid value `{value}`")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of the built frontend. `index.html` in it is the fallback page.
    pub static_dir: PathBuf,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: PathBuf::from("static/dist"),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("PANEL_HOST").filter(|h| !h.is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("PANEL_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PANEL_PORT",
                value: port,
            })?;
        }
        if let Some(dir) = lookup("PANEL_STATIC_DIR").filter(|d| !d.is_empty()) {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(open) = lookup("PANEL_OPEN_BROWSER") {
            config.open_browser = match open.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "PANEL_OPEN_BROWSER",
                        value: open,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PANEL_HOST", "0.0.0.0"),
            ("PANEL_PORT", "9000"),
            ("PANEL_STATIC_DIR", "/srv/panel"),
            ("PANEL_OPEN_BROWSER", "off"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/panel"));
        assert!(!config.open_browser);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("PANEL_PORT", "http")])),
            Err(ConfigError::Invalid {
                name: "PANEL_PORT",
                value: "http".into()
            })
        );
        assert!(ServerConfig::from_lookup(lookup(&[("PANEL_OPEN_BROWSER", "maybe")])).is_err());
    }
}
