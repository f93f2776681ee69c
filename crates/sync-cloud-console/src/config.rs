/*
[INPUT]:  Optional YAML configuration file, SYNC_CLOUD__* environment variables
[OUTPUT]: Parsed console configuration and adapter client settings
[POS]:    Configuration layer - server address, timeouts, logging
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use sync_cloud_adapter::ClientConfig;
use sync_cloud_adapter::http::client::DEFAULT_BASE_URL;

pub const ENV_PREFIX: &str = "SYNC_CLOUD";

/// Top-level configuration for the console
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Management API location
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Transport limits handed to the HTTP client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "sync_cloud_adapter=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for daily log files written while the TUI runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ConsoleConfig {
    /// `<config dir>/sync-cloud/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sync-cloud").join("config.yaml"))
    }

    /// Load from `path` (must exist) or the default path (may be missing),
    /// then overlay environment variables such as `SYNC_CLOUD__SERVER__BASE_URL`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(
                    File::from(path.to_path_buf())
                        .format(FileFormat::Yaml)
                        .required(true),
                );
            }
            None => {
                if let Some(default) = Self::default_path() {
                    builder = builder.add_source(
                        File::from(default)
                            .format(FileFormat::Yaml)
                            .required(false),
                    );
                }
            }
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().context("load configuration")?;
        settings
            .try_deserialize()
            .context("parse configuration")
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(content, FileFormat::Yaml))
            .build()
            .context("load configuration")?;
        settings
            .try_deserialize()
            .context("parse configuration")
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serialize configuration to YAML")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.server.base_url.clone(),
            timeout: Duration::from_secs(self.http.timeout_secs),
            connect_timeout: Duration::from_secs(self.http.connect_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = ConsoleConfig::from_yaml_str("{}").expect("parse");
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_yaml() {
        let config = ConsoleConfig::from_yaml_str(
            "server:\n  base_url: https://nas.local:5244\nhttp:\n  timeout_secs: 5\nlog:\n  dir: /var/log/sync-cloud\n",
        )
        .expect("parse");

        assert_eq!(config.server.base_url, "https://nas.local:5244");
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.connect_timeout_secs, 10);
        assert_eq!(config.log.dir, Some(PathBuf::from("/var/log/sync-cloud")));

        let client = config.client_config();
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(client.base_url, "https://nas.local:5244");
    }

    #[test]
    fn test_yaml_roundtrip_through_file() {
        let config = ConsoleConfig {
            server: ServerConfig {
                base_url: "http://10.0.0.2:5244".to_string(),
            },
            ..ConsoleConfig::default()
        };
        let yaml = config.to_yaml().expect("yaml");

        let path = std::env::temp_dir().join(format!(
            "sync-cloud-config-{}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, yaml).expect("write config");
        let loaded = ConsoleConfig::load(Some(path.as_path()));
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.expect("load").server.base_url, "http://10.0.0.2:5244");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = std::env::temp_dir().join("sync-cloud-definitely-missing.yaml");
        assert!(ConsoleConfig::load(Some(path.as_path())).is_err());
    }
}
