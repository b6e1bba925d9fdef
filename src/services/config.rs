//! Server Configuration
//!
//! Remote store endpoint configuration, persisted as TOML under the platform
//! config directory. A missing file yields the localhost default.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::DEFAULT_BASE_URL;
use crate::error::{Error, Result};

/// Remote store endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// User-visible name
    pub name: String,
    /// Base URL of the locations REST store
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "local".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Display name (e.g., "local (http://localhost:5002)")
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            self.base_url.clone()
        } else {
            format!("{} ({})", self.name, self.base_url)
        }
    }
}

/// Get or create the configuration file path
fn config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "locadmin").ok_or_else(|| Error::Io {
        source: std::io::Error::other("could not determine config directory"),
    })?;
    let dir = dirs.config_dir();
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(dir.join("server.toml"))
}

fn read_config(path: &Path) -> Result<ServerConfig> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }

    let value = std::fs::read_to_string(path)?;
    if value.trim().is_empty() {
        return Ok(ServerConfig::default());
    }

    Ok(toml::from_str(&value)?)
}

fn write_config(path: &Path, config: &ServerConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load the server configuration, falling back to defaults when the file
/// does not exist yet
pub fn load_server_config() -> Result<ServerConfig> {
    let path = config_path()?;

    #[cfg(debug_assertions)]
    info!("Server config file: {}", path.display());

    read_config(&path)
}

/// Save the server configuration
pub fn save_server_config(config: &ServerConfig) -> Result<()> {
    write_config(&config_path()?, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url, "http://localhost:5002");
    }

    #[test]
    fn test_display_name() {
        let config = ServerConfig::default();
        assert_eq!(config.display_name(), "local (http://localhost:5002)");

        let unnamed = ServerConfig { name: String::new(), ..ServerConfig::default() };
        assert_eq!(unnamed.display_name(), "http://localhost:5002");
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let path = std::env::temp_dir().join("locadmin_server_config_test.toml");
        let config = ServerConfig {
            name: "staging".to_string(),
            base_url: "http://staging:5002".to_string(),
        };

        write_config(&path, &config).expect("write");
        let back = read_config(&path).expect("read");
        assert_eq!(back, config);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("locadmin_server_config_missing.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(read_config(&path).expect("read"), ServerConfig::default());
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let path = std::env::temp_dir().join("locadmin_server_config_empty.toml");
        std::fs::write(&path, "").expect("write");
        assert_eq!(read_config(&path).expect("read"), ServerConfig::default());
        let _ = std::fs::remove_file(&path);
    }
}
