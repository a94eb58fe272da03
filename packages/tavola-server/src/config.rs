/// Configuration for the Tavola server.
/// Reads config.json from ~/.config/tavola/config.json (or platform equivalent).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Default data file: ~/.local/share/tavola/lists.json (platform equivalent).
fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tavola")
        .join("lists.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            data_file: default_data_file(),
        }
    }
}

/// Default config path: ~/.config/tavola/config.json
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tavola")
        .join("config.json")
}

/// Load config from path. Returns default if file doesn't exist.
pub fn load_config(path: &PathBuf) -> ServerConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Failed to parse config {}: {}", path.display(), e);
            ServerConfig::default()
        }),
        Err(_) => {
            log::info!("No config at {}, using defaults", path.display());
            ServerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let cfg = load_config(&PathBuf::from("/nonexistent/tavola/config.json"));
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.bind_address, "127.0.0.1");
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_the_rest() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{{\"port\": 3000}}").unwrap();

        let cfg = load_config(&tmp.path().to_path_buf());
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.bind_address, "127.0.0.1");
        assert!(cfg.data_file.ends_with("lists.json"));
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "not json at all").unwrap();

        let cfg = load_config(&tmp.path().to_path_buf());
        assert_eq!(cfg.port, 8080);
    }
}
