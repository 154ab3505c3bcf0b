//! # Paths
//!
//! Default locations for the configuration file and session logs.

pub const DATA_DIR: &str = "data";
pub const CONFIG_FILE: &str = "data/config.yaml";
pub const LOG_FILE: &str = "session.log";

/// Returns the default config path (e.g. "data/config.yaml")
pub fn config_path() -> std::path::PathBuf {
    std::path::PathBuf::from(CONFIG_FILE)
}
