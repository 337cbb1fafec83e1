//! File System Utilities
//!
//! Configuration directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get or create the crate's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/font-metrics/` or `$XDG_CONFIG_HOME/font-metrics/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.font-metrics/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\font-metrics\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "cyenx", "font-metrics") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    // Create config directory if it doesn't exist
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}
