// LinkPad platform abstraction
// Resolves where settings and the bookmark database live on Windows, macOS, and Linux.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Environment variable that relocates the database directory.
pub const DATA_DIR_ENV: &str = "LINKPAD_DATA_DIR";

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/linkpad` (or `$XDG_CONFIG_HOME/linkpad`)
/// - **macOS**: `~/Library/Application Support/LinkPad`
/// - **Windows**: `%APPDATA%/LinkPad`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory.
///
/// - **Linux**: `~/.local/share/linkpad` (or `$XDG_DATA_HOME/linkpad`)
/// - **macOS**: `~/Library/Application Support/LinkPad`
/// - **Windows**: `%APPDATA%/LinkPad`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Path of the bookmark database: `$LINKPAD_DATA_DIR/<file>` when the variable
/// is set, otherwise `<data dir>/<file>`.
pub fn database_path(file_name: &str) -> PathBuf {
    resolve_database_path(env::var(DATA_DIR_ENV).ok(), file_name)
}

fn resolve_database_path(override_dir: Option<String>, file_name: &str) -> PathBuf {
    match override_dir.filter(|d| !d.is_empty()) {
        Some(dir) => PathBuf::from(dir).join(file_name),
        None => get_data_dir().join(file_name),
    }
}
