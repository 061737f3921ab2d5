// LinkPad platform paths for Linux
// Config: ~/.config/linkpad
// Data:   ~/.local/share/linkpad

use std::env;
use std::path::PathBuf;

/// `$XDG_CONFIG_HOME/linkpad`, or `~/.config/linkpad`.
pub fn get_config_dir() -> PathBuf {
    config_dir_from(env::var("XDG_CONFIG_HOME").ok(), home())
}

/// `$XDG_DATA_HOME/linkpad`, or `~/.local/share/linkpad`.
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var("XDG_DATA_HOME").ok(), home())
}

fn home() -> String {
    env::var("HOME").unwrap_or_else(|_| String::from("/tmp"))
}

fn config_dir_from(xdg: Option<String>, home: String) -> PathBuf {
    match xdg {
        Some(xdg) => PathBuf::from(xdg).join("linkpad"),
        None => PathBuf::from(home).join(".config").join("linkpad"),
    }
}

fn data_dir_from(xdg: Option<String>, home: String) -> PathBuf {
    match xdg {
        Some(xdg) => PathBuf::from(xdg).join("linkpad"),
        None => PathBuf::from(home).join(".local").join("share").join("linkpad"),
    }
}
