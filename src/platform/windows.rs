// LinkPad platform paths for Windows
// Config and data: %APPDATA%/LinkPad

use std::env;
use std::path::PathBuf;

/// `%APPDATA%/LinkPad`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("LinkPad")
}

/// Same directory as [`get_config_dir`].
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}
