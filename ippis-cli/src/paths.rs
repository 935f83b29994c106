//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "ng";
const ORGANIZATION: &str = "ippis";
const APPLICATION: &str = "ippis";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/ippis` or `~/.config/ippis`
/// - macOS: `~/Library/Application Support/ng.ippis.ippis`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ippis\ippis\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Table config used when `--config` is not given.
pub fn default_table_config() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("table.json"))
}
