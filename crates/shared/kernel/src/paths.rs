//! Resolution of per-user configuration paths.

use std::io;
use std::path::{Path, PathBuf};
use tinct_domain::config::PathsConfig;
use tinct_domain::constants::SETTINGS_FILE;

/// Path of `name` inside the per-user configuration directory.
#[must_use]
pub fn config_file(paths: &PathsConfig, name: impl AsRef<Path>) -> PathBuf {
    paths.config_dir.join(name)
}

/// Path of the user settings file.
#[must_use]
pub fn settings_file(paths: &PathsConfig) -> PathBuf {
    config_file(paths, SETTINGS_FILE)
}

/// Creates the per-user configuration directory if it does not exist yet.
///
/// # Errors
/// Propagates the I/O error if the directory cannot be created.
pub fn ensure_config_dir(paths: &PathsConfig) -> io::Result<&Path> {
    std::fs::create_dir_all(&paths.config_dir)?;
    Ok(&paths.config_dir)
}
