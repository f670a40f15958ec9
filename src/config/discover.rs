//! Configuration file discovery and path expansion.

use std::path::{Path, PathBuf};

use super::defaults;

/// Returns the implicit config file locations, in priority order.
///
/// The home directory entry is omitted when no home directory is known.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".").join(defaults::CONFIG_FILE_NAME)];

    if let Some(home) = dirs::home_dir() {
        paths.push(
            home.join(".config")
                .join(defaults::APP_NAME)
                .join(defaults::CONFIG_FILE_NAME),
        );
    }

    paths.push(Path::new(defaults::SYSTEM_CONFIG_DIR).join(defaults::CONFIG_FILE_NAME));
    paths
}

/// Returns the first candidate that is an existing file.
#[must_use]
pub fn find_config(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.is_file()).cloned()
}

/// Expands a leading `~` component to the home directory.
///
/// Paths without a leading `~`, or with `~user`, are returned unchanged,
/// as are all paths when no home directory is known.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home,
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
