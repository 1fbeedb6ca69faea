//! Module for searching for joyscope layout files

use std::path::PathBuf;

/// Base system fallback path to use if one cannot be found with XDG
const FALLBACK_BASE_PATH: &str = "/usr/share/joyscope";

/// Returns the base path for layout data
pub fn get_base_path() -> PathBuf {
    let Ok(base_dirs) = xdg::BaseDirectories::with_prefix("joyscope") else {
        log::warn!("Unable to determine layout base path. Using fallback path.");
        return PathBuf::from(FALLBACK_BASE_PATH);
    };

    // Get the data directories in preference order
    let data_dirs = base_dirs.get_data_dirs();
    for dir in data_dirs {
        if dir.exists() {
            return dir;
        }
    }

    log::warn!("Layout base path not found. Using fallback path.");
    PathBuf::from(FALLBACK_BASE_PATH)
}

/// Returns a list of directories in load order to find layout files.
/// E.g. ["/etc/joyscope/layouts.d", "/usr/share/joyscope/layouts"]
pub fn get_layouts_paths() -> Vec<PathBuf> {
    let paths = vec![
        PathBuf::from("/etc/joyscope/layouts.d"),
        get_base_path().join("layouts"),
    ];

    paths
}
