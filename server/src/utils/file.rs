//! File utility functions

use std::io;
use std::path::{Path, PathBuf};

/// Expand a path string to an absolute path.
///
/// - `~` or `~/path` resolves against the home directory
/// - Relative paths and bare names resolve against the current directory
/// - Absolute paths pass through unchanged
///
/// ```text
/// expand_path("~/.lightbnb")     // -> /home/user/.lightbnb
/// expand_path("./lightbnb.json") // -> /current/dir/./lightbnb.json
/// expand_path("/etc/lightbnb")   // -> /etc/lightbnb
/// ```
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    }

    let expanded = if path == "~" {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(path))
    } else if let Some(rest) = path.strip_prefix("~/") {
        match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        }
    } else {
        PathBuf::from(path)
    };

    if expanded.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    } else {
        expanded
    }
}

/// Create the parent directory of `path` if it does not exist yet
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            tracing::debug!(path = %parent.display(), "Creating directory");
            std::fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}
