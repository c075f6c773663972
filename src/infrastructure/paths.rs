//! Path utilities for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which points
//! at the cwd of the last focused terminal (usually the user's home). Everything
//! the plugin writes lives under that mount.

use std::path::PathBuf;

/// Sandbox path of the host home directory.
const HOST_ROOT: &str = "/host";

/// Returns the plugin's data directory, `/host/.local/share/zellij/foodgrid`.
///
/// Holds the exported trace file and its rotated backups.
///
/// # Examples
///
/// ```
/// use foodgrid::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/foodgrid"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("foodgrid")
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// Used for the `theme_file` option, which users write relative to their home.
///
/// # Examples
///
/// ```
/// use foodgrid::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/food.toml"), "/host/themes/food.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_only_touches_leading_tilde() {
        assert_eq!(expand_tilde("~/a/~/b"), "/host/a/~/b");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("relative/theme.toml"), "relative/theme.toml");
    }

    #[test]
    fn test_data_dir_under_host() {
        assert!(get_data_dir().starts_with("/host"));
        assert!(get_data_dir().ends_with("foodgrid"));
    }
}
