use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "HEXSWEEP_CONFIG";

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Normalize a path for display (resolve to absolute, canonicalize if possible)
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}

/// Resolve the config file location based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. HEXSWEEP_CONFIG environment variable (with tilde expansion)
/// 3. `<system config dir>/hexsweep/config.toml`
///
/// The boolean is true when the location was named by the user, in which
/// case a missing file is an error rather than a fallback to defaults.
pub fn resolve_config_path(explicit_path: Option<&str>) -> Option<(PathBuf, bool)> {
    if let Some(path) = explicit_path {
        return Some((expand_tilde(path), true));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR)
        && !env_path.is_empty()
    {
        return Some((expand_tilde(&env_path), true));
    }

    dirs::config_dir().map(|dir| (dir.join("hexsweep").join("config.toml"), false))
}
