//! User configuration.
//!
//! Read from `$XDG_CONFIG_HOME/tinker/config.toml` (or the platform
//! equivalent). `TINKER_CONFIG` overrides the path, which is also how tests
//! point at a scratch file. A missing file means defaults; a file that
//! exists but does not parse is an error worth surfacing, not ignoring.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Default output format: `pretty`, `text`, or `json`.
    #[serde(default)]
    pub output: Option<String>,
    /// Default catalog sort key for listings.
    #[serde(default)]
    pub sort: Option<String>,
}

/// Where the user config lives, honoring the `TINKER_CONFIG` override.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("TINKER_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("tinker/config.toml"))
}

/// Load config from an explicit path. Missing file yields defaults.
pub fn load_from(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse config at {}", path.display()))
}

/// Load the user config from the resolved path, or defaults when no config
/// directory is available on the platform.
pub fn load_user_config() -> Result<UserConfig> {
    config_path().map_or_else(|| Ok(UserConfig::default()), |path| load_from(&path))
}

#[cfg(test)]
mod tests {
    use super::{UserConfig, load_from};
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_from(&dir.path().join("nope.toml")).expect("load");
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn parses_known_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(file, "output = \"json\"\nsort = \"rating\"").expect("write");

        let config = load_from(&path).expect("load");
        assert_eq!(config.output.as_deref(), Some("json"));
        assert_eq!(config.sort.as_deref(), Some("rating"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output = [unclosed").expect("write");
        assert!(load_from(&path).is_err());
    }
}
