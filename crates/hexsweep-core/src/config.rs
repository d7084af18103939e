use crate::path::resolve_config_path;
use crate::walk::WalkFilter;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Overrides for one tool's walk filter. Missing fields keep the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_dirs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

impl FilterConfig {
    /// Apply the overrides on top of `defaults`, keeping its matching rules.
    fn apply(&self, defaults: WalkFilter) -> WalkFilter {
        if self.exclude_dirs.is_none() && self.extensions.is_none() {
            return defaults;
        }

        let exclude_dirs: Vec<String> = match &self.exclude_dirs {
            Some(dirs) => dirs.clone(),
            None => defaults.exclude_dirs().map(str::to_string).collect(),
        };
        let extensions: Vec<String> = match &self.extensions {
            Some(exts) => exts.clone(),
            None => defaults.extensions().map(str::to_string).collect(),
        };

        WalkFilter::new(exclude_dirs, extensions)
            .with_extension_match(defaults.extension_match())
            .with_exclusion_rule(defaults.exclusion_rule())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dump: FilterConfig,
    #[serde(default)]
    pub colors: FilterConfig,
}

impl Config {
    /// Load using the resolution order of [`resolve_config_path`].
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some((path, true)) if !path.exists() => Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            ))),
            Some((path, _)) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn dump_filter(&self) -> WalkFilter {
        self.dump.apply(WalkFilter::dump_defaults())
    }

    pub fn colors_filter(&self) -> WalkFilter {
        self.colors.apply(WalkFilter::colors_defaults())
    }
}
