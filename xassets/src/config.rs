use crate::Profile;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE: &str = "scripts/imgs";
pub const DEFAULT_TARGET: &str = "assets";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub source: PathBuf,
    pub target: PathBuf,
    pub profile: Profile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.into(),
            target: DEFAULT_TARGET.into(),
            profile: Profile::default(),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    source: Option<PathBuf>,
    target: Option<PathBuf>,
    profile: Option<Profile>,
}

impl Config {
    /// Reads the yaml config at `path`.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let root = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_yaml(&contents, root)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parses yaml, resolving relative paths against `root`.
    pub fn from_yaml(contents: &str, root: &Path) -> Result<Self> {
        let config: Option<RawConfig> = serde_yaml::from_str(contents)?;
        let config = config.unwrap_or_default();
        let defaults = Self::default();
        Ok(Self {
            source: root.join(config.source.unwrap_or(defaults.source)),
            target: root.join(config.target.unwrap_or(defaults.target)),
            profile: config.profile.unwrap_or(defaults.profile),
        })
    }
}
