use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

mod config;
pub mod density;
pub mod operation;

pub use crate::config::{Config, DEFAULT_SOURCE, DEFAULT_TARGET};
pub use crate::density::Density;
pub use crate::operation::{AssetOperation, Operation, Variation, HEADER, ICON, LEGACY_HEADER};

/// Set of operations and asset names to generate.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Headers and icons.
    #[default]
    Default,
    /// Headers only, with the `workmark` file names.
    Legacy,
}

impl Profile {
    pub fn operations(self) -> &'static [AssetOperation] {
        match self {
            Self::Default => &[HEADER, ICON],
            Self::Legacy => &[LEGACY_HEADER],
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = anyhow::Error;

    fn from_str(profile: &str) -> Result<Self> {
        Ok(match profile {
            "default" => Self::Default,
            "legacy" => Self::Legacy,
            _ => anyhow::bail!("unsupported profile {}", profile),
        })
    }
}

/// Runs every operation against every build folder below `source`.
pub struct AssetGenerator {
    source: PathBuf,
    target: PathBuf,
    operations: Vec<Box<dyn Operation>>,
}

impl AssetGenerator {
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>, profile: Profile) -> Self {
        let operations = profile
            .operations()
            .iter()
            .map(|op| Box::new(op.clone()) as Box<dyn Operation>)
            .collect();
        Self {
            source: source.into(),
            target: target.into(),
            operations,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.source, &config.target, config.profile)
    }

    /// Replaces the operation table. Operations run in the given order.
    pub fn with_operations(mut self, operations: Vec<Box<dyn Operation>>) -> Self {
        self.operations = operations;
        self
    }

    /// Build folders, the immediate subdirectories of the source root.
    pub fn builds(&self) -> Result<Vec<PathBuf>> {
        let mut builds = vec![];
        let entries = std::fs::read_dir(&self.source)
            .with_context(|| format!("failed to list {}", self.source.display()))?;
        for entry in entries {
            let path = entry?.path();
            // follows symlinks
            if !path.is_dir() {
                tracing::debug!("skipping {}", path.display());
                continue;
            }
            builds.push(path);
        }
        builds.sort();
        Ok(builds)
    }

    /// Runs the operation table against a single build folder.
    ///
    /// Returns the first non-zero status reported by a generator.
    pub fn process(&self, folder: &Path) -> Result<u8> {
        for op in &self.operations {
            tracing::info!("running operation: {}", op.name());
            if !op.check(folder) {
                continue;
            }
            tracing::info!("condition met, executing...");
            let status = op.generate(folder, &self.target)?;
            if status != 0 {
                tracing::error!("operation {} failed with status {}", op.name(), status);
                return Ok(status);
            }
        }
        Ok(0)
    }

    /// Processes every build, stopping at the first non-zero status.
    pub fn run(&self) -> Result<u8> {
        for folder in self.builds()? {
            let name = folder.file_name().unwrap_or_default().to_string_lossy();
            tracing::info!("processing build: {}", name);
            let status = self.process(&folder)?;
            if status != 0 {
                return Ok(status);
            }
        }
        Ok(0)
    }
}
