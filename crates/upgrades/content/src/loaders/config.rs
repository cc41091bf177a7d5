//! Engine configuration loader.

use std::path::Path;

use anyhow::Context;
use upgrade_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Reads an [`EngineConfig`] from TOML.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load engine configuration from a TOML file.
    ///
    /// Missing sections and fields fall back to the engine defaults.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("parsing engine config `{}`", path.display()))
    }
}
