//! Upgrade catalog loader.

use std::path::Path;

use anyhow::Context;
use upgrade_core::{UpgradeDefinition, UpgradeDisplay};

use crate::loaders::{LoadResult, read_file};
use crate::spec::CatalogSpec;

/// Loader for upgrade catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an upgrade catalog from a RON file.
    ///
    /// Returns one (definition, display) pair per catalog entry, in file
    /// order. Unknown stat/rule names and invalid stack caps fail the whole
    /// load with the offending upgrade named in the error.
    pub fn load(path: &Path) -> LoadResult<Vec<(UpgradeDefinition, UpgradeDisplay)>> {
        let content = read_file(path)?;
        let catalog: CatalogSpec = ron::from_str(&content)
            .with_context(|| format!("parsing upgrade catalog `{}`", path.display()))?;

        catalog
            .upgrades
            .into_iter()
            .map(|spec| spec.into_pair())
            .collect()
    }
}
