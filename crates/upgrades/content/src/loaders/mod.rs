//! File loaders for the upgrade catalog and engine configuration.
//!
//! Each loader reads one file format into core types, failing the whole load
//! on the first bad entry. The serde-facing formats live in [`crate::spec`].

pub mod catalog;
pub mod config;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Read a data file whole; the error names the path.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading upgrade data from `{}`", path.display()))
}
