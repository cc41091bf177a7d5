//! Data-driven upgrade content and loaders.
//!
//! This crate houses the serializable catalog format and provides loaders
//! for RON/TOML data files:
//! - Upgrade catalogs: definitions plus card displays (data-driven via RON)
//! - Engine configuration: base stats, base rules, spawn tuning (TOML)
//!
//! Catalog entries name stats and rules by string; conversion into
//! `upgrade-core` types happens at load time, and unknown names surface as
//! load errors rather than silent runtime fallbacks. The `Custom` predicate
//! is code-only and cannot appear in data files.

pub mod loaders;
pub mod spec;

pub use loaders::{CatalogLoader, ConfigLoader, LoadResult};
pub use spec::{CatalogSpec, EffectSpec, PredicateSpec, UpgradeSpec};
