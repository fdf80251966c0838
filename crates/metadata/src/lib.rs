//! Package persistence gateway for the bodega package registry.
//!
//! This crate provides the control-plane data model:
//! - Package aggregates and their manifest dists
//! - Package versions with their four owned dists
//! - Dist tags
//! - Maintainer sets and the users they reference
//!
//! Repositories address rows by explicit identity, so the store is
//! stateless and safe for concurrent use across independent aggregates.
//! Multi-row writes that must be all-or-nothing (version creation,
//! maintainer replace) run in a single transaction; the two-step dist and
//! package save sequences deliberately do not (see the trait docs in
//! [`repos`]).

pub mod convert;
pub mod error;
pub mod models;
pub mod repos;
pub mod store;

pub use error::{MetadataError, MetadataResult};
pub use store::{RegistryStore, SqliteStore};

use bodega_core::config::MetadataConfig;
use std::sync::Arc;

/// Create a registry store from configuration.
pub async fn from_config(config: &MetadataConfig) -> MetadataResult<Arc<dyn RegistryStore>> {
    match config {
        MetadataConfig::Sqlite {
            path,
            query_timeout_secs,
        } => {
            let store = SqliteStore::new(path, *query_timeout_secs).await?;
            Ok(Arc::new(store) as Arc<dyn RegistryStore>)
        }
    }
}
