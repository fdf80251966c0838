//! Dist tag repository.

use crate::error::MetadataResult;
use async_trait::async_trait;
use bodega_core::PackageTag;

/// Repository for dist tags.
#[async_trait]
pub trait TagRepo: Send + Sync {
    /// Find a tag by `(package_id, tag)`.
    async fn find_package_tag(
        &self,
        package_id: &str,
        tag: &str,
    ) -> MetadataResult<Option<PackageTag>>;

    /// Upsert a tag by identity, with the same stale-id semantics as
    /// `PackageRepo::save_package`: an id pointing at no row is a silent
    /// no-op; a missing id inserts and assigns the rowid back.
    async fn save_package_tag(&self, tag: &mut PackageTag) -> MetadataResult<()>;

    /// List all tags of a package.
    async fn list_package_tags(&self, package_id: &str) -> MetadataResult<Vec<PackageTag>>;
}
