//! Package version repository.

use crate::error::MetadataResult;
use async_trait::async_trait;
use bodega_core::PackageVersion;

/// Repository for package versions and their four owned dists.
#[async_trait]
pub trait VersionRepo: Send + Sync {
    /// Insert a package version and its four dist rows in one transaction.
    ///
    /// All five inserts succeed or none do; a version is never observable
    /// with only some of its dists present. Assigned rowids are written
    /// back to the entity and its dists.
    async fn create_package_version(&self, version: &mut PackageVersion) -> MetadataResult<()>;

    /// Find a version by `(package_id, version)` and hydrate all four
    /// dists. The dist reads are issued concurrently.
    async fn find_package_version(
        &self,
        package_id: &str,
        version: &str,
    ) -> MetadataResult<Option<PackageVersion>>;

    /// List all versions of a package, newest internal id first, each
    /// hydrated with its four dists.
    ///
    /// Unbounded: a package with many releases loads them all into memory.
    async fn list_package_versions(&self, package_id: &str)
        -> MetadataResult<Vec<PackageVersion>>;

    /// Bulk-delete all version rows for a package. Dist rows are NOT
    /// cascade-deleted; cleaning them up is the caller's responsibility.
    async fn remove_package_versions(&self, package_id: &str) -> MetadataResult<u64>;
}
