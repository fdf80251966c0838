//! Maintainer repository.

use crate::error::MetadataResult;
use async_trait::async_trait;
use bodega_core::{Package, User};

/// Repository for the package maintainer relation.
#[async_trait]
pub trait MaintainerRepo: Send + Sync {
    /// Idempotent insert of a `(package_id, user_id)` maintainer row.
    /// Existing rows are left untouched.
    async fn save_package_maintainer(
        &self,
        package_id: &str,
        user_id: &str,
    ) -> MetadataResult<()>;

    /// Resolve the maintainer set of a package to user entities. Returns an
    /// empty vec when the package has no maintainers; ordering carries no
    /// meaning.
    async fn list_package_maintainers(&self, package_id: &str) -> MetadataResult<Vec<User>>;

    /// Wholesale replace of a package's maintainer set: delete all existing
    /// rows, then insert one row per id, inside one transaction.
    ///
    /// No diffing and no dedup: duplicate ids in the input hit the unique
    /// index and fail the whole transaction, leaving the previous set
    /// intact.
    async fn replace_package_maintainers(
        &self,
        package_id: &str,
        user_ids: &[String],
    ) -> MetadataResult<()>;

    /// List all packages a user maintains. Packages are returned without
    /// dist hydration and without pagination (known limitation).
    async fn list_packages_by_user(&self, user_id: &str) -> MetadataResult<Vec<Package>>;
}
