//! User repository.

use crate::error::MetadataResult;
use async_trait::async_trait;
use bodega_core::User;

/// Repository for registry users.
#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Upsert a user by identity, with the same stale-id semantics as
    /// `PackageRepo::save_package`.
    async fn save_user(&self, user: &mut User) -> MetadataResult<()>;

    /// Find a user by external id.
    async fn find_user(&self, user_id: &str) -> MetadataResult<Option<User>>;

    /// Resolve a set of external ids to users. Ids without a matching row
    /// are skipped, not errors.
    async fn find_users(&self, user_ids: &[String]) -> MetadataResult<Vec<User>>;
}
