//! Database models mapping to the registry metadata schema.

use sqlx::FromRow;
use time::OffsetDateTime;

/// Package record for one `(scope, name)` pair.
///
/// `manifests_dist_id` and `abbreviateds_dist_id` are either NULL or the
/// external id of an existing dist row; the gateway keeps the reference and
/// the referenced row consistent across saves.
#[derive(Debug, Clone, FromRow)]
pub struct PackageRow {
    pub id: i64,
    pub package_id: String,
    pub scope: String,
    pub name: String,
    pub is_private: bool,
    pub description: Option<String>,
    pub manifests_dist_id: Option<String>,
    pub abbreviateds_dist_id: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Dist blob descriptor record. Created once, referenced by id, updated
/// only through an explicit save.
#[derive(Debug, Clone, FromRow)]
pub struct DistRow {
    pub id: i64,
    pub dist_id: String,
    pub name: String,
    pub path: String,
    pub size: i64,
    pub shasum: String,
    pub integrity: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Package version record, referencing the four dists created with it.
#[derive(Debug, Clone, FromRow)]
pub struct PackageVersionRow {
    pub id: i64,
    pub package_version_id: String,
    pub package_id: String,
    pub version: String,
    pub manifest_dist_id: String,
    pub tar_dist_id: String,
    pub readme_dist_id: String,
    pub abbreviated_dist_id: String,
    pub publish_time: OffsetDateTime,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Dist tag record: `(package_id, tag)` -> version.
#[derive(Debug, Clone, FromRow)]
pub struct PackageTagRow {
    pub id: i64,
    pub package_tag_id: String,
    pub package_id: String,
    pub tag: String,
    pub version: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Maintainer relation record, one per `(package_id, user_id)`.
#[derive(Debug, Clone, FromRow)]
pub struct MaintainerRow {
    pub id: i64,
    pub package_id: String,
    pub user_id: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Registry user record.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
