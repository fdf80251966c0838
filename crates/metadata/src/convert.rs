//! Row to entity mapping.
//!
//! Entities own their attached dists; rows only carry dist ids. The
//! hydration helpers here attach resolved dist rows so callers never see an
//! aggregate with dangling references.

use crate::models::{DistRow, PackageRow, PackageTagRow, PackageVersionRow, UserRow};
use bodega_core::{Dist, Package, PackageTag, PackageVersion, User};

impl From<DistRow> for Dist {
    fn from(row: DistRow) -> Self {
        Dist {
            id: Some(row.id),
            dist_id: row.dist_id,
            name: row.name,
            path: row.path,
            size: row.size,
            shasum: row.shasum,
            integrity: row.integrity,
        }
    }
}

impl From<PackageTagRow> for PackageTag {
    fn from(row: PackageTagRow) -> Self {
        PackageTag {
            id: Some(row.id),
            package_tag_id: row.package_tag_id,
            package_id: row.package_id,
            tag: row.tag,
            version: row.version,
        }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: Some(row.id),
            user_id: row.user_id,
            name: row.name,
            email: row.email,
        }
    }
}

/// Build a package aggregate from its row and resolved manifest dists.
///
/// Callers that skip hydration (bulk listings) pass `None` for both dists;
/// the resulting entity must not be fed back to `save_package` in that case
/// or the stored references would be nulled out.
pub fn package_entity(
    row: PackageRow,
    manifests_dist: Option<Dist>,
    abbreviateds_dist: Option<Dist>,
) -> Package {
    Package {
        id: Some(row.id),
        package_id: row.package_id,
        scope: row.scope,
        name: row.name,
        is_private: row.is_private,
        description: row.description,
        manifests_dist,
        abbreviateds_dist,
    }
}

/// Build a package version aggregate from its row and four resolved dists.
pub fn package_version_entity(
    row: PackageVersionRow,
    manifest_dist: Dist,
    tar_dist: Dist,
    readme_dist: Dist,
    abbreviated_dist: Dist,
) -> PackageVersion {
    PackageVersion {
        id: Some(row.id),
        package_version_id: row.package_version_id,
        package_id: row.package_id,
        version: row.version,
        publish_time: row.publish_time,
        manifest_dist,
        tar_dist,
        readme_dist,
        abbreviated_dist,
    }
}
