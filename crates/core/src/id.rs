//! External identifier generation.
//!
//! Every persisted entity carries two identities: an internal `i64` rowid
//! assigned by the store on first insert, and a stable external string id
//! that survives export/import and is safe to hand to clients. External ids
//! are random, prefixed by entity kind so they are self-describing in logs.

use uuid::Uuid;

/// Prefix for package ids.
pub const PACKAGE_ID_PREFIX: &str = "pkg";
/// Prefix for dist ids.
pub const DIST_ID_PREFIX: &str = "dist";
/// Prefix for package version ids.
pub const PACKAGE_VERSION_ID_PREFIX: &str = "pkgver";
/// Prefix for package tag ids.
pub const PACKAGE_TAG_ID_PREFIX: &str = "pkgtag";

fn generate(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Generate a new external package id.
pub fn new_package_id() -> String {
    generate(PACKAGE_ID_PREFIX)
}

/// Generate a new external dist id.
pub fn new_dist_id() -> String {
    generate(DIST_ID_PREFIX)
}

/// Generate a new external package version id.
pub fn new_package_version_id() -> String {
    generate(PACKAGE_VERSION_ID_PREFIX)
}

/// Generate a new external package tag id.
pub fn new_package_tag_id() -> String {
    generate(PACKAGE_TAG_ID_PREFIX)
}
