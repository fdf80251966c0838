//! Fixture builders for registry entities.

#![allow(dead_code)] // each test binary uses a subset

use bodega_core::{Dist, Package, PackageVersion, User};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

/// SHA-256 of `data` as lowercase hex.
pub fn sha256_hash(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Build an unsaved dist descriptor whose content fields derive from `seed`.
pub fn test_dist(seed: &str) -> Dist {
    let hash = sha256_hash(seed.as_bytes());
    Dist::new(
        &format!("{seed}.tgz"),
        &format!("/packages/{seed}.tgz"),
        seed.len() as i64 + 100,
        &hash[..40],
        &format!("sha512-{hash}"),
    )
}

/// Build an unsaved package.
pub fn test_package(scope: &str, name: &str) -> Package {
    Package::new(scope, name, false).expect("fixture package name should be valid")
}

/// Build an unsaved package version with four fresh dists.
pub fn test_version(package_id: &str, version: &str) -> PackageVersion {
    PackageVersion::new(
        package_id,
        version,
        OffsetDateTime::now_utc(),
        test_dist(&format!("{package_id}-{version}-manifest")),
        test_dist(&format!("{package_id}-{version}-tar")),
        test_dist(&format!("{package_id}-{version}-readme")),
        test_dist(&format!("{package_id}-{version}-abbreviated")),
    )
}

/// Build an unsaved user.
pub fn test_user(login: &str) -> User {
    User::new(
        &format!("npm:{login}"),
        login,
        &format!("{login}@example.com"),
    )
}
