//! Dist blob descriptors.

use crate::id;
use serde::{Deserialize, Serialize};

/// An immutable descriptor for a stored content blob (tarball, readme, or
/// manifest document), referenced by `dist_id` from owning entities.
///
/// The internal `id` is `None` until the dist has been persisted; the store
/// assigns it on first insert. The blob itself lives in object storage at
/// `path`; this descriptor only records where it is and what it hashes to.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dist {
    /// Internal rowid, assigned by the store.
    pub id: Option<i64>,
    /// Stable external id.
    pub dist_id: String,
    /// File name, e.g. `foo-1.0.0.tgz`.
    pub name: String,
    /// Storage location of the blob.
    pub path: String,
    /// Blob size in bytes.
    pub size: i64,
    /// SHA-1 checksum (legacy npm field).
    pub shasum: String,
    /// Subresource integrity string, e.g. `sha512-...`.
    pub integrity: String,
}

impl Dist {
    /// Create a new unsaved dist descriptor with a fresh external id.
    pub fn new(name: &str, path: &str, size: i64, shasum: &str, integrity: &str) -> Self {
        Self {
            id: None,
            dist_id: id::new_dist_id(),
            name: name.to_string(),
            path: path.to_string(),
            size,
            shasum: shasum.to_string(),
            integrity: integrity.to_string(),
        }
    }
}
