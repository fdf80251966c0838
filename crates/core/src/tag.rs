//! Dist tags.

use crate::id;
use serde::{Deserialize, Serialize};

/// A dist tag mapping `(package_id, tag)` to a published version, e.g.
/// `latest -> 1.2.3`. At most one row exists per `(package_id, tag)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackageTag {
    /// Internal rowid, assigned by the store.
    pub id: Option<i64>,
    /// Stable external id.
    pub package_tag_id: String,
    /// External id of the owning package.
    pub package_id: String,
    /// Tag name, e.g. `latest`, `beta`.
    pub tag: String,
    /// The version the tag points at.
    pub version: String,
}

impl PackageTag {
    /// Create a new unsaved tag with a fresh external id.
    pub fn new(package_id: &str, tag: &str, version: &str) -> Self {
        Self {
            id: None,
            package_tag_id: id::new_package_tag_id(),
            package_id: package_id.to_string(),
            tag: tag.to_string(),
            version: version.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tag() {
        let tag = PackageTag::new("pkg-1", "latest", "1.2.3");
        assert!(tag.id.is_none());
        assert!(tag.package_tag_id.starts_with("pkgtag-"));
        assert_eq!(tag.version, "1.2.3");
    }
}
