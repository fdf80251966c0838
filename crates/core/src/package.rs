//! Package and package version aggregates.

use crate::dist::Dist;
use crate::id;
use crate::{Error, MAX_PACKAGE_NAME_LEN, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A package aggregate: the registry-level record for one `(scope, name)`
/// pair, together with its two optional manifest distributions.
///
/// The full manifest dist holds the complete packument; the abbreviated
/// dist holds the install-only subset served to package managers. Either
/// reference may be absent; when present it points at a persisted [`Dist`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Package {
    /// Internal rowid, assigned by the store.
    pub id: Option<i64>,
    /// Stable external id.
    pub package_id: String,
    /// Scope including the leading `@`, or empty for unscoped packages.
    pub scope: String,
    /// Package name without scope.
    pub name: String,
    /// Whether the package is private to this registry.
    pub is_private: bool,
    /// Free-form description from the latest manifest.
    pub description: Option<String>,
    /// Full manifest distribution, when one has been generated.
    pub manifests_dist: Option<Dist>,
    /// Abbreviated manifest distribution, when one has been generated.
    pub abbreviateds_dist: Option<Dist>,
}

impl Package {
    /// Create a new unsaved package with a fresh external id.
    ///
    /// `scope` is empty or `@`-prefixed; `name` must satisfy npm naming
    /// rules (see [`validate_name`]).
    pub fn new(scope: &str, name: &str, is_private: bool) -> Result<Self> {
        validate_scope(scope)?;
        validate_name(scope, name)?;
        Ok(Self {
            id: None,
            package_id: id::new_package_id(),
            scope: scope.to_string(),
            name: name.to_string(),
            is_private,
            description: None,
            manifests_dist: None,
            abbreviateds_dist: None,
        })
    }

    /// The name clients publish and install under: `@scope/name` or `name`.
    pub fn full_name(&self) -> String {
        if self.scope.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.scope, self.name)
        }
    }
}

/// Validate a package scope: empty, or `@` followed by a name-safe string.
pub fn validate_scope(scope: &str) -> Result<()> {
    if scope.is_empty() {
        return Ok(());
    }
    let Some(rest) = scope.strip_prefix('@') else {
        return Err(Error::InvalidScope(format!(
            "scope must start with '@': {scope}"
        )));
    };
    if rest.is_empty() || !rest.chars().all(is_name_char) {
        return Err(Error::InvalidScope(scope.to_string()));
    }
    Ok(())
}

/// Validate an npm package name (sans scope).
///
/// Lowercase URL-safe characters only, no leading `.` or `_`, and the full
/// name including scope must not exceed 214 characters.
pub fn validate_name(scope: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidPackageName("name is empty".to_string()));
    }
    if name.starts_with('.') || name.starts_with('_') {
        return Err(Error::InvalidPackageName(format!(
            "name must not start with '.' or '_': {name}"
        )));
    }
    if !name.chars().all(is_name_char) {
        return Err(Error::InvalidPackageName(name.to_string()));
    }
    // scope + '/' + name
    let full_len = if scope.is_empty() {
        name.len()
    } else {
        scope.len() + 1 + name.len()
    };
    if full_len > MAX_PACKAGE_NAME_LEN {
        return Err(Error::InvalidPackageName(format!(
            "name too long ({full_len} > {MAX_PACKAGE_NAME_LEN})"
        )));
    }
    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.' | '~')
}

/// One published version of a package, owning exactly four distributions:
/// the tarball, the readme, the full manifest, and the abbreviated
/// manifest. All four are created together with the version row; none of
/// them is optional or replaceable afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackageVersion {
    /// Internal rowid, assigned by the store.
    pub id: Option<i64>,
    /// Stable external id.
    pub package_version_id: String,
    /// External id of the owning package.
    pub package_id: String,
    /// Semver string as published.
    pub version: String,
    /// When the version was published.
    pub publish_time: OffsetDateTime,
    /// Full manifest document for this version.
    pub manifest_dist: Dist,
    /// Package tarball.
    pub tar_dist: Dist,
    /// Readme text.
    pub readme_dist: Dist,
    /// Abbreviated (install-only) manifest.
    pub abbreviated_dist: Dist,
}

impl PackageVersion {
    /// Create a new unsaved package version with a fresh external id.
    pub fn new(
        package_id: &str,
        version: &str,
        publish_time: OffsetDateTime,
        manifest_dist: Dist,
        tar_dist: Dist,
        readme_dist: Dist,
        abbreviated_dist: Dist,
    ) -> Self {
        Self {
            id: None,
            package_version_id: id::new_package_version_id(),
            package_id: package_id.to_string(),
            version: version.to_string(),
            publish_time,
            manifest_dist,
            tar_dist,
            readme_dist,
            abbreviated_dist,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_unscoped() {
        let pkg = Package::new("", "leftpad", false).unwrap();
        assert_eq!(pkg.full_name(), "leftpad");
    }

    #[test]
    fn test_full_name_scoped() {
        let pkg = Package::new("@acme", "leftpad", true).unwrap();
        assert_eq!(pkg.full_name(), "@acme/leftpad");
    }

    #[test]
    fn test_rejects_bad_scope() {
        assert!(Package::new("acme", "leftpad", false).is_err());
        assert!(Package::new("@", "leftpad", false).is_err());
    }

    #[test]
    fn test_rejects_bad_name() {
        assert!(Package::new("", "", false).is_err());
        assert!(Package::new("", ".hidden", false).is_err());
        assert!(Package::new("", "_private", false).is_err());
        assert!(Package::new("", "UpperCase", false).is_err());
        let long = "a".repeat(MAX_PACKAGE_NAME_LEN + 1);
        assert!(Package::new("", &long, false).is_err());
    }

    #[test]
    fn test_accepts_dotted_and_dashed_names() {
        assert!(Package::new("", "lodash.merge", false).is_ok());
        assert!(Package::new("@types", "node-fetch", false).is_ok());
    }
}
