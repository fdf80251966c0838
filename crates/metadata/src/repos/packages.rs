//! Package repository.

use crate::error::MetadataResult;
use async_trait::async_trait;
use bodega_core::Package;

/// Repository for package aggregates and their manifest dists.
#[async_trait]
pub trait PackageRepo: Send + Sync {
    /// Find a package by `(scope, name)` and hydrate its manifest dists.
    ///
    /// Returns a fully hydrated aggregate: when a dist reference is set on
    /// the row, the dist is loaded and attached; the caller never receives
    /// an entity with an unresolved reference. A package with no dists set
    /// comes back with both fields `None`, not an error.
    async fn find_package(&self, scope: &str, name: &str) -> MetadataResult<Option<Package>>;

    /// Upsert a package by identity.
    ///
    /// With an internal id set, the matching row is updated in place. If no
    /// row carries that id the call is a silent no-op: nothing is written
    /// and no error is raised. Callers must not rely on an error to detect
    /// a stale id.
    ///
    /// With no internal id, a new row is inserted and the assigned rowid is
    /// written back to `pkg.id`.
    async fn save_package(&self, pkg: &mut Package) -> MetadataResult<()>;

    /// Upsert the manifest dist selected by `is_full_manifests`, then
    /// re-save the owning package.
    ///
    /// No-ops when the selected dist is absent. The dist write and the
    /// package write are two independent commits, not one transaction: a
    /// crash between them leaves the dist row saved but the package
    /// reference stale until the next save.
    async fn save_package_dist(
        &self,
        pkg: &mut Package,
        is_full_manifests: bool,
    ) -> MetadataResult<()>;

    /// Delete the manifest dist selected by `is_full_manifests`, clear the
    /// reference on the entity, then re-save the owning package.
    ///
    /// No-ops when the selected dist is absent or its row is already gone.
    /// When the sequence completes normally the package row never points at
    /// a deleted dist; the delete and the clearing save are still two
    /// separate commits (see `save_package_dist`).
    async fn remove_package_dist(
        &self,
        pkg: &mut Package,
        is_full_manifests: bool,
    ) -> MetadataResult<()>;
}
