//! Integration tests for package version persistence.

mod common;

use common::fixtures::{test_package, test_version};
use common::TestRegistry;

async fn version_count(registry: &TestRegistry, package_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM package_versions WHERE package_id = ?")
        .bind(package_id)
        .fetch_one(registry.pool())
        .await
        .expect("count query failed")
}

async fn dist_count(registry: &TestRegistry) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM dists")
        .fetch_one(registry.pool())
        .await
        .expect("count query failed")
}

#[tokio::test]
async fn test_create_and_find_package_version() {
    let registry = TestRegistry::new().await.expect("registry setup failed");
    let store = registry.store();

    let mut pkg = test_package("@acme", "leftpad");
    store.save_package(&mut pkg).await.expect("save failed");

    let mut version = test_version(&pkg.package_id, "1.0.0");
    store
        .create_package_version(&mut version)
        .await
        .expect("create version failed");

    assert!(version.id.is_some());
    assert!(version.manifest_dist.id.is_some());
    assert!(version.tar_dist.id.is_some());
    assert!(version.readme_dist.id.is_some());
    assert!(version.abbreviated_dist.id.is_some());
    assert_eq!(dist_count(&registry).await, 4);

    let found = store
        .find_package_version(&pkg.package_id, "1.0.0")
        .await
        .expect("find failed")
        .expect("version not found");
    assert_eq!(found.id, version.id);
    assert_eq!(found.version, "1.0.0");
    assert_eq!(found.manifest_dist.dist_id, version.manifest_dist.dist_id);
    assert_eq!(found.tar_dist.dist_id, version.tar_dist.dist_id);
    assert_eq!(found.readme_dist.dist_id, version.readme_dist.dist_id);
    assert_eq!(
        found.abbreviated_dist.dist_id,
        version.abbreviated_dist.dist_id
    );
}

#[tokio::test]
async fn test_find_package_version_not_found() {
    let registry = TestRegistry::new().await.expect("registry setup failed");
    let store = registry.store();

    let found = store
        .find_package_version("pkg-missing", "1.0.0")
        .await
        .expect("find failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_create_package_version_is_atomic() {
    let registry = TestRegistry::new().await.expect("registry setup failed");
    let store = registry.store();

    let mut pkg = test_package("@acme", "leftpad");
    store.save_package(&mut pkg).await.expect("save failed");

    let mut first = test_version(&pkg.package_id, "1.0.0");
    store
        .create_package_version(&mut first)
        .await
        .expect("create version failed");
    let dists_before = dist_count(&registry).await;

    // Reusing an existing dist_id makes the readme insert (fourth of five)
    // violate the unique index, which must roll back every insert.
    let mut broken = test_version(&pkg.package_id, "2.0.0");
    broken.readme_dist.dist_id = first.manifest_dist.dist_id.clone();
    let result = store.create_package_version(&mut broken).await;
    assert!(result.is_err(), "conflicting insert should fail");

    assert!(broken.id.is_none(), "rolled back entity stays unsaved");
    assert_eq!(version_count(&registry, &pkg.package_id).await, 1);
    assert_eq!(dist_count(&registry).await, dists_before);

    let tar_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dists WHERE dist_id = ?")
        .bind(&broken.tar_dist.dist_id)
        .fetch_one(registry.pool())
        .await
        .expect("count query failed");
    assert_eq!(tar_rows, 0, "no partial dist rows may survive");

    let found = store
        .find_package_version(&pkg.package_id, "2.0.0")
        .await
        .expect("find failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_list_package_versions_newest_first() {
    let registry = TestRegistry::new().await.expect("registry setup failed");
    let store = registry.store();

    let mut pkg = test_package("@acme", "leftpad");
    store.save_package(&mut pkg).await.expect("save failed");

    for v in ["1.0.0", "1.1.0", "2.0.0"] {
        let mut version = test_version(&pkg.package_id, v);
        store
            .create_package_version(&mut version)
            .await
            .expect("create version failed");
    }

    let versions = store
        .list_package_versions(&pkg.package_id)
        .await
        .expect("list failed");
    let order: Vec<&str> = versions.iter().map(|v| v.version.as_str()).collect();
    assert_eq!(order, vec!["2.0.0", "1.1.0", "1.0.0"]);
}

#[tokio::test]
async fn test_list_package_versions_empty() {
    let registry = TestRegistry::new().await.expect("registry setup failed");
    let store = registry.store();

    let versions = store
        .list_package_versions("pkg-missing")
        .await
        .expect("list failed");
    assert!(versions.is_empty());
}

#[tokio::test]
async fn test_remove_package_versions_keeps_dists() {
    let registry = TestRegistry::new().await.expect("registry setup failed");
    let store = registry.store();

    let mut pkg = test_package("@acme", "leftpad");
    store.save_package(&mut pkg).await.expect("save failed");

    for v in ["1.0.0", "1.1.0"] {
        let mut version = test_version(&pkg.package_id, v);
        store
            .create_package_version(&mut version)
            .await
            .expect("create version failed");
    }

    let removed = store
        .remove_package_versions(&pkg.package_id)
        .await
        .expect("remove failed");
    assert_eq!(removed, 2);
    assert_eq!(version_count(&registry, &pkg.package_id).await, 0);

    // Dist cleanup is the caller's responsibility, not a cascade.
    assert_eq!(dist_count(&registry).await, 8);
}
