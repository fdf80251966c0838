//! Registry store trait and SQLite implementation.

use crate::error::{MetadataError, MetadataResult};
use crate::repos::{MaintainerRepo, PackageRepo, TagRepo, UserRepo, VersionRepo};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Combined registry metadata store trait.
#[async_trait]
pub trait RegistryStore:
    PackageRepo + VersionRepo + TagRepo + MaintainerRepo + UserRepo + Send + Sync
{
    /// Create the schema if it does not exist yet.
    async fn migrate(&self) -> MetadataResult<()>;

    /// Check database connectivity and health.
    async fn health_check(&self) -> MetadataResult<()>;
}

/// SQLite-based registry store.
pub struct SqliteStore {
    pool: Pool<Sqlite>,
    #[allow(dead_code)] // Reserved for future timeout wrapper implementation
    query_timeout_secs: u64,
}

impl SqliteStore {
    /// Create a new SQLite store and run schema bootstrap.
    pub async fn new(
        path: impl AsRef<Path>,
        query_timeout_secs: Option<u64>,
    ) -> MetadataResult<Self> {
        let path = path.as_ref();
        let query_timeout_secs = query_timeout_secs.unwrap_or(600); // 10 minutes default

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .foreign_keys(true)
            // Prevent transient "database is locked" errors under concurrent access.
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            // SQLite permits limited write concurrency; a single connection avoids
            // persistent "database is locked" failures under concurrent requests.
            .max_connections(1)
            .connect_with(opts)
            .await?;

        let store = Self {
            pool,
            query_timeout_secs,
        };
        store.migrate().await?;

        tracing::debug!(
            path = %path.display(),
            "SQLite query timeout is advisory only; long queries may exceed it"
        );

        Ok(store)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl RegistryStore for SqliteStore {
    async fn migrate(&self) -> MetadataResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    async fn health_check(&self) -> MetadataResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

// Implement all the repository traits for SqliteStore
mod sqlite_impl {
    use super::*;
    use crate::convert;
    use crate::models::*;
    use bodega_core::{Dist, Package, PackageTag, PackageVersion, User};
    use sqlx::SqliteConnection;
    use time::OffsetDateTime;

    /// Insert a dist row, returning the assigned rowid.
    async fn insert_dist_row(
        conn: &mut SqliteConnection,
        dist: &Dist,
        now: OffsetDateTime,
    ) -> MetadataResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO dists (dist_id, name, path, size, shasum, integrity, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&dist.dist_id)
        .bind(&dist.name)
        .bind(&dist.path)
        .bind(dist.size)
        .bind(&dist.shasum)
        .bind(&dist.integrity)
        .bind(now)
        .bind(now)
        .execute(&mut *conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Update a dist row in place, returning the number of rows affected.
    async fn update_dist_row(
        conn: &mut SqliteConnection,
        id: i64,
        dist: &Dist,
        now: OffsetDateTime,
    ) -> MetadataResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE dists SET dist_id = ?, name = ?, path = ?, size = ?, shasum = ?,
                             integrity = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&dist.dist_id)
        .bind(&dist.name)
        .bind(&dist.path)
        .bind(dist.size)
        .bind(&dist.shasum)
        .bind(&dist.integrity)
        .bind(now)
        .bind(id)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Look up a dist row by its external id.
    async fn get_dist(pool: &Pool<Sqlite>, dist_id: &str) -> MetadataResult<Option<DistRow>> {
        let row = sqlx::query_as::<_, DistRow>("SELECT * FROM dists WHERE dist_id = ?")
            .bind(dist_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    fn missing_dist(version_id: &str, dist_id: &str) -> MetadataError {
        MetadataError::Internal(format!(
            "package version {version_id} references missing dist {dist_id}"
        ))
    }

    impl SqliteStore {
        /// Attach the four dist rows to a version row.
        ///
        /// The reads are independent and read-only, so they are issued
        /// concurrently. A set reference without a matching dist row means
        /// the atomic create was violated out of band and surfaces as an
        /// internal error, never as a partially hydrated aggregate.
        async fn hydrate_version(&self, row: PackageVersionRow) -> MetadataResult<PackageVersion> {
            let (manifest, tar, readme, abbreviated) = futures::try_join!(
                get_dist(&self.pool, &row.manifest_dist_id),
                get_dist(&self.pool, &row.tar_dist_id),
                get_dist(&self.pool, &row.readme_dist_id),
                get_dist(&self.pool, &row.abbreviated_dist_id),
            )?;

            let manifest = manifest
                .ok_or_else(|| missing_dist(&row.package_version_id, &row.manifest_dist_id))?;
            let tar =
                tar.ok_or_else(|| missing_dist(&row.package_version_id, &row.tar_dist_id))?;
            let readme = readme
                .ok_or_else(|| missing_dist(&row.package_version_id, &row.readme_dist_id))?;
            let abbreviated = abbreviated
                .ok_or_else(|| missing_dist(&row.package_version_id, &row.abbreviated_dist_id))?;

            Ok(convert::package_version_entity(
                row,
                manifest.into(),
                tar.into(),
                readme.into(),
                abbreviated.into(),
            ))
        }
    }

    #[async_trait]
    impl PackageRepo for SqliteStore {
        async fn find_package(&self, scope: &str, name: &str) -> MetadataResult<Option<Package>> {
            let row = sqlx::query_as::<_, PackageRow>(
                "SELECT * FROM packages WHERE scope = ? AND name = ?",
            )
            .bind(scope)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
            let Some(row) = row else {
                return Ok(None);
            };

            let manifests_dist = match &row.manifests_dist_id {
                Some(dist_id) => get_dist(&self.pool, dist_id).await?.map(Dist::from),
                None => None,
            };
            let abbreviateds_dist = match &row.abbreviateds_dist_id {
                Some(dist_id) => get_dist(&self.pool, dist_id).await?.map(Dist::from),
                None => None,
            };

            Ok(Some(convert::package_entity(
                row,
                manifests_dist,
                abbreviateds_dist,
            )))
        }

        async fn save_package(&self, pkg: &mut Package) -> MetadataResult<()> {
            let now = OffsetDateTime::now_utc();
            let manifests_dist_id = pkg.manifests_dist.as_ref().map(|d| d.dist_id.clone());
            let abbreviateds_dist_id = pkg.abbreviateds_dist.as_ref().map(|d| d.dist_id.clone());

            if let Some(id) = pkg.id {
                let result = sqlx::query(
                    r#"
                    UPDATE packages SET scope = ?, name = ?, is_private = ?, description = ?,
                                        manifests_dist_id = ?, abbreviateds_dist_id = ?, updated_at = ?
                    WHERE id = ?
                    "#,
                )
                .bind(&pkg.scope)
                .bind(&pkg.name)
                .bind(pkg.is_private)
                .bind(&pkg.description)
                .bind(&manifests_dist_id)
                .bind(&abbreviateds_dist_id)
                .bind(now)
                .bind(id)
                .execute(&self.pool)
                .await?;

                if result.rows_affected() == 0 {
                    // Stale internal id: the write is skipped, not an error.
                    // Contract documented on PackageRepo::save_package.
                    tracing::debug!(
                        id,
                        package_id = %pkg.package_id,
                        "save_package skipped, no row with this id"
                    );
                }
            } else {
                let result = sqlx::query(
                    r#"
                    INSERT INTO packages (package_id, scope, name, is_private, description,
                                          manifests_dist_id, abbreviateds_dist_id, created_at, updated_at)
                    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&pkg.package_id)
                .bind(&pkg.scope)
                .bind(&pkg.name)
                .bind(pkg.is_private)
                .bind(&pkg.description)
                .bind(&manifests_dist_id)
                .bind(&abbreviateds_dist_id)
                .bind(now)
                .bind(now)
                .execute(&self.pool)
                .await?;

                let id = result.last_insert_rowid();
                pkg.id = Some(id);
                tracing::info!(id, package_id = %pkg.package_id, "created package row");
            }
            Ok(())
        }

        async fn save_package_dist(
            &self,
            pkg: &mut Package,
            is_full_manifests: bool,
        ) -> MetadataResult<()> {
            let now = OffsetDateTime::now_utc();
            {
                let dist = if is_full_manifests {
                    pkg.manifests_dist.as_mut()
                } else {
                    pkg.abbreviateds_dist.as_mut()
                };
                let Some(dist) = dist else {
                    return Ok(());
                };

                let mut conn = self.pool.acquire().await?;
                if let Some(id) = dist.id {
                    // Same stale-id contract as save_package: a missing row
                    // skips the dist write and the package re-save.
                    if update_dist_row(&mut conn, id, dist, now).await? == 0 {
                        return Ok(());
                    }
                } else {
                    let id = insert_dist_row(&mut conn, dist, now).await?;
                    dist.id = Some(id);
                    tracing::info!(
                        id,
                        dist_id = %dist.dist_id,
                        package_id = %pkg.package_id,
                        "created package dist row"
                    );
                }
            }

            // The dist row and the owning reference are one logical unit but
            // two separate commits; a crash here leaves the package row to be
            // repaired by the next save.
            self.save_package(pkg).await
        }

        async fn remove_package_dist(
            &self,
            pkg: &mut Package,
            is_full_manifests: bool,
        ) -> MetadataResult<()> {
            {
                let dist = if is_full_manifests {
                    pkg.manifests_dist.as_ref()
                } else {
                    pkg.abbreviateds_dist.as_ref()
                };
                let Some(dist) = dist else {
                    return Ok(());
                };
                let Some(id) = dist.id else {
                    return Ok(());
                };

                let result = sqlx::query("DELETE FROM dists WHERE id = ?")
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
                if result.rows_affected() == 0 {
                    return Ok(());
                }
                tracing::info!(
                    id,
                    dist_id = %dist.dist_id,
                    package_id = %pkg.package_id,
                    "removed package dist row"
                );
            }

            // Clear the owning reference before persisting so the package
            // row never points at the deleted dist once the save lands.
            if is_full_manifests {
                pkg.manifests_dist = None;
            } else {
                pkg.abbreviateds_dist = None;
            }
            self.save_package(pkg).await
        }
    }

    #[async_trait]
    impl VersionRepo for SqliteStore {
        async fn create_package_version(
            &self,
            version: &mut PackageVersion,
        ) -> MetadataResult<()> {
            let now = OffsetDateTime::now_utc();
            let mut tx = self.pool.begin().await?;

            let result = sqlx::query(
                r#"
                INSERT INTO package_versions (
                    package_version_id, package_id, version,
                    manifest_dist_id, tar_dist_id, readme_dist_id, abbreviated_dist_id,
                    publish_time, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&version.package_version_id)
            .bind(&version.package_id)
            .bind(&version.version)
            .bind(&version.manifest_dist.dist_id)
            .bind(&version.tar_dist.dist_id)
            .bind(&version.readme_dist.dist_id)
            .bind(&version.abbreviated_dist.dist_id)
            .bind(version.publish_time)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?;
            let version_id = result.last_insert_rowid();

            let manifest_id = insert_dist_row(&mut tx, &version.manifest_dist, now).await?;
            let tar_id = insert_dist_row(&mut tx, &version.tar_dist, now).await?;
            let readme_id = insert_dist_row(&mut tx, &version.readme_dist, now).await?;
            let abbreviated_id = insert_dist_row(&mut tx, &version.abbreviated_dist, now).await?;

            tx.commit().await?;

            // Rowids are assigned only after the commit so a rolled back
            // transaction leaves the entity unsaved in memory as well.
            version.id = Some(version_id);
            version.manifest_dist.id = Some(manifest_id);
            version.tar_dist.id = Some(tar_id);
            version.readme_dist.id = Some(readme_id);
            version.abbreviated_dist.id = Some(abbreviated_id);

            tracing::info!(
                id = version_id,
                package_version_id = %version.package_version_id,
                package_id = %version.package_id,
                version = %version.version,
                "created package version row"
            );
            Ok(())
        }

        async fn find_package_version(
            &self,
            package_id: &str,
            version: &str,
        ) -> MetadataResult<Option<PackageVersion>> {
            let row = sqlx::query_as::<_, PackageVersionRow>(
                "SELECT * FROM package_versions WHERE package_id = ? AND version = ?",
            )
            .bind(package_id)
            .bind(version)
            .fetch_optional(&self.pool)
            .await?;
            let Some(row) = row else {
                return Ok(None);
            };
            Ok(Some(self.hydrate_version(row).await?))
        }

        async fn list_package_versions(
            &self,
            package_id: &str,
        ) -> MetadataResult<Vec<PackageVersion>> {
            let rows = sqlx::query_as::<_, PackageVersionRow>(
                "SELECT * FROM package_versions WHERE package_id = ? ORDER BY id DESC",
            )
            .bind(package_id)
            .fetch_all(&self.pool)
            .await?;

            let mut versions = Vec::with_capacity(rows.len());
            for row in rows {
                versions.push(self.hydrate_version(row).await?);
            }
            Ok(versions)
        }

        async fn remove_package_versions(&self, package_id: &str) -> MetadataResult<u64> {
            let result = sqlx::query("DELETE FROM package_versions WHERE package_id = ?")
                .bind(package_id)
                .execute(&self.pool)
                .await?;
            let removed = result.rows_affected();
            tracing::info!(removed, package_id, "removed package version rows");
            Ok(removed)
        }
    }

    #[async_trait]
    impl TagRepo for SqliteStore {
        async fn find_package_tag(
            &self,
            package_id: &str,
            tag: &str,
        ) -> MetadataResult<Option<PackageTag>> {
            let row = sqlx::query_as::<_, PackageTagRow>(
                "SELECT * FROM package_tags WHERE package_id = ? AND tag = ?",
            )
            .bind(package_id)
            .bind(tag)
            .fetch_optional(&self.pool)
            .await?;
            Ok(row.map(PackageTag::from))
        }

        async fn save_package_tag(&self, tag: &mut PackageTag) -> MetadataResult<()> {
            let now = OffsetDateTime::now_utc();
            if let Some(id) = tag.id {
                let result = sqlx::query(
                    "UPDATE package_tags SET package_id = ?, tag = ?, version = ?, updated_at = ? WHERE id = ?",
                )
                .bind(&tag.package_id)
                .bind(&tag.tag)
                .bind(&tag.version)
                .bind(now)
                .bind(id)
                .execute(&self.pool)
                .await?;

                if result.rows_affected() == 0 {
                    tracing::debug!(
                        id,
                        package_tag_id = %tag.package_tag_id,
                        "save_package_tag skipped, no row with this id"
                    );
                }
            } else {
                let result = sqlx::query(
                    r#"
                    INSERT INTO package_tags (package_tag_id, package_id, tag, version, created_at, updated_at)
                    VALUES (?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&tag.package_tag_id)
                .bind(&tag.package_id)
                .bind(&tag.tag)
                .bind(&tag.version)
                .bind(now)
                .bind(now)
                .execute(&self.pool)
                .await?;

                let id = result.last_insert_rowid();
                tag.id = Some(id);
                tracing::info!(id, package_tag_id = %tag.package_tag_id, "created package tag row");
            }
            Ok(())
        }

        async fn list_package_tags(&self, package_id: &str) -> MetadataResult<Vec<PackageTag>> {
            let rows = sqlx::query_as::<_, PackageTagRow>(
                "SELECT * FROM package_tags WHERE package_id = ? ORDER BY id",
            )
            .bind(package_id)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows.into_iter().map(PackageTag::from).collect())
        }
    }

    #[async_trait]
    impl MaintainerRepo for SqliteStore {
        async fn save_package_maintainer(
            &self,
            package_id: &str,
            user_id: &str,
        ) -> MetadataResult<()> {
            let now = OffsetDateTime::now_utc();
            let result = sqlx::query(
                r#"
                INSERT INTO maintainers (package_id, user_id, created_at, updated_at)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(package_id, user_id) DO NOTHING
                "#,
            )
            .bind(package_id)
            .bind(user_id)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;

            if result.rows_affected() > 0 {
                tracing::info!(package_id, user_id, "added package maintainer");
            }
            Ok(())
        }

        async fn list_package_maintainers(&self, package_id: &str) -> MetadataResult<Vec<User>> {
            let rows = sqlx::query_as::<_, MaintainerRow>(
                "SELECT * FROM maintainers WHERE package_id = ?",
            )
            .bind(package_id)
            .fetch_all(&self.pool)
            .await?;
            let user_ids: Vec<String> = rows.into_iter().map(|m| m.user_id).collect();
            self.find_users(&user_ids).await
        }

        async fn replace_package_maintainers(
            &self,
            package_id: &str,
            user_ids: &[String],
        ) -> MetadataResult<()> {
            let now = OffsetDateTime::now_utc();
            let mut tx = self.pool.begin().await?;

            let removed = sqlx::query("DELETE FROM maintainers WHERE package_id = ?")
                .bind(package_id)
                .execute(&mut *tx)
                .await?;

            // Plain inserts: duplicate ids in the input violate the unique
            // index and roll back the whole replace.
            for user_id in user_ids {
                sqlx::query(
                    "INSERT INTO maintainers (package_id, user_id, created_at, updated_at) VALUES (?, ?, ?, ?)",
                )
                .bind(package_id)
                .bind(user_id)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await?;
            }

            tx.commit().await?;
            tracing::info!(
                removed = removed.rows_affected(),
                added = user_ids.len(),
                package_id,
                "replaced package maintainers"
            );
            Ok(())
        }

        async fn list_packages_by_user(&self, user_id: &str) -> MetadataResult<Vec<Package>> {
            let rows =
                sqlx::query_as::<_, MaintainerRow>("SELECT * FROM maintainers WHERE user_id = ?")
                    .bind(user_id)
                    .fetch_all(&self.pool)
                    .await?;
            let package_ids: Vec<String> = rows.into_iter().map(|m| m.package_id).collect();
            if package_ids.is_empty() {
                return Ok(Vec::new());
            }

            let placeholders = vec!["?"; package_ids.len()].join(", ");
            let sql =
                format!("SELECT * FROM packages WHERE package_id IN ({placeholders}) ORDER BY id");
            let mut query = sqlx::query_as::<_, PackageRow>(&sql);
            for package_id in &package_ids {
                query = query.bind(package_id);
            }
            let rows = query.fetch_all(&self.pool).await?;
            Ok(rows
                .into_iter()
                .map(|row| convert::package_entity(row, None, None))
                .collect())
        }
    }

    #[async_trait]
    impl UserRepo for SqliteStore {
        async fn save_user(&self, user: &mut User) -> MetadataResult<()> {
            let now = OffsetDateTime::now_utc();
            if let Some(id) = user.id {
                let result =
                    sqlx::query("UPDATE users SET name = ?, email = ?, updated_at = ? WHERE id = ?")
                        .bind(&user.name)
                        .bind(&user.email)
                        .bind(now)
                        .bind(id)
                        .execute(&self.pool)
                        .await?;

                if result.rows_affected() == 0 {
                    tracing::debug!(
                        id,
                        user_id = %user.user_id,
                        "save_user skipped, no row with this id"
                    );
                }
            } else {
                let result = sqlx::query(
                    "INSERT INTO users (user_id, name, email, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
                )
                .bind(&user.user_id)
                .bind(&user.name)
                .bind(&user.email)
                .bind(now)
                .bind(now)
                .execute(&self.pool)
                .await?;

                let id = result.last_insert_rowid();
                user.id = Some(id);
                tracing::info!(id, user_id = %user.user_id, "created user row");
            }
            Ok(())
        }

        async fn find_user(&self, user_id: &str) -> MetadataResult<Option<User>> {
            let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
            Ok(row.map(User::from))
        }

        async fn find_users(&self, user_ids: &[String]) -> MetadataResult<Vec<User>> {
            if user_ids.is_empty() {
                return Ok(Vec::new());
            }
            let placeholders = vec!["?"; user_ids.len()].join(", ");
            let sql = format!("SELECT * FROM users WHERE user_id IN ({placeholders}) ORDER BY id");
            let mut query = sqlx::query_as::<_, UserRow>(&sql);
            for user_id in user_ids {
                query = query.bind(user_id);
            }
            let rows = query.fetch_all(&self.pool).await?;
            Ok(rows.into_iter().map(User::from).collect())
        }
    }
}

impl std::convert::From<std::io::Error> for crate::MetadataError {
    fn from(e: std::io::Error) -> Self {
        crate::MetadataError::Config(e.to_string())
    }
}

/// SQL schema for SQLite.
const SCHEMA_SQL: &str = r#"
-- Packages: one row per (scope, name). Dist references are NULL or the
-- external id of an existing dists row.
CREATE TABLE IF NOT EXISTS packages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    package_id TEXT NOT NULL UNIQUE,
    scope TEXT NOT NULL,
    name TEXT NOT NULL,
    is_private INTEGER NOT NULL DEFAULT 0,
    description TEXT,
    manifests_dist_id TEXT,
    abbreviateds_dist_id TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE(scope, name)
);
CREATE INDEX IF NOT EXISTS idx_packages_name ON packages(name);

-- Dist blob descriptors
CREATE TABLE IF NOT EXISTS dists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dist_id TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    path TEXT NOT NULL,
    size INTEGER NOT NULL,
    shasum TEXT NOT NULL,
    integrity TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Package versions, each owning four dist references fixed at creation
CREATE TABLE IF NOT EXISTS package_versions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    package_version_id TEXT NOT NULL UNIQUE,
    package_id TEXT NOT NULL,
    version TEXT NOT NULL,
    manifest_dist_id TEXT NOT NULL,
    tar_dist_id TEXT NOT NULL,
    readme_dist_id TEXT NOT NULL,
    abbreviated_dist_id TEXT NOT NULL,
    publish_time TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE(package_id, version)
);
CREATE INDEX IF NOT EXISTS idx_package_versions_package ON package_versions(package_id);

-- Dist tags: at most one row per (package_id, tag)
CREATE TABLE IF NOT EXISTS package_tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    package_tag_id TEXT NOT NULL UNIQUE,
    package_id TEXT NOT NULL,
    tag TEXT NOT NULL,
    version TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE(package_id, tag)
);

-- Maintainers: the maintainer set of a package is the set of rows with its
-- package_id, replaced wholesale on updates
CREATE TABLE IF NOT EXISTS maintainers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    package_id TEXT NOT NULL,
    user_id TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE(package_id, user_id)
);
CREATE INDEX IF NOT EXISTS idx_maintainers_user ON maintainers(user_id);

-- Users
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;
