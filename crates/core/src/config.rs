//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata store configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MetadataConfig {
    /// SQLite-backed metadata store.
    Sqlite {
        /// Database file path, or `:memory:` for an in-memory store.
        path: PathBuf,
        /// Advisory query timeout in seconds.
        query_timeout_secs: Option<u64>,
    },
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self::Sqlite {
            path: PathBuf::from("bodega-metadata.db"),
            query_timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_config_roundtrip() {
        let config = MetadataConfig::Sqlite {
            path: PathBuf::from("/var/lib/bodega/metadata.db"),
            query_timeout_secs: Some(30),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"type\":\"sqlite\""));
        let parsed: MetadataConfig = serde_json::from_str(&json).unwrap();
        let MetadataConfig::Sqlite {
            path,
            query_timeout_secs,
        } = parsed;
        assert_eq!(path, PathBuf::from("/var/lib/bodega/metadata.db"));
        assert_eq!(query_timeout_secs, Some(30));
    }
}
