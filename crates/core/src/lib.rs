//! Core domain types and shared logic for the bodega package registry.
//!
//! This crate defines the canonical data model used across all other crates:
//! - Package aggregates and their manifest distributions
//! - Package versions and the four distributions each version owns
//! - Dist blob descriptors
//! - Dist tags, maintainers, and users
//! - External identifier generation

pub mod config;
pub mod dist;
pub mod error;
pub mod id;
pub mod package;
pub mod tag;
pub mod user;

pub use config::MetadataConfig;
pub use dist::Dist;
pub use error::{Error, Result};
pub use package::{Package, PackageVersion};
pub use tag::PackageTag;
pub use user::User;

/// Maximum length of a full package name, scope included (npm rule).
pub const MAX_PACKAGE_NAME_LEN: usize = 214;
