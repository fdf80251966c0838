//! Repository traits for the package persistence gateway.

pub mod maintainers;
pub mod packages;
pub mod tags;
pub mod users;
pub mod versions;

pub use maintainers::MaintainerRepo;
pub use packages::PackageRepo;
pub use tags::TagRepo;
pub use users::UserRepo;
pub use versions::VersionRepo;
