//! Kernel module - infrastructure and dependencies.

pub mod deps;
pub mod imgbb;
pub mod test_dependencies;
pub mod traits;

// Re-export identity client types used throughout the domain layer
pub use identity_client::{IdentityClient, UserProfile, UserSummary};

// Other exports
pub use deps::{IdentityAdapter, ServiceDeps};
pub use imgbb::ImgbbStore;
pub use test_dependencies::{MockIdentityService, MockMediaStore, TestDependencies};
pub use traits::*;
