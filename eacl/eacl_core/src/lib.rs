//! # EACL Core
//!
//! `eacl_core` provides the building blocks shared by every crate of the
//! effective ACL resolver: the error hierarchy, the strongly-typed names for
//! principals and privileges, and small utilities such as log levels.
//!
//! ## Crate Structure
//!
//! - **error**: Error types for all resolver components
//! - **name**: `Principal` and `Privilege` name types
//! - **utils**: Utility types and helpers

pub mod error;
pub mod name;
pub mod utils;

// Re-export key types for convenience
pub use error::{Error, PrivilegeError, ProviderError, Result};
pub use name::{Principal, Privilege};
pub use utils::LogLevel;
