//! # EACL Policy
//!
//! `eacl_policy` turns the effective access control policies of a resource
//! into a per-principal summary of granted and denied privileges.
//!
//! Key concepts:
//!
//! 1. **Policy**: A tagged variant over policy kinds. Only access control
//!    lists contribute entries; other kinds are skipped.
//!
//! 2. **Privilege Hierarchy**: A static, acyclic aggregation table that
//!    expands aggregate privileges such as `jcr:all` into primitives.
//!
//! 3. **Resolution**: Entries are processed in precedence order and the
//!    first entry touching a (principal, privilege) pair decides it.
//!
//! 4. **Service**: Maps an `.eacl.json` / `.acl.json` request onto a
//!    provider lookup and a status-coded JSON response.

pub mod engine;
pub mod model;
pub mod privilege;
pub mod provider;
pub mod service;

// Re-export key types and traits for convenience
pub use engine::{resolve_effective_permissions, PermissionAggregator, PolicyExtractor};
pub use model::{
    AccessControlEntry, Decision, EffectivePermissionSet, Policy, PolicyEntry,
    PrincipalPermissions,
};
pub use privilege::{PrivilegeExpander, PrivilegeHierarchy};
pub use provider::{InMemoryPolicyProvider, PolicyDocument, PolicyProvider, PolicyScope};
pub use service::{AclRequest, AclResponse, EaclService, ResponseStatus};
