//! Policy models.
//!
//! This module defines policies as delivered by a provider, the flattened
//! access control entries the resolver works on, and the resolved output.

pub mod entry;
pub mod permission;
pub mod policy;

pub use entry::{AccessControlEntry, Decision};
pub use permission::{EffectivePermissionSet, PrincipalPermissions};
pub use policy::{Policy, PolicyEntry};
