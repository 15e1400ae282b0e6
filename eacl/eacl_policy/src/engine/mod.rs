//! Resolution engine.
//!
//! The extractor flattens effective policies into an ordered entry
//! sequence; the aggregator resolves that sequence into an
//! [`EffectivePermissionSet`].

mod aggregator;
mod extractor;

pub use aggregator::PermissionAggregator;
pub use extractor::PolicyExtractor;

use crate::model::{EffectivePermissionSet, Policy};
use crate::privilege::PrivilegeHierarchy;

/// Resolve the effective permissions denoted by `policies`.
///
/// Runs the extractor and the aggregator back to back.
pub fn resolve_effective_permissions(
    policies: &[Policy],
    hierarchy: &PrivilegeHierarchy,
) -> EffectivePermissionSet {
    let entries = PolicyExtractor::new().extract(policies);
    PermissionAggregator::new(hierarchy).aggregate(&entries)
}
