//! Permission aggregation.
//!
//! Resolves an ordered sequence of access control entries into per-principal
//! granted and denied primitive privileges using first-match precedence.

use eacl_core::{Principal, Privilege};
use std::collections::BTreeMap;
use tracing::debug;

use crate::model::{AccessControlEntry, Decision, EffectivePermissionSet};
use crate::privilege::{PrivilegeExpander, PrivilegeHierarchy};

/// A permission aggregator.
///
/// For every principal it keeps one decision slot per primitive privilege.
/// Entries are applied in precedence order; a slot is set by the first entry
/// that touches it and never changed afterwards.
pub struct PermissionAggregator<'h> {
    /// The privilege aggregation table.
    hierarchy: &'h PrivilegeHierarchy,
}

impl<'h> PermissionAggregator<'h> {
    /// Create a new permission aggregator.
    ///
    /// # Arguments
    ///
    /// * `hierarchy` - The table used to expand aggregate privileges.
    pub fn new(hierarchy: &'h PrivilegeHierarchy) -> Self {
        Self { hierarchy }
    }

    /// Resolve `entries` into an effective permission set.
    ///
    /// Entries are ordered by precedence before resolution. The sort is
    /// stable, so entries sharing a precedence keep their input order.
    ///
    /// # Arguments
    ///
    /// * `entries` - The flattened entries of the effective policies.
    ///
    /// # Returns
    ///
    /// The granted and denied primitive privileges of every principal that
    /// has at least one decided privilege.
    pub fn aggregate(&self, entries: &[AccessControlEntry]) -> EffectivePermissionSet {
        let mut ordered: Vec<&AccessControlEntry> = entries.iter().collect();
        ordered.sort_by_key(|entry| entry.precedence);

        let mut expander = PrivilegeExpander::new(self.hierarchy);
        let mut decisions: BTreeMap<Principal, BTreeMap<Privilege, Decision>> = BTreeMap::new();

        for entry in ordered {
            let primitives = expander.expand(&entry.privilege);
            let decision = entry.decision();
            let slots = decisions.entry(entry.principal.clone()).or_default();

            for primitive in primitives.iter() {
                slots.entry(primitive.clone()).or_insert(decision);
            }
        }

        debug!(
            "Resolved {} entries for {} principals ({} privileges expanded)",
            entries.len(),
            decisions.len(),
            expander.cached()
        );

        EffectivePermissionSet::from_decisions(decisions)
    }
}
