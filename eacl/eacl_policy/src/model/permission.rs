//! Resolved permissions.
//!
//! The output of a resolution: for every principal with at least one
//! decided privilege, the primitive privileges granted and denied. Ordered
//! collections keep the serialized form stable across runs.

use eacl_core::error::{Error, Result};
use eacl_core::{Principal, Privilege};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::Decision;

/// The granted and denied primitive privileges of one principal.
///
/// The two sets are disjoint: each privilege lands in exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrincipalPermissions {
    granted: BTreeSet<Privilege>,
    denied: BTreeSet<Privilege>,
}

impl PrincipalPermissions {
    /// The granted primitive privileges, sorted.
    pub fn granted(&self) -> &BTreeSet<Privilege> {
        &self.granted
    }

    /// The denied primitive privileges, sorted.
    pub fn denied(&self) -> &BTreeSet<Privilege> {
        &self.denied
    }

    /// Check if `privilege` is granted.
    pub fn is_granted(&self, privilege: &str) -> bool {
        self.granted.contains(privilege)
    }

    /// Check if `privilege` is denied.
    pub fn is_denied(&self, privilege: &str) -> bool {
        self.denied.contains(privilege)
    }

    fn from_decisions(decisions: BTreeMap<Privilege, Decision>) -> Self {
        let mut permissions = Self::default();
        for (privilege, decision) in decisions {
            match decision {
                Decision::Allow => permissions.granted.insert(privilege),
                Decision::Deny => permissions.denied.insert(privilege),
            };
        }
        permissions
    }
}

/// Per-principal summary of effective permissions.
///
/// Serializes as `{"<principal>": {"granted": [...], "denied": [...]}}` with
/// principals and privileges in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EffectivePermissionSet {
    principals: BTreeMap<Principal, PrincipalPermissions>,
}

impl EffectivePermissionSet {
    /// Create an empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from per-principal decision slots. Principals without
    /// any decided privilege are left out.
    pub(crate) fn from_decisions(
        decisions: BTreeMap<Principal, BTreeMap<Privilege, Decision>>,
    ) -> Self {
        let principals = decisions
            .into_iter()
            .filter(|(_, slots)| !slots.is_empty())
            .map(|(principal, slots)| (principal, PrincipalPermissions::from_decisions(slots)))
            .collect();

        Self { principals }
    }

    /// Get the permissions of a principal.
    pub fn get(&self, principal: &str) -> Option<&PrincipalPermissions> {
        self.principals.get(principal)
    }

    /// Iterate over principals and their permissions in principal order.
    pub fn iter(&self) -> impl Iterator<Item = (&Principal, &PrincipalPermissions)> {
        self.principals.iter()
    }

    /// The principals present in the set, sorted.
    pub fn principals(&self) -> impl Iterator<Item = &Principal> {
        self.principals.keys()
    }

    /// Number of principals with at least one decided privilege.
    pub fn len(&self) -> usize {
        self.principals.len()
    }

    /// Check if no principal has a decided privilege.
    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }

    /// Convert to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}
