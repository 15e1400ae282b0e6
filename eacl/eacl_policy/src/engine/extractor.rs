//! Policy extraction.

use tracing::debug;

use crate::model::{AccessControlEntry, Policy};

/// Flattens effective policies into an ordered entry sequence.
///
/// Entries are drawn from every policy shaped like an access control list,
/// in provider order and, within a policy, in entry order. A stored entry
/// naming several privileges yields one entry per privilege. Precedence is
/// numbered consecutively over the whole sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyExtractor;

impl PolicyExtractor {
    /// Create a new policy extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the access control entries of `policies`.
    pub fn extract(&self, policies: &[Policy]) -> Vec<AccessControlEntry> {
        let mut entries = Vec::new();

        for (index, policy) in policies.iter().enumerate() {
            let Some(policy_entries) = policy.access_control_entries() else {
                debug!("Skipping policy {} of kind '{}'", index, policy.kind());
                continue;
            };

            for entry in policy_entries {
                for privilege in &entry.privileges {
                    let precedence = entries.len();
                    entries.push(AccessControlEntry::new(
                        entry.principal.clone(),
                        privilege.clone(),
                        entry.allow,
                        precedence,
                    ));
                }
            }
        }

        debug!(
            "Extracted {} entries from {} policies",
            entries.len(),
            policies.len()
        );

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PolicyEntry;

    #[test]
    fn test_no_policies_yields_no_entries() {
        assert!(PolicyExtractor::new().extract(&[]).is_empty());
    }

    #[test]
    fn test_skips_non_acl_policies() {
        let policies = vec![
            Policy::restriction("glob", vec!["/content/*".to_string()]),
            Policy::acl(vec![PolicyEntry::granting("alice", ["read"])]),
        ];

        let entries = PolicyExtractor::new().extract(&policies);
        assert_eq!(entries, vec![AccessControlEntry::grant("alice", "read", 0)]);
    }

    #[test]
    fn test_concatenates_every_acl_in_order() {
        let policies = vec![
            Policy::acl(vec![
                PolicyEntry::denying("bob", ["write"]),
                PolicyEntry::granting("alice", ["read", "write"]),
            ]),
            Policy::restriction("glob", Vec::new()),
            Policy::acl(vec![PolicyEntry::granting("bob", ["write"])]),
        ];

        let entries = PolicyExtractor::new().extract(&policies);
        assert_eq!(
            entries,
            vec![
                AccessControlEntry::deny("bob", "write", 0),
                AccessControlEntry::grant("alice", "read", 1),
                AccessControlEntry::grant("alice", "write", 2),
                AccessControlEntry::grant("bob", "write", 3),
            ]
        );
    }

    #[test]
    fn test_entry_without_privileges_contributes_nothing() {
        let empty: Vec<&str> = Vec::new();
        let policies = vec![Policy::acl(vec![
            PolicyEntry::granting("alice", empty),
            PolicyEntry::granting("bob", ["read"]),
        ])];

        let entries = PolicyExtractor::new().extract(&policies);
        assert_eq!(entries, vec![AccessControlEntry::grant("bob", "read", 0)]);
    }
}
