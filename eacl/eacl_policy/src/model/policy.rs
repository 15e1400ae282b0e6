//! Policy model.
//!
//! A provider hands out a heterogeneous list of policies. Each kind reports
//! whether it carries access control entries through
//! [`Policy::access_control_entries`], so the extractor never has to know
//! which kinds exist.

use eacl_core::{Principal, Privilege};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An access control entry as stored in a policy.
///
/// One stored entry may name several privileges; it is flattened into one
/// [`AccessControlEntry`](super::AccessControlEntry) per privilege.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEntry {
    /// The principal the entry applies to.
    pub principal: Principal,

    /// The privileges granted or denied.
    pub privileges: Vec<Privilege>,

    /// `true` for an allow entry, `false` for a deny entry.
    pub allow: bool,
}

impl PolicyEntry {
    /// Create an allow entry.
    pub fn granting<I, P>(principal: impl Into<Principal>, privileges: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Privilege>,
    {
        Self {
            principal: principal.into(),
            privileges: privileges.into_iter().map(Into::into).collect(),
            allow: true,
        }
    }

    /// Create a deny entry.
    pub fn denying<I, P>(principal: impl Into<Principal>, privileges: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Privilege>,
    {
        Self {
            allow: false,
            ..Self::granting(principal, privileges)
        }
    }
}

/// A policy in force at a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Policy {
    /// An ordered access control list.
    AccessControlList {
        /// The entries, highest precedence first.
        #[serde(default)]
        entries: Vec<PolicyEntry>,
    },

    /// A path-based restriction policy. Never contributes entries.
    Restriction {
        /// The name of the restriction.
        name: String,

        /// The paths the restriction applies to.
        #[serde(default)]
        paths: Vec<String>,
    },

    /// Any other kind of policy. Its contents are ignored.
    #[serde(other)]
    Unsupported,
}

impl Policy {
    /// Create an access control list policy.
    pub fn acl(entries: Vec<PolicyEntry>) -> Self {
        Self::AccessControlList { entries }
    }

    /// Create a restriction policy.
    pub fn restriction(name: impl Into<String>, paths: Vec<String>) -> Self {
        Self::Restriction {
            name: name.into(),
            paths,
        }
    }

    /// A short name for the kind of this policy.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AccessControlList { .. } => "access_control_list",
            Self::Restriction { .. } => "restriction",
            Self::Unsupported => "unsupported",
        }
    }

    /// The access control entries of this policy, or `None` if the policy
    /// is not shaped like an access control list.
    pub fn access_control_entries(&self) -> Option<&[PolicyEntry]> {
        match self {
            Self::AccessControlList { entries } => Some(entries.as_slice()),
            Self::Restriction { .. } | Self::Unsupported => None,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessControlList { entries } => {
                write!(f, "Access control list ({} entries)", entries.len())
            }
            Self::Restriction { name, .. } => write!(f, "Restriction '{}'", name),
            Self::Unsupported => write!(f, "Unsupported policy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_acl_exposes_entries() {
        let acl = Policy::acl(vec![PolicyEntry::granting("alice", ["jcr:read"])]);
        let restriction = Policy::restriction("rep:glob", vec!["/content".to_string()]);

        assert_eq!(acl.access_control_entries().map(<[_]>::len), Some(1));
        assert!(restriction.access_control_entries().is_none());
    }

    #[test]
    fn test_policy_json_shape() {
        let json = r#"[
            {"type": "access_control_list", "entries": [
                {"principal": "alice", "privileges": ["jcr:read", "jcr:write"], "allow": true},
                {"principal": "everyone", "privileges": ["jcr:read"], "allow": false}
            ]},
            {"type": "restriction", "name": "glob", "paths": ["/a"]}
        ]"#;

        let policies: Vec<Policy> = serde_json::from_str(json).unwrap();
        assert_eq!(policies.len(), 2);
        assert_eq!(policies[0].kind(), "access_control_list");
        assert_eq!(policies[1].kind(), "restriction");

        let entries = policies[0].access_control_entries().unwrap();
        assert_eq!(
            entries[0],
            PolicyEntry::granting("alice", ["jcr:read", "jcr:write"])
        );
        assert_eq!(entries[1], PolicyEntry::denying("everyone", ["jcr:read"]));
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let policy: Policy =
            serde_json::from_str(r#"{"type": "principal_set_policy", "principals": ["alice"]}"#)
                .unwrap();

        assert_eq!(policy, Policy::Unsupported);
        assert_eq!(policy.kind(), "unsupported");
        assert!(policy.access_control_entries().is_none());
    }
}
