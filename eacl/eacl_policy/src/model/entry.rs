//! Flattened access control entries.

use eacl_core::{Principal, Privilege};
use std::fmt;

/// The outcome an entry assigns to a (principal, privilege) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The privilege is granted.
    Allow,

    /// The privilege is denied.
    Deny,
}

impl Decision {
    /// Build a decision from an allow flag.
    pub fn from_allow(is_allow: bool) -> Self {
        if is_allow {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Deny => write!(f, "deny"),
        }
    }
}

/// A single (principal, privilege, allow/deny) rule.
///
/// `precedence` is the entry's position in the provider's effective order.
/// Lower values take precedence over higher ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessControlEntry {
    /// The principal the entry applies to.
    pub principal: Principal,

    /// The privilege named by the entry. May be an aggregate.
    pub privilege: Privilege,

    /// Whether the entry grants (`true`) or denies (`false`) the privilege.
    pub is_allow: bool,

    /// Position in the effective order.
    pub precedence: usize,
}

impl AccessControlEntry {
    /// Create a new access control entry.
    pub fn new(
        principal: impl Into<Principal>,
        privilege: impl Into<Privilege>,
        is_allow: bool,
        precedence: usize,
    ) -> Self {
        Self {
            principal: principal.into(),
            privilege: privilege.into(),
            is_allow,
            precedence,
        }
    }

    /// Create an entry granting `privilege` to `principal`.
    pub fn grant(
        principal: impl Into<Principal>,
        privilege: impl Into<Privilege>,
        precedence: usize,
    ) -> Self {
        Self::new(principal, privilege, true, precedence)
    }

    /// Create an entry denying `privilege` to `principal`.
    pub fn deny(
        principal: impl Into<Principal>,
        privilege: impl Into<Privilege>,
        precedence: usize,
    ) -> Self {
        Self::new(principal, privilege, false, precedence)
    }

    /// The decision this entry assigns.
    pub fn decision(&self) -> Decision {
        Decision::from_allow(self.is_allow)
    }
}

impl fmt::Display for AccessControlEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.precedence,
            self.decision(),
            self.privilege,
            self.principal
        )
    }
}
