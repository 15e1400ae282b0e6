//! Policy documents.
//!
//! A JSON snapshot of the policies of a set of resources:
//!
//! ```json
//! {
//!   "resources": {
//!     "/content/page": {
//!       "declared": [{"type": "access_control_list", "entries": []}],
//!       "effective": [{"type": "access_control_list", "entries": []}]
//!     }
//!   }
//! }
//! ```

use eacl_core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::model::Policy;

/// The policies recorded for one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePolicies {
    /// Policies declared on the resource itself.
    #[serde(default)]
    pub declared: Vec<Policy>,

    /// Policies in force at the resource. Falls back to `declared`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective: Option<Vec<Policy>>,
}

impl ResourcePolicies {
    /// Create a record with the same declared and effective policies.
    pub fn declared(policies: Vec<Policy>) -> Self {
        Self {
            declared: policies,
            effective: None,
        }
    }

    /// Set the effective policies.
    pub fn with_effective(mut self, policies: Vec<Policy>) -> Self {
        self.effective = Some(policies);
        self
    }

    /// The effective policies.
    pub fn effective(&self) -> &[Policy] {
        self.effective.as_deref().unwrap_or(self.declared.as_slice())
    }
}

/// A policy snapshot keyed by resource path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// The resources and their policies.
    #[serde(default)]
    pub resources: BTreeMap<String, ResourcePolicies>,
}

impl PolicyDocument {
    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Load a document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading policy document from {}", path.display());

        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
