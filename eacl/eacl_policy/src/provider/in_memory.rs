//! In-memory policy provider.
//!
//! Serves policies from a map of resource path to recorded policies. A
//! resource exists exactly when it has a record.

use dashmap::DashMap;
use eacl_core::error::ProviderError;
use std::sync::Arc;

use super::{normalize_path, PolicyDocument, PolicyProvider, ResourcePolicies};
use crate::model::Policy;

/// An in-memory policy provider.
#[derive(Clone, Default)]
pub struct InMemoryPolicyProvider {
    /// The recorded policies, indexed by normalized resource path.
    resources: Arc<DashMap<String, ResourcePolicies>>,
}

impl InMemoryPolicyProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider serving the resources of `document`.
    pub fn from_document(document: PolicyDocument) -> Self {
        let provider = Self::new();
        for (path, policies) in document.resources {
            provider.insert(&path, policies);
        }
        provider
    }

    /// Record the policies of a resource, replacing any previous record.
    pub fn insert(&self, path: &str, policies: ResourcePolicies) {
        self.resources.insert(normalize_path(path), policies);
    }

    /// Record a resource whose declared and effective policies are the same.
    pub fn insert_policies(&self, path: &str, policies: Vec<Policy>) {
        self.insert(path, ResourcePolicies::declared(policies));
    }

    /// Remove a resource.
    pub fn remove(&self, path: &str) -> Option<ResourcePolicies> {
        self.resources
            .remove(&normalize_path(path))
            .map(|(_, policies)| policies)
    }

    /// Number of recorded resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Check if no resource is recorded.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    fn lookup<F>(&self, path: &str, select: F) -> Result<Vec<Policy>, ProviderError>
    where
        F: Fn(&ResourcePolicies) -> &[Policy],
    {
        // A missing resource has no policies; existence is checked separately.
        Ok(self
            .resources
            .get(&normalize_path(path))
            .map(|record| select(record.value()).to_vec())
            .unwrap_or_default())
    }
}

impl PolicyProvider for InMemoryPolicyProvider {
    fn resource_exists(&self, path: &str) -> Result<bool, ProviderError> {
        Ok(self.resources.contains_key(&normalize_path(path)))
    }

    fn effective_policies(&self, path: &str) -> Result<Vec<Policy>, ProviderError> {
        self.lookup(path, |record| record.effective())
    }

    fn declared_policies(&self, path: &str) -> Result<Vec<Policy>, ProviderError> {
        self.lookup(path, |record| record.declared.as_slice())
    }
}
