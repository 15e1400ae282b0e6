//! Policy providers.
//!
//! A provider hands out the policies in force at a resource. It owns
//! storage and inheritance; the resolver only consumes what it returns.

mod document;
mod in_memory;

pub use document::{PolicyDocument, ResourcePolicies};
pub use in_memory::InMemoryPolicyProvider;

use eacl_core::error::ProviderError;
use std::fmt;
use std::sync::Arc;

use crate::model::Policy;

/// Which policies of a resource to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyScope {
    /// The policies declared directly on the resource.
    Declared,

    /// The inheritance-resolved policies in force at the resource.
    Effective,
}

impl PolicyScope {
    /// Map a request selector (`acl` or `eacl`) to a scope.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "acl" => Some(Self::Declared),
            "eacl" => Some(Self::Effective),
            _ => None,
        }
    }

    /// The request selector for this scope.
    pub fn selector(&self) -> &'static str {
        match self {
            Self::Declared => "acl",
            Self::Effective => "eacl",
        }
    }
}

impl fmt::Display for PolicyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared => write!(f, "declared"),
            Self::Effective => write!(f, "effective"),
        }
    }
}

/// Trait for policy providers.
///
/// Implementations must be safe to share between concurrent requests.
pub trait PolicyProvider: Send + Sync {
    /// Check if a resource exists.
    ///
    /// # Arguments
    ///
    /// * `path` - The absolute resource path.
    fn resource_exists(&self, path: &str) -> Result<bool, ProviderError>;

    /// Get the effective policies of a resource, highest precedence first.
    ///
    /// # Arguments
    ///
    /// * `path` - The absolute resource path.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Policy>)` - The policies in effective order.
    /// * `Err` - If the policies could not be read.
    fn effective_policies(&self, path: &str) -> Result<Vec<Policy>, ProviderError>;

    /// Get the policies declared directly on a resource.
    ///
    /// Defaults to the effective policies for providers that do not keep
    /// the two apart.
    fn declared_policies(&self, path: &str) -> Result<Vec<Policy>, ProviderError> {
        self.effective_policies(path)
    }

    /// Get the policies of a resource for `scope`.
    fn policies(&self, path: &str, scope: PolicyScope) -> Result<Vec<Policy>, ProviderError> {
        match scope {
            PolicyScope::Declared => self.declared_policies(path),
            PolicyScope::Effective => self.effective_policies(path),
        }
    }
}

impl<P: PolicyProvider + ?Sized> PolicyProvider for Arc<P> {
    fn resource_exists(&self, path: &str) -> Result<bool, ProviderError> {
        (**self).resource_exists(path)
    }

    fn effective_policies(&self, path: &str) -> Result<Vec<Policy>, ProviderError> {
        (**self).effective_policies(path)
    }

    fn declared_policies(&self, path: &str) -> Result<Vec<Policy>, ProviderError> {
        (**self).declared_policies(path)
    }
}

/// Normalize a resource path: collapse repeated slashes and drop a trailing
/// slash. The root stays `/`.
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
