//! Request parsing.

use eacl_core::error::{Error, Result};
use std::fmt;

use crate::provider::{normalize_path, PolicyScope};

/// The only response extension served.
const JSON_EXTENSION: &str = "json";

/// A request for the resolved ACL of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclRequest {
    resource_path: String,
    scope: PolicyScope,
}

impl AclRequest {
    /// Create a request for `resource_path`.
    pub fn new(resource_path: &str, scope: PolicyScope) -> Self {
        Self {
            resource_path: normalize_path(resource_path),
            scope,
        }
    }

    /// Parse a request path of the form `<resource>.<selector>.json`.
    ///
    /// The selector is `eacl` for effective policies or `acl` for declared
    /// ones. Dots earlier in the last segment belong to the resource name.
    ///
    /// # Examples
    ///
    /// ```
    /// use eacl_policy::{AclRequest, PolicyScope};
    ///
    /// let request = AclRequest::parse("/content/site.en.eacl.json").unwrap();
    /// assert_eq!(request.resource_path(), "/content/site.en");
    /// assert_eq!(request.scope(), PolicyScope::Effective);
    /// ```
    pub fn parse(request_path: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidRequest(format!("{}: '{}'", reason, request_path));

        if !request_path.starts_with('/') {
            return Err(invalid("request path must be absolute"));
        }

        // starts_with('/') guarantees a separator
        let split = request_path.rfind('/').unwrap_or(0);
        let (parent, segment) = request_path.split_at(split + 1);

        let mut parts = segment.rsplitn(3, '.');
        let extension = parts.next().unwrap_or_default();
        let (Some(selector), Some(name)) = (parts.next(), parts.next()) else {
            return Err(invalid("expected <resource>.<selector>.json"));
        };

        if extension != JSON_EXTENSION {
            return Err(invalid("unsupported extension"));
        }
        let Some(scope) = PolicyScope::from_selector(selector) else {
            return Err(invalid("unsupported selector"));
        };
        // only the root may be addressed by an empty name
        if name.is_empty() && parent != "/" {
            return Err(invalid("missing resource name"));
        }

        Ok(Self::new(&format!("{}{}", parent, name), scope))
    }

    /// The normalized resource path.
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// The policy scope requested.
    pub fn scope(&self) -> PolicyScope {
        self.scope
    }
}

impl fmt::Display for AclRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.resource_path,
            self.scope.selector(),
            JSON_EXTENSION
        )
    }
}
