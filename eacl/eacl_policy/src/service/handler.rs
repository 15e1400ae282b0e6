//! Request handler.

use eacl_core::error::{Error, Result};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use super::AclRequest;
use crate::engine::resolve_effective_permissions;
use crate::model::EffectivePermissionSet;
use crate::privilege::PrivilegeHierarchy;
use crate::provider::{PolicyProvider, PolicyScope};

/// Outcome of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    /// 200: the permission set was resolved.
    Ok,

    /// 400: the request path could not be parsed.
    BadRequest,

    /// 404: the resource does not exist.
    NotFound,

    /// 500: the provider or the serializer failed.
    InternalError,
}

impl ResponseStatus {
    /// The HTTP status code.
    pub fn code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::InternalError => 500,
        }
    }

    /// Map an error onto the status it is reported with.
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::ResourceNotFound(_) => Self::NotFound,
            Error::InvalidRequest(_) => Self::BadRequest,
            _ => Self::InternalError,
        }
    }
}

/// A response: a status and a JSON body.
///
/// On success the body is the permission set; on failure it is
/// `{"error": "<explanation>"}`.
#[derive(Debug, Clone, PartialEq)]
pub struct AclResponse {
    /// The response status.
    pub status: ResponseStatus,

    /// The response body.
    pub body: Value,
}

impl AclResponse {
    /// Build a response reporting `err`.
    pub fn from_error(err: &Error) -> Self {
        Self {
            status: ResponseStatus::for_error(err),
            body: json!({ "error": err.to_string() }),
        }
    }

    /// Check if the request succeeded.
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Ok
    }

    /// The body as compact JSON.
    pub fn to_json(&self) -> String {
        self.body.to_string()
    }

    /// The body as indented JSON.
    pub fn to_json_pretty(&self) -> String {
        // Serializing a `Value` cannot fail
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.to_json())
    }
}

/// Resolves ACL requests against a policy provider.
///
/// The service holds no per-request state and can be shared across threads
/// when the provider can.
pub struct EaclService<P> {
    /// The policy provider.
    provider: P,

    /// The privilege aggregation table.
    hierarchy: PrivilegeHierarchy,
}

impl<P> EaclService<P>
where
    P: PolicyProvider,
{
    /// Create a new service.
    ///
    /// # Arguments
    ///
    /// * `provider` - Source of the policies of each resource.
    /// * `hierarchy` - The table used to expand aggregate privileges.
    pub fn new(provider: P, hierarchy: PrivilegeHierarchy) -> Self {
        Self {
            provider,
            hierarchy,
        }
    }

    /// The privilege table in use.
    pub fn hierarchy(&self) -> &PrivilegeHierarchy {
        &self.hierarchy
    }

    /// Resolve the permissions of a resource.
    ///
    /// # Arguments
    ///
    /// * `path` - The resource path.
    /// * `scope` - Whether to resolve declared or effective policies.
    ///
    /// # Returns
    ///
    /// * `Ok(EffectivePermissionSet)` - The resolved permissions.
    /// * `Err(Error::ResourceNotFound)` - If the resource does not exist.
    /// * `Err(Error::Provider)` - If the provider failed.
    pub fn resolve(&self, path: &str, scope: PolicyScope) -> Result<EffectivePermissionSet> {
        if !self.provider.resource_exists(path)? {
            return Err(Error::ResourceNotFound(path.to_string()));
        }

        let policies = self.provider.policies(path, scope)?;
        debug!("Resolving {} {} policies of {}", policies.len(), scope, path);

        Ok(resolve_effective_permissions(&policies, &self.hierarchy))
    }

    /// Handle a parsed request.
    pub fn handle(&self, request: &AclRequest) -> AclResponse {
        info!("Handling ACL request {}", request);

        let result = self
            .resolve(request.resource_path(), request.scope())
            .and_then(|permissions| permissions.to_value());

        match result {
            Ok(body) => AclResponse {
                status: ResponseStatus::Ok,
                body,
            },
            Err(err) => {
                match ResponseStatus::for_error(&err) {
                    ResponseStatus::InternalError => error!("Request {} failed: {}", request, err),
                    _ => warn!("Request {} rejected: {}", request, err),
                }
                AclResponse::from_error(&err)
            }
        }
    }

    /// Parse and handle a raw request path such as `/content/page.eacl.json`.
    pub fn handle_path(&self, request_path: &str) -> AclResponse {
        match AclRequest::parse(request_path) {
            Ok(request) => self.handle(&request),
            Err(err) => {
                warn!("Rejecting request path {}: {}", request_path, err);
                AclResponse::from_error(&err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Policy, PolicyEntry};
    use crate::provider::InMemoryPolicyProvider;
    use eacl_core::error::ProviderError;

    #[test]
    fn test_status_codes() {
        assert_eq!(ResponseStatus::Ok.code(), 200);
        assert_eq!(
            ResponseStatus::for_error(&Error::ResourceNotFound("/x".into())).code(),
            404
        );
        assert_eq!(
            ResponseStatus::for_error(&Error::InvalidRequest("x".into())).code(),
            400
        );
        assert_eq!(
            ResponseStatus::for_error(&ProviderError::Unavailable("down".into()).into()).code(),
            500
        );
    }

    #[test]
    fn test_handle_existing_resource() {
        let provider = InMemoryPolicyProvider::new();
        provider.insert_policies(
            "/content",
            vec![Policy::acl(vec![PolicyEntry::granting(
                "everyone",
                ["jcr:read"],
            )])],
        );
        let service = EaclService::new(provider, PrivilegeHierarchy::jcr());

        let response = service.handle_path("/content.eacl.json");
        assert!(response.is_success());
        assert_eq!(
            response.to_json(),
            r#"{"everyone":{"granted":["jcr:read"],"denied":[]}}"#
        );
    }

    #[test]
    fn test_handle_missing_resource() {
        let service = EaclService::new(InMemoryPolicyProvider::new(), PrivilegeHierarchy::jcr());

        let response = service.handle_path("/missing.eacl.json");
        assert_eq!(response.status, ResponseStatus::NotFound);
        assert_eq!(response.body["error"], "Resource not found: /missing");
    }

    #[test]
    fn test_handle_malformed_path() {
        let service = EaclService::new(InMemoryPolicyProvider::new(), PrivilegeHierarchy::jcr());

        let response = service.handle_path("/content.json");
        assert_eq!(response.status, ResponseStatus::BadRequest);
    }
}
