//! Request handling.
//!
//! A transport-independent rendition of the ACL read endpoints: a request
//! path such as `/content/page.eacl.json` is parsed into a resource path and
//! a policy scope, resolved against a provider, and answered with a status
//! and a JSON body.

mod handler;
mod request;

pub use handler::{AclResponse, EaclService, ResponseStatus};
pub use request::AclRequest;
