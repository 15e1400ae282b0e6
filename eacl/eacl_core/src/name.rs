//! Names for principals and privileges.
//!
//! Both are opaque strings: a principal names a user or group, a privilege
//! names a permission. Wrapping them keeps the two from being mixed up in
//! maps keyed by one or the other.
//!
//! # Examples
//!
//! ```
//! use eacl_core::name::{Principal, Privilege};
//!
//! let principal = Principal::new("alice");
//! let privilege: Privilege = "jcr:read".into();
//!
//! assert_eq!(principal.as_str(), "alice");
//! assert_eq!(privilege.to_string(), "jcr:read");
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a name from anything string-like.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Get the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the name, returning the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl From<&String> for $name {
            fn from(name: &String) -> Self {
                Self(name.clone())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        // Lets ordered maps keyed by names be queried with a plain `&str`.
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_name!(
    /// A user or group subject to access control.
    Principal
);

define_name!(
    /// A named permission, either primitive or an aggregate of others.
    Privilege
);
