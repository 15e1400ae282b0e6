//! Memoized privilege expansion.

use eacl_core::Privilege;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::PrivilegeHierarchy;

/// Expands privileges into the primitive privileges they denote.
///
/// Closures are cached, so an aggregate referenced by many entries is only
/// walked once. An expander lives for a single resolution.
pub struct PrivilegeExpander<'h> {
    /// The aggregation table.
    hierarchy: &'h PrivilegeHierarchy,

    /// Closures computed so far.
    cache: HashMap<Privilege, Rc<BTreeSet<Privilege>>>,
}

impl<'h> PrivilegeExpander<'h> {
    /// Create a new expander over `hierarchy`.
    pub fn new(hierarchy: &'h PrivilegeHierarchy) -> Self {
        Self {
            hierarchy,
            cache: HashMap::new(),
        }
    }

    /// Expand `privilege` into its set of primitive privileges.
    ///
    /// A primitive privilege, known or not, expands to itself.
    pub fn expand(&mut self, privilege: &Privilege) -> Rc<BTreeSet<Privilege>> {
        if let Some(closure) = self.cache.get(privilege) {
            return Rc::clone(closure);
        }

        let hierarchy = self.hierarchy;
        let closure = match hierarchy.children(privilege.as_str()) {
            Some(children) => {
                let mut primitives = BTreeSet::new();
                for child in children {
                    primitives.extend(self.expand(child).iter().cloned());
                }
                primitives
            }
            None => BTreeSet::from([privilege.clone()]),
        };

        let closure = Rc::new(closure);
        self.cache.insert(privilege.clone(), Rc::clone(&closure));
        closure
    }

    /// Number of privileges whose closure has been cached.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
