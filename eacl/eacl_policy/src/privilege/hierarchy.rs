//! Privilege aggregation table.

use eacl_core::error::{PrivilegeError, Result};
use eacl_core::Privilege;
use std::collections::{BTreeMap, HashMap};

use super::names::*;

/// A static, acyclic privilege aggregation table.
///
/// Maps each aggregate privilege to its direct children. Privileges that do
/// not appear as a key are primitive, including names the table has never
/// heard of.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivilegeHierarchy {
    aggregates: BTreeMap<Privilege, Vec<Privilege>>,
}

#[derive(Clone, Copy)]
enum Visit {
    InProgress,
    Done,
}

impl PrivilegeHierarchy {
    /// Create a hierarchy in which every privilege is primitive.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a hierarchy from an adjacency mapping of aggregate name to
    /// child names.
    ///
    /// # Errors
    ///
    /// Fails if a name is empty, an aggregate has no children, or the
    /// mapping contains a cycle.
    pub fn from_aggregates<I, K, C, V>(aggregates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<Privilege>,
        C: IntoIterator<Item = V>,
        V: Into<Privilege>,
    {
        Self::empty().with_aggregates(aggregates)
    }

    /// The standard JCR 2.0 privilege table, including the Jackrabbit
    /// `rep:write` aggregate.
    pub fn jcr() -> Self {
        let table: [(&str, &[&str]); 3] = [
            (
                JCR_WRITE,
                &[
                    JCR_MODIFY_PROPERTIES,
                    JCR_ADD_CHILD_NODES,
                    JCR_REMOVE_NODE,
                    JCR_REMOVE_CHILD_NODES,
                ],
            ),
            (REP_WRITE, &[JCR_WRITE, JCR_NODE_TYPE_MANAGEMENT]),
            (
                JCR_ALL,
                &[
                    JCR_READ,
                    JCR_READ_ACCESS_CONTROL,
                    JCR_MODIFY_ACCESS_CONTROL,
                    JCR_LOCK_MANAGEMENT,
                    JCR_VERSION_MANAGEMENT,
                    JCR_NODE_TYPE_MANAGEMENT,
                    JCR_RETENTION_MANAGEMENT,
                    JCR_LIFECYCLE_MANAGEMENT,
                    REP_WRITE,
                    JCR_WORKSPACE_MANAGEMENT,
                    JCR_NODE_TYPE_DEFINITION_MANAGEMENT,
                    JCR_NAMESPACE_MANAGEMENT,
                    REP_PRIVILEGE_MANAGEMENT,
                ],
            ),
        ];

        let aggregates = table
            .iter()
            .map(|(name, children)| {
                (
                    Privilege::new(*name),
                    children.iter().map(|child| Privilege::new(*child)).collect(),
                )
            })
            .collect();

        Self { aggregates }
    }

    /// Layer additional aggregates on top of this hierarchy. An aggregate
    /// that already exists has its children replaced.
    ///
    /// # Errors
    ///
    /// Same as [`PrivilegeHierarchy::from_aggregates`]; the combined table
    /// is validated as a whole.
    pub fn with_aggregates<I, K, C, V>(mut self, aggregates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<Privilege>,
        C: IntoIterator<Item = V>,
        V: Into<Privilege>,
    {
        for (name, children) in aggregates {
            let name: Privilege = name.into();
            let children: Vec<Privilege> = children.into_iter().map(Into::into).collect();

            if name.as_str().is_empty() || children.iter().any(|c| c.as_str().is_empty()) {
                return Err(PrivilegeError::EmptyName.into());
            }
            if children.is_empty() {
                return Err(PrivilegeError::EmptyAggregate(name.into_inner()).into());
            }

            self.aggregates.insert(name, children);
        }

        self.validate()?;
        Ok(self)
    }

    /// The direct children of `privilege`, or `None` if it is primitive.
    pub fn children(&self, privilege: &str) -> Option<&[Privilege]> {
        self.aggregates.get(privilege).map(Vec::as_slice)
    }

    /// Check if `privilege` is an aggregate.
    pub fn is_aggregate(&self, privilege: &str) -> bool {
        self.aggregates.contains_key(privilege)
    }

    /// Iterate over aggregates and their direct children in name order.
    pub fn aggregates(&self) -> impl Iterator<Item = (&Privilege, &[Privilege])> {
        self.aggregates
            .iter()
            .map(|(name, children)| (name, children.as_slice()))
    }

    /// Number of aggregate privileges.
    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    /// Check if the hierarchy has no aggregates.
    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    fn validate(&self) -> Result<()> {
        let mut state = HashMap::new();
        let mut path = Vec::new();
        for name in self.aggregates.keys() {
            self.visit(name.as_str(), &mut state, &mut path)?;
        }
        Ok(())
    }

    fn visit<'a>(
        &'a self,
        name: &'a str,
        state: &mut HashMap<&'a str, Visit>,
        path: &mut Vec<&'a str>,
    ) -> Result<()> {
        match state.get(name) {
            Some(Visit::Done) => return Ok(()),
            Some(Visit::InProgress) => {
                let start = path.iter().position(|n| *n == name).unwrap_or(0);
                let mut cycle = path[start..].to_vec();
                cycle.push(name);
                return Err(PrivilegeError::Cycle(cycle.join(" -> ")).into());
            }
            None => {}
        }

        let Some(children) = self.aggregates.get(name) else {
            state.insert(name, Visit::Done);
            return Ok(());
        };

        state.insert(name, Visit::InProgress);
        path.push(name);
        for child in children {
            self.visit(child.as_str(), state, path)?;
        }
        path.pop();
        state.insert(name, Visit::Done);

        Ok(())
    }
}
