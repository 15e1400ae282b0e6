//! Privilege aggregation.
//!
//! Aggregate privileges denote sets of other privileges. The hierarchy is
//! an explicit adjacency table, validated to be acyclic when built, and the
//! expander memoizes closures for the duration of one resolution.

mod expander;
mod hierarchy;
pub mod names;

pub use expander::PrivilegeExpander;
pub use hierarchy::PrivilegeHierarchy;
