//! CLI commands

pub mod get;
pub mod privileges;
