//! The `privileges` command
//!
//! Prints the primitive privileges each privilege expands to under the
//! configured table.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Args;
use eacl_core::Privilege;
use eacl_policy::PrivilegeExpander;

use crate::config::CliConfig;

/// Arguments for the privileges command
#[derive(Args)]
pub struct PrivilegesArgs {
    /// Privileges to expand; all aggregates when omitted
    pub names: Vec<String>,
}

/// Implementation of the privileges command
pub fn execute_privileges(args: &PrivilegesArgs, config: &CliConfig) -> Result<i32> {
    let hierarchy = config.hierarchy()?;

    let names: Vec<Privilege> = if args.names.is_empty() {
        hierarchy.aggregates().map(|(name, _)| name.clone()).collect()
    } else {
        args.names.iter().map(Privilege::from).collect()
    };

    let mut expander = PrivilegeExpander::new(&hierarchy);
    let expansions: BTreeMap<&str, Vec<String>> = names
        .iter()
        .map(|name| {
            let primitives = expander.expand(name);
            (
                name.as_str(),
                primitives.iter().map(ToString::to_string).collect(),
            )
        })
        .collect();

    let output = serde_json::to_string_pretty(&expansions)
        .context("Failed to serialize privilege expansions")?;
    println!("{}", output);

    Ok(0)
}
