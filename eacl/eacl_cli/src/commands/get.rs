//! The `get` command
//!
//! Resolves a request such as `/content/page.eacl.json` against a policy
//! document and prints the response body.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use eacl_policy::{EaclService, InMemoryPolicyProvider, PolicyDocument, ResponseStatus};
use tracing::info;

use crate::config::CliConfig;

/// Arguments for the get command
#[derive(Args)]
pub struct GetArgs {
    /// Request path, e.g. `/content/page.eacl.json` or `/content/page.acl.json`
    pub request: String,

    /// JSON policy document to serve policies from
    #[clap(long)]
    pub policies: PathBuf,

    /// Indent the JSON output
    #[clap(long)]
    pub pretty: bool,
}

/// Exit code reported for a response status
pub fn exit_code(status: ResponseStatus) -> i32 {
    match status {
        ResponseStatus::Ok => 0,
        ResponseStatus::NotFound => 1,
        ResponseStatus::BadRequest => 2,
        ResponseStatus::InternalError => 3,
    }
}

/// Implementation of the get command
pub fn execute_get(args: &GetArgs, config: &CliConfig) -> Result<i32> {
    let document = PolicyDocument::load(&args.policies).with_context(|| {
        format!(
            "Failed to load policy document: {}",
            args.policies.display()
        )
    })?;
    info!(
        "Loaded {} resources from {}",
        document.resources.len(),
        args.policies.display()
    );

    let provider = InMemoryPolicyProvider::from_document(document);
    let service = EaclService::new(provider, config.hierarchy()?);

    let response = service.handle_path(&args.request);
    let body = if args.pretty || config.pretty {
        response.to_json_pretty()
    } else {
        response.to_json()
    };

    println!("{}", body);

    Ok(exit_code(response.status))
}
