//
//  cloudfoundry-client
//  cli/org.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::operations::DeleteOrganizationRequest;

use super::GlobalOptions;

/// Manage organizations
#[derive(Args, Debug)]
pub struct OrgCommand {
    #[command(subcommand)]
    pub command: OrgSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum OrgSubcommand {
    /// Delete an organization and everything in it
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Organization name
    pub name: String,
}

impl OrgCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            OrgSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let operations = global.operations()?;
        let output = global.output();

        let spinner = output.spinner(format!("Deleting organization {}", args.name));
        let result = operations
            .organizations()
            .delete(&DeleteOrganizationRequest::new(args.name.as_str()))
            .await;
        spinner.finish_and_clear();
        result?;

        output.write_success(
            &format!("Deleted organization {}", args.name),
            serde_json::json!({ "organization": args.name }),
        )
    }
}
