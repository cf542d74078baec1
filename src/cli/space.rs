//
//  cloudfoundry-client
//  cli/space.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::operations::DeleteSpaceRequest;

use super::GlobalOptions;

/// Manage spaces
#[derive(Args, Debug)]
pub struct SpaceCommand {
    #[command(subcommand)]
    pub command: SpaceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SpaceSubcommand {
    /// Delete a space of the targeted organization
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Space name
    pub name: String,

    /// Also delete the applications, services and routes in the space
    #[arg(long, short = 'r')]
    pub recursive: bool,
}

impl SpaceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            SpaceSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let operations = global.operations()?;
        let output = global.output();

        let request = DeleteSpaceRequest::new(args.name.as_str()).with_recursive(args.recursive);

        let spinner = output.spinner(format!("Deleting space {}", args.name));
        let result = operations.spaces().delete(&request).await;
        spinner.finish_and_clear();
        result?;

        output.write_success(
            &format!("Deleted space {}", args.name),
            serde_json::json!({ "space": args.name, "recursive": args.recursive }),
        )
    }
}
