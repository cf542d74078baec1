//
//  cloudfoundry-client
//  cli/service.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::operations::{DeleteServiceInstanceRequest, UnbindServiceInstanceRequest};

use super::GlobalOptions;

/// Manage service instances
#[derive(Args, Debug)]
pub struct ServiceCommand {
    #[command(subcommand)]
    pub command: ServiceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ServiceSubcommand {
    /// Delete a service instance of the targeted space
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),

    /// Unbind a service instance from an application
    Unbind(UnbindArgs),
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Service instance name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct UnbindArgs {
    /// Service instance name
    pub name: String,

    /// Application the instance is bound to
    #[arg(long, short = 'a')]
    pub app: String,
}

impl ServiceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ServiceSubcommand::Delete(args) => self.delete(args, global).await,
            ServiceSubcommand::Unbind(args) => self.unbind(args, global).await,
        }
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let operations = global.operations()?;
        let output = global.output();

        let spinner = output.spinner(format!("Deleting service instance {}", args.name));
        let result = operations
            .services()
            .delete_instance(&DeleteServiceInstanceRequest::new(args.name.as_str()))
            .await;
        spinner.finish_and_clear();
        result?;

        output.write_success(
            &format!("Deleted service instance {}", args.name),
            serde_json::json!({ "service_instance": args.name }),
        )
    }

    async fn unbind(&self, args: &UnbindArgs, global: &GlobalOptions) -> Result<()> {
        let operations = global.operations()?;
        let output = global.output();

        let spinner = output.spinner(format!("Unbinding {} from {}", args.name, args.app));
        let result = operations
            .services()
            .unbind(&UnbindServiceInstanceRequest::new(
                args.app.as_str(),
                args.name.as_str(),
            ))
            .await;
        spinner.finish_and_clear();
        result?;

        output.write_success(
            &format!("Unbound service instance {} from {}", args.name, args.app),
            serde_json::json!({ "service_instance": args.name, "application": args.app }),
        )
    }
}
