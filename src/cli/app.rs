//
//  cloudfoundry-client
//  cli/app.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::operations::{
    CopySourceApplicationRequest, DeleteApplicationRequest, RestageApplicationRequest,
};
use crate::util::{format_duration, parse_seconds};

use super::GlobalOptions;

/// Manage applications
#[derive(Args, Debug)]
pub struct AppCommand {
    #[command(subcommand)]
    pub command: AppSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AppSubcommand {
    /// Delete an application of the targeted space
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),

    /// Restage an application and wait for it to run again
    Restage(RestageArgs),

    /// Copy the package of one application to another
    #[command(name = "copy-source")]
    CopySource(CopySourceArgs),
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Application name
    pub name: String,

    /// Also delete the routes mapped to the application
    #[arg(long, short = 'r')]
    pub delete_routes: bool,
}

#[derive(Args, Debug)]
pub struct RestageArgs {
    /// Application name
    pub name: String,

    /// Seconds to wait for staging
    #[arg(long, value_parser = parse_seconds)]
    pub staging_timeout: Option<Duration>,

    /// Seconds to wait for an instance to start after staging
    #[arg(long, value_parser = parse_seconds)]
    pub startup_timeout: Option<Duration>,
}

#[derive(Args, Debug)]
pub struct CopySourceArgs {
    /// Application to copy from
    pub name: String,

    /// Application to copy to
    pub target: String,
}

impl AppCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AppSubcommand::Delete(args) => self.delete(args, global).await,
            AppSubcommand::Restage(args) => self.restage(args, global).await,
            AppSubcommand::CopySource(args) => self.copy_source(args, global).await,
        }
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let operations = global.operations()?;
        let output = global.output();

        let request =
            DeleteApplicationRequest::new(args.name.as_str()).with_delete_routes(args.delete_routes);

        let spinner = output.spinner(format!("Deleting application {}", args.name));
        let result = operations.applications().delete(&request).await;
        spinner.finish_and_clear();
        result?;

        output.write_success(
            &format!("Deleted application {}", args.name),
            serde_json::json!({ "application": args.name, "routes_deleted": args.delete_routes }),
        )
    }

    async fn restage(&self, args: &RestageArgs, global: &GlobalOptions) -> Result<()> {
        let operations = global.operations()?;
        let output = global.output();

        let mut request = RestageApplicationRequest::new(args.name.as_str());
        if let Some(timeout) = args.staging_timeout {
            request = request.with_staging_timeout(timeout);
        }
        if let Some(timeout) = args.startup_timeout {
            request = request.with_startup_timeout(timeout);
        }
        let deadline = request
            .staging_timeout
            .unwrap_or(operations.staging_timeout())
            + request
                .startup_timeout
                .unwrap_or(operations.startup_timeout());

        let spinner = output.spinner(format!(
            "Restaging application {} (up to {})",
            args.name,
            format_duration(deadline)
        ));
        let result = operations.applications().restage(&request).await;
        spinner.finish_and_clear();
        result?;

        output.write_success(
            &format!("Restaged application {}", args.name),
            serde_json::json!({ "application": args.name }),
        )
    }

    async fn copy_source(&self, args: &CopySourceArgs, global: &GlobalOptions) -> Result<()> {
        let operations = global.operations()?;
        let output = global.output();

        let spinner = output.spinner(format!("Copying {} to {}", args.name, args.target));
        let result = operations
            .applications()
            .copy_source(&CopySourceApplicationRequest::new(
                args.name.as_str(),
                args.target.as_str(),
            ))
            .await;
        spinner.finish_and_clear();
        result?;

        output.write_success(
            &format!("Copied source of {} to {}", args.name, args.target),
            serde_json::json!({ "source": args.name, "target": args.target }),
        )
    }
}
