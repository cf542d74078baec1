//
//  cloudfoundry-client
//  cli/route.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::operations::DeleteRouteRequest;

use super::GlobalOptions;

/// Manage routes
#[derive(Args, Debug)]
pub struct RouteCommand {
    #[command(subcommand)]
    pub command: RouteSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RouteSubcommand {
    /// Delete a route of the targeted organization
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Domain of the route
    pub domain: String,

    /// Hostname of the route
    #[arg(long, short = 'n')]
    pub hostname: String,

    /// Path of the route, e.g. /api
    #[arg(long)]
    pub path: Option<String>,
}

impl RouteCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RouteSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let operations = global.operations()?;
        let output = global.output();

        let mut request = DeleteRouteRequest::new(args.domain.as_str(), args.hostname.as_str());
        if let Some(path) = &args.path {
            request = request.with_path(path.as_str());
        }
        let route = format!(
            "{}.{}{}",
            args.hostname,
            args.domain,
            args.path.as_deref().unwrap_or_default()
        );

        let spinner = output.spinner(format!("Deleting route {}", route));
        let result = operations.routes().delete(&request).await;
        spinner.finish_and_clear();
        result?;

        output.write_success(
            &format!("Deleted route {}", route),
            serde_json::json!({ "route": route }),
        )
    }
}
