//
//  cloudfoundry-client
//  cli/job.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::api::v2::JobStatus;
use crate::output::OutputFormat;

use super::GlobalOptions;

/// Inspect background jobs
#[derive(Args, Debug)]
pub struct JobCommand {
    #[command(subcommand)]
    pub command: JobSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum JobSubcommand {
    /// Show the current status of a job
    Status(JobArgs),

    /// Wait until a job finishes or fails
    Wait(JobArgs),
}

#[derive(Args, Debug)]
pub struct JobArgs {
    /// Job guid
    pub id: String,
}

impl JobCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            JobSubcommand::Status(args) => self.status(args, global).await,
            JobSubcommand::Wait(args) => self.wait(args, global).await,
        }
    }

    async fn status(&self, args: &JobArgs, global: &GlobalOptions) -> Result<()> {
        let operations = global.operations()?;
        let job = operations
            .client()
            .get_job(&args.id)
            .await
            .with_context(|| format!("Failed to fetch job {}", args.id))?;

        if global.output().format() == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&job)?);
            return Ok(());
        }

        let status = match job.entity.status {
            JobStatus::Finished => style(job.entity.status.to_string()).green(),
            JobStatus::Failed => style(job.entity.status.to_string()).red(),
            _ => style(job.entity.status.to_string()).yellow(),
        };
        println!("{} {}", style(job.id()).bold(), status);

        if let Some(details) = &job.entity.error_details {
            println!(
                "{}: {} {}({})",
                style("error").dim(),
                details.description,
                details.error_code,
                details.code
            );
        }
        Ok(())
    }

    async fn wait(&self, args: &JobArgs, global: &GlobalOptions) -> Result<()> {
        let operations = global.operations()?;
        let output = global.output();

        let spinner = output.spinner(format!("Waiting for job {}", args.id));
        let result = async {
            let job = operations.client().get_job(&args.id).await?;
            operations.wait_for_job(&job).await
        }
        .await;
        spinner.finish_and_clear();

        if let Err(error) = &result {
            if error.is_timeout() {
                output.write_warning(&format!(
                    "Job {} may still be running; check it with 'cf job status {}'",
                    args.id, args.id
                ));
            }
        }
        result?;

        output.write_success(
            &format!("Job {} finished", args.id),
            serde_json::json!({ "job": args.id, "status": JobStatus::Finished }),
        )
    }
}
