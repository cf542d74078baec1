//
//  cloudfoundry-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CLI Module
//!
//! The clap command tree of the `cf` binary.
//!
//! ## Command Structure
//!
//! ```text
//! cf
//! ├── org delete <NAME>
//! ├── space delete <NAME> [--recursive]
//! ├── service delete <NAME>
//! ├── service unbind <NAME> --app <APP>
//! ├── app delete <NAME> [--delete-routes]
//! ├── app restage <NAME> [--staging-timeout SECS] [--startup-timeout SECS]
//! ├── app copy-source <NAME> <TARGET>
//! ├── route delete <DOMAIN> --hostname <HOST> [--path PATH]
//! ├── job status|wait <ID>
//! ├── config get|set|path
//! └── version
//! ```
//!
//! ## Global Options
//!
//! | Flag | Environment | Config key |
//! |------|-------------|------------|
//! | `--api` | `CF_API` | `api` |
//! | `--token` | `CF_TOKEN` | |
//! | `-o, --org` | `CF_ORG` | `organization` |
//! | `-s, --space` | `CF_SPACE` | `space` |
//! | `--poll-interval` | `CF_POLL_INTERVAL` | `poll_interval` |
//! | `--timeout` | `CF_TIMEOUT` | `job_timeout` |
//! | `--json` | | |
//!
//! Flags and environment variables win over the configuration file.

mod app;
mod config;
mod job;
mod org;
mod route;
mod service;
mod space;

pub use app::AppCommand;
pub use config::ConfigCommand;
pub use job::JobCommand;
pub use org::OrgCommand;
pub use route::RouteCommand;
pub use service::ServiceCommand;
pub use space::SpaceCommand;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::CloudFoundryClient;
use crate::auth::AuthCredential;
use crate::config::Config;
use crate::operations::CloudFoundryOperations;
use crate::output::{OutputFormat, OutputWriter};
use crate::util::parse_seconds;

/// Command-line interface for Cloud Foundry.
#[derive(Parser, Debug)]
#[command(
    name = "cf",
    version,
    about = "Drive Cloud Foundry from the command line",
    long_about = "cf runs Cloud Foundry operations that finish in the background \
                  and waits for them to complete.\n\n\
                  Deletions, bit copies and restages are submitted, then polled \
                  until they succeed, fail or time out.",
    propagate_version = true,
    after_help = "Use 'cf <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options shared by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Cloud Controller endpoint, e.g. https://api.run.example.com
    #[arg(long, global = true, env = "CF_API")]
    pub api: Option<String>,

    /// OAuth bearer token
    #[arg(long, global = true, env = "CF_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Target organization
    #[arg(long, short = 'o', global = true, env = "CF_ORG")]
    pub org: Option<String>,

    /// Target space
    #[arg(long, short = 's', global = true, env = "CF_SPACE")]
    pub space: Option<String>,

    /// Seconds between job status queries
    #[arg(long, global = true, env = "CF_POLL_INTERVAL", value_parser = parse_seconds)]
    pub poll_interval: Option<Duration>,

    /// Seconds to wait for a background job before giving up
    #[arg(long, global = true, env = "CF_TIMEOUT", value_parser = parse_seconds)]
    pub timeout: Option<Duration>,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage organizations
    Org(OrgCommand),

    /// Manage spaces
    Space(SpaceCommand),

    /// Manage service instances
    #[command(visible_alias = "svc")]
    Service(ServiceCommand),

    /// Manage applications
    App(AppCommand),

    /// Manage routes
    Route(RouteCommand),

    /// Inspect background jobs
    Job(JobCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Show version information
    Version,
}

impl GlobalOptions {
    pub fn output(&self) -> OutputWriter {
        if self.json {
            OutputWriter::new(OutputFormat::Json)
        } else {
            OutputWriter::new(OutputFormat::Text)
        }
    }

    /// Builds an API client from flags, environment and configuration.
    pub fn client(&self, config: &Config) -> Result<CloudFoundryClient> {
        let api = self
            .api
            .as_deref()
            .or(config.target.api.as_deref())
            .context("No API endpoint set. Use --api, CF_API or 'cf config set api <URL>'")?;

        let client = CloudFoundryClient::new(api)
            .with_context(|| format!("Could not create a client for {}", api))?;

        Ok(match &self.token {
            Some(token) => client.with_auth(AuthCredential::bearer(token.as_str())),
            None => client,
        })
    }

    /// Builds the operations entry point for the current target.
    pub fn operations(&self) -> Result<CloudFoundryOperations> {
        let config = Config::load()?;
        let client = self.client(&config)?;

        let mut poll = config.polling.poll_config();
        if let Some(interval) = self.poll_interval {
            poll = poll.with_interval(interval);
        }
        if let Some(timeout) = self.timeout {
            poll = poll.with_timeout(timeout);
        }

        let mut builder = CloudFoundryOperations::builder(client)
            .poll_config(poll)
            .staging_timeout(config.polling.staging_timeout())
            .startup_timeout(config.polling.startup_timeout());

        if let Some(org) = self.org.as_ref().or(config.target.organization.as_ref()) {
            builder = builder.organization(org.as_str());
        }
        if let Some(space) = self.space.as_ref().or(config.target.space.as_ref()) {
            builder = builder.space(space.as_str());
        }

        Ok(builder.build())
    }
}
