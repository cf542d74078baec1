//
//  cloudfoundry-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::config::{Config, KEYS};

use super::GlobalOptions;

/// Manage configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// One of: api, organization, space, poll_interval, job_timeout, staging_timeout, startup_timeout
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// One of: api, organization, space, poll_interval, job_timeout, staging_timeout, startup_timeout
    pub key: String,

    /// New value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Path => self.path(),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        if !KEYS.contains(&args.key.as_str()) {
            bail!("Unknown config key '{}'. Valid keys: {}", args.key, KEYS.join(", "));
        }

        let config = Config::load()?;
        global.output().write_value(&args.key, config.get(&args.key).as_deref())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        config.set(&args.key, &args.value)?;
        config.save()?;

        global.output().write_success(
            &format!("Set {} to {}", args.key, args.value),
            serde_json::json!({ "key": args.key, "value": config.get(&args.key) }),
        )
    }

    fn path(&self) -> Result<()> {
        println!("{}", Config::config_path()?.display());
        Ok(())
    }
}
