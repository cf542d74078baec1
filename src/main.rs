//
//  cloudfoundry-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cloudfoundry_client::cli::{Cli, Commands};
use cloudfoundry_client::exit_codes;

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("CF_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Org(cmd) => cmd.run(&cli.global).await,
        Commands::Space(cmd) => cmd.run(&cli.global).await,
        Commands::Service(cmd) => cmd.run(&cli.global).await,
        Commands::App(cmd) => cmd.run(&cli.global).await,
        Commands::Route(cmd) => cmd.run(&cli.global).await,
        Commands::Job(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("cf version {}", cloudfoundry_client::VERSION);
            Ok(())
        }
    }
}
