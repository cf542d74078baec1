//
//  cloudfoundry-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Cloud Foundry Client Library
//!
//! A client for the Cloud Foundry Cloud Controller v2 API, plus an operations
//! layer that turns asynchronous server-side jobs into a single awaited outcome.
//!
//! ## Overview
//!
//! Many Cloud Controller mutations (space deletion, service instance deletion,
//! unbinding, copying bits) are accepted immediately and finish later as a
//! background job. The operations layer submits the request, polls the job at a
//! fixed interval until it is terminal or a deadline elapses, and reports:
//!
//! - success when the job finishes
//! - the server's error detail, verbatim, when the job fails
//! - a timeout, distinct from job failure, when the deadline elapses first
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client and typed v2 resources
//! - [`auth`]: Credentials applied to requests
//! - [`operations`]: Job poller, outcome resolver and workflows
//! - [`config`]: Configuration file management
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Terminal output for the CLI
//! - [`util`]: Utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cloudfoundry_client::api::CloudFoundryClient;
//! use cloudfoundry_client::auth::AuthCredential;
//! use cloudfoundry_client::operations::{CloudFoundryOperations, DeleteSpaceRequest};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = CloudFoundryClient::new("https://api.run.example.com")?
//!     .with_auth(AuthCredential::bearer("your-token"));
//! let operations = CloudFoundryOperations::builder(client)
//!     .organization("my-org")
//!     .build();
//!
//! match operations.spaces().delete(&DeleteSpaceRequest::new("test-space")).await {
//!     Ok(()) => println!("deleted"),
//!     Err(e) if e.is_timeout() => println!("still deleting in the background"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// Cloud Controller API client.
///
/// The client handles authentication, request building, pagination, and error
/// mapping. Typed endpoints live under [`api::v2`].
pub mod api;

/// Authentication credentials.
pub mod auth;

/// Configuration file management.
///
/// - Linux: `~/.config/cf/config.toml`
/// - macOS: `~/Library/Application Support/cf/config.toml`
/// - Windows: `%APPDATA%\cf\config\config.toml`
pub mod config;

/// Job polling and high-level workflows.
pub mod operations;

/// Output formatting for the CLI.
pub mod output;

/// Utility functions and helpers.
pub mod util;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use cloudfoundry_client::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Application name constant.
///
/// # Value
///
/// `"cf"`
pub const APP_NAME: &str = "cf";

/// Application version constant, derived from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use cloudfoundry_client::VERSION;
///
/// println!("cf version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Background work issues
/// - `32+`: External service issues
///
/// # Example
///
/// ```rust
/// use cloudfoundry_client::exit_codes;
/// use cloudfoundry_client::operations::OperationError;
///
/// let error = anyhow::Error::from(OperationError::NoTarget("space"));
/// assert_eq!(exit_codes::for_error(&error), exit_codes::USAGE);
/// ```
pub mod exit_codes {
    use crate::api::common::ApiError;
    use crate::operations::OperationError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage, arguments or missing target.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// Pass a token with `--token` or `CF_TOKEN`.
    pub const AUTH_ERROR: i32 = 4;

    /// A named organization, space, application, service instance or
    /// binding does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// The background job, staging or startup reported failure.
    pub const JOB_FAILED: i32 = 17;

    /// The deadline elapsed before the background work finished.
    ///
    /// The work may still complete on the server.
    pub const TIMEOUT: i32 = 18;

    /// API rate limit exceeded.
    pub const RATE_LIMIT: i32 = 32;

    /// Picks the exit code for an error returned by a command.
    pub fn for_error(error: &anyhow::Error) -> i32 {
        for cause in error.chain() {
            if let Some(operation) = cause.downcast_ref::<OperationError>() {
                return for_operation_error(operation);
            }
            if let Some(api) = cause.downcast_ref::<ApiError>() {
                return for_api_error(api);
            }
        }
        ERROR
    }

    fn for_operation_error(error: &OperationError) -> i32 {
        match error {
            OperationError::Request(api) => for_api_error(api),
            OperationError::StatusQuery { source, .. } => for_api_error(source),
            OperationError::JobFailed(_)
            | OperationError::JobFailedWithMessage { .. }
            | OperationError::JobFailedWithoutDetails { .. }
            | OperationError::StagingFailed { .. }
            | OperationError::StartupFailed { .. } => JOB_FAILED,
            OperationError::Timeout { .. } => TIMEOUT,
            OperationError::NotFound { .. } | OperationError::NotBound { .. } => NOT_FOUND,
            OperationError::InvalidRequest(_) | OperationError::NoTarget(_) => USAGE,
        }
    }

    fn for_api_error(error: &ApiError) -> i32 {
        match error {
            ApiError::AuthRequired | ApiError::AuthFailed(_) | ApiError::Forbidden(_) => AUTH_ERROR,
            ApiError::NotFound(_) => NOT_FOUND,
            ApiError::RateLimited => RATE_LIMIT,
            ApiError::CloudFoundry { status: 401 | 403, .. } => AUTH_ERROR,
            ApiError::CloudFoundry { status: 404, .. } => NOT_FOUND,
            ApiError::CloudFoundry { status: 429, .. } => RATE_LIMIT,
            _ => ERROR,
        }
    }

}
