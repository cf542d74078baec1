//
//  cloudfoundry-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Cloud Foundry Cloud Controller
//! REST API and typed bindings for the v2 resources the operations layer needs.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication and request handling
//! - [`v2`]: Cloud Controller v2 resources (jobs, organizations, spaces, services,
//!   applications, domains, routes)
//! - [`common`]: Shared types (errors, resource envelope, pagination)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloudfoundry_client::api::CloudFoundryClient;
//! use cloudfoundry_client::auth::AuthCredential;
//!
//! # async fn example() -> Result<(), cloudfoundry_client::api::ApiError> {
//! let client = CloudFoundryClient::new("https://api.run.example.com")?
//!     .with_auth(AuthCredential::bearer("your-token"));
//!
//! let job = client.get_job("job-guid").await?;
//! println!("Job status: {}", job.entity.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! API errors are returned as [`ApiError`] variants. Cloud Controller error
//! bodies become [`ApiError::CloudFoundry`]; anything else maps by status:
//!
//! - `AuthRequired` / `AuthFailed`: 401 Unauthorized
//! - `Forbidden`: 403 Forbidden
//! - `NotFound`: 404 Not Found
//! - `RateLimited`: 429 Too Many Requests
//! - `ServerError`: 5xx Server Errors

/// Core HTTP client wrapper for the Cloud Controller.
pub mod client;

/// Cloud Controller API v2 bindings.
pub mod v2;

/// Common types shared by all bindings.
pub mod common;

pub use client::CloudFoundryClient;
pub use common::{ApiError, Resource};
