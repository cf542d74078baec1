//
//  cloudfoundry-client
//  api/v2/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud Controller API v2 bindings.
//!
//! Each submodule holds the serde types of one resource and the typed
//! endpoint methods for it, implemented on
//! [`CloudFoundryClient`](crate::api::CloudFoundryClient).
//!
//! # Module Organization
//!
//! - [`jobs`] - Background jobs and their status endpoint
//! - [`organizations`] - Organization lookup and asynchronous deletion
//! - [`spaces`] - Space lookup and asynchronous deletion
//! - [`domains`] - Private and shared domain lookup
//! - [`service_instances`] - Managed and user-provided service instances
//! - [`service_bindings`] - Application/service instance bindings
//! - [`applications`] - Applications, staging state, copy bits
//! - [`routes`] - Route lookup and deletion
//!
//! # Notes
//!
//! - Every resource is wrapped in the `metadata`/`entity` envelope, see
//!   [`Resource`](crate::api::common::Resource)
//! - Timestamps are ISO 8601
//! - Mutations sent with `async=true` answer with a [`jobs::JobResource`]

pub mod applications;
pub mod domains;
pub mod jobs;
pub mod organizations;
pub mod routes;
pub mod service_bindings;
pub mod service_instances;
pub mod spaces;

pub use jobs::{ErrorDetails, JobEntity, JobResource, JobStatus};
