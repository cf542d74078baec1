//
//  cloudfoundry-client
//  operations/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Operations Layer
//!
//! High-level workflows that sequence raw Cloud Controller calls: resolve
//! names to ids, submit the mutating request, wait for the background job and
//! report one outcome.
//!
//! ## Architecture
//!
//! - [`polling`]: generic fixed-interval poller with a deadline
//! - [`job`]: job polling and the outcome resolver
//! - [`error`]: [`OperationError`] taxonomy
//! - [`organizations`], [`spaces`], [`services`], [`applications`], [`routes`]:
//!   the workflows
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloudfoundry_client::api::CloudFoundryClient;
//! use cloudfoundry_client::auth::AuthCredential;
//! use cloudfoundry_client::operations::{CloudFoundryOperations, DeleteSpaceRequest};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = CloudFoundryClient::new("https://api.run.example.com")?
//!     .with_auth(AuthCredential::bearer("your-token"));
//!
//! let operations = CloudFoundryOperations::builder(client)
//!     .organization("my-org")
//!     .build();
//!
//! operations
//!     .spaces()
//!     .delete(&DeleteSpaceRequest::new("test-space"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod applications;
pub mod error;
pub mod job;
pub mod organizations;
pub mod polling;
pub mod routes;
pub mod services;
pub mod spaces;

use std::time::Duration;

use tracing::debug;

use crate::api::client::CloudFoundryClient;
use crate::api::common::Resource;

pub use applications::{
    Applications, CopySourceApplicationRequest, DeleteApplicationRequest,
    RestageApplicationRequest,
};
pub use error::{JobFailure, OperationError};
pub use job::{resolve_job, wait_for_completion, JobStatusSource};
pub use organizations::{DeleteOrganizationRequest, Organizations};
pub use polling::{
    poll_until, PollAttempt, PollConfig, PollStep, DEFAULT_JOB_TIMEOUT, DEFAULT_POLL_INTERVAL,
    DEFAULT_STAGING_TIMEOUT, DEFAULT_STARTUP_TIMEOUT,
};
pub use routes::{DeleteRouteRequest, Routes};
pub use services::{DeleteServiceInstanceRequest, Services, UnbindServiceInstanceRequest};
pub use spaces::{DeleteSpaceRequest, Spaces};

/// Entry point to the workflows, bound to a client and an optional target.
///
/// Organization and space are names; they are resolved to ids on each call.
#[derive(Debug, Clone)]
pub struct CloudFoundryOperations {
    client: CloudFoundryClient,
    organization: Option<String>,
    space: Option<String>,
    poll: PollConfig,
    staging_timeout: Duration,
    startup_timeout: Duration,
}

impl CloudFoundryOperations {
    /// Starts building operations around `client`.
    pub fn builder(client: CloudFoundryClient) -> CloudFoundryOperationsBuilder {
        CloudFoundryOperationsBuilder {
            client,
            organization: None,
            space: None,
            poll: PollConfig::default(),
            staging_timeout: DEFAULT_STAGING_TIMEOUT,
            startup_timeout: DEFAULT_STARTUP_TIMEOUT,
        }
    }

    /// The underlying API client.
    pub fn client(&self) -> &CloudFoundryClient {
        &self.client
    }

    /// Interval and deadline used for background jobs.
    pub fn poll_config(&self) -> PollConfig {
        self.poll
    }

    /// Deadline used when no per-request staging timeout is given.
    pub fn staging_timeout(&self) -> Duration {
        self.staging_timeout
    }

    /// Deadline used when no per-request startup timeout is given.
    pub fn startup_timeout(&self) -> Duration {
        self.startup_timeout
    }

    /// Organization workflows.
    pub fn organizations(&self) -> Organizations<'_> {
        Organizations::new(self)
    }

    /// Space workflows.
    pub fn spaces(&self) -> Spaces<'_> {
        Spaces::new(self)
    }

    /// Service instance workflows.
    pub fn services(&self) -> Services<'_> {
        Services::new(self)
    }

    /// Application workflows.
    pub fn applications(&self) -> Applications<'_> {
        Applications::new(self)
    }

    /// Route workflows, scoped to the targeted organization.
    pub fn routes(&self) -> Routes<'_> {
        Routes::new(self)
    }

    /// Waits for a job with this instance's poll configuration.
    pub async fn wait_for_job(&self, job: &crate::api::v2::JobResource) -> Result<(), OperationError> {
        wait_for_completion(&self.client, job, self.poll).await
    }

    /// Resolves the targeted organization to its id.
    pub(crate) async fn organization_id(&self) -> Result<String, OperationError> {
        let name = self
            .organization
            .as_deref()
            .ok_or(OperationError::NoTarget("organization"))?;

        let organizations = self.client.list_organizations_by_name(name).await?;
        let id = single_id(organizations, "Organization", name)?;
        debug!(organization = name, id = %id, "Resolved organization");
        Ok(id)
    }

    /// Resolves the targeted space to its id.
    pub(crate) async fn space_id(&self) -> Result<String, OperationError> {
        let name = self
            .space
            .as_deref()
            .ok_or(OperationError::NoTarget("space"))?;
        let organization_id = self.organization_id().await?;

        let spaces = self
            .client
            .list_organization_spaces_by_name(&organization_id, name)
            .await?;
        let id = single_id(spaces, "Space", name)?;
        debug!(space = name, id = %id, "Resolved space");
        Ok(id)
    }
}

/// Builder for [`CloudFoundryOperations`].
#[derive(Debug)]
pub struct CloudFoundryOperationsBuilder {
    client: CloudFoundryClient,
    organization: Option<String>,
    space: Option<String>,
    poll: PollConfig,
    staging_timeout: Duration,
    startup_timeout: Duration,
}

impl CloudFoundryOperationsBuilder {
    /// Targets an organization by name.
    pub fn organization(mut self, name: impl Into<String>) -> Self {
        self.organization = Some(name.into());
        self
    }

    /// Targets a space by name, within the targeted organization.
    pub fn space(mut self, name: impl Into<String>) -> Self {
        self.space = Some(name.into());
        self
    }

    /// Sets the interval and deadline used for background jobs.
    pub fn poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Sets the default staging deadline.
    pub fn staging_timeout(mut self, timeout: Duration) -> Self {
        self.staging_timeout = timeout;
        self
    }

    /// Sets the default deadline for instances to start.
    pub fn startup_timeout(mut self, timeout: Duration) -> Self {
        self.startup_timeout = timeout;
        self
    }

    pub fn build(self) -> CloudFoundryOperations {
        CloudFoundryOperations {
            client: self.client,
            organization: self.organization,
            space: self.space,
            poll: self.poll,
            staging_timeout: self.staging_timeout,
            startup_timeout: self.startup_timeout,
        }
    }
}

/// Returns the id of the first resource, or `NotFound` if there is none.
///
/// Name filters are exact, so the Cloud Controller returns at most one match
/// per scope.
pub(crate) fn single_id<T>(
    resources: Vec<Resource<T>>,
    kind: &'static str,
    name: &str,
) -> Result<String, OperationError> {
    resources
        .into_iter()
        .next()
        .map(|resource| resource.metadata.guid)
        .ok_or_else(|| OperationError::NotFound {
            kind,
            name: name.to_string(),
        })
}

/// Rejects empty or whitespace-only names before anything is sent.
pub(crate) fn require_name(value: &str, what: &str) -> Result<(), OperationError> {
    if value.trim().is_empty() {
        return Err(OperationError::InvalidRequest(format!(
            "{} must be specified",
            what
        )));
    }
    Ok(())
}
