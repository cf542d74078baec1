//
//  cloudfoundry-client
//  operations/applications.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Application workflows.
//!
//! # Overview
//!
//! | Workflow | Background work | Polled through |
//! |----------|-----------------|----------------|
//! | [`Applications::delete`] | one job per route when `delete_routes` is set, one per service binding | `/v2/jobs/{id}` |
//! | [`Applications::copy_source`] | copy bits job | `/v2/jobs/{id}` |
//! | [`Applications::restage`] | staging, then startup | `/v2/apps/{id}` `package_state`, then `/v2/apps/{id}/instances` |
//!
//! Staging and startup are polled with the same poller as jobs, each with its
//! own deadline (15 and 5 minutes unless overridden).

use std::time::Duration;

use tracing::info;

use super::polling::{poll_until, PollStep};
use super::{require_name, single_id, CloudFoundryOperations, OperationError};
use crate::api::v2::applications::{
    ApplicationInstances, ApplicationResource, InstanceState, PackageState,
};

/// Parameters for deleting an application of the targeted space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteApplicationRequest {
    /// Application name.
    pub name: String,
    /// Also delete every route mapped to the application.
    pub delete_routes: bool,
}

impl DeleteApplicationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delete_routes: false,
        }
    }

    pub fn with_delete_routes(mut self, delete_routes: bool) -> Self {
        self.delete_routes = delete_routes;
        self
    }

    pub fn validate(&self) -> Result<(), OperationError> {
        require_name(&self.name, "application name")
    }
}

/// Parameters for copying the package of one application to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySourceApplicationRequest {
    /// Application whose package is copied.
    pub name: String,
    /// Application that receives the package.
    pub target_name: String,
}

impl CopySourceApplicationRequest {
    pub fn new(name: impl Into<String>, target_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_name: target_name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), OperationError> {
        require_name(&self.name, "application name")?;
        require_name(&self.target_name, "target application name")
    }
}

/// Parameters for restaging an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestageApplicationRequest {
    /// Application name.
    pub name: String,
    /// Overrides the default staging deadline.
    pub staging_timeout: Option<Duration>,
    /// Overrides the default deadline for instances to start.
    pub startup_timeout: Option<Duration>,
}

impl RestageApplicationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            staging_timeout: None,
            startup_timeout: None,
        }
    }

    pub fn with_staging_timeout(mut self, timeout: Duration) -> Self {
        self.staging_timeout = Some(timeout);
        self
    }

    pub fn with_startup_timeout(mut self, timeout: Duration) -> Self {
        self.startup_timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<(), OperationError> {
        require_name(&self.name, "application name")
    }
}

/// Application workflows, obtained from [`CloudFoundryOperations::applications`].
#[derive(Debug, Clone, Copy)]
pub struct Applications<'a> {
    ops: &'a CloudFoundryOperations,
}

impl<'a> Applications<'a> {
    pub(crate) fn new(ops: &'a CloudFoundryOperations) -> Self {
        Self { ops }
    }

    async fn application_id(&self, space_id: &str, name: &str) -> Result<String, OperationError> {
        let applications = self
            .ops
            .client()
            .list_space_applications_by_name(space_id, name)
            .await?;
        single_id(applications, "Application", name)
    }

    /// Deletes an application, optionally deleting its routes first.
    ///
    /// Service bindings are always removed before the application, since the
    /// controller refuses to delete a bound application. Routes and bindings
    /// are deleted one at a time, each waiting for its job; the first failure
    /// stops the workflow and the application is left in place.
    pub async fn delete(&self, request: &DeleteApplicationRequest) -> Result<(), OperationError> {
        request.validate()?;

        let space_id = self.ops.space_id().await?;
        let application_id = self.application_id(&space_id, &request.name).await?;
        let client = self.ops.client();

        if request.delete_routes {
            let routes = client.list_application_routes(&application_id).await?;
            for route in &routes {
                let job = client.delete_route(route.id()).await?;
                self.ops.wait_for_job(&job).await?;
            }
            info!(application = %request.name, count = routes.len(), "Routes deleted");
        }

        let bindings = client
            .list_application_service_bindings(&application_id, None)
            .await?;
        for binding in &bindings {
            let job = client.delete_service_binding(binding.id()).await?;
            self.ops.wait_for_job(&job).await?;
        }
        if !bindings.is_empty() {
            info!(application = %request.name, count = bindings.len(), "Service bindings removed");
        }

        client.delete_application(&application_id).await?;

        info!(application = %request.name, "Application deleted");
        Ok(())
    }

    /// Copies the package of `name` to `target_name`, waiting for the copy job.
    pub async fn copy_source(
        &self,
        request: &CopySourceApplicationRequest,
    ) -> Result<(), OperationError> {
        request.validate()?;

        let space_id = self.ops.space_id().await?;
        let source_id = self.application_id(&space_id, &request.name).await?;
        let target_id = self.application_id(&space_id, &request.target_name).await?;

        let job = self
            .ops
            .client()
            .copy_application_bits(&source_id, &target_id)
            .await?;
        self.ops.wait_for_job(&job).await?;

        info!(source = %request.name, target = %request.target_name, "Application source copied");
        Ok(())
    }

    /// Restages an application, waits for staging and then for an instance to
    /// be running.
    ///
    /// # Errors
    ///
    /// - [`OperationError::StagingFailed`] when the package state becomes `FAILED`
    /// - [`OperationError::StartupFailed`] when instances crash instead of running
    /// - [`OperationError::Timeout`] when staging or startup outlasts its deadline
    /// - [`OperationError::Request`] when the restage or a status request fails
    pub async fn restage(&self, request: &RestageApplicationRequest) -> Result<(), OperationError> {
        request.validate()?;

        let space_id = self.ops.space_id().await?;
        let application_id = self.application_id(&space_id, &request.name).await?;
        let client = self.ops.client();

        client.restage_application(&application_id).await?;

        let application_id = application_id.as_str();
        let staging = self
            .ops
            .poll_config()
            .with_timeout(request.staging_timeout.unwrap_or(self.ops.staging_timeout()));
        poll_until(
            staging,
            &format!("Staging of application {}", request.name),
            move || async move {
                client
                    .get_application(application_id)
                    .await
                    .map_err(OperationError::from)
            },
            |attempt| staging_outcome(&request.name, &attempt.snapshot),
        )
        .await?;
        info!(application = %request.name, "Application staged");

        let startup = self
            .ops
            .poll_config()
            .with_timeout(request.startup_timeout.unwrap_or(self.ops.startup_timeout()));
        poll_until(
            startup,
            &format!("Start of application {}", request.name),
            move || async move {
                client
                    .get_application_instances(application_id)
                    .await
                    .map_err(OperationError::from)
            },
            |attempt| startup_outcome(&request.name, &attempt.snapshot),
        )
        .await?;

        info!(application = %request.name, "Application running");
        Ok(())
    }
}

fn staging_outcome(
    name: &str,
    application: &ApplicationResource,
) -> Result<PollStep<()>, OperationError> {
    match application.entity.package_state {
        Some(PackageState::Staged) => Ok(PollStep::Done(())),
        Some(PackageState::Failed) => Err(OperationError::StagingFailed {
            application: name.to_string(),
            reason: application
                .entity
                .staging_failed_description
                .clone()
                .or_else(|| application.entity.staging_failed_reason.clone())
                .unwrap_or_else(|| "unknown reason".to_string()),
        }),
        _ => Ok(PollStep::Continue),
    }
}

/// One running instance is enough; otherwise any crashed instance fails the
/// start and anything else keeps waiting.
fn startup_outcome(
    name: &str,
    instances: &ApplicationInstances,
) -> Result<PollStep<()>, OperationError> {
    let mut states = instances.values().map(|instance| instance.state);

    if states.clone().any(|state| state == InstanceState::Running) {
        Ok(PollStep::Done(()))
    } else if states.any(|state| state.is_failed()) {
        Err(OperationError::StartupFailed {
            application: name.to_string(),
        })
    } else {
        Ok(PollStep::Continue)
    }
}
