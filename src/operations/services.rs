//
//  cloudfoundry-client
//  operations/services.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Service instance workflows.
//!
//! | Workflow | Requests | Waits on |
//! |----------|----------|----------|
//! | delete (managed) | `DELETE /v2/service_instances/{id}?async=true` | job |
//! | delete (user-provided) | `DELETE /v2/user_provided_service_instances/{id}` | nothing |
//! | unbind | `DELETE /v2/service_bindings/{id}?async=true` | job |

use tracing::info;

use super::{require_name, single_id, CloudFoundryOperations, OperationError};

/// Parameters for deleting a service instance of the targeted space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteServiceInstanceRequest {
    /// Name of the service instance.
    pub name: String,
}

impl DeleteServiceInstanceRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), OperationError> {
        require_name(&self.name, "service instance name")
    }
}

/// Parameters for removing the binding between an application and a
/// service instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbindServiceInstanceRequest {
    /// Name of the bound application.
    pub application_name: String,
    /// Name of the service instance.
    pub service_instance_name: String,
}

impl UnbindServiceInstanceRequest {
    pub fn new(application_name: impl Into<String>, service_instance_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            service_instance_name: service_instance_name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), OperationError> {
        require_name(&self.application_name, "application name")?;
        require_name(&self.service_instance_name, "service instance name")
    }
}

/// Service workflows, obtained from [`CloudFoundryOperations::services`].
#[derive(Debug, Clone, Copy)]
pub struct Services<'a> {
    ops: &'a CloudFoundryOperations,
}

impl<'a> Services<'a> {
    pub(crate) fn new(ops: &'a CloudFoundryOperations) -> Self {
        Self { ops }
    }

    /// Deletes a service instance of the targeted space.
    ///
    /// Managed instances are deleted as a background job which is waited on;
    /// user-provided instances are deleted synchronously.
    pub async fn delete_instance(
        &self,
        request: &DeleteServiceInstanceRequest,
    ) -> Result<(), OperationError> {
        request.validate()?;

        let space_id = self.ops.space_id().await?;
        let instance = self
            .ops
            .client()
            .list_space_service_instances_by_name(&space_id, &request.name)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| OperationError::NotFound {
                kind: "Service instance",
                name: request.name.clone(),
            })?;

        if instance.entity.is_user_provided() {
            self.ops
                .client()
                .delete_user_provided_service_instance(instance.id())
                .await?;
        } else {
            let job = self.ops.client().delete_service_instance(instance.id()).await?;
            self.ops.wait_for_job(&job).await?;
        }

        info!(service_instance = %request.name, "Service instance deleted");
        Ok(())
    }

    /// Removes the binding between an application and a service instance,
    /// waiting for the deletion job.
    ///
    /// # Errors
    ///
    /// [`OperationError::NotBound`] if the two exist but are not bound, plus
    /// everything [`Spaces::delete`](super::Spaces::delete) can return.
    pub async fn unbind(&self, request: &UnbindServiceInstanceRequest) -> Result<(), OperationError> {
        request.validate()?;

        let space_id = self.ops.space_id().await?;
        let client = self.ops.client();

        let applications = client
            .list_space_applications_by_name(&space_id, &request.application_name)
            .await?;
        let application_id = single_id(applications, "Application", &request.application_name)?;

        let instances = client
            .list_space_service_instances_by_name(&space_id, &request.service_instance_name)
            .await?;
        let instance_id = single_id(instances, "Service instance", &request.service_instance_name)?;

        let bindings = client
            .list_application_service_bindings(&application_id, Some(instance_id.as_str()))
            .await?;
        let binding_id = bindings
            .into_iter()
            .next()
            .map(|binding| binding.metadata.guid)
            .ok_or_else(|| OperationError::NotBound {
                service_instance: request.service_instance_name.clone(),
                application: request.application_name.clone(),
            })?;

        let job = client.delete_service_binding(&binding_id).await?;
        self.ops.wait_for_job(&job).await?;

        info!(
            application = %request.application_name,
            service_instance = %request.service_instance_name,
            "Service instance unbound"
        );
        Ok(())
    }
}
