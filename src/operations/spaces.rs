//
//  cloudfoundry-client
//  operations/spaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Space workflows.

use tracing::info;

use super::{require_name, single_id, CloudFoundryOperations, OperationError};

/// Parameters for deleting a space of the targeted organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSpaceRequest {
    /// Name of the space to delete.
    pub name: String,
    /// Also delete the applications, service instances and routes of the
    /// space. Without it the controller refuses to delete a non-empty space.
    pub recursive: bool,
}

impl DeleteSpaceRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            recursive: false,
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Checks that the request can be sent.
    pub fn validate(&self) -> Result<(), OperationError> {
        require_name(&self.name, "space name")
    }
}

/// Space workflows, obtained from [`CloudFoundryOperations::spaces`].
#[derive(Debug, Clone, Copy)]
pub struct Spaces<'a> {
    ops: &'a CloudFoundryOperations,
}

impl<'a> Spaces<'a> {
    pub(crate) fn new(ops: &'a CloudFoundryOperations) -> Self {
        Self { ops }
    }

    /// Deletes a space, waiting for the deletion job.
    ///
    /// # Errors
    ///
    /// - [`OperationError::InvalidRequest`] for an empty name, nothing sent
    /// - [`OperationError::NoTarget`] without a targeted organization
    /// - [`OperationError::NotFound`] if the organization or space is missing
    /// - [`OperationError::Request`] if the deletion is rejected, nothing polled
    /// - [`OperationError::JobFailed`], [`OperationError::StatusQuery`] or
    ///   [`OperationError::Timeout`] from waiting on the job
    pub async fn delete(&self, request: &DeleteSpaceRequest) -> Result<(), OperationError> {
        request.validate()?;

        let organization_id = self.ops.organization_id().await?;
        let spaces = self
            .ops
            .client()
            .list_organization_spaces_by_name(&organization_id, &request.name)
            .await?;
        let space_id = single_id(spaces, "Space", &request.name)?;

        let job = self.ops.client().delete_space(&space_id, request.recursive).await?;
        self.ops.wait_for_job(&job).await?;

        info!(space = %request.name, "Space deleted");
        Ok(())
    }
}
