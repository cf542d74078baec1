//
//  cloudfoundry-client
//  operations/organizations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization workflows.

use tracing::info;

use super::{require_name, single_id, CloudFoundryOperations, OperationError};

/// Parameters for deleting an organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOrganizationRequest {
    /// Name of the organization to delete.
    pub name: String,
}

impl DeleteOrganizationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), OperationError> {
        require_name(&self.name, "organization name")
    }
}

/// Organization workflows, obtained from
/// [`CloudFoundryOperations::organizations`].
#[derive(Debug, Clone, Copy)]
pub struct Organizations<'a> {
    ops: &'a CloudFoundryOperations,
}

impl<'a> Organizations<'a> {
    pub(crate) fn new(ops: &'a CloudFoundryOperations) -> Self {
        Self { ops }
    }

    /// Deletes an organization by name, waiting for the deletion job.
    ///
    /// Does not need a targeted organization.
    pub async fn delete(&self, request: &DeleteOrganizationRequest) -> Result<(), OperationError> {
        request.validate()?;

        let client = self.ops.client();
        let organizations = client.list_organizations_by_name(&request.name).await?;
        let organization_id = single_id(organizations, "Organization", &request.name)?;

        let job = client.delete_organization(&organization_id).await?;
        self.ops.wait_for_job(&job).await?;

        info!(organization = %request.name, "Organization deleted");
        Ok(())
    }
}
