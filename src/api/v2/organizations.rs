//
//  cloudfoundry-client
//  api/v2/organizations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud Controller v2 organizations.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::jobs::JobResource;
use crate::api::client::CloudFoundryClient;
use crate::api::common::{ApiError, Resource};

/// An organization resource.
pub type OrganizationResource = Resource<OrganizationEntity>;

/// The entity of an organization resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationEntity {
    /// Organization name, unique per installation.
    pub name: String,

    /// `active` or `suspended`.
    #[serde(default)]
    pub status: Option<String>,
}

impl CloudFoundryClient {
    /// Lists organizations whose name matches exactly.
    ///
    /// `GET /v2/organizations?q=name:{name}`
    pub async fn list_organizations_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<OrganizationResource>, ApiError> {
        let filter = format!("name:{}", name);
        self.get_all_resources("/v2/organizations", &[("q", filter.as_str())])
            .await
    }

    /// Submits an asynchronous organization deletion and returns the job.
    ///
    /// `DELETE /v2/organizations/{organization_id}?async=true`
    pub async fn delete_organization(&self, organization_id: &str) -> Result<JobResource, ApiError> {
        let job: JobResource = self
            .delete_async(&format!("/v2/organizations/{}", organization_id), &[])
            .await?;
        info!(organization_id, job_id = job.id(), "Organization deletion accepted");
        Ok(job)
    }
}
