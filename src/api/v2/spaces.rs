//
//  cloudfoundry-client
//  api/v2/spaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud Controller v2 spaces.
//!
//! Space deletion runs as a background job when `async=true` is passed. With
//! `recursive=true` the job also removes every application, service instance
//! and route the space contains.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::jobs::JobResource;
use crate::api::client::CloudFoundryClient;
use crate::api::common::{ApiError, Resource};

/// A space resource.
pub type SpaceResource = Resource<SpaceEntity>;

/// The entity of a space resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceEntity {
    /// Space name, unique within its organization.
    pub name: String,

    /// Owning organization.
    #[serde(default)]
    pub organization_guid: Option<String>,

    /// Whether `cf ssh` is allowed for applications in the space.
    #[serde(default)]
    pub allow_ssh: Option<bool>,
}

impl CloudFoundryClient {
    /// Lists the spaces of an organization whose name matches exactly.
    ///
    /// `GET /v2/organizations/{organization_id}/spaces?q=name:{name}`
    pub async fn list_organization_spaces_by_name(
        &self,
        organization_id: &str,
        name: &str,
    ) -> Result<Vec<SpaceResource>, ApiError> {
        let filter = format!("name:{}", name);
        self.get_all_resources(
            &format!("/v2/organizations/{}/spaces", organization_id),
            &[("q", filter.as_str())],
        )
        .await
    }

    /// Submits an asynchronous space deletion and returns the job.
    ///
    /// `DELETE /v2/spaces/{space_id}?async=true&recursive={recursive}`
    pub async fn delete_space(
        &self,
        space_id: &str,
        recursive: bool,
    ) -> Result<JobResource, ApiError> {
        let recursive = if recursive { "true" } else { "false" };
        let job: JobResource = self
            .delete_async(
                &format!("/v2/spaces/{}", space_id),
                &[("recursive", recursive)],
            )
            .await?;
        info!(space_id, job_id = job.id(), "Space deletion accepted");
        Ok(job)
    }
}
