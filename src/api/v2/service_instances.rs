//
//  cloudfoundry-client
//  api/v2/service_instances.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud Controller v2 service instances.
//!
//! A space holds two kinds of service instance:
//!
//! | Kind | `type` value | Deletion |
//! |------|--------------|----------|
//! | Managed | `managed_service_instance` | `DELETE /v2/service_instances/{id}?async=true` (job) |
//! | User-provided | `user_provided_service_instance` | `DELETE /v2/user_provided_service_instances/{id}` (synchronous) |

use serde::{Deserialize, Serialize};
use tracing::info;

use super::jobs::JobResource;
use crate::api::client::CloudFoundryClient;
use crate::api::common::{ApiError, Resource};

/// A service instance resource (either kind).
pub type ServiceInstanceResource = Resource<ServiceInstanceEntity>;

/// The entity of a service instance resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInstanceEntity {
    /// Instance name, unique within its space.
    pub name: String,

    /// `managed_service_instance` or `user_provided_service_instance`.
    #[serde(rename = "type", default)]
    pub instance_type: Option<String>,

    /// Owning space.
    #[serde(default)]
    pub space_guid: Option<String>,
}

impl ServiceInstanceEntity {
    /// Returns `true` for user-provided service instances.
    pub fn is_user_provided(&self) -> bool {
        self.instance_type.as_deref() == Some("user_provided_service_instance")
    }
}

impl CloudFoundryClient {
    /// Lists the service instances of a space (both kinds) whose name matches exactly.
    ///
    /// `GET /v2/spaces/{space_id}/service_instances?q=name:{name}&return_user_provided_service_instances=true`
    pub async fn list_space_service_instances_by_name(
        &self,
        space_id: &str,
        name: &str,
    ) -> Result<Vec<ServiceInstanceResource>, ApiError> {
        let filter = format!("name:{}", name);
        self.get_all_resources(
            &format!("/v2/spaces/{}/service_instances", space_id),
            &[
                ("q", filter.as_str()),
                ("return_user_provided_service_instances", "true"),
            ],
        )
        .await
    }

    /// Submits an asynchronous deletion of a managed service instance.
    ///
    /// `DELETE /v2/service_instances/{id}?async=true`
    pub async fn delete_service_instance(
        &self,
        service_instance_id: &str,
    ) -> Result<JobResource, ApiError> {
        let job: JobResource = self
            .delete_async(
                &format!("/v2/service_instances/{}", service_instance_id),
                &[],
            )
            .await?;
        info!(service_instance_id, job_id = job.id(), "Service instance deletion accepted");
        Ok(job)
    }

    /// Deletes a user-provided service instance. Completes synchronously.
    ///
    /// `DELETE /v2/user_provided_service_instances/{id}`
    pub async fn delete_user_provided_service_instance(
        &self,
        service_instance_id: &str,
    ) -> Result<(), ApiError> {
        self.delete(&format!(
            "/v2/user_provided_service_instances/{}",
            service_instance_id
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_kind() {
        let managed: ServiceInstanceEntity =
            serde_json::from_str(r#"{"name": "db", "type": "managed_service_instance"}"#).unwrap();
        let provided: ServiceInstanceEntity =
            serde_json::from_str(r#"{"name": "ups", "type": "user_provided_service_instance"}"#)
                .unwrap();

        assert!(!managed.is_user_provided());
        assert!(provided.is_user_provided());
    }
}
