//
//  cloudfoundry-client
//  api/v2/service_bindings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud Controller v2 service bindings.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::jobs::JobResource;
use crate::api::client::CloudFoundryClient;
use crate::api::common::{ApiError, Resource};

/// A service binding resource.
pub type ServiceBindingResource = Resource<ServiceBindingEntity>;

/// The entity of a service binding resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceBindingEntity {
    /// Bound application.
    pub app_guid: String,

    /// Bound service instance.
    pub service_instance_guid: String,
}

impl CloudFoundryClient {
    /// Lists the service bindings of an application, optionally only those
    /// to one service instance.
    ///
    /// `GET /v2/apps/{application_id}/service_bindings[?q=service_instance_guid:{id}]`
    pub async fn list_application_service_bindings(
        &self,
        application_id: &str,
        service_instance_id: Option<&str>,
    ) -> Result<Vec<ServiceBindingResource>, ApiError> {
        let filter = service_instance_id.map(|id| format!("service_instance_guid:{}", id));
        let query: Vec<(&str, &str)> = filter.iter().map(|q| ("q", q.as_str())).collect();
        self.get_all_resources(
            &format!("/v2/apps/{}/service_bindings", application_id),
            &query,
        )
        .await
    }

    /// Submits an asynchronous deletion of a service binding.
    ///
    /// `DELETE /v2/service_bindings/{id}?async=true`
    pub async fn delete_service_binding(
        &self,
        service_binding_id: &str,
    ) -> Result<JobResource, ApiError> {
        let job: JobResource = self
            .delete_async(
                &format!("/v2/service_bindings/{}", service_binding_id),
                &[],
            )
            .await?;
        info!(service_binding_id, job_id = job.id(), "Service binding deletion accepted");
        Ok(job)
    }
}
