//
//  cloudfoundry-client
//  api/v2/routes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud Controller v2 routes.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::jobs::JobResource;
use crate::api::client::CloudFoundryClient;
use crate::api::common::{ApiError, Resource};

/// A route resource.
pub type RouteResource = Resource<RouteEntity>;

/// The entity of a route resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntity {
    /// Hostname part of the route; empty for domain-only routes.
    #[serde(default)]
    pub host: String,

    /// Optional path suffix, e.g. `/api`.
    #[serde(default)]
    pub path: Option<String>,

    /// Domain the route belongs to.
    #[serde(default)]
    pub domain_guid: Option<String>,
}

impl CloudFoundryClient {
    /// Lists the routes of a domain with the given host and, optionally, path.
    ///
    /// `GET /v2/routes?q=domain_guid:{id}&q=host:{host}[&q=path:{path}]`
    pub async fn list_routes(
        &self,
        domain_id: &str,
        host: &str,
        path: Option<&str>,
    ) -> Result<Vec<RouteResource>, ApiError> {
        let mut filters = vec![format!("domain_guid:{}", domain_id), format!("host:{}", host)];
        if let Some(path) = path {
            filters.push(format!("path:{}", path));
        }
        let query: Vec<(&str, &str)> = filters.iter().map(|q| ("q", q.as_str())).collect();
        self.get_all_resources("/v2/routes", &query).await
    }

    /// Submits an asynchronous route deletion.
    ///
    /// `DELETE /v2/routes/{route_id}?async=true`
    pub async fn delete_route(&self, route_id: &str) -> Result<JobResource, ApiError> {
        let job: JobResource = self
            .delete_async(&format!("/v2/routes/{}", route_id), &[])
            .await?;
        info!(route_id, job_id = job.id(), "Route deletion accepted");
        Ok(job)
    }
}
