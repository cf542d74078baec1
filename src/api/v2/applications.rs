//
//  cloudfoundry-client
//  api/v2/applications.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud Controller v2 applications.
//!
//! # Package States
//!
//! Staging is tracked through the application's `package_state`:
//!
//! ```text
//! PENDING -> STAGED
//!        \-> FAILED (staging_failed_reason, staging_failed_description)
//! ```
//!
//! Restaging resets the state to `PENDING`; the application is polled until it
//! leaves that state.
//!
//! # Instance States
//!
//! Once staged, instances report their own state through
//! `GET /v2/apps/{id}/instances`, keyed by instance index:
//!
//! ```json
//! { "0": { "state": "RUNNING", "since": 1403140717.984577 } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::jobs::JobResource;
use super::routes::RouteResource;
use crate::api::client::CloudFoundryClient;
use crate::api::common::{ApiError, Resource};

/// An application resource.
pub type ApplicationResource = Resource<ApplicationEntity>;

/// Staging state of an application's package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PackageState {
    /// Staging has not finished.
    Pending,
    /// A droplet is ready.
    Staged,
    /// Staging failed.
    Failed,
    /// A state this client does not know about.
    #[serde(other)]
    Unknown,
}

impl PackageState {
    /// `true` once staging has either succeeded or failed.
    pub fn is_staging_complete(&self) -> bool {
        matches!(self, PackageState::Staged | PackageState::Failed)
    }
}

/// State of one running instance of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstanceState {
    Starting,
    Running,
    Crashed,
    /// Crashing repeatedly.
    Flapping,
    Down,
    /// A state this client does not know about.
    #[serde(other)]
    Unknown,
}

impl InstanceState {
    /// `true` for states an instance does not recover from by itself.
    pub fn is_failed(&self) -> bool {
        matches!(self, InstanceState::Crashed | InstanceState::Flapping)
    }
}

/// One entry of `GET /v2/apps/{id}/instances`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceInfo {
    pub state: InstanceState,

    /// Unix time of the last state change.
    #[serde(default)]
    pub since: Option<f64>,
}

/// Instances of an application keyed by index.
pub type ApplicationInstances = BTreeMap<String, InstanceInfo>;

/// The entity of an application resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationEntity {
    /// Application name, unique within its space.
    pub name: String,

    /// Desired state: `STARTED` or `STOPPED`.
    #[serde(default)]
    pub state: Option<String>,

    /// Staging state of the current package.
    #[serde(default)]
    pub package_state: Option<PackageState>,

    /// Symbolic reason for a staging failure, e.g. `BuildpackCompileFailed`.
    #[serde(default)]
    pub staging_failed_reason: Option<String>,

    /// Human readable description of a staging failure.
    #[serde(default)]
    pub staging_failed_description: Option<String>,

    /// Owning space.
    #[serde(default)]
    pub space_guid: Option<String>,
}

/// Body of `POST /v2/apps/{id}/copy_bits`.
#[derive(Debug, Clone, Serialize)]
pub struct CopyBitsRequest<'a> {
    /// Application whose package is copied.
    pub source_app_guid: &'a str,
}

impl CloudFoundryClient {
    /// Lists the applications of a space whose name matches exactly.
    ///
    /// `GET /v2/spaces/{space_id}/apps?q=name:{name}`
    pub async fn list_space_applications_by_name(
        &self,
        space_id: &str,
        name: &str,
    ) -> Result<Vec<ApplicationResource>, ApiError> {
        let filter = format!("name:{}", name);
        self.get_all_resources(
            &format!("/v2/spaces/{}/apps", space_id),
            &[("q", filter.as_str())],
        )
        .await
    }

    /// Fetches an application.
    ///
    /// `GET /v2/apps/{application_id}`
    pub async fn get_application(
        &self,
        application_id: &str,
    ) -> Result<ApplicationResource, ApiError> {
        self.get(&format!("/v2/apps/{}", application_id)).await
    }

    /// Deletes an application. Completes synchronously.
    ///
    /// `DELETE /v2/apps/{application_id}`
    pub async fn delete_application(&self, application_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/v2/apps/{}", application_id)).await
    }

    /// Restages an application; staging then proceeds in the background.
    ///
    /// `POST /v2/apps/{application_id}/restage`
    pub async fn restage_application(
        &self,
        application_id: &str,
    ) -> Result<ApplicationResource, ApiError> {
        let app: ApplicationResource = self
            .post(
                &format!("/v2/apps/{}/restage", application_id),
                &serde_json::json!({}),
            )
            .await?;
        info!(application_id, "Restage accepted");
        Ok(app)
    }

    /// Copies the package of one application to another as a background job.
    ///
    /// `POST /v2/apps/{target_application_id}/copy_bits`
    pub async fn copy_application_bits(
        &self,
        source_application_id: &str,
        target_application_id: &str,
    ) -> Result<JobResource, ApiError> {
        let job: JobResource = self
            .post(
                &format!("/v2/apps/{}/copy_bits", target_application_id),
                &CopyBitsRequest {
                    source_app_guid: source_application_id,
                },
            )
            .await?;
        info!(
            source_application_id,
            target_application_id,
            job_id = job.id(),
            "Copy bits accepted"
        );
        Ok(job)
    }

    /// Fetches the state of every instance of an application.
    ///
    /// `GET /v2/apps/{application_id}/instances`
    pub async fn get_application_instances(
        &self,
        application_id: &str,
    ) -> Result<ApplicationInstances, ApiError> {
        self.get(&format!("/v2/apps/{}/instances", application_id))
            .await
    }

    /// Lists the routes mapped to an application.
    ///
    /// `GET /v2/apps/{application_id}/routes`
    pub async fn list_application_routes(
        &self,
        application_id: &str,
    ) -> Result<Vec<RouteResource>, ApiError> {
        self.get_all_resources(&format!("/v2/apps/{}/routes", application_id), &[])
            .await
    }
}
