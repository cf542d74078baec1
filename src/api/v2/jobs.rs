//
//  cloudfoundry-client
//  api/v2/jobs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud Controller v2 jobs.
//!
//! A job is the server-side handle for a long-running operation. Mutating
//! requests sent with `async=true` answer `202 Accepted` with a job resource
//! instead of the final result; the job is then polled through
//! `GET /v2/jobs/{guid}` until it is terminal.
//!
//! # Job Lifecycle
//!
//! ```text
//! queued -> running -> finished
//!                  \-> failed (error_details)
//! ```
//!
//! Transitions are monotonic; `finished` and `failed` are permanent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::client::CloudFoundryClient;
use crate::api::common::{ApiError, Resource};

/// A job resource as returned by the submission and status endpoints.
pub type JobResource = Resource<JobEntity>;

/// Status of a background job.
///
/// Unknown status strings deserialize to [`JobStatus::Unknown`] and are
/// treated as non-terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Waiting for a worker.
    Queued,
    /// Being processed.
    Running,
    /// Completed successfully.
    Finished,
    /// Completed with an error; see [`JobEntity::error_details`].
    Failed,
    /// A status this client does not know about.
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Finished | JobStatus::Failed)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JobStatus::Queued => "queued",
            JobStatus::Running => "running",
            JobStatus::Finished => "finished",
            JobStatus::Failed => "failed",
            JobStatus::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Structured error detail attached to a failed job.
///
/// ```json
/// {"error_code": "CF-SpaceDeletionFailed", "description": "...", "code": 290008}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Numeric Cloud Controller error code.
    pub code: i64,

    /// Human readable description, reported verbatim.
    pub description: String,

    /// Symbolic error code.
    pub error_code: String,
}

/// The entity of a job resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobEntity {
    /// The job's guid; mirrors `metadata.guid`.
    #[serde(default)]
    pub guid: Option<String>,

    /// Current status.
    pub status: JobStatus,

    /// Error detail, present once the job has failed.
    #[serde(default)]
    pub error_details: Option<ErrorDetails>,

    /// Deprecated free-form error string some controllers still send.
    #[serde(default)]
    pub error: Option<String>,
}

impl CloudFoundryClient {
    /// Fetches the current snapshot of a job.
    ///
    /// `GET /v2/jobs/{job_id}`
    pub async fn get_job(&self, job_id: &str) -> Result<JobResource, ApiError> {
        let job: JobResource = self.get(&format!("/v2/jobs/{}", job_id)).await?;
        debug!(job_id, status = %job.entity.status, "Fetched job");
        Ok(job)
    }
}
