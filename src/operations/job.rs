//
//  cloudfoundry-client
//  operations/job.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Waiting for background jobs.
//!
//! # Overview
//!
//! A submitting request (e.g. `DELETE /v2/spaces/{id}?async=true`) returns a
//! [`JobResource`]. [`wait_for_completion`] turns that handle into a single
//! outcome:
//!
//! | Observed | Outcome |
//! |----------|---------|
//! | `finished` | `Ok(())` |
//! | `failed` with `error_details` | [`OperationError::JobFailed`] |
//! | `failed` with only an `error` string | [`OperationError::JobFailedWithMessage`] |
//! | `failed` without detail | [`OperationError::JobFailedWithoutDetails`] |
//! | status request fails | [`OperationError::StatusQuery`], not retried |
//! | deadline elapses | [`OperationError::Timeout`] |
//! | anything else | poll again after the interval |
//!
//! If the submission response already carries a terminal job, it is resolved
//! without a single status query.
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudfoundry_client::api::CloudFoundryClient;
//! use cloudfoundry_client::operations::{wait_for_completion, PollConfig};
//!
//! # async fn example(client: CloudFoundryClient) -> Result<(), cloudfoundry_client::operations::OperationError> {
//! let job = client.delete_space("space-id", false).await?;
//! wait_for_completion(&client, &job, PollConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use tracing::{debug, info};

use super::error::{JobFailure, OperationError};
use super::polling::{poll_until, PollConfig, PollStep};
use crate::api::client::CloudFoundryClient;
use crate::api::common::ApiError;
use crate::api::v2::{JobResource, JobStatus};

/// Anything that can report the current state of a job.
///
/// [`CloudFoundryClient`] implements this with `GET /v2/jobs/{id}`. Tests and
/// alternative transports provide their own.
#[async_trait]
pub trait JobStatusSource: Send + Sync {
    /// Returns the current snapshot of the job.
    async fn job_status(&self, job_id: &str) -> Result<JobResource, ApiError>;
}

#[async_trait]
impl JobStatusSource for CloudFoundryClient {
    async fn job_status(&self, job_id: &str) -> Result<JobResource, ApiError> {
        self.get_job(job_id).await
    }
}

/// Maps a job snapshot to its outcome, or `None` while it is still in progress.
///
/// The mapping depends only on the snapshot, so resolving the same snapshot
/// twice gives equal results.
pub fn resolve_job(job: &JobResource) -> Option<Result<(), OperationError>> {
    match job.entity.status {
        JobStatus::Finished => Some(Ok(())),
        JobStatus::Failed => Some(Err(match (&job.entity.error_details, &job.entity.error) {
            (Some(details), _) => JobFailure::from(details.clone()).into(),
            (None, Some(message)) => OperationError::JobFailedWithMessage {
                job_id: job.id().to_string(),
                message: message.clone(),
            },
            (None, None) => OperationError::JobFailedWithoutDetails {
                job_id: job.id().to_string(),
            },
        })),
        JobStatus::Queued | JobStatus::Running | JobStatus::Unknown => None,
    }
}

/// Polls a job until it is terminal and reports the outcome.
///
/// # Parameters
///
/// * `source` - Where status snapshots come from
/// * `job` - The job returned by the submitting request
/// * `config` - Interval and deadline
///
/// # Errors
///
/// See the table in the [module documentation](self).
pub async fn wait_for_completion<S>(
    source: &S,
    job: &JobResource,
    config: PollConfig,
) -> Result<(), OperationError>
where
    S: JobStatusSource + ?Sized,
{
    let job_id = job.id();

    if let Some(outcome) = resolve_job(job) {
        debug!(job_id, status = %job.entity.status, "Job already terminal on submission");
        return outcome;
    }

    info!(job_id, "Waiting for job");

    poll_until(
        config,
        &format!("Job {}", job_id),
        move || async move {
            source
                .job_status(job_id)
                .await
                .map_err(|error| OperationError::StatusQuery {
                    job_id: job_id.to_string(),
                    source: error,
                })
        },
        |attempt| {
            debug!(
                job_id,
                attempt = attempt.attempt,
                status = %attempt.snapshot.entity.status,
                "Job status"
            );
            match resolve_job(&attempt.snapshot) {
                Some(Ok(())) => Ok(PollStep::Done(())),
                Some(Err(error)) => Err(error),
                None => Ok(PollStep::Continue),
            }
        },
    )
    .await
}
