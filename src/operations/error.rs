//
//  cloudfoundry-client
//  operations/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for high-level operations.
//!
//! | Variant | Raised when | Polling |
//! |---------|-------------|---------|
//! | `Request` | a lookup or the submitting request fails | never started |
//! | `StatusQuery` | a job status request fails | stopped |
//! | `JobFailed` | the job reports `failed` with error detail | finished |
//! | `JobFailedWithMessage` | the job reports `failed` with only the legacy `error` string | finished |
//! | `JobFailedWithoutDetails` | the job reports `failed` with no detail | finished |
//! | `Timeout` | the deadline elapses first | abandoned |
//! | `StagingFailed` | the application's package state becomes `FAILED` | finished |
//! | `StartupFailed` | instances crash instead of reaching `RUNNING` | finished |
//! | `NotFound`, `NotBound` | a named resource lookup comes back empty | never started |
//! | `InvalidRequest`, `NoTarget` | before any request is sent | never started |

use std::time::Duration;

use thiserror::Error;

use crate::api::common::ApiError;
use crate::api::v2::ErrorDetails;
use crate::util::format_duration;

/// A job that reached the `failed` state, with the server's detail verbatim.
///
/// # Example
///
/// ```rust
/// use cloudfoundry_client::operations::JobFailure;
///
/// let failure = JobFailure {
///     code: 1,
///     description: "test-error-details-description".to_string(),
///     error_code: "test-error-details-errorCode".to_string(),
/// };
/// assert_eq!(
///     failure.to_string(),
///     "test-error-details-description test-error-details-errorCode(1)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{description} {error_code}({code})")]
pub struct JobFailure {
    /// Numeric Cloud Controller error code.
    pub code: i64,
    /// Human readable description.
    pub description: String,
    /// Symbolic error code.
    pub error_code: String,
}

impl From<ErrorDetails> for JobFailure {
    fn from(details: ErrorDetails) -> Self {
        Self {
            code: details.code,
            description: details.description,
            error_code: details.error_code,
        }
    }
}

/// Failure of a high-level operation.
#[derive(Error, Debug)]
pub enum OperationError {
    /// A lookup or submitting request failed. No job was polled.
    #[error(transparent)]
    Request(#[from] ApiError),

    /// The status of a job could not be determined.
    #[error("Could not determine status of job {job_id}: {source}")]
    StatusQuery {
        /// The job being polled
        job_id: String,
        /// The failed status request
        #[source]
        source: ApiError,
    },

    /// The job reached `failed`.
    #[error(transparent)]
    JobFailed(#[from] JobFailure),

    /// The job reached `failed` with only the deprecated `error` string.
    #[error("Job {job_id} failed: {message}")]
    JobFailedWithMessage {
        /// The failed job
        job_id: String,
        /// The server's `error` string, verbatim
        message: String,
    },

    /// The job reached `failed` but carried no error detail.
    #[error("Job {job_id} failed without error details")]
    JobFailedWithoutDetails {
        /// The failed job
        job_id: String,
    },

    /// The deadline elapsed before a terminal state was observed.
    ///
    /// The remote work is not cancelled and may still complete.
    #[error("{operation} timed out after {}", format_duration(*.timeout))]
    Timeout {
        /// What was being waited on, e.g. `job 1234`
        operation: String,
        /// The configured deadline
        timeout: Duration,
    },

    /// Staging finished with package state `FAILED`.
    #[error("Application {application} failed during staging: {reason}")]
    StagingFailed {
        /// Application name
        application: String,
        /// Server-provided failure description
        reason: String,
    },

    /// No instance reached `RUNNING` and at least one crashed.
    #[error("Application {application} failed during start")]
    StartupFailed {
        /// Application name
        application: String,
    },

    /// A named resource does not exist in the targeted scope.
    #[error("{kind} {name} does not exist")]
    NotFound {
        /// Resource kind, e.g. `Space`
        kind: &'static str,
        /// The name that was looked up
        name: String,
    },

    /// The service instance exists but has no binding to the application.
    #[error("Service instance {service_instance} is not bound to application {application}")]
    NotBound {
        /// Service instance name
        service_instance: String,
        /// Application name
        application: String,
    },

    /// The request failed validation before anything was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The operation needs a target that was not configured.
    #[error("No {0} targeted")]
    NoTarget(&'static str),
}

impl OperationError {
    /// `true` for deadline expiry.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// `true` when the remote job itself reported failure.
    pub fn is_job_failure(&self) -> bool {
        matches!(
            self,
            Self::JobFailed(_) | Self::JobFailedWithMessage { .. } | Self::JobFailedWithoutDetails { .. }
        )
    }
}
