//
//  cloudfoundry-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Cloud Controller v2 API
//!
//! This module provides the shared types used by every v2 resource binding:
//! error handling, the `metadata`/`entity` resource envelope, and pagination.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all HTTP-level API failures
//! - [`Resource`] - The `{ "metadata": ..., "entity": ... }` envelope every v2 resource uses
//! - [`Metadata`] - Resource identity and timestamps
//! - Pagination types (re-exported from [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use cloudfoundry_client::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::AuthRequired) => println!("Please provide an access token"),
//!         Err(ApiError::NotFound(resource)) => println!("Resource not found: {}", resource),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for all Cloud Controller API operations.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `CloudFoundry` | Structured Cloud Controller error body | any non-2xx |
/// | `AuthRequired` | No credentials were configured | 401 |
/// | `AuthFailed` | Invalid or expired credentials | 401 |
/// | `NotFound` | Requested resource does not exist | 404 |
/// | `RateLimited` | Too many requests, retry later | 429 |
/// | `Forbidden` | Insufficient permissions | 403 |
/// | `BadRequest` | Invalid request parameters | 400 |
/// | `ServerError` | Internal server error | 5xx |
/// | `Network` | Transport failure or undecodable body | N/A |
/// | `Unknown` | Anything else | N/A |
///
/// # Notes
///
/// - The `Network` variant automatically converts from `reqwest::Error`
/// - A response body in Cloud Controller error format always wins over the
///   status-based classification, so the server's wording reaches the caller
#[derive(Error, Debug)]
pub enum ApiError {
    /// The Cloud Controller answered with its structured error body.
    ///
    /// The message mirrors the server's fields verbatim:
    /// `<error_code>(<code>): <description>`.
    #[error("{error_code}({code}): {description}")]
    CloudFoundry {
        /// HTTP status of the response
        status: u16,
        /// Numeric Cloud Controller error code (e.g. `10003`)
        code: i64,
        /// Symbolic error code (e.g. `CF-NotAuthorized`)
        error_code: String,
        /// Human readable description
        description: String,
    },

    /// Authentication credentials are required but not provided.
    #[error("Authentication required")]
    AuthRequired,

    /// Authentication failed due to invalid or expired credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Access to the resource is forbidden.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// The request was malformed or contained invalid parameters.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal server error occurred on the Cloud Controller.
    #[error("Server error: {0}")]
    ServerError(String),

    /// A network-level error occurred during the request.
    ///
    /// This covers connection failures, timeouts, DNS resolution errors,
    /// and response bodies that could not be decoded.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An unknown or unexpected error occurred.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Returns the HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::CloudFoundry { status, .. } => Some(*status),
            Self::AuthRequired | Self::AuthFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::RateLimited => Some(429),
            Self::BadRequest(_) => Some(400),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::ServerError(_) | Self::Unknown(_) => None,
        }
    }

    /// Returns the numeric Cloud Controller error code, if the server sent one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cloudfoundry_client::api::common::ApiError;
    ///
    /// let error = ApiError::CloudFoundry {
    ///     status: 400,
    ///     code: 170002,
    ///     error_code: "CF-NotStaged".to_string(),
    ///     description: "App has not finished staging".to_string(),
    /// };
    /// assert_eq!(error.code(), Some(170002));
    /// assert_eq!(ApiError::RateLimited.code(), None);
    /// ```
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::CloudFoundry { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Cloud Controller v2 error response body.
///
/// ```json
/// {"code": 40004, "description": "The app could not be found: abc", "error_code": "CF-AppNotFound"}
/// ```
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    code: i64,
    description: String,
    error_code: String,
}

/// Converts a non-success HTTP response into an [`ApiError`].
///
/// Cloud Controller error bodies are preserved verbatim in
/// [`ApiError::CloudFoundry`]. Any other body is classified by status code,
/// using the raw body text (or the status reason when empty) as the message.
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The raw error response body
///
/// # Example
///
/// ```rust
/// use cloudfoundry_client::api::common::{format_api_error, ApiError};
/// use reqwest::StatusCode;
///
/// let body = r#"{"code": 40004, "description": "The app could not be found: abc", "error_code": "CF-AppNotFound"}"#;
/// let error = format_api_error(StatusCode::NOT_FOUND, body);
/// assert_eq!(error.to_string(), "CF-AppNotFound(40004): The app could not be found: abc");
/// ```
pub fn format_api_error(status: StatusCode, body: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return ApiError::CloudFoundry {
            status: status.as_u16(),
            code: parsed.code,
            error_code: parsed.error_code,
            description: parsed.description,
        };
    }

    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string()
    } else {
        body.trim().to_string()
    };

    match status {
        StatusCode::UNAUTHORIZED => ApiError::AuthFailed(message),
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        StatusCode::BAD_REQUEST => ApiError::BadRequest(message),
        s if s.is_server_error() => ApiError::ServerError(message),
        s => ApiError::Unknown(format!("API error ({}): {}", s, message)),
    }
}

/// Resource identity and bookkeeping returned with every v2 resource.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `guid` | `String` | Resource identifier |
/// | `url` | `Option<String>` | Relative URL of the resource |
/// | `created_at` | `Option<DateTime<Utc>>` | Creation timestamp |
/// | `updated_at` | `Option<DateTime<Utc>>` | Last update timestamp |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// The resource's unique identifier.
    pub guid: String,

    /// Relative URL of the resource, e.g. `/v2/jobs/<guid>`.
    #[serde(default)]
    pub url: Option<String>,

    /// When the resource was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the resource was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The `metadata`/`entity` envelope used by every Cloud Controller v2 resource.
///
/// # Type Parameters
///
/// - `T` - The resource-specific entity type
///
/// # Example
///
/// ```rust
/// use cloudfoundry_client::api::common::Resource;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct SpaceEntity {
///     name: String,
/// }
///
/// let json = r#"{"metadata": {"guid": "space-id"}, "entity": {"name": "development"}}"#;
/// let space: Resource<SpaceEntity> = serde_json::from_str(json).unwrap();
/// assert_eq!(space.id(), "space-id");
/// assert_eq!(space.entity.name, "development");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<T> {
    /// Resource identity.
    pub metadata: Metadata,

    /// Resource-specific payload.
    pub entity: T,
}

impl<T> Resource<T> {
    /// Returns the resource's guid.
    pub fn id(&self) -> &str {
        &self.metadata.guid
    }
}
