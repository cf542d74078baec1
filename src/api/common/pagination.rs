//
//  cloudfoundry-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Cloud Controller v2 Responses
//!
//! Every v2 list endpoint returns one page of resources plus relative links to
//! the neighbouring pages:
//!
//! ```json
//! {
//!   "total_results": 3,
//!   "total_pages": 2,
//!   "prev_url": null,
//!   "next_url": "/v2/spaces?page=2&results-per-page=2",
//!   "resources": [ ... ]
//! }
//! ```
//!
//! Iterate by following `next_url` until it is `None`. The client does this in
//! [`CloudFoundryClient::get_all_resources`](crate::api::CloudFoundryClient::get_all_resources).

use serde::{Deserialize, Serialize};

use super::Resource;

/// One page of a Cloud Controller v2 list response.
///
/// # Type Parameters
///
/// - `T` - The entity type of each resource on the page
///
/// # Example
///
/// ```rust
/// use cloudfoundry_client::api::common::PaginatedResponse;
/// use serde_json::Value;
///
/// let json = r#"{
///     "total_results": 1,
///     "total_pages": 1,
///     "prev_url": null,
///     "next_url": null,
///     "resources": [{"metadata": {"guid": "a"}, "entity": {}}]
/// }"#;
/// let page: PaginatedResponse<Value> = serde_json::from_str(json).unwrap();
/// assert!(!page.has_next());
/// assert_eq!(page.resources.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Total number of resources across all pages.
    #[serde(default)]
    pub total_results: u32,

    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,

    /// Relative URL of the previous page, `None` on the first page.
    #[serde(default)]
    pub prev_url: Option<String>,

    /// Relative URL of the next page, `None` on the last page.
    #[serde(default)]
    pub next_url: Option<String>,

    /// Resources on this page.
    #[serde(default = "Vec::new")]
    pub resources: Vec<Resource<T>>,
}

impl<T> PaginatedResponse<T> {
    /// Checks if there are more pages of results available.
    pub fn has_next(&self) -> bool {
        self.next_url.is_some()
    }

    /// Returns the relative URL for the next page of results.
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }
}
