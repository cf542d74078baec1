//
//  cloudfoundry-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Cloud Controller API
//!
//! This module provides the core HTTP client for interacting with a Cloud
//! Foundry Cloud Controller. It handles authentication, request/response
//! serialization, error mapping and request logging.
//!
//! ## Features
//!
//! - Authentication header injection
//! - JSON serialization/deserialization
//! - Cloud Controller error bodies mapped to [`ApiError`]
//! - Transparent following of v2 `next_url` pagination
//! - Custom User-Agent header

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::common::{format_api_error, ApiError, PaginatedResponse, Resource};
use crate::auth::AuthCredential;

/// The main HTTP client for interacting with the Cloud Controller.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use cloudfoundry_client::api::CloudFoundryClient;
/// use cloudfoundry_client::auth::AuthCredential;
///
/// let client = CloudFoundryClient::new("https://api.run.example.com")?
///     .with_auth(AuthCredential::bearer("your-token"));
/// # Ok::<(), cloudfoundry_client::api::ApiError>(())
/// ```
///
/// Typed endpoint methods (`get_job`, `delete_space`, ...) live next to the
/// resource types in [`crate::api::v2`].
#[derive(Debug, Clone)]
pub struct CloudFoundryClient {
    /// The underlying HTTP client
    http: Client,
    /// The API endpoint without a trailing slash (e.g. "https://api.run.example.com")
    base_url: String,
    /// Optional authentication credentials
    auth: Option<AuthCredential>,
}

impl CloudFoundryClient {
    /// Creates a new client for the given API endpoint.
    ///
    /// # Parameters
    ///
    /// * `api_endpoint` - The Cloud Controller root URL, e.g. `https://api.run.example.com`.
    ///   A bare hostname is accepted and treated as `https://<host>`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BadRequest`] if the endpoint is not a valid URL, or
    /// [`ApiError::Network`] if the HTTP client could not be created.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cloudfoundry_client::api::CloudFoundryClient;
    ///
    /// let client = CloudFoundryClient::new("api.run.example.com/").unwrap();
    /// assert_eq!(client.base_url(), "https://api.run.example.com");
    /// ```
    pub fn new(api_endpoint: &str) -> Result<Self, ApiError> {
        let base_url = normalize_endpoint(api_endpoint)?;

        Ok(Self {
            http: Client::builder()
                .user_agent(format!("cf-client/{}", crate::VERSION))
                .build()?,
            base_url,
            auth: None,
        })
    }

    /// Sets the authentication credentials for this client.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Returns `true` if credentials have been configured.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Returns the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a full URL from an API path.
    ///
    /// Paths returned by the server (`next_url`, `metadata.url`) are relative
    /// to the endpoint root, so they are appended as-is.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(auth) => auth.apply_to_request(request),
            None => request,
        }
    }

    /// Sends a request and returns the response if its status is 2xx.
    async fn send(&self, method: &str, path: &str, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        debug!(method, path, "Sending request");

        let response = self.authorize(request).send().await?;
        let status = response.status();

        debug!(method, path, status = status.as_u16(), "Received response");

        if status == StatusCode::UNAUTHORIZED && self.auth.is_none() {
            return Err(ApiError::AuthRequired);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &text));
        }

        Ok(response)
    }

    /// Makes an HTTP GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The network request fails
    /// - The response status is not successful (2xx)
    /// - The response body cannot be deserialized to type `T`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_with_query(path, &[]).await
    }

    /// Makes an HTTP GET request with query parameters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cloudfoundry_client::api::CloudFoundryClient;
    /// use cloudfoundry_client::api::common::PaginatedResponse;
    ///
    /// # async fn example() -> Result<(), cloudfoundry_client::api::ApiError> {
    /// let client = CloudFoundryClient::new("https://api.run.example.com")?;
    /// let page: PaginatedResponse<serde_json::Value> = client
    ///     .get_with_query("/v2/organizations", &[("q", "name:my-org")])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path)).query(query);
        let response = self.send("GET", path, request).await?;
        Ok(response.json().await?)
    }

    /// Fetches every resource of a v2 list endpoint, following `next_url`.
    ///
    /// The query parameters apply to the first page only; subsequent pages
    /// are requested through the server-provided `next_url`, which already
    /// carries them.
    pub async fn get_all_resources<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<Resource<T>>, ApiError> {
        let mut page: PaginatedResponse<T> = self.get_with_query(path, query).await?;
        let mut resources = std::mem::take(&mut page.resources);

        while let Some(next) = page.next_url.take() {
            page = self.get(&next).await?;
            resources.append(&mut page.resources);
        }

        Ok(resources)
    }

    /// Makes an HTTP POST request to the specified path with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request body cannot be serialized
    /// - The network request fails
    /// - The response status is not successful (2xx)
    /// - The response body cannot be deserialized to type `T`
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.http.post(self.url(path)).json(body);
        let response = self.send("POST", path, request).await?;
        Ok(response.json().await?)
    }

    /// Makes an HTTP DELETE request whose response carries no body (`204`).
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(path));
        self.send("DELETE", path, request).await?;
        Ok(())
    }

    /// Makes an HTTP DELETE request with `async=true`.
    ///
    /// The Cloud Controller accepts the deletion with `202 Accepted` and a
    /// job resource describing the background work, which is returned here.
    pub async fn delete_async<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut params = vec![("async", "true")];
        params.extend_from_slice(query);

        let request = self.http.delete(self.url(path)).query(&params);
        let response = self.send("DELETE", path, request).await?;
        Ok(response.json().await?)
    }
}

/// Normalizes an API endpoint into `scheme://host[:port][/path]` without a
/// trailing slash.
fn normalize_endpoint(endpoint: &str) -> Result<String, ApiError> {
    let endpoint = endpoint.trim();
    let with_scheme = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("https://{}", endpoint)
    };

    let url = Url::parse(&with_scheme)
        .map_err(|e| ApiError::BadRequest(format!("invalid API endpoint '{}': {}", endpoint, e)))?;

    if url.host_str().is_none() {
        return Err(ApiError::BadRequest(format!(
            "invalid API endpoint '{}': missing host",
            endpoint
        )));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
