//
//  cloudfoundry-client
//  operations/routes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Route workflows.
//!
//! A route is addressed as `host.domain[/path]`. The domain is looked up among
//! the targeted organization's private domains, then among the shared ones.

use tracing::{debug, info};

use super::{require_name, single_id, CloudFoundryOperations, OperationError};

/// Parameters for deleting a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRouteRequest {
    /// Domain of the route, e.g. `apps.example.com`.
    pub domain: String,
    /// Hostname part of the route.
    pub host: String,
    /// Optional path, e.g. `/api`.
    pub path: Option<String>,
}

impl DeleteRouteRequest {
    pub fn new(domain: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            host: host.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn validate(&self) -> Result<(), OperationError> {
        require_name(&self.domain, "domain")?;
        require_name(&self.host, "host")
    }

    /// `host.domain[/path]`, as shown in messages.
    fn route_name(&self) -> String {
        format!(
            "{}.{}{}",
            self.host,
            self.domain,
            self.path.as_deref().unwrap_or_default()
        )
    }
}

/// Route workflows, obtained from [`CloudFoundryOperations::routes`].
#[derive(Debug, Clone, Copy)]
pub struct Routes<'a> {
    ops: &'a CloudFoundryOperations,
}

impl<'a> Routes<'a> {
    pub(crate) fn new(ops: &'a CloudFoundryOperations) -> Self {
        Self { ops }
    }

    async fn domain_id(&self, organization_id: &str, domain: &str) -> Result<String, OperationError> {
        let client = self.ops.client();

        let mut domains = client
            .list_organization_private_domains_by_name(organization_id, domain)
            .await?;
        if domains.is_empty() {
            domains = client.list_shared_domains_by_name(domain).await?;
        }

        let id = single_id(domains, "Domain", domain)?;
        debug!(domain, id = %id, "Resolved domain");
        Ok(id)
    }

    /// Deletes a route of the targeted organization, waiting for the
    /// deletion job.
    ///
    /// # Errors
    ///
    /// [`OperationError::NotFound`] names the domain or the route
    /// (`host.domain[/path]`) that could not be found.
    pub async fn delete(&self, request: &DeleteRouteRequest) -> Result<(), OperationError> {
        request.validate()?;

        let organization_id = self.ops.organization_id().await?;
        let domain_id = self.domain_id(&organization_id, &request.domain).await?;

        let client = self.ops.client();
        let routes = client
            .list_routes(&domain_id, &request.host, request.path.as_deref())
            .await?;
        let route_id = single_id(routes, "Route", &request.route_name())?;

        let job = client.delete_route(&route_id).await?;
        self.ops.wait_for_job(&job).await?;

        info!(route = %request.route_name(), "Route deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_name() {
        let route = DeleteRouteRequest::new("apps.example.com", "web");
        assert_eq!(route.route_name(), "web.apps.example.com");
        assert_eq!(route.with_path("/api").route_name(), "web.apps.example.com/api");
    }

    #[test]
    fn test_validate_requires_host_and_domain() {
        assert!(DeleteRouteRequest::new("apps.example.com", "web").validate().is_ok());
        assert_eq!(
            DeleteRouteRequest::new("apps.example.com", "")
                .validate()
                .unwrap_err()
                .to_string(),
            "Invalid request: host must be specified"
        );
        assert!(DeleteRouteRequest::new("", "web").validate().is_err());
    }
}
