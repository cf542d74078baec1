//
//  cloudfoundry-client
//  api/v2/domains.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud Controller v2 domains.
//!
//! A domain is either private to an organization or shared by all of them.
//! Name lookups check the organization's private domains first and fall back
//! to the shared ones.

use serde::{Deserialize, Serialize};

use crate::api::client::CloudFoundryClient;
use crate::api::common::{ApiError, Resource};

/// A private or shared domain resource.
pub type DomainResource = Resource<DomainEntity>;

/// The entity of a domain resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEntity {
    /// Fully qualified domain name.
    pub name: String,

    /// Owning organization; absent for shared domains.
    #[serde(default)]
    pub owning_organization_guid: Option<String>,
}

impl CloudFoundryClient {
    /// Lists the private domains of an organization whose name matches exactly.
    ///
    /// `GET /v2/organizations/{organization_id}/private_domains?q=name:{name}`
    pub async fn list_organization_private_domains_by_name(
        &self,
        organization_id: &str,
        name: &str,
    ) -> Result<Vec<DomainResource>, ApiError> {
        let filter = format!("name:{}", name);
        self.get_all_resources(
            &format!("/v2/organizations/{}/private_domains", organization_id),
            &[("q", filter.as_str())],
        )
        .await
    }

    /// Lists the shared domains whose name matches exactly.
    ///
    /// `GET /v2/shared_domains?q=name:{name}`
    pub async fn list_shared_domains_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<DomainResource>, ApiError> {
        let filter = format!("name:{}", name);
        self.get_all_resources("/v2/shared_domains", &[("q", filter.as_str())])
            .await
    }
}
