//! HTTP discovery against the environment's meta server.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::{LocatorError, Result};
use crate::meta::MetaDomainResolver;
use crate::models::{Environment, ServiceInstance};

use super::ServiceDiscovery;

/// Well-known discovery path on the meta server.
const ADMIN_SERVICES_PATH: &str = "/services/admin";

/// Default HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Discovery client that asks each environment's meta server for the
/// current admin service instances.
pub struct HttpServiceDiscovery {
    client: Client,
    meta: Arc<dyn MetaDomainResolver>,
}

impl HttpServiceDiscovery {
    /// Create a discovery client with the default request timeout.
    pub fn new(meta: Arc<dyn MetaDomainResolver>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, meta }
    }
}

#[async_trait]
impl ServiceDiscovery for HttpServiceDiscovery {
    async fn admin_services(&self, env: &Environment) -> Result<Vec<ServiceInstance>> {
        let domain = self.meta.domain(env)?;
        let url = format!("{}{}", domain, ADMIN_SERVICES_PATH);
        debug!("Fetching admin services for environment '{}' from {}", env, url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(LocatorError::UnexpectedStatus {
                env: env.clone(),
                status: response.status().as_u16(),
            });
        }

        let services: Vec<ServiceInstance> = response.json().await?;
        if services.is_empty() {
            return Err(LocatorError::EmptyServiceList(env.clone()));
        }
        Ok(services)
    }
}
