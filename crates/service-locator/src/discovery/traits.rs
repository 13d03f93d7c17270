use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{Environment, ServiceInstance};

/// Discovers admin service instances for an environment.
///
/// One call issues one discovery request; the retry budget lives with the
/// caller so that attempts within a cycle stay observable.
#[async_trait]
pub trait ServiceDiscovery: Send + Sync {
    /// Fetch the current admin service instances for `env`.
    ///
    /// Fails on network errors, non-success statuses, unparseable bodies,
    /// and empty results; a successful return always carries at least one
    /// instance.
    async fn admin_services(&self, env: &Environment) -> Result<Vec<ServiceInstance>>;
}
