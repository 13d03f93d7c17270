//! Locator service: bounded-retry refresh and randomized selection.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, warn};
use rand::seq::SliceRandom;

use crate::cache::AddressCache;
use crate::config::LocatorConfig;
use crate::discovery::ServiceDiscovery;
use crate::events::{LocatorEvent, LocatorEventSink};
use crate::models::{Environment, ServiceInstance};

use super::{CycleOutcome, CycleReport};

/// Hands out admin service addresses per environment.
#[async_trait]
pub trait AddressLocatorTrait: Send + Sync {
    /// Randomized candidate list of admin instances for `env`.
    ///
    /// Returns a shuffled copy of the cached snapshot, or an empty list
    /// when the environment has never refreshed successfully. Never fails
    /// and never exposes the stored sequence itself.
    fn service_list(&self, env: &Environment) -> Vec<ServiceInstance>;

    /// Run one refresh pass over every known environment.
    ///
    /// Failures are isolated per environment: each one either replaces its
    /// cache entry or is recorded as failed, and the pass always completes.
    async fn refresh_cycle(&self) -> CycleReport;
}

/// Discovers and caches admin service addresses for all known environments.
///
/// Writes to the cache happen only from [`refresh_cycle`](AddressLocatorTrait::refresh_cycle),
/// which the background scheduler drives from a single task; reads via
/// [`service_list`](AddressLocatorTrait::service_list) come from arbitrary
/// caller tasks.
pub struct AdminServiceLocator {
    environments: Vec<Environment>,
    discovery: Arc<dyn ServiceDiscovery>,
    cache: Arc<AddressCache>,
    events: Arc<dyn LocatorEventSink>,
    config: LocatorConfig,
}

impl AdminServiceLocator {
    /// Create a locator over the given environment set.
    ///
    /// The environment set is fixed for the lifetime of the locator.
    pub fn new(
        environments: Vec<Environment>,
        discovery: Arc<dyn ServiceDiscovery>,
        cache: Arc<AddressCache>,
        events: Arc<dyn LocatorEventSink>,
        config: LocatorConfig,
    ) -> Self {
        Self {
            environments,
            discovery,
            cache,
            events,
            config,
        }
    }

    /// The scheduling and retry configuration this locator runs with.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Refresh one environment within the current cycle.
    ///
    /// Attempts discovery back-to-back up to the configured budget. The
    /// first success replaces the cached snapshot and stops the attempts;
    /// a non-retryable error stops them early. Returns whether the cache
    /// was updated.
    async fn refresh_environment(&self, env: &Environment) -> bool {
        for attempt in 1..=self.config.retry_count {
            match self.discovery.admin_services(env).await {
                Ok(services) => {
                    let instance_count = services.len();
                    self.cache.replace(env, services);
                    debug!(
                        "Refreshed {} admin instance(s) for environment '{}'",
                        instance_count, env
                    );
                    self.events
                        .emit(LocatorEvent::addresses_refreshed(env, instance_count));
                    return true;
                }
                Err(e) => {
                    error!(
                        "Failed to fetch admin services for environment '{}' (attempt {}/{}): {}",
                        env, attempt, self.config.retry_count, e
                    );
                    self.events
                        .emit(LocatorEvent::attempt_failed(env, attempt, &e));
                    if !e.is_retryable() {
                        break;
                    }
                }
            }
        }

        self.events.emit(LocatorEvent::environment_offline(env));
        false
    }
}

#[async_trait]
impl AddressLocatorTrait for AdminServiceLocator {
    fn service_list(&self, env: &Environment) -> Vec<ServiceInstance> {
        match self.cache.get(env) {
            Some(mut services) => {
                services.shuffle(&mut rand::thread_rng());
                services
            }
            None => Vec::new(),
        }
    }

    async fn refresh_cycle(&self) -> CycleReport {
        let mut report = CycleReport::new();
        for env in &self.environments {
            let success = self.refresh_environment(env).await;
            report.record(env.clone(), success);
        }

        if report.outcome() == CycleOutcome::Degraded {
            warn!(
                "Address refresh cycle degraded; failed environments: {:?}",
                report.failed()
            );
        }
        report
    }
}
