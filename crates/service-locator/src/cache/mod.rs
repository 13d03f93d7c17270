//! Concurrently-readable cache of admin service addresses.

use dashmap::DashMap;
use log::debug;

use crate::models::{Environment, ServiceInstance};

/// Cache of the most recent successfully-fetched address snapshot per
/// environment.
///
/// Created empty at startup, written only by the refresh scheduler, read
/// from arbitrary caller tasks. Replacement is whole-snapshot per key, so a
/// concurrent reader sees either the previous or the new list, never a mix.
/// An entry is either absent (the environment has never refreshed) or
/// non-empty.
#[derive(Debug, Default)]
pub struct AddressCache {
    entries: DashMap<Environment, Vec<ServiceInstance>>,
}

impl AddressCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Current snapshot for `env`, cloned, or `None` if the environment has
    /// never refreshed successfully.
    pub fn get(&self, env: &Environment) -> Option<Vec<ServiceInstance>> {
        self.entries.get(env).map(|entry| entry.value().clone())
    }

    /// Replace the snapshot for `env` with a freshly discovered list.
    ///
    /// An empty list is ignored: a stale-but-present snapshot beats an
    /// empty one.
    pub fn replace(&self, env: &Environment, services: Vec<ServiceInstance>) {
        if services.is_empty() {
            debug!("Ignoring empty snapshot for environment '{}'", env);
            return;
        }
        self.entries.insert(env.clone(), services);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(id: &str) -> ServiceInstance {
        ServiceInstance {
            app_name: "lodestar-adminservice".to_string(),
            instance_id: id.to_string(),
            homepage_url: format!("http://{}/", id),
        }
    }

    #[test]
    fn absent_environment_returns_none() {
        let cache = AddressCache::new();
        assert!(cache.get(&Environment::new("DEV")).is_none());
    }

    #[test]
    fn replace_stores_whole_snapshot() {
        let cache = AddressCache::new();
        let env = Environment::new("DEV");

        cache.replace(&env, vec![instance("10.0.0.1:8090"), instance("10.0.0.2:8090")]);
        let snapshot = cache.get(&env).unwrap();
        assert_eq!(snapshot.len(), 2);

        cache.replace(&env, vec![instance("10.0.0.3:8090")]);
        let snapshot = cache.get(&env).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].instance_id, "10.0.0.3:8090");
    }

    #[test]
    fn empty_snapshot_never_replaces_existing() {
        let cache = AddressCache::new();
        let env = Environment::new("DEV");

        cache.replace(&env, vec![instance("10.0.0.1:8090")]);
        cache.replace(&env, Vec::new());

        let snapshot = cache.get(&env).unwrap();
        assert_eq!(snapshot[0].instance_id, "10.0.0.1:8090");
    }

    #[test]
    fn empty_snapshot_does_not_create_entry() {
        let cache = AddressCache::new();
        let env = Environment::new("DEV");

        cache.replace(&env, Vec::new());
        assert!(cache.get(&env).is_none());
    }

    #[test]
    fn environments_are_independent() {
        let cache = AddressCache::new();
        cache.replace(&Environment::new("DEV"), vec![instance("10.0.0.1:8090")]);

        assert!(cache.get(&Environment::new("DEV")).is_some());
        assert!(cache.get(&Environment::new("PRO")).is_none());
    }
}
