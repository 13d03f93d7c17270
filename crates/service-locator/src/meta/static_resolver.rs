//! Configuration-backed meta domain resolver.

use std::collections::HashMap;

use log::warn;

use crate::errors::{LocatorError, Result};
use crate::models::Environment;

use super::MetaDomainResolver;

/// Meta domain resolver backed by a fixed map supplied at startup.
///
/// Domains are normalized on construction: surrounding whitespace and
/// trailing slashes are stripped so that path concatenation produces a
/// single separator.
pub struct StaticMetaDomainResolver {
    domains: HashMap<Environment, String>,
}

impl StaticMetaDomainResolver {
    /// Create a resolver from an explicit environment-to-domain map.
    pub fn new(domains: HashMap<Environment, String>) -> Self {
        let domains = domains
            .into_iter()
            .map(|(env, domain)| (env, normalize_domain(&domain)))
            .collect();
        Self { domains }
    }

    /// Build a resolver from `LODESTAR_{ENV}_META` environment variables
    /// for the given environment set, e.g.
    /// `LODESTAR_DEV_META=http://meta.dev.example.com:8080`.
    ///
    /// Environments without a configured variable are left unmapped and
    /// will fail resolution; a warning is logged for each at startup so
    /// the gap is visible before the first refresh cycle.
    pub fn from_env(environments: &[Environment]) -> Self {
        let mut domains = HashMap::new();
        for env in environments {
            let key = format!("LODESTAR_{}_META", env.as_str());
            match std::env::var(&key) {
                Ok(domain) if !domain.trim().is_empty() => {
                    domains.insert(env.clone(), domain);
                }
                _ => {
                    warn!(
                        "No meta server domain configured for environment '{}' ({} is unset)",
                        env, key
                    );
                }
            }
        }
        Self::new(domains)
    }
}

impl MetaDomainResolver for StaticMetaDomainResolver {
    fn domain(&self, env: &Environment) -> Result<String> {
        self.domains
            .get(env)
            .cloned()
            .ok_or_else(|| LocatorError::MetaDomainMissing(env.clone()))
    }
}

fn normalize_domain(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
