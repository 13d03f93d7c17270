//! Locator event types.

use crate::errors::LocatorError;
use crate::models::Environment;

/// Events emitted by the locator while refreshing admin addresses.
///
/// These represent facts about refresh progress. They complement the log
/// output: logs are for operators, events feed whatever error-tracking or
/// tracing backend the embedding application wires in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocatorEvent {
    /// One discovery attempt for an environment failed.
    DiscoveryAttemptFailed {
        /// The environment being refreshed.
        env: Environment,
        /// 1-based attempt number within the current cycle.
        attempt: u32,
        /// Rendered error message.
        error: String,
    },

    /// An environment exhausted its attempt budget for this cycle; its
    /// cached snapshot (if any) stays in place.
    EnvironmentOffline {
        /// The environment that failed to refresh.
        env: Environment,
    },

    /// An environment's snapshot was replaced with freshly discovered
    /// addresses.
    AddressesRefreshed {
        /// The refreshed environment.
        env: Environment,
        /// Number of instances in the new snapshot.
        instance_count: usize,
    },
}

impl LocatorEvent {
    /// A failed discovery attempt.
    pub fn attempt_failed(env: &Environment, attempt: u32, error: &LocatorError) -> Self {
        Self::DiscoveryAttemptFailed {
            env: env.clone(),
            attempt,
            error: error.to_string(),
        }
    }

    /// An environment that exhausted its attempt budget.
    pub fn environment_offline(env: &Environment) -> Self {
        Self::EnvironmentOffline { env: env.clone() }
    }

    /// A successful snapshot replacement.
    pub fn addresses_refreshed(env: &Environment, instance_count: usize) -> Self {
        Self::AddressesRefreshed {
            env: env.clone(),
            instance_count,
        }
    }
}
