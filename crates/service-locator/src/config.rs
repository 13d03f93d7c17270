//! Refresh scheduling and retry configuration.

use std::str::FromStr;
use std::time::Duration;

use log::warn;

use crate::locator::CycleOutcome;

const NORMAL_INTERVAL_VAR: &str = "LODESTAR_LOCATOR_NORMAL_INTERVAL_SECS";
const OFFLINE_INTERVAL_VAR: &str = "LODESTAR_LOCATOR_OFFLINE_INTERVAL_SECS";
const RETRY_COUNT_VAR: &str = "LODESTAR_LOCATOR_RETRY_COUNT";

/// Delay after a fully-healthy refresh cycle.
const DEFAULT_NORMAL_INTERVAL_SECS: u64 = 5 * 60;

/// Delay after a cycle in which at least one environment failed. Shorter
/// than the normal interval so recovery is picked up quickly once
/// connectivity returns.
const DEFAULT_OFFLINE_INTERVAL_SECS: u64 = 10;

/// Discovery attempts per environment within one cycle.
const DEFAULT_RETRY_COUNT: u32 = 3;

/// Configuration for address refresh scheduling and retry.
///
/// The two intervals are independent values: nothing in the scheduler
/// assumes which of them is larger.
#[derive(Clone, Debug)]
pub struct LocatorConfig {
    /// Delay before the next cycle after every environment succeeded.
    pub normal_interval: Duration,
    /// Delay before the next cycle after any environment failed.
    pub offline_interval: Duration,
    /// Discovery attempts per environment within one cycle.
    pub retry_count: u32,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            normal_interval: Duration::from_secs(DEFAULT_NORMAL_INTERVAL_SECS),
            offline_interval: Duration::from_secs(DEFAULT_OFFLINE_INTERVAL_SECS),
            retry_count: DEFAULT_RETRY_COUNT,
        }
    }
}

impl LocatorConfig {
    /// Load configuration from `LODESTAR_LOCATOR_*` environment variables,
    /// falling back to the defaults for absent or unparseable values.
    pub fn from_env() -> Self {
        Self {
            normal_interval: Duration::from_secs(parse_or(
                NORMAL_INTERVAL_VAR,
                std::env::var(NORMAL_INTERVAL_VAR).ok(),
                DEFAULT_NORMAL_INTERVAL_SECS,
            )),
            offline_interval: Duration::from_secs(parse_or(
                OFFLINE_INTERVAL_VAR,
                std::env::var(OFFLINE_INTERVAL_VAR).ok(),
                DEFAULT_OFFLINE_INTERVAL_SECS,
            )),
            retry_count: parse_or(
                RETRY_COUNT_VAR,
                std::env::var(RETRY_COUNT_VAR).ok(),
                DEFAULT_RETRY_COUNT,
            ),
        }
    }

    /// Delay until the next cycle for the given outcome.
    pub fn interval_for(&self, outcome: CycleOutcome) -> Duration {
        match outcome {
            CycleOutcome::Healthy => self.normal_interval,
            CycleOutcome::Degraded => self.offline_interval,
        }
    }
}

/// Parse a configuration value, warning and falling back to `default` when
/// the raw value is present but unparseable.
fn parse_or<T: FromStr + Copy>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!("Ignoring unparseable value for {}: '{}'", name, value);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_portal_configuration() {
        let config = LocatorConfig::default();
        assert_eq!(config.normal_interval, Duration::from_secs(300));
        assert_eq!(config.offline_interval, Duration::from_secs(10));
        assert_eq!(config.retry_count, 3);
    }

    #[test]
    fn interval_selection_by_outcome() {
        let config = LocatorConfig {
            normal_interval: Duration::from_secs(120),
            offline_interval: Duration::from_secs(5),
            retry_count: 3,
        };
        assert_eq!(
            config.interval_for(CycleOutcome::Healthy),
            Duration::from_secs(120)
        );
        assert_eq!(
            config.interval_for(CycleOutcome::Degraded),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn parse_or_accepts_valid_values() {
        assert_eq!(parse_or("TEST", Some("42".to_string()), 7u64), 42);
    }

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or("TEST", Some("soon".to_string()), 7u64), 7);
    }

    #[test]
    fn parse_or_falls_back_on_absent() {
        assert_eq!(parse_or("TEST", None, 7u32), 7);
    }
}
