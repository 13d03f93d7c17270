//! Error types for admin service address discovery.

use thiserror::Error;

use crate::models::Environment;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, LocatorError>;

/// Errors that can occur while discovering admin service addresses.
///
/// None of these are fatal: a failed discovery leaves the previous cached
/// snapshot in place and drives the refresh scheduler into its offline
/// cadence. Callers of `service_list` never see them.
#[derive(Error, Debug)]
pub enum LocatorError {
    /// A network-level failure while calling the meta server:
    /// connect error, timeout, or an unparseable response body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The meta server answered with a non-success HTTP status.
    #[error("Meta server returned status {status} for environment {env}")]
    UnexpectedStatus {
        /// The environment being refreshed.
        env: Environment,
        /// The HTTP status code received.
        status: u16,
    },

    /// The meta server answered with an empty service list.
    ///
    /// Counts as a failed attempt so that a stale-but-present snapshot is
    /// never replaced by an empty one.
    #[error("Empty admin service list for environment {0}")]
    EmptyServiceList(Environment),

    /// No meta server domain is configured for the environment.
    #[error("No meta server domain configured for environment {0}")]
    MetaDomainMissing(Environment),
}

impl LocatorError {
    /// Whether another attempt within the same refresh cycle can succeed.
    ///
    /// Network failures, unexpected statuses, and empty responses are
    /// transient. A missing meta domain is a configuration gap that cannot
    /// resolve itself mid-cycle, so the retry budget is not spent on it.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::UnexpectedStatus { .. } | Self::EmptyServiceList(_) => true,
            Self::MetaDomainMissing(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_are_retryable() {
        let error = LocatorError::UnexpectedStatus {
            env: Environment::new("DEV"),
            status: 503,
        };
        assert!(error.is_retryable());

        let error = LocatorError::EmptyServiceList(Environment::new("DEV"));
        assert!(error.is_retryable());
    }

    #[test]
    fn missing_meta_domain_is_not_retryable() {
        let error = LocatorError::MetaDomainMissing(Environment::new("PRO"));
        assert!(!error.is_retryable());
    }

    #[test]
    fn error_display() {
        let error = LocatorError::UnexpectedStatus {
            env: Environment::new("UAT"),
            status: 502,
        };
        assert_eq!(
            format!("{}", error),
            "Meta server returned status 502 for environment UAT"
        );

        let error = LocatorError::EmptyServiceList(Environment::new("DEV"));
        assert_eq!(
            format!("{}", error),
            "Empty admin service list for environment DEV"
        );
    }
}
