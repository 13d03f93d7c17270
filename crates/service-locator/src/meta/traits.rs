use crate::errors::Result;
use crate::models::Environment;

/// Resolves the meta server domain for an environment.
///
/// Implementations must be cheap and non-blocking: resolution runs on the
/// refresh path, once per discovery attempt.
pub trait MetaDomainResolver: Send + Sync {
    /// Base URL of the environment's meta server (scheme and authority,
    /// no trailing slash).
    ///
    /// Returns [`LocatorError::MetaDomainMissing`](crate::errors::LocatorError::MetaDomainMissing)
    /// when no domain is configured for `env`.
    fn domain(&self, env: &Environment) -> Result<String>;
}
