//! Deployment environment identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A deployment environment the portal can target with admin operations.
///
/// Environments are opaque, case-insensitive identifiers such as "DEV",
/// "UAT", or "PRO". The full set is fixed at process start and supplied by
/// the portal configuration; this type only normalizes and compares them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment(String);

impl Environment {
    /// Create an environment from a raw identifier.
    ///
    /// The identifier is trimmed and normalized to uppercase so that
    /// "dev" and "DEV " name the same environment.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_uppercase())
    }

    /// The normalized identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse an ordered, comma-separated environment list ("DEV,UAT,PRO").
    ///
    /// Blank entries are skipped and duplicates are dropped; the order of
    /// first appearance is preserved.
    pub fn parse_list(raw: &str) -> Vec<Environment> {
        let mut environments = Vec::new();
        for part in raw.split(',') {
            if part.trim().is_empty() {
                continue;
            }
            let env = Environment::new(part);
            if !environments.contains(&env) {
                environments.push(env);
            }
        }
        environments
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Environment {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
