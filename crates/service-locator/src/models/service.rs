//! Admin service instance wire type.

use serde::{Deserialize, Serialize};

/// One admin-tier instance as advertised by an environment's meta server.
///
/// The discovery endpoint returns a JSON array of these objects with
/// camelCase keys:
///
/// ```json
/// {
///   "appName": "lodestar-adminservice",
///   "instanceId": "10.32.21.22:8090",
///   "homepageUrl": "http://10.32.21.22:8090/"
/// }
/// ```
///
/// Instances are immutable values; a fresh list replaces the previous one
/// as a whole, never instance by instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstance {
    /// Logical application name of the advertised service.
    pub app_name: String,
    /// Unique instance identifier, typically `host:port`.
    pub instance_id: String,
    /// Base URL callers use to reach this instance.
    pub homepage_url: String,
}
