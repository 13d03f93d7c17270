//! Admin service discovery.
//!
//! One discovery call fetches the current admin instances for one
//! environment from its meta server. The trait seam keeps retry and cycle
//! logic testable without network I/O.

mod http;
mod traits;

pub use http::HttpServiceDiscovery;
pub use traits::ServiceDiscovery;
