//! Lodestar Service Locator
//!
//! This crate discovers, caches, and periodically refreshes the admin-tier
//! service addresses of the Lodestar configuration portal, per deployment
//! environment, and hands out randomized candidate lists to callers that
//! need to reach that tier.
//!
//! # Overview
//!
//! Each environment has a meta server acting as its address-resolution
//! authority. A single background task periodically asks every environment's
//! meta server for the current admin instances (with a bounded retry budget
//! per environment) and replaces the cached snapshot on success. Callers
//! read through [`AddressLocatorTrait::service_list`], which returns a
//! shuffled copy of the snapshot — or an empty list, never an error.
//!
//! # Architecture
//!
//! ```text
//! +-------------------+     +--------------------+     +---------------------+
//! | RefreshScheduler  | --> |  ServiceDiscovery  | --> | MetaDomainResolver  |
//! | (one task, cycle) |     |  (GET /services/   |     | (env -> meta URL)   |
//! +-------------------+     |   admin, retried)  |     +---------------------+
//!          |                +--------------------+
//!          v
//! +-------------------+     +--------------------+
//! |   AddressCache    | --> | service_list(env)  |
//! | (env -> snapshot) |     | (shuffled copy)    |
//! +-------------------+     +--------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Environment`] - Deployment environment identifier
//! - [`ServiceInstance`] - One advertised admin-tier instance
//! - [`AdminServiceLocator`] - Refresh, cache, and selection service
//! - [`AddressCache`] - Concurrent per-environment snapshot store
//! - [`LocatorConfig`] - Intervals and retry budget
//! - [`LocatorEvent`] / [`LocatorEventSink`] - Observability seam

pub mod cache;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod events;
pub mod locator;
pub mod meta;
pub mod models;
pub mod scheduler;

// Re-export the public surface at the crate root
pub use cache::AddressCache;
pub use config::LocatorConfig;
pub use discovery::{HttpServiceDiscovery, ServiceDiscovery};
pub use errors::{LocatorError, Result};
pub use events::{LocatorEvent, LocatorEventSink, MockEventSink, NoOpEventSink};
pub use locator::{AddressLocatorTrait, AdminServiceLocator, CycleOutcome, CycleReport};
pub use meta::{MetaDomainResolver, StaticMetaDomainResolver};
pub use models::{Environment, ServiceInstance};
pub use scheduler::spawn_refresh_scheduler;
