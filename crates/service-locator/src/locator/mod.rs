//! The admin service address locator.
//!
//! Ties discovery, retry, the address cache, and candidate selection
//! together. The refresh scheduler drives [`AdminServiceLocator::refresh_cycle`];
//! downstream admin-tier clients call
//! [`AddressLocatorTrait::service_list`] to pick a target instance.

mod cycle;
mod service;

pub use cycle::{CycleOutcome, CycleReport};
pub use service::{AddressLocatorTrait, AdminServiceLocator};
