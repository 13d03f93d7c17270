//! Observability events for the refresh pipeline.
//!
//! The locator reports refresh progress and failures through a sink trait.
//! Sinks translate events into platform-specific telemetry; emission is
//! best-effort and must never block or fail the refresh path.

mod locator_event;
mod sink;

pub use locator_event::*;
pub use sink::*;
