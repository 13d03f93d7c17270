//! Background refresh scheduler for admin service addresses.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::locator::{AddressLocatorTrait, AdminServiceLocator, CycleOutcome};

/// Spawn the background task that keeps the address cache fresh.
///
/// Exactly one cycle runs at a time: the task refreshes every environment,
/// then sleeps for the interval selected by the cycle outcome — the normal
/// interval after a healthy cycle, the offline interval after a degraded
/// one. The first cycle starts immediately.
///
/// The loop runs for the life of the process; abort the returned handle at
/// shutdown to stop rescheduling (any refresh in progress is abandoned).
pub fn spawn_refresh_scheduler(locator: Arc<AdminServiceLocator>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Admin service address refresh scheduler started");

        loop {
            let report = locator.refresh_cycle().await;
            let outcome = report.outcome();
            let delay = locator.config().interval_for(outcome);

            match outcome {
                CycleOutcome::Healthy => {
                    debug!("Refresh cycle healthy; next cycle in {:?}", delay);
                }
                CycleOutcome::Degraded => {
                    warn!(
                        "Refresh cycle degraded ({} environment(s) failed); next cycle in {:?}",
                        report.failed().len(),
                        delay
                    );
                }
            }

            tokio::time::sleep(delay).await;
        }
    })
}
