//! Dispatch task
//!
//! Hosts the single dispatch worker. Handler calls happen here, in thread
//! mode, where they may take as long as they need.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use pinwatch_core::{DispatchWorker, Level, PinId, EVENT_QUEUE_CAPACITY};

/// Event handler type used by the firmware
pub type Handler = fn(PinId, Level);

/// Dispatch worker over the shared bridge
pub type Worker = DispatchWorker<'static, CriticalSectionRawMutex, Handler, EVENT_QUEUE_CAPACITY>;

/// Dispatch task - delivers queued pin events to the handler
#[embassy_executor::task]
pub async fn dispatch_task(mut worker: Worker) {
    info!(
        "Dispatch task started for {} pins",
        worker.registry().len()
    );
    worker.run().await
}
