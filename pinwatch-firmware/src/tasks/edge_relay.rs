//! Edge relay task
//!
//! One instance per watched pin. Spawned on the interrupt executor, so the
//! binding runs at interrupt priority and only pushes into the bridge.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use pinwatch_core::{EdgeProducer, EVENT_QUEUE_CAPACITY};
use pinwatch_hal_rp2040::{EdgeRelay, GPIO_COUNT};

/// Interrupt binding used on this board
pub type Producer = EdgeProducer<'static, CriticalSectionRawMutex, EVENT_QUEUE_CAPACITY>;

/// Edge relay task - forwards every edge on one pin to its producer
#[embassy_executor::task(pool_size = GPIO_COUNT)]
pub async fn edge_relay_task(relay: EdgeRelay<Producer>) {
    relay.run().await
}
