//! Overflow reporting task
//!
//! Edges that arrive while the bridge is full are dropped in interrupt
//! context. This task surfaces the count periodically.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::PIN_EVENTS;

/// Report interval in seconds
pub const REPORT_INTERVAL_SECS: u64 = 10;

/// Drop report task - logs events lost to a full bridge
#[embassy_executor::task]
pub async fn drop_report_task() {
    info!("Drop report task started");

    let mut ticker = Ticker::every(Duration::from_secs(REPORT_INTERVAL_SECS));

    loop {
        ticker.next().await;

        let dropped = PIN_EVENTS.take_dropped();
        if dropped > 0 {
            warn!(
                "{} pin events dropped in the last {}s (queue full)",
                dropped, REPORT_INTERVAL_SECS
            );
        } else {
            trace!("No pin events dropped");
        }
    }
}
