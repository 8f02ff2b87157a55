//! Embassy async tasks
//!
//! Edge relays run on the interrupt executor; everything else runs on the
//! thread-mode executor.

pub mod dispatch;
pub mod drop_report;
pub mod edge_relay;

pub use dispatch::{dispatch_task, Handler, Worker};
pub use drop_report::drop_report_task;
pub use edge_relay::{edge_relay_task, Producer};
