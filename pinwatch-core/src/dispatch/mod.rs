//! Dispatch worker and handler interface
//!
//! The worker is the bridge's only consumer. It runs in task context, so
//! handlers may log, block on I/O or await nothing at all; they simply
//! delay the next event.

mod handler;
mod worker;

pub use handler::{EventHandler, HandlerFault};
pub use worker::{DispatchWorker, WorkerState};
