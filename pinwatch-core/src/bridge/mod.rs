//! Event bridge between interrupt and task context
//!
//! ```text
//! Interrupt context          EventBridge            Task context
//! ─────────────────          ───────────            ────────────
//!
//! EdgeProducer::on_edge ──▶ [E0][E1]..[En] ──▶ DispatchWorker
//! read level, try_send       bounded FIFO          blocking ok
//! never blocks               drops when full
//! ```

mod producer;
mod queue;

pub use producer::EdgeProducer;
pub use queue::EventBridge;
