//! Pinwatch - GPIO Edge Monitor Firmware
//!
//! Watches the pins listed in pinwatch.toml and logs every level change.
//!
//! Edge relays run on a high-priority interrupt executor and only push
//! into the event bridge. The dispatch worker runs in thread mode and
//! calls the handler once per event, in arrival order.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use {defmt_rtt as _, panic_probe as _};

use pinwatch_core::{Level, PinId, PinMonitor};
use pinwatch_hal_rp2040::{PinBank, Rp2040Edges};

use crate::channels::PIN_EVENTS;
use crate::tasks::{Handler, Producer};

mod channels;
mod config;
mod tasks;

/// Executor for the edge relays
static EXECUTOR_EDGES: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_EDGES.on_interrupt()
}

/// Handler invoked for every pin event
fn log_pin_event(pin: PinId, level: Level) {
    info!("Pin {} changed to {}", pin, level);
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pinwatch firmware starting...");

    let p = embassy_rp::init(Default::default());
    let mut edges: Rp2040Edges<Producer> = Rp2040Edges::new(PinBank::new(p));

    let mut monitor = PinMonitor::new(&PIN_EVENTS);
    monitor
        .initialize(&mut edges, &config::WATCHED_PINS, log_pin_event as Handler)
        .unwrap_or_else(|e| defmt::panic!("Failed to initialize pin monitor: {}", e));

    // Relays must run above thread mode so producers never wait on the handler
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let edge_spawner = EXECUTOR_EDGES.start(interrupt::SWI_IRQ_1);

    for relay in edges.take_relays() {
        debug!("Spawning edge relay for {}", relay.pin());
        edge_spawner.spawn(tasks::edge_relay_task(relay)).unwrap();
    }

    let worker = monitor
        .start()
        .unwrap_or_else(|e| defmt::panic!("Failed to start pin monitor: {}", e));

    spawner.spawn(tasks::dispatch_task(worker)).unwrap();
    spawner.spawn(tasks::drop_report_task()).unwrap();

    info!(
        "Watching {} pins, firmware running",
        config::WATCHED_PINS.len()
    );

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
