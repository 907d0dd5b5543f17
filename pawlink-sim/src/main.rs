//! Pawlink host simulator
//!
//! Runs the display core against the wall clock: simulated radio syncs and
//! contact pulses feed the health queue, a small behavior engine picks the
//! creature's mood, and every presented frame is printed to the terminal.
//!
//! Usage: `pawlink-sim [CONFIG]` (defaults to `pawlink.toml`). Set
//! `RUST_LOG=debug` to see health and animation events.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use log::info;

use pawlink_core::health::{split, HealthEventQueue, HealthModel, HEALTH_QUEUE_SIZE};
use pawlink_core::scheduler::Scheduler;
use pawlink_core::sprite::SpriteStore;
use pawlink_core::state::Pet;
use pawlink_core::traits::Clock;
use pawlink_display::FrameBuffer;

mod clock;
mod config;
mod feeds;
mod mood;
mod terminal;

use crate::clock::SystemClock;
use crate::config::{SimFile, DEFAULT_PATH};
use crate::feeds::SignalFeeds;
use crate::terminal::TerminalPanel;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));
    let file = config::load(&path)?;

    info!("Pawlink simulator v{}", env!("CARGO_PKG_VERSION"));
    run(&file)
}

fn run(file: &SimFile) -> Result<()> {
    let device = file.device();
    let sim = &file.sim;

    let store = SpriteStore::with_builtin();
    let clock = SystemClock::new();
    let mut scheduler = Scheduler::new(&clock, &store, &device);

    let start_ms = clock.now_ms();
    let mut health = HealthModel::new(&device.health, start_ms);
    let mut queue = HealthEventQueue::<HEALTH_QUEUE_SIZE>::new();
    let (mut sender, mut receiver) = split(&mut queue);
    let mut feeds = SignalFeeds::new(sim, start_ms);

    let mut pet = Pet::new("idle");
    let mut framebuffer = FrameBuffer::new();
    let mut panel = TerminalPanel::new();

    let end_ms = (sim.duration_s > 0).then(|| start_ms + sim.duration_s * 1000);
    info!("running for {} s, tick {} ms", sim.duration_s, sim.tick_ms);

    loop {
        let now_ms = clock.now_ms();
        if end_ms.is_some_and(|end| now_ms >= end) {
            break;
        }

        // Drivers report into the queue; the loop owns the model
        feeds.poll(now_ms, &mut sender);
        health.apply_events(&mut receiver);

        health.update(now_ms);
        pet.set_state(mood::choose(&health));

        let outcome = scheduler.tick(&mut framebuffer, &mut pet, Some(&mut health));
        if outcome.redrawn && sim.render {
            framebuffer
                .push_to(&mut panel)
                .map_err(|e| anyhow!("panel write failed: {:?}", e))?;
            println!(
                "{}\n{:<10} wireless {:>3}%  contact {:>3}%",
                panel.render(),
                pet.state(),
                health.wireless_percent(),
                health.contact_percent()
            );
        }

        thread::sleep(Duration::from_millis(sim.tick_ms));
    }

    info!(
        "done: {} frames presented, {} health events dropped",
        framebuffer.frames_presented(),
        sender.dropped()
    );
    Ok(())
}
