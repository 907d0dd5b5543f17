//! End-to-end tick: animation advance, health bars, label, flush

mod common;

use common::{Call, GridSurface};
use pawlink_core::config::DeviceConfig;
use pawlink_core::health::{split, HealthEventQueue, HealthEvents, HealthModel};
use pawlink_core::scheduler::Scheduler;
use pawlink_core::sprite::{assets::HAPPY, SpriteStore};
use pawlink_core::state::Pet;
use pawlink_core::traits::{ManualClock, PetState};

#[test]
fn test_full_redraw_cycle() {
    let config = DeviceConfig::default();
    let store = SpriteStore::with_builtin();
    let clock = ManualClock::new(0);
    let mut health = HealthModel::new(&config.health, 0);

    // Contact seen at 0 s, wireless sync at 15 s, last frame at 14.5 s
    health.reset_contact(0);
    health.reset_wireless(15_000);
    clock.set(15_000 - u64::from(config.animation.frame_interval_ms));
    let mut scheduler = Scheduler::new(&clock, &store, &config);
    clock.set(15_000);

    let mut surface = GridSurface::new(128, 64);
    let mut pet = Pet::new("happy");

    let outcome = scheduler.tick(&mut surface, &mut pet, Some(&mut health));

    assert!(outcome.advanced);
    assert!(outcome.redrawn);
    assert!(!pet.is_dirty());
    assert_eq!(pet.frame_index(), 1);

    assert_eq!(
        surface.call_summary(),
        vec![
            Call::Fill,
            Call::Pixel,
            Call::Text("HAPPY".to_string(), 0, 56),
            Call::Flush,
        ]
    );

    // Second frame of "happy", centered
    let sprite_pixels = HAPPY[1].lit_pixels().count();
    assert_eq!(surface.count_in(56, 24, 16, 16), sprite_pixels);

    // Wireless bar full, contact bar half
    assert_eq!(surface.count_in(1, 16, 4, 32), 32 * 4);
    assert_eq!(surface.count_in(123, 16, 4, 32), 16 * 4);
    assert_eq!(surface.count_in(123, 32, 4, 16), 16 * 4);
}

#[test]
fn test_queued_events_reach_the_bars() {
    let config = DeviceConfig::default();
    let store = SpriteStore::with_builtin();
    let clock = ManualClock::new(0);
    let mut scheduler = Scheduler::new(&clock, &store, &config);
    let mut health = HealthModel::new(&config.health, 0);
    let mut queue = HealthEventQueue::<4>::new();
    let (mut tx, mut rx) = split(&mut queue);
    let mut surface = GridSurface::new(128, 64);
    let mut pet = Pet::new("idle");

    // Nothing heard for 20 s: wireless is empty
    clock.set(20_000);
    scheduler.tick(&mut surface, &mut pet, Some(&mut health));
    assert_eq!(surface.count_in(1, 16, 4, 32), 0);

    // A sync arrives, the pet is poked, and the next tick picks both up
    tx.reset_wireless(20_000);
    assert_eq!(health.apply_events(&mut rx), 1);
    pet.mark_dirty();
    scheduler.tick(&mut surface, &mut pet, Some(&mut health));

    assert_eq!(surface.count_in(1, 16, 4, 32), 32 * 4);
    assert_eq!(health.wireless_percent(), 100);
}

#[test]
fn test_state_change_redraws_with_new_label() {
    let config = DeviceConfig::default();
    let store = SpriteStore::with_builtin();
    let clock = ManualClock::new(0);
    let mut scheduler = Scheduler::new(&clock, &store, &config);
    let mut surface = GridSurface::new(128, 64);
    let mut pet = Pet::new("idle");

    scheduler.tick(&mut surface, &mut pet, None);
    pet.set_state("sleeping");
    surface.calls.clear();
    scheduler.tick(&mut surface, &mut pet, None);

    assert!(surface
        .calls
        .contains(&Call::Text("SLEEPING".to_string(), 0, 56)));
}
