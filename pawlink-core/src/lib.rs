//! Board-agnostic core logic for the Pawlink companion display
//!
//! This crate contains everything that decides what the screen shows,
//! independent of the panel, radio, or contact sensor hardware:
//!
//! - Capability traits (drawing surface, clock, pet state)
//! - Health decay model for the wireless and contact links
//! - Sprite store with the built-in creature animations
//! - Bitmap compositor (packed 1-bit blits, icons, health bars)
//! - Animation and redraw scheduler
//! - Configuration type definitions
//!
//! Everything here is single-threaded and polled: the owning loop calls
//! [`Scheduler::tick`](scheduler::Scheduler::tick) repeatedly and all
//! timing is derived from clock deltas.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod health;
pub mod render;
pub mod scheduler;
pub mod sprite;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;
