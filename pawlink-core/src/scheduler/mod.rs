//! Animation and redraw scheduler

pub mod animator;

pub use animator::{Scheduler, TickOutcome};
