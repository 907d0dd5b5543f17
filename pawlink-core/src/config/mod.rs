//! Configuration types
//!
//! Display geometry, animation timing, health timeouts, and HUD layout.

pub mod types;

pub use types::*;
