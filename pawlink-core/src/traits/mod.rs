//! Capability traits
//!
//! These traits define the interface between the rendering core and the
//! collaborators it does not own: the panel, the clock, and the behavior
//! engine's creature state.

pub mod clock;
pub mod display;
pub mod pet;

pub use clock::{Clock, ManualClock};
pub use display::{PixelColor, Surface, SurfaceExt};
pub use pet::PetState;
