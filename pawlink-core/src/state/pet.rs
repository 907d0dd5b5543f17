//! Reference creature state

use crate::traits::PetState;

/// Creature state holder for hosts without their own behavior engine
///
/// Starts dirty so the first tick draws. Any visible change (new state,
/// next animation frame) marks it dirty again.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pet {
    state: &'static str,
    frame: u32,
    dirty: bool,
}

impl Pet {
    /// Create a pet in `state`
    pub const fn new(state: &'static str) -> Self {
        Self {
            state,
            frame: 0,
            dirty: true,
        }
    }

    /// Switch to another state
    ///
    /// Restarts the animation. Setting the current state again is a no-op.
    pub fn set_state(&mut self, state: &'static str) {
        if self.state == state {
            return;
        }
        debug!("pet state {} -> {}", self.state, state);
        self.state = state;
        self.frame = 0;
        self.dirty = true;
    }

    /// Request a redraw without changing anything
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Current state name
    pub const fn state(&self) -> &'static str {
        self.state
    }
}

impl PetState for Pet {
    fn state_name(&self) -> &str {
        self.state
    }

    fn frame_index(&self) -> u32 {
        self.frame
    }

    fn advance_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
