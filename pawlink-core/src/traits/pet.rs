//! Creature state as seen by the renderer

/// Trait for the creature state owned by the behavior engine
///
/// The renderer reads the state name and frame counter, asks for the
/// frame to advance, and clears the dirty flag after a completed draw.
/// Setting the dirty flag is the implementor's job.
pub trait PetState {
    /// Name of the current state (sprite key, e.g. "happy")
    fn state_name(&self) -> &str;

    /// Free-running animation frame counter
    ///
    /// Wrap-around to the sequence length happens at sprite lookup.
    fn frame_index(&self) -> u32;

    /// Advance the animation frame counter by one
    fn advance_frame(&mut self);

    /// Check if a redraw is pending
    fn is_dirty(&self) -> bool;

    /// Mark the pending redraw as done
    fn clear_dirty(&mut self);
}
