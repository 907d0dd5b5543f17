//! Sprite store
//!
//! Maps creature state names to their animation frames. The store is
//! created once at startup and passed by reference to the scheduler.

use heapless::LinearMap;

use super::assets::BUILTIN_SPRITES;
use super::frame::SpriteFrame;

/// Maximum number of distinct states
pub const MAX_STATES: usize = 16;

/// Fallback frame edge length (pixels)
pub const FALLBACK_SIZE: u16 = 32;

const FALLBACK_DATA: [u8; SpriteFrame::packed_len(FALLBACK_SIZE, FALLBACK_SIZE)] =
    [0xFF; SpriteFrame::packed_len(FALLBACK_SIZE, FALLBACK_SIZE)];

/// Frame shown for states with no registered sprite: a fully lit 32x32 square
pub const FALLBACK_FRAME: SpriteFrame =
    SpriteFrame::from_static(FALLBACK_SIZE, FALLBACK_SIZE, &FALLBACK_DATA);

/// Sprite registration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpriteError {
    /// An empty frame sequence was supplied
    EmptySequence,
    /// No room for another state
    StoreFull,
}

/// The frames of one state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frames {
    /// A still image
    Single(SpriteFrame),
    /// A looping animation
    Sequence(&'static [SpriteFrame]),
}

impl Frames {
    /// Number of frames
    pub const fn len(&self) -> usize {
        match self {
            Frames::Single(_) => 1,
            Frames::Sequence(frames) => frames.len(),
        }
    }

    /// Check if there are no frames
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a frame, wrapping the index to the sequence length
    ///
    /// Returns `None` only for an empty sequence.
    pub fn frame(&self, index: u32) -> Option<SpriteFrame> {
        match self {
            Frames::Single(frame) => Some(*frame),
            Frames::Sequence(frames) if frames.is_empty() => None,
            Frames::Sequence(frames) => Some(frames[index as usize % frames.len()]),
        }
    }
}

impl From<SpriteFrame> for Frames {
    fn from(frame: SpriteFrame) -> Self {
        Frames::Single(frame)
    }
}

impl From<&'static [SpriteFrame]> for Frames {
    fn from(frames: &'static [SpriteFrame]) -> Self {
        Frames::Sequence(frames)
    }
}

impl<const N: usize> From<&'static [SpriteFrame; N]> for Frames {
    fn from(frames: &'static [SpriteFrame; N]) -> Self {
        Frames::Sequence(frames)
    }
}

/// State name to frames mapping
#[derive(Debug, Clone, Default)]
pub struct SpriteStore {
    states: LinearMap<&'static str, Frames, MAX_STATES>,
}

impl SpriteStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            states: LinearMap::new(),
        }
    }

    /// Create a store holding the built-in animations
    pub fn with_builtin() -> Self {
        let mut store = Self::new();
        for &(state, frames) in BUILTIN_SPRITES {
            // register() logs the failure; the table fits MAX_STATES
            let _ = store.register(state, frames);
        }
        store
    }

    /// Get the frame to show for `state` at animation counter `frame_index`
    ///
    /// Unknown states get [`FALLBACK_FRAME`]. Never fails.
    pub fn get(&self, state: &str, frame_index: u32) -> SpriteFrame {
        match self.states.get(state).and_then(|frames| frames.frame(frame_index)) {
            Some(frame) => frame,
            None => {
                debug!("no sprite for state '{}', using fallback", state);
                FALLBACK_FRAME
            }
        }
    }

    /// Set the frames for a state, replacing any existing ones
    pub fn register(
        &mut self,
        state: &'static str,
        frames: impl Into<Frames>,
    ) -> Result<(), SpriteError> {
        let frames = frames.into();
        if frames.is_empty() {
            warn!("refusing empty sprite sequence for '{}'", state);
            return Err(SpriteError::EmptySequence);
        }

        match self.states.insert(state, frames) {
            Ok(_) => {
                info!("registered {} frame(s) for '{}'", frames.len(), state);
                Ok(())
            }
            Err(_) => {
                warn!("sprite store full, cannot add '{}'", state);
                Err(SpriteError::StoreFull)
            }
        }
    }

    /// Number of frames registered for a state
    pub fn frame_count(&self, state: &str) -> Option<usize> {
        self.states.get(state).map(Frames::len)
    }

    /// Check if a state has registered frames
    pub fn contains(&self, state: &str) -> bool {
        self.states.get(state).is_some()
    }

    /// Number of registered states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if no states are registered
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
