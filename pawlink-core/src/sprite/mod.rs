//! Sprite frames and the state-to-animation store

pub mod assets;
pub mod frame;
pub mod store;

pub use frame::{pack_rows, FrameError, SpriteFrame};
pub use store::{Frames, SpriteError, SpriteStore, FALLBACK_FRAME, FALLBACK_SIZE, MAX_STATES};
