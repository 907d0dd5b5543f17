//! Frame buffer and panel abstraction for the Pawlink status display
//!
//! This crate provides:
//! - `FrameBuffer`, a 128x64 1-bit buffer in SSD1306/SH1106 page layout that
//!   implements the renderer's `Surface` trait
//! - `PanelBackend` trait for whatever finally shows the pixels (an I2C
//!   OLED, a terminal, a test recorder)
//!
//! # Architecture
//!
//! The renderer draws into the back buffer. `Surface::flush` presents it by
//! copying it to the front buffer, and the owner then pushes the front
//! buffer page by page with [`FrameBuffer::push_to`]. Drawing never touches
//! the bus, so a slow panel only delays presentation.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod framebuffer;
mod graphics;

// Re-export key types
pub use backend::{DisplayError, PanelBackend};
pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
