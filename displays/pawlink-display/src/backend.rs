//! Panel backend trait
//!
//! Defines the interface for the device that shows a finished frame.

use crate::framebuffer::WIDTH;

/// Panel backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Panel not initialized or powered
    NotReady,
}

/// Panel backend trait
///
/// A page is one 8-pixel-tall strip of the display: byte `x` holds column
/// `x`, with bit `n` set for a lit pixel in row `page * 8 + n`. This is the
/// native write unit of SSD1306 and SH1106 controllers.
pub trait PanelBackend {
    /// Write one page of column bytes
    fn write_page(&mut self, page: u8, data: &[u8; WIDTH]) -> Result<(), DisplayError>;

    /// Check if the panel can accept data
    fn is_ready(&self) -> bool;
}
