//! Double-buffered page frame buffer

use pawlink_core::traits::{PixelColor, Surface};

use crate::backend::{DisplayError, PanelBackend};
use crate::graphics;

/// Display width in pixels
pub const WIDTH: usize = 128;
/// Display height in pixels
pub const HEIGHT: usize = 64;
/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

type Pages = [[u8; WIDTH]; PAGES];

/// 1bpp frame buffer with a drawing (back) and a presented (front) copy
///
/// Bit mapping: byte `x` of page `p` holds column `x`, bit `n` is row
/// `p * 8 + n`.
#[derive(Clone)]
pub struct FrameBuffer {
    back: Pages,
    front: Pages,
    /// Number of frames presented so far
    presented: u32,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a dark frame buffer
    pub const fn new() -> Self {
        Self {
            back: [[0; WIDTH]; PAGES],
            front: [[0; WIDTH]; PAGES],
            presented: 0,
        }
    }

    /// Set a pixel in the back buffer
    ///
    /// Returns `true` when the pixel is in bounds.
    pub fn set(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let mask = 1u8 << (y % 8);
        let byte = &mut self.back[y / 8][x];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        true
    }

    /// Read a pixel from the back buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        read(&self.back, x, y)
    }

    /// Read a pixel from the last presented frame
    pub fn presented_pixel(&self, x: usize, y: usize) -> Option<bool> {
        read(&self.front, x, y)
    }

    /// Clear the back buffer to dark (`on = false`) or lit (`on = true`)
    pub fn clear(&mut self, on: bool) {
        let value = if on { 0xFF } else { 0x00 };
        for page in self.back.iter_mut() {
            page.fill(value);
        }
    }

    /// Copy the back buffer to the front buffer
    pub fn present(&mut self) {
        self.front = self.back;
        self.presented = self.presented.wrapping_add(1);
    }

    /// Number of frames presented so far
    pub fn frames_presented(&self) -> u32 {
        self.presented
    }

    /// One page of the presented frame
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.front.get(page)
    }

    /// Send the presented frame to a panel, top page first
    pub fn push_to<B: PanelBackend + ?Sized>(&self, panel: &mut B) -> Result<(), DisplayError> {
        if !panel.is_ready() {
            return Err(DisplayError::NotReady);
        }

        for (index, page) in (0u8..).zip(self.front.iter()) {
            panel.write_page(index, page)?;
        }
        Ok(())
    }
}

fn read(pages: &Pages, x: usize, y: usize) -> Option<bool> {
    if x >= WIDTH || y >= HEIGHT {
        return None;
    }
    Some(pages[y / 8][x] & (1 << (y % 8)) != 0)
}

impl Surface for FrameBuffer {
    fn size(&self) -> (u16, u16) {
        (WIDTH as u16, HEIGHT as u16)
    }

    fn fill(&mut self, color: PixelColor) {
        self.clear(color.is_on());
    }

    fn set_pixel(&mut self, x: u16, y: u16, color: PixelColor) {
        self.set(usize::from(x), usize::from(y), color.is_on());
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: PixelColor) {
        graphics::draw_text(self, text, x, y, color);
    }

    fn flush(&mut self) {
        self.present();
    }
}
