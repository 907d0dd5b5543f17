//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::collections::BTreeSet;

use pawlink_core::traits::{PixelColor, Surface};

/// Drawing call seen by a [`GridSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fill,
    Pixel,
    Text(String, i32, i32),
    Flush,
}

/// In-memory surface keeping lit pixels and the call order
pub struct GridSurface {
    width: u16,
    height: u16,
    lit: BTreeSet<(u16, u16)>,
    pub calls: Vec<Call>,
}

impl GridSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            lit: BTreeSet::new(),
            calls: Vec::new(),
        }
    }

    pub fn lit(&self) -> &BTreeSet<(u16, u16)> {
        &self.lit
    }

    /// Lit pixels in column range `x..x + width`, row range `y..y + height`
    pub fn count_in(&self, x: u16, y: u16, width: u16, height: u16) -> usize {
        self.lit
            .iter()
            .filter(|&&(px, py)| px >= x && px < x + width && py >= y && py < y + height)
            .count()
    }

    /// Drawing calls with consecutive pixel writes collapsed into one
    pub fn call_summary(&self) -> Vec<Call> {
        let mut summary: Vec<Call> = Vec::new();
        for call in &self.calls {
            if *call == Call::Pixel && summary.last() == Some(&Call::Pixel) {
                continue;
            }
            summary.push(call.clone());
        }
        summary
    }
}

impl Surface for GridSurface {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn fill(&mut self, color: PixelColor) {
        self.lit.clear();
        if color.is_on() {
            for y in 0..self.height {
                for x in 0..self.width {
                    self.lit.insert((x, y));
                }
            }
        }
        self.calls.push(Call::Fill);
    }

    fn set_pixel(&mut self, x: u16, y: u16, color: PixelColor) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) off surface");
        if color.is_on() {
            self.lit.insert((x, y));
        } else {
            self.lit.remove(&(x, y));
        }
        self.calls.push(Call::Pixel);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, _color: PixelColor) {
        self.calls.push(Call::Text(text.to_string(), x, y));
    }

    fn flush(&mut self) {
        self.calls.push(Call::Flush);
    }
}

/// Pack a row-major boolean matrix, 8 pixels per byte, LSB first
pub fn pack(width: usize, pixels: &[bool]) -> Vec<u8> {
    let row_bytes = width.div_ceil(8);
    let mut data = vec![0u8; row_bytes * (pixels.len() / width)];
    for (index, _) in pixels.iter().enumerate().filter(|&(_, &lit)| lit) {
        let (x, y) = (index % width, index / width);
        data[y * row_bytes + x / 8] |= 1 << (x % 8);
    }
    data
}
