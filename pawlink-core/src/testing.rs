//! Test doubles shared by the unit tests

use crate::traits::{PetState, PixelColor, Surface};

/// One call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Fill(PixelColor),
    Pixel(u16, u16, PixelColor),
    Text(String, i32, i32),
    Flush,
}

/// Surface that keeps both the call log and the resulting pixels
pub struct RecordingSurface {
    width: u16,
    height: u16,
    pixels: Vec<bool>,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; usize::from(width) * usize::from(height)],
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn is_lit(&self, x: u16, y: u16) -> bool {
        self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    /// Number of lit pixels on the whole surface
    pub fn pixel_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Number of lit pixels inside a rectangle
    pub fn lit_in_rect(&self, x: u16, y: u16, width: u16, height: u16) -> usize {
        let mut count = 0;
        for py in y..(y + height).min(self.height) {
            for px in x..(x + width).min(self.width) {
                if self.is_lit(px, py) {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn texts(&self) -> Vec<(String, i32, i32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Text(s, x, y) => Some((s.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn fill(&mut self, color: PixelColor) {
        self.pixels.fill(color.is_on());
        self.calls.push(SurfaceCall::Fill(color));
    }

    fn set_pixel(&mut self, x: u16, y: u16, color: PixelColor) {
        assert!(x < self.width && y < self.height, "unclipped pixel ({x}, {y})");
        self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)] = color.is_on();
        self.calls.push(SurfaceCall::Pixel(x, y, color));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, _color: PixelColor) {
        self.calls.push(SurfaceCall::Text(String::from(text), x, y));
    }

    fn flush(&mut self) {
        self.calls.push(SurfaceCall::Flush);
    }
}

/// Minimal creature state with a fixed name
pub struct FixedPet {
    pub name: &'static str,
    pub frame: u32,
    pub dirty: bool,
}

impl FixedPet {
    pub fn new(name: &'static str, dirty: bool) -> Self {
        Self {
            name,
            frame: 0,
            dirty,
        }
    }
}

impl PetState for FixedPet {
    fn state_name(&self) -> &str {
        self.name
    }

    fn frame_index(&self) -> u32 {
        self.frame
    }

    fn advance_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
