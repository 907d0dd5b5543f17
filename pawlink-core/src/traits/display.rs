//! Drawing surface trait for the status display

/// Binary pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelColor {
    /// Pixel dark
    #[default]
    Off,
    /// Pixel illuminated
    On,
}

impl PixelColor {
    /// Check if the pixel is illuminated
    pub const fn is_on(self) -> bool {
        matches!(self, PixelColor::On)
    }

    /// Map a 0/1 color value (anything non-zero is lit)
    pub const fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            PixelColor::Off
        } else {
            PixelColor::On
        }
    }
}

/// Trait for the monochrome drawing surface
///
/// This trait abstracts the panel driver. Coordinates are zero-based with
/// the origin at the top-left corner. All calls are synchronous and cannot
/// fail from the renderer's point of view; the driver reports its own
/// faults out of band.
pub trait Surface {
    /// Get the surface dimensions as (width, height) in pixels
    fn size(&self) -> (u16, u16);

    /// Fill the entire surface with one color
    fn fill(&mut self, color: PixelColor);

    /// Set a single pixel
    ///
    /// Callers only pass in-bounds coordinates; see
    /// [`SurfaceExt::plot`] for the clipping variant.
    fn set_pixel(&mut self, x: u16, y: u16, color: PixelColor);

    /// Draw a text string with its top-left corner at (`x`, `y`)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: PixelColor);

    /// Present everything drawn since the last flush
    fn flush(&mut self);
}

/// Helper trait for clipped drawing
pub trait SurfaceExt: Surface {
    /// Check if a signed coordinate lies on the surface
    fn contains(&self, x: i32, y: i32) -> bool {
        let (width, height) = self.size();
        x >= 0 && y >= 0 && x < i32::from(width) && y < i32::from(height)
    }

    /// Set a pixel, silently skipping coordinates off the surface
    ///
    /// Returns `true` if the pixel was drawn.
    fn plot(&mut self, x: i32, y: i32, color: PixelColor) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        // Both coordinates are inside a u16-sized surface here
        self.set_pixel(x as u16, y as u16, color);
        true
    }
}

// Blanket implementation for all Surface types
impl<T: Surface + ?Sized> SurfaceExt for T {}
