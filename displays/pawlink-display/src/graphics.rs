//! embedded-graphics integration

use core::convert::Infallible;

use embedded_graphics::mono_font::{ascii::FONT_5X8, MonoTextStyle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    Pixel,
};
use pawlink_core::traits::PixelColor;

use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }

            let _ = self.set(point.x as usize, point.y as usize, color.is_on());
        }

        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

/// Draw `text` in the 5x8 font with its top-left corner at (`x`, `y`)
pub(crate) fn draw_text(fb: &mut FrameBuffer, text: &str, x: i32, y: i32, color: PixelColor) {
    let color = if color.is_on() {
        BinaryColor::On
    } else {
        BinaryColor::Off
    };
    let style = MonoTextStyle::new(&FONT_5X8, color);
    let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(fb);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawlink_core::traits::Surface;

    fn lit_count(fb: &FrameBuffer, x0: usize, y0: usize, x1: usize, y1: usize) -> usize {
        (y0..y1)
            .flat_map(|y| (x0..x1).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y) == Some(true))
            .count()
    }

    #[test]
    fn test_text_stays_in_its_cell() {
        let mut fb = FrameBuffer::new();
        Surface::draw_text(&mut fb, "HAPPY", 0, 56, PixelColor::On);

        let inside = lit_count(&fb, 0, 56, 25, 64);
        assert!(inside > 0);
        assert_eq!(lit_count(&fb, 0, 0, WIDTH, HEIGHT), inside);
    }

    #[test]
    fn test_text_clips_off_screen() {
        let mut fb = FrameBuffer::new();
        Surface::draw_text(&mut fb, "IDLE", -3, 60, PixelColor::On);
        assert!(lit_count(&fb, 0, 60, 20, 64) > 0);
        assert_eq!(lit_count(&fb, 0, 0, WIDTH, 60), 0);
    }

    #[test]
    fn test_draw_target_size() {
        let fb = FrameBuffer::new();
        assert_eq!(OriginDimensions::size(&fb), Size::new(128, 64));
    }
}
