//! Bitmap compositor
//!
//! Turns packed sprite frames, icon glyphs, and health values into pixel
//! calls on a [`Surface`]. Everything is clipped against the surface
//! bounds; pixels that fall off the edge are skipped, never wrapped.

use heapless::String;

use super::icons::{IconPattern, CONTACT_ICON, ICON_SIZE, SIGNAL_ICON};
use crate::config::HudConfig;
use crate::health::{HealthModel, Link};
use crate::sprite::SpriteFrame;
use crate::traits::{PixelColor, Surface, SurfaceExt};

/// Longest label drawn; longer state names are cut
pub const LABEL_CAPACITY: usize = 16;

/// Display edge a health bar sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    /// Wireless bar
    Left,
    /// Contact bar
    Right,
}

impl Side {
    /// The health channel shown on this side
    pub const fn link(self) -> Link {
        match self {
            Side::Left => Link::Wireless,
            Side::Right => Link::Contact,
        }
    }
}

/// Top-left position that centers a frame on a `width` x `height` surface
///
/// Negative when the frame is larger than the surface.
pub fn center_offset(frame: &SpriteFrame, width: u16, height: u16) -> (i32, i32) {
    (
        (i32::from(width) - i32::from(frame.width())) / 2,
        (i32::from(height) - i32::from(frame.height())) / 2,
    )
}

/// Left column of a bar track
pub fn bar_x(side: Side, bar_width: u8, surface_width: u16) -> i32 {
    match side {
        Side::Left => 1,
        Side::Right => i32::from(surface_width) - i32::from(bar_width) - 1,
    }
}

/// Upper-case a state name into a bounded label
pub fn label_text(name: &str) -> String<LABEL_CAPACITY> {
    let mut label = String::new();
    for c in name.chars().flat_map(char::to_uppercase) {
        if label.push(c).is_err() {
            break;
        }
    }
    label
}

/// Draws onto a borrowed surface for the duration of one frame
pub struct Compositor<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
}

impl<'s, S: Surface + ?Sized> Compositor<'s, S> {
    pub fn new(surface: &'s mut S) -> Self {
        Self { surface }
    }

    /// Surface size as (width, height)
    pub fn size(&self) -> (u16, u16) {
        self.surface.size()
    }

    /// Clear the surface
    pub fn clear(&mut self) {
        self.surface.fill(PixelColor::Off);
    }

    /// Draw every lit pixel of `frame` with its top-left corner at (`x`, `y`)
    ///
    /// Returns the number of pixels that landed on the surface.
    pub fn blit(&mut self, frame: &SpriteFrame, x: i32, y: i32) -> usize {
        let mut drawn = 0;
        for (col, row) in frame.lit_pixels() {
            if self
                .surface
                .plot(x + i32::from(col), y + i32::from(row), PixelColor::On)
            {
                drawn += 1;
            }
        }
        drawn
    }

    /// Draw a frame in the middle of the surface
    pub fn blit_centered(&mut self, frame: &SpriteFrame) -> usize {
        let (width, height) = self.surface.size();
        let (x, y) = center_offset(frame, width, height);
        self.blit(frame, x, y)
    }

    /// Draw an 8x8 glyph with its top-left corner at (`x`, `y`)
    pub fn draw_icon(&mut self, pattern: &IconPattern, x: i32, y: i32) -> usize {
        let mut drawn = 0;
        for (row, bits) in (0i32..).zip(pattern.iter()) {
            for (col, &lit) in (0i32..).zip(bits.iter()) {
                if lit && self.surface.plot(x + col, y + row, PixelColor::On) {
                    drawn += 1;
                }
            }
        }
        drawn
    }

    /// Draw the filled part of a vertical bar
    ///
    /// The fill grows upward from the bottom of a `bar_height` track whose
    /// top row is `origin_y`. `filled` is clamped to the track height.
    pub fn draw_bar(
        &mut self,
        side: Side,
        filled: u16,
        bar_width: u8,
        bar_height: u8,
        origin_y: i32,
    ) {
        let (width, _) = self.surface.size();
        let x = bar_x(side, bar_width, width);
        let filled = i32::from(filled.min(u16::from(bar_height)));
        let bottom = origin_y + i32::from(bar_height);

        for y in (bottom - filled)..bottom {
            for dx in 0..i32::from(bar_width) {
                self.surface.plot(x + dx, y, PixelColor::On);
            }
        }
    }

    /// Draw both health bars with their icons
    ///
    /// Each icon sits on the inner side of its bar, vertically centered.
    pub fn draw_health(&mut self, health: &HealthModel, hud: &HudConfig) {
        let (width, height) = self.surface.size();
        let origin_y = hud.bar_origin_y(height);
        let icon = i32::from(ICON_SIZE);
        let icon_y = (i32::from(height) - icon) / 2;
        let left_x = bar_x(Side::Left, hud.bar_width, width) + i32::from(hud.bar_width) + 1;
        let right_x = bar_x(Side::Right, hud.bar_width, width) - icon - 1;

        self.draw_icon(&SIGNAL_ICON, left_x, icon_y);
        self.draw_icon(&CONTACT_ICON, right_x, icon_y);

        for side in [Side::Left, Side::Right] {
            let filled = health.pixel_height(side.link(), u16::from(hud.bar_height));
            self.draw_bar(side, filled, hud.bar_width, hud.bar_height, origin_y);
        }
    }

    /// Draw the upper-cased state name at the left edge of row `y`
    pub fn draw_label(&mut self, name: &str, y: i32) {
        let label = label_text(name);
        self.surface.draw_text(&label, 0, y, PixelColor::On);
    }

    /// Present the frame
    pub fn flush(&mut self) {
        self.surface.flush();
    }
}
