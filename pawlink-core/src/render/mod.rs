//! Rendering: bitmap compositor and HUD glyphs

pub mod compositor;
pub mod icons;

pub use compositor::{bar_x, center_offset, label_text, Compositor, Side, LABEL_CAPACITY};
pub use icons::{icon, IconPattern, CONTACT_ICON, ICON_SIZE, SIGNAL_ICON};
