//! Packed monochrome sprite frames
//!
//! A frame is `height` rows of `ceil(width / 8)` bytes. Within a byte the
//! least significant bit is the leftmost pixel; padding bits past `width`
//! in the last byte of a row are ignored.

/// Sprite frame construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Width or height is zero
    ZeroSize,
    /// Data length does not match the dimensions
    DataLength { expected: usize, actual: usize },
}

/// One packed 1-bit bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpriteFrame {
    width: u16,
    height: u16,
    data: &'static [u8],
}

impl SpriteFrame {
    /// Bytes per packed row for a given width
    pub const fn row_bytes_for(width: u16) -> usize {
        (width as usize + 7) / 8
    }

    /// Total packed length for given dimensions
    pub const fn packed_len(width: u16, height: u16) -> usize {
        Self::row_bytes_for(width) * height as usize
    }

    /// Create a frame, checking the data length against the dimensions
    pub fn new(width: u16, height: u16, data: &'static [u8]) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::ZeroSize);
        }

        let expected = Self::packed_len(width, height);
        if data.len() != expected {
            return Err(FrameError::DataLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a frame from constant asset data
    ///
    /// Same checks as [`SpriteFrame::new`], but a bad asset fails the build
    /// when used in a `const` item.
    pub const fn from_static(width: u16, height: u16, data: &'static [u8]) -> Self {
        assert!(width > 0 && height > 0, "sprite frame has zero size");
        assert!(
            data.len() == Self::packed_len(width, height),
            "sprite data length does not match dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Packed pixel data
    pub const fn data(&self) -> &'static [u8] {
        self.data
    }

    /// Bytes per packed row
    pub const fn row_bytes(&self) -> usize {
        Self::row_bytes_for(self.width)
    }

    /// Check if the pixel at (`x`, `y`) is lit
    ///
    /// Out-of-frame coordinates read as unlit.
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[usize::from(y) * self.row_bytes() + usize::from(x / 8)];
        byte & (1 << (x % 8)) != 0
    }

    /// Iterate over the coordinates of every lit pixel, row by row
    pub fn lit_pixels(self) -> impl Iterator<Item = (u16, u16)> {
        let row_bytes = self.row_bytes();
        let width = self.width;

        self.data
            .iter()
            .enumerate()
            .flat_map(move |(index, &byte)| {
                let row = (index / row_bytes) as u16;
                let col = ((index % row_bytes) * 8) as u16;
                (0..8u16)
                    .filter(move |bit| byte & (1 << bit) != 0)
                    .map(move |bit| (col + bit, row))
            })
            .filter(move |&(x, _)| x < width)
    }
}

/// Pack text rows (`#` lit, anything else dark) into sprite bytes
///
/// Meant for `const` asset tables; panics at compile time if a row is not
/// `width` characters long or `N` does not match the row count.
pub const fn pack_rows<const N: usize>(width: usize, rows: &[&str]) -> [u8; N] {
    let row_bytes = (width + 7) / 8;
    assert!(row_bytes * rows.len() == N, "packed size does not match row count");

    let mut data = [0u8; N];
    let mut y = 0;
    while y < rows.len() {
        let row = rows[y].as_bytes();
        assert!(row.len() == width, "sprite row has the wrong width");

        let mut x = 0;
        while x < width {
            if row[x] == b'#' {
                data[y * row_bytes + x / 8] |= 1 << (x % 8);
            }
            x += 1;
        }
        y += 1;
    }
    data
}
