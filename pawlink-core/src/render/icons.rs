//! 8x8 HUD glyphs

/// Icon edge length (pixels)
pub const ICON_SIZE: u16 = 8;

/// An 8x8 glyph, indexed `[row][column]`
pub type IconPattern = [[bool; 8]; 8];

/// Build a glyph from eight 8-character rows (`#` lit)
pub const fn icon(rows: [&str; 8]) -> IconPattern {
    let mut pattern = [[false; 8]; 8];
    let mut y = 0;
    while y < 8 {
        let row = rows[y].as_bytes();
        assert!(row.len() == 8, "icon row must be 8 characters");
        let mut x = 0;
        while x < 8 {
            pattern[y][x] = row[x] == b'#';
            x += 1;
        }
        y += 1;
    }
    pattern
}

/// Antenna with signal bars, shown over the wireless bar
pub const SIGNAL_ICON: IconPattern = icon([
    "......##",
    "......##",
    "....####",
    "....####",
    "..######",
    "..######",
    "########",
    "########",
]);

/// Heart, shown over the contact bar
pub const CONTACT_ICON: IconPattern = icon([
    "........",
    ".##..##.",
    "########",
    "########",
    ".######.",
    "..####..",
    "...##...",
    "........",
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_rows() {
        let lit = |pattern: &IconPattern| pattern.iter().flatten().filter(|&&p| p).count();
        assert_eq!(lit(&SIGNAL_ICON), 40);
        assert!(CONTACT_ICON[6][3] && CONTACT_ICON[6][4]);
        assert!(!CONTACT_ICON[0].iter().any(|&p| p));
    }
}
