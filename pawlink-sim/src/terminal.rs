//! Terminal panel backend
//!
//! Shows the display with Unicode half blocks, two pixel rows per text
//! line.

use pawlink_display::{DisplayError, PanelBackend, HEIGHT, PAGES, WIDTH};

/// Panel that keeps the pages it receives and prints them on request
pub struct TerminalPanel {
    pages: [[u8; WIDTH]; PAGES],
}

impl TerminalPanel {
    pub fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    fn lit(&self, x: usize, y: usize) -> bool {
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Render the received frame as text inside a border
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((WIDTH + 3) * (HEIGHT / 2 + 2) * 3);
        let border = "-".repeat(WIDTH);

        out.push('+');
        out.push_str(&border);
        out.push_str("+\n");
        for y in (0..HEIGHT).step_by(2) {
            out.push('|');
            for x in 0..WIDTH {
                out.push(match (self.lit(x, y), self.lit(x, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            out.push_str("|\n");
        }
        out.push('+');
        out.push_str(&border);
        out.push('+');
        out
    }
}

impl Default for TerminalPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelBackend for TerminalPanel {
    fn write_page(&mut self, page: u8, data: &[u8; WIDTH]) -> Result<(), DisplayError> {
        let slot = self
            .pages
            .get_mut(usize::from(page))
            .ok_or(DisplayError::Communication)?;
        *slot = *data;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}
