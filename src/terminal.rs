use crate::palette::Shade;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};

/// Double-buffered terminal surface.
///
/// Drawing goes into the back buffer; `present` writes only the cells that
/// differ from what is already on screen.
pub struct Terminal {
    width: u16,
    height: u16,
    back: Vec<Shade>,
    front: Vec<Option<Shade>>,
    alternate_screen: bool,
}

impl Terminal {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    pub fn new() -> io::Result<Self> {
        let (width, height) = size()?;
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;

        let mut term = Self::headless(width, height);
        term.alternate_screen = true;
        Ok(term)
    }

    /// Buffers only, no terminal mode changes
    pub fn headless(width: u16, height: u16) -> Self {
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            back: vec![Shade::EMPTY; cells],
            front: vec![None; cells],
            alternate_screen: false,
        }
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Resize both buffers. The next `present` repaints everything.
    pub fn resize(&mut self, width: u16, height: u16) {
        let cells = width as usize * height as usize;
        self.width = width;
        self.height = height;
        self.back = vec![Shade::EMPTY; cells];
        self.front = vec![None; cells];
    }

    /// Clear the back buffer
    pub fn clear(&mut self) {
        self.back.fill(Shade::EMPTY);
    }

    /// Clear the actual terminal and forget what was on it
    pub fn clear_screen(&mut self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))?;
        self.front.fill(None);
        Ok(())
    }

    /// Set a cell in the back buffer. Out-of-range positions are ignored.
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = y as usize * self.width as usize + x as usize;
            self.back[idx] = Shade { glyph: ch, fg };
        }
    }

    /// Set a string starting at position
    pub fn set_str(&mut self, x: i32, y: i32, s: &str, fg: Option<Color>) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, ch, fg);
        }
    }

    #[cfg(test)]
    pub fn get(&self, x: u16, y: u16) -> Shade {
        self.back[y as usize * self.width as usize + x as usize]
    }

    /// Flush changed cells to stdout
    pub fn present(&mut self) -> io::Result<()> {
        let mut out = stdout().lock();
        self.present_to(&mut out)
    }

    /// Write changed cells to `out` and remember them as on screen
    pub fn present_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let w = self.width as usize;
        let mut current_fg: Option<Color> = None;
        let mut cursor: Option<usize> = None;

        for (idx, cell) in self.back.iter().enumerate() {
            if self.front[idx] == Some(*cell) {
                continue;
            }

            if cursor != Some(idx) {
                queue!(out, MoveTo((idx % w) as u16, (idx / w) as u16))?;
            }

            match cell.fg {
                Some(color) if current_fg != Some(color) => {
                    queue!(out, SetForegroundColor(color))?;
                    current_fg = Some(color);
                }
                None if current_fg.is_some() => {
                    queue!(out, ResetColor)?;
                    current_fg = None;
                }
                _ => {}
            }

            queue!(out, Print(cell.glyph))?;
            self.front[idx] = Some(*cell);
            // Printing at the last column does not wrap predictably
            cursor = if (idx + 1) % w == 0 { None } else { Some(idx + 1) };
        }

        if current_fg.is_some() {
            queue!(out, ResetColor)?;
        }
        out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.alternate_screen {
            let _ = execute!(stdout(), ResetColor, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}
