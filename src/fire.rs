//! Doom-style fire: heat grid, ignition and upward propagation

use rand::Rng;

/// Hottest heat level. The palette holds `MAX_HEAT + 1` shades.
pub const MAX_HEAT: u8 = 36;

/// Row-major grid of heat levels, `index = y * width + x`.
///
/// Row 0 is the top of the screen; the last row is the ignition source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeatGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl HeatGrid {
    /// Allocate a cold (all zero) grid. Zero dimensions give an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Heat at `(x, y)`
    #[cfg(test)]
    pub fn heat(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    /// Set heat at `(x, y)`, capped at `MAX_HEAT`
    #[cfg(test)]
    pub fn set(&mut self, x: usize, y: usize, heat: u8) {
        self.cells[y * self.width + x] = heat.min(MAX_HEAT);
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Set the bottom row to `MAX_HEAT`. It is never written by `step`,
    /// so it burns forever.
    pub fn ignite(&mut self) {
        if self.is_empty() {
            return;
        }
        let start = (self.height - 1) * self.width;
        self.cells[start..].fill(MAX_HEAT);
    }

    /// Advance the fire by one tick.
    ///
    /// Every cell below the top row pushes its heat one row up, cooled by
    /// `floor(u * decay)` and shifted by `wind` plus, with `flicker`, a
    /// jitter of -1, 0 or +1. Heat pushed past the left or right edge is lost.
    /// A cold cell clears the cell directly above it.
    ///
    /// Columns are visited left to right and rows top to bottom. Random draws
    /// happen in that order: one for decay per hot cell, then one for jitter
    /// when flicker is on.
    pub fn step<R: Rng + ?Sized>(&mut self, wind: i32, decay: f64, flicker: bool, rng: &mut R) {
        let w = self.width;
        for x in 0..w {
            for y in 1..self.height {
                let heat = self.cells[y * w + x];

                if heat == 0 {
                    self.cells[(y - 1) * w + x] = 0;
                    continue;
                }

                let cooling = (rng.gen::<f64>() * decay) as i64;
                let jitter = if flicker {
                    (rng.gen::<f64>() * 3.0) as i64 - 1
                } else {
                    0
                };

                let target_x = x as i64 + jitter + i64::from(wind);
                if target_x < 0 || target_x >= w as i64 {
                    continue;
                }

                let cooled = (i64::from(heat) - cooling).max(0);
                self.cells[(y - 1) * w + target_x as usize] = cooled as u8;
            }
        }
    }
}
