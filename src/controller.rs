//! Animation state: owns the heat grid, palette, tunables and rng

use crate::config::{FireConfig, MIN_TICK};
use crate::fire::HeatGrid;
use crate::palette::Palette;
use crossterm::event::{KeyCode, KeyModifiers};
use log::debug;
use rand::prelude::*;
use std::time::Duration;

const DECAY_STEP: f64 = 0.5;
const TICK_STEP: Duration = Duration::from_millis(10);

/// Something the user asked for from the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    WindLeft,
    WindRight,
    ToggleFlicker,
    DecayUp,
    DecayDown,
    Faster,
    Slower,
    Reset,
    ToggleHelp,
}

/// Map a keypress to an action
pub fn action_for_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('h') | KeyCode::Left => Action::WindLeft,
        KeyCode::Char('l') | KeyCode::Right => Action::WindRight,
        KeyCode::Char('f') => Action::ToggleFlicker,
        KeyCode::Char('j') | KeyCode::Down => Action::DecayUp,
        KeyCode::Char('k') | KeyCode::Up => Action::DecayDown,
        KeyCode::Char(']') => Action::Faster,
        KeyCode::Char('[') => Action::Slower,
        KeyCode::Char('0') | KeyCode::Char(' ') => Action::Reset,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => return None,
    };
    Some(action)
}

/// Tunables applied uniformly to every cell on each tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    pub wind: i32,
    pub decay: f64,
    pub flicker: bool,
    pub tick: Duration,
}

impl SimParams {
    pub fn from_config(config: &FireConfig) -> Self {
        Self {
            wind: 0,
            decay: config.decay.max(0.0),
            flicker: config.flicker,
            tick: config.tick.max(MIN_TICK),
        }
    }
}

/// Whether the terminal size is known yet
#[derive(Debug)]
pub enum Phase {
    Uninitialized,
    Running(HeatGrid),
}

/// Runtime state for the fire
pub struct FireState {
    phase: Phase,
    palette: Palette,
    params: SimParams,
    defaults: SimParams,
    rng: StdRng,
    pub show_help: bool,
}

impl FireState {
    pub fn new(params: SimParams, palette: Palette, rng: StdRng) -> Self {
        Self {
            phase: Phase::Uninitialized,
            palette,
            params,
            defaults: params,
            rng,
            show_help: false,
        }
    }

    /// Build from a resolved config, seeding the rng if a seed was given
    pub fn from_config(config: &FireConfig, palette: Palette) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(SimParams::from_config(config), palette, rng)
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn grid(&self) -> Option<&HeatGrid> {
        match &self.phase {
            Phase::Running(grid) => Some(grid),
            Phase::Uninitialized => None,
        }
    }

    /// Throw away the old grid and light a fresh one at the new size
    pub fn resize(&mut self, width: usize, height: usize) {
        debug!("resize to {}x{}", width, height);
        let mut grid = HeatGrid::new(width, height);
        grid.ignite();
        self.phase = Phase::Running(grid);
    }

    /// Advance one step. Does nothing before the first resize.
    pub fn tick(&mut self) {
        if let Phase::Running(grid) = &mut self.phase {
            let p = &self.params;
            grid.step(p.wind, p.decay, p.flicker, &mut self.rng);
        }
    }

    /// Apply a user action. Returns true if the fire should stop.
    pub fn apply(&mut self, action: Action) -> bool {
        let p = &mut self.params;
        match action {
            Action::Quit => return true,
            Action::WindLeft => p.wind -= 1,
            Action::WindRight => p.wind += 1,
            Action::ToggleFlicker => p.flicker = !p.flicker,
            Action::DecayUp => p.decay += DECAY_STEP,
            Action::DecayDown => p.decay = (p.decay - DECAY_STEP).max(0.0),
            Action::Faster => p.tick = p.tick.saturating_sub(TICK_STEP).max(MIN_TICK),
            Action::Slower => p.tick += TICK_STEP,
            Action::Reset => *p = self.defaults,
            Action::ToggleHelp => self.show_help = !self.show_help,
        }
        debug!("{:?} -> {:?}", action, self.params);
        false
    }
}
