//! Event loop tying the fire state to the terminal

use crate::config::FireConfig;
use crate::controller::FireState;
use crate::error::FireError;
use crate::event::{EventSource, FireEvent};
use crate::help::{build_help, render_help_overlay};
use crate::palette::Palette;
use crate::terminal::Terminal;
use log::info;

/// Run the fire until the user quits
pub fn run(config: &FireConfig, palette: Palette) -> Result<(), FireError> {
    info!(
        "starting: palette={} tick={:?} decay={} flicker={} seed={:?}",
        palette.name(),
        config.tick,
        config.decay,
        config.flicker,
        config.seed
    );

    let mut state = FireState::from_config(config, palette);
    let mut term = Terminal::new()?;
    let mut events = EventSource::new();

    let (w, h) = term.size();
    state.resize(w as usize, h as usize);

    loop {
        match events.next(state.params().tick)? {
            FireEvent::Tick => {
                state.tick();
                draw(&mut term, &state);
                term.present()?;
            }
            FireEvent::Resize(w, h) => {
                term.resize(w, h);
                term.clear_screen()?;
                state.resize(w as usize, h as usize);
            }
            FireEvent::Action(action) => {
                if state.apply(action) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Fill the back buffer from the fire. The bottom source row is not shown.
pub fn draw(term: &mut Terminal, state: &FireState) {
    term.clear();

    if let Some(grid) = state.grid() {
        let (tw, th) = term.size();
        let rows = grid.height().saturating_sub(1).min(th as usize);
        let cols = grid.width().min(tw as usize);
        for y in 0..rows {
            for (x, &heat) in grid.row(y)[..cols].iter().enumerate() {
                let shade = state.palette().shade(heat);
                term.set(x as i32, y as i32, shade.glyph, shade.fg);
            }
        }
    }

    if state.show_help {
        render_help_overlay(term, &build_help(state.params()));
    }
}

#[cfg(test)]
mod tests {
    use super::draw;
    use crate::config::FireConfig;
    use crate::controller::{Action, FireState};
    use crate::palette::{Palette, Shade};
    use crate::terminal::Terminal;
    use std::collections::BTreeMap;

    fn state(seed: u64) -> FireState {
        let palette = Palette::build("red", '#', &BTreeMap::new()).unwrap();
        let config = FireConfig {
            seed: Some(seed),
            decay: 0.0,
            flicker: false,
            ..FireConfig::default()
        };
        FireState::from_config(&config, palette)
    }

    #[test]
    fn source_row_is_hidden() {
        let mut s = state(1);
        s.resize(4, 3);
        s.tick();

        let mut term = Terminal::headless(4, 3);
        draw(&mut term, &s);
        assert_eq!(term.get(0, 0), Shade::EMPTY);
        assert_eq!(term.get(0, 1), s.palette().shade(36));
        assert_eq!(term.get(0, 2), Shade::EMPTY);
    }

    #[test]
    fn nothing_drawn_before_resize() {
        let s = state(1);
        let mut term = Terminal::headless(3, 3);
        term.set(0, 0, 'x', None);
        draw(&mut term, &s);
        assert_eq!(term.get(0, 0), Shade::EMPTY);
    }

    #[test]
    fn help_overlay_drawn_on_top() {
        let mut s = state(2);
        s.resize(60, 20);
        s.apply(Action::ToggleHelp);

        let mut term = Terminal::headless(60, 20);
        draw(&mut term, &s);
        let boxed = (0..60).any(|x| (0..20).any(|y| term.get(x, y).glyph == '┌'));
        assert!(boxed);
    }
}
