use crate::controller::SimParams;
use crate::terminal::Terminal;
use crossterm::style::Color;

pub const FIRE_HELP: &str = "\
FIRE
h/←  l/→  Wind left / right
j/↓  k/↑  Decay up / down
[    ]    Slower / faster
f         Toggle flicker
0/Space   Reset
?         Close help
q/Esc     Quit";

/// Key help followed by the current tunables
pub fn build_help(params: &SimParams) -> String {
    format!(
        "{}\n\nwind {:+}  decay {:.1}  flicker {}  tick {}ms",
        FIRE_HELP,
        params.wind,
        params.decay,
        if params.flicker { "on" } else { "off" },
        params.tick.as_millis()
    )
}

/// Render a centered help overlay box with the provided text.
pub fn render_help_overlay(term: &mut Terminal, help_text: &str) {
    if help_text.is_empty() {
        return;
    }

    let (width, height) = term.size();
    let lines: Vec<&str> = help_text.lines().collect();
    let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let box_width = max_width + 4; // 2 chars padding each side
    let box_height = lines.len() + 2; // 1 row padding top/bottom

    let start_x = (width as usize).saturating_sub(box_width) / 2;
    let start_y = (height as usize).saturating_sub(box_height) / 2;

    let border = Some(Color::White);
    let text = Some(Color::Grey);

    let horizontal = "─".repeat(box_width - 2);
    term.set_str(start_x as i32, start_y as i32, &format!("┌{}┐", horizontal), border);

    for (i, line) in lines.iter().enumerate() {
        let y = (start_y + 1 + i) as i32;
        term.set(start_x as i32, y, '│', border);

        let padding = max_width.saturating_sub(line.chars().count());
        let padded = format!(" {}{} ", line, " ".repeat(padding));
        term.set_str(start_x as i32 + 1, y, &padded, text);

        term.set((start_x + box_width - 1) as i32, y, '│', border);
    }

    let bottom_y = (start_y + box_height - 1) as i32;
    term.set_str(start_x as i32, bottom_y, &format!("└{}┘", horizontal), border);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn build_help_shows_params() {
        let params = SimParams {
            wind: -2,
            decay: 6.5,
            flicker: false,
            tick: Duration::from_millis(40),
        };
        let text = build_help(&params);
        assert!(text.starts_with("FIRE"));
        assert!(text.contains("wind -2"));
        assert!(text.contains("decay 6.5"));
        assert!(text.contains("flicker off"));
        assert!(text.contains("tick 40ms"));
    }

    #[test]
    fn overlay_is_centered_and_boxed() {
        let mut term = Terminal::headless(20, 7);
        render_help_overlay(&mut term, "abc\nde");
        // box is 7 wide, 4 tall
        assert_eq!(term.get(6, 1).glyph, '┌');
        assert_eq!(term.get(12, 1).glyph, '┐');
        assert_eq!(term.get(8, 2).glyph, 'a');
        assert_eq!(term.get(6, 4).glyph, '└');
    }

    #[test]
    fn overlay_larger_than_screen_is_clipped() {
        let mut term = Terminal::headless(4, 2);
        render_help_overlay(&mut term, FIRE_HELP);
        assert_eq!(term.get(0, 0).glyph, '┌');
    }
}
