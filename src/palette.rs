//! Colour ramps and the precomputed shade table used to draw heat levels

use crate::error::FireError;
use crate::fire::MAX_HEAT;
use crossterm::style::Color;
use std::collections::BTreeMap;

/// Number of entries in every ramp
pub const RAMP_LEN: usize = MAX_HEAT as usize + 1;

/// Classic Doom fire ramp: black through red and orange to white
const RED: [&str; RAMP_LEN] = [
    "#070707", "#1f0707", "#2f0907", "#470907", "#570f07", "#671707", "#771707",
    "#8f2707", "#9f2f07", "#af3f07", "#bf4707", "#c74707", "#df4f07", "#df5707",
    "#e75f07", "#ef6707", "#f76f07", "#f7770f", "#ff7f0f", "#ff8717", "#ff8f17",
    "#ff971f", "#ff9f1f", "#ffa727", "#ffaf27", "#ffb72f", "#ffbf2f", "#ffc737",
    "#ffcf37", "#ffd73f", "#ffdf3f", "#ffe747", "#ffef4f", "#fff75f", "#ffff7f",
    "#ffffaf", "#ffffff",
];

const BLUE: [&str; RAMP_LEN] = [
    "#000000", "#000614", "#000b21", "#001336", "#001842", "#001d52", "#002466",
    "#002b7a", "#00328f", "#0039a3", "#0040b8", "#0047cc", "#004de0", "#0054f5",
    "#0059ff", "#004ec7", "#0044ad", "#003a94", "#00307a", "#002661", "#001c47",
    "#1a3c8e", "#335cb5", "#4d7ddd", "#669df4", "#80beff", "#99ceff", "#b3deff",
    "#cceeff", "#e6faff", "#f0fbff", "#f5fdff", "#faffff", "#fbffff", "#fdffff",
    "#feffff", "#ffffff",
];

const GREEN: [&str; RAMP_LEN] = [
    "#000000", "#051405", "#0a210a", "#0f360f", "#144214", "#1a571a", "#216b21",
    "#267a26", "#2d8c2d", "#339e33", "#3aaf3a", "#42c242", "#4bd44b", "#54e654",
    "#5df75d", "#66ff66", "#5ce65c", "#52cc52", "#47b347", "#3d993d", "#338033",
    "#47a347", "#5cc75c", "#70eb70", "#85ff85", "#99ff99", "#adffad", "#c2ffc2",
    "#d6ffd6", "#ebffeb", "#f0fff0", "#f5fff5", "#fafffa", "#fbfffb", "#fdfffd",
    "#fefffe", "#ffffff",
];

const GRAY: [&str; RAMP_LEN] = [
    "#000000", "#0a0a0a", "#141414", "#1e1e1e", "#282828", "#323232", "#3c3c3c",
    "#464646", "#505050", "#5a5a5a", "#646464", "#6e6e6e", "#787878", "#828282",
    "#8c8c8c", "#969696", "#909090", "#888888", "#808080", "#787878", "#707070",
    "#808080", "#909090", "#a0a0a0", "#b0b0b0", "#c0c0c0", "#d0d0d0", "#dcdcdc",
    "#e6e6e6", "#f0f0f0", "#f5f5f5", "#f8f8f8", "#fafafa", "#fcfcfc", "#fdfdfd",
    "#fefefe", "#ffffff",
];

/// Built-in ramps by name
pub const BUILTIN: [(&str, &[&str; RAMP_LEN]); 4] = [
    ("red", &RED),
    ("green", &GREEN),
    ("blue", &BLUE),
    ("gray", &GRAY),
];

/// How a single heat level is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shade {
    pub glyph: char,
    pub fg: Option<Color>,
}

impl Shade {
    /// Cold cells draw nothing
    pub const EMPTY: Shade = Shade { glyph: ' ', fg: None };
}

/// One shade per heat level, built once before the animation starts
#[derive(Clone, Debug)]
pub struct Palette {
    name: String,
    shades: Vec<Shade>,
}

impl Palette {
    /// Build the shade table for ramp `name`, looking in `custom` first and
    /// then in the built-in ramps.
    pub fn build(
        name: &str,
        glyph: char,
        custom: &BTreeMap<String, Vec<String>>,
    ) -> Result<Self, FireError> {
        let colors: Vec<&str> = match custom.get(name) {
            Some(ramp) => ramp.iter().map(String::as_str).collect(),
            None => match BUILTIN.iter().find(|(n, _)| *n == name) {
                Some((_, ramp)) => ramp.to_vec(),
                None => {
                    return Err(FireError::UnknownPalette {
                        name: name.to_string(),
                        available: Self::names(custom),
                    })
                }
            },
        };

        if colors.len() != RAMP_LEN {
            return Err(FireError::RampLength {
                palette: name.to_string(),
                len: colors.len(),
            });
        }

        let mut shades = Vec::with_capacity(RAMP_LEN);
        shades.push(Shade::EMPTY);
        for value in &colors[1..] {
            let fg = parse_hex(value).ok_or_else(|| FireError::InvalidColor {
                palette: name.to_string(),
                value: value.to_string(),
            })?;
            shades.push(Shade { glyph, fg: Some(fg) });
        }

        Ok(Self {
            name: name.to_string(),
            shades,
        })
    }

    /// Sorted names of every ramp that `build` accepts
    pub fn names(custom: &BTreeMap<String, Vec<String>>) -> Vec<String> {
        let mut names: Vec<String> = BUILTIN.iter().map(|(n, _)| n.to_string()).collect();
        names.extend(custom.keys().cloned());
        names.sort();
        names.dedup();
        names
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Shade for a heat level. Levels above `MAX_HEAT` use the hottest shade.
    pub fn shade(&self, heat: u8) -> Shade {
        self.shades[(heat as usize).min(self.shades.len() - 1)]
    }
}

/// Parse `#rrggbb` (the `#` is optional)
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}
