use crate::config::parse_duration;
use log::warn;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub defaults: DefaultSettings,
    /// Extra ramps, `name = ["#rrggbb", ...]` with one colour per heat level
    #[serde(default)]
    pub palettes: BTreeMap<String, Vec<String>>,
}

/// Startup values used when the matching CLI flag is absent
#[derive(Debug, Default, Deserialize)]
pub struct DefaultSettings {
    #[serde(rename = "char")]
    pub glyph: Option<String>,
    pub palette: Option<String>,
    pub speed: Option<String>,
    pub decay: Option<f64>,
    pub flicker: Option<bool>,
}

impl Settings {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Read settings from `path`. A missing or broken file gives defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                warn!("cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termfire")
            .join("config.toml")
    }

    /// Configured tick interval, if present and valid
    pub fn speed(&self) -> Option<Duration> {
        let raw = self.defaults.speed.as_deref()?;
        match parse_duration(raw) {
            Ok(d) => Some(d),
            Err(e) => {
                warn!("ignoring speed setting: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use std::fs;
    use std::time::Duration;

    #[test]
    fn parses_defaults_and_palettes() {
        let settings = Settings::parse(
            r##"
            [defaults]
            char = "*"
            palette = "blue"
            speed = "30ms"
            decay = 4.5
            flicker = false

            [palettes]
            ember = ["#000000", "#ff0000"]
            "##,
        )
        .unwrap();

        assert_eq!(settings.defaults.glyph.as_deref(), Some("*"));
        assert_eq!(settings.defaults.palette.as_deref(), Some("blue"));
        assert_eq!(settings.speed(), Some(Duration::from_millis(30)));
        assert_eq!(settings.defaults.decay, Some(4.5));
        assert_eq!(settings.defaults.flicker, Some(false));
        assert_eq!(settings.palettes["ember"].len(), 2);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let settings = Settings::parse("").unwrap();
        assert!(settings.defaults.palette.is_none());
        assert!(settings.palettes.is_empty());
        assert_eq!(settings.speed(), None);
    }

    #[test]
    fn invalid_speed_is_ignored() {
        let settings = Settings::parse("[defaults]\nspeed = \"fast\"\n").unwrap();
        assert_eq!(settings.speed(), None);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("termfire-no-such-dir").join("config.toml");
        let settings = Settings::load_from(&path);
        assert!(settings.defaults.glyph.is_none());
    }

    #[test]
    fn broken_file_gives_defaults() {
        let path = std::env::temp_dir().join(format!("termfire-broken-{}.toml", std::process::id()));
        fs::write(&path, "[defaults\ndecay = ").unwrap();
        let settings = Settings::load_from(&path);
        fs::remove_file(&path).ok();
        assert!(settings.defaults.decay.is_none());
    }

    #[test]
    fn config_path_ends_in_termfire() {
        assert!(Settings::config_path().ends_with("termfire/config.toml"));
    }
}
