use std::fmt;
use std::io;

/// Everything that can stop the fire
#[derive(Debug)]
pub enum FireError {
    /// The requested palette is not registered
    UnknownPalette { name: String, available: Vec<String> },
    /// A ramp entry is not a `#rrggbb` colour
    InvalidColor { palette: String, value: String },
    /// A custom ramp does not have one colour per heat level
    RampLength { palette: String, len: usize },
    /// Terminal I/O failed
    Io(io::Error),
}

impl fmt::Display for FireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireError::UnknownPalette { name, available } => write!(
                f,
                "Unknown palette '{}'. Available: {}",
                name,
                available.join(", ")
            ),
            FireError::InvalidColor { palette, value } => {
                write!(f, "Palette '{}' has an invalid colour '{}'", palette, value)
            }
            FireError::RampLength { palette, len } => write!(
                f,
                "Palette '{}' has {} colours, expected {}",
                palette,
                len,
                crate::palette::RAMP_LEN
            ),
            FireError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FireError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FireError {
    fn from(e: io::Error) -> Self {
        FireError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::FireError;
    use std::io;

    #[test]
    fn unknown_palette_message_lists_names() {
        let err = FireError::UnknownPalette {
            name: "teal".to_string(),
            available: vec!["blue".to_string(), "red".to_string()],
        };
        assert_eq!(err.to_string(), "Unknown palette 'teal'. Available: blue, red");
    }

    #[test]
    fn io_errors_convert() {
        let err: FireError = io::Error::new(io::ErrorKind::Other, "tty gone").into();
        assert!(matches!(err, FireError::Io(_)));
        assert_eq!(err.to_string(), "tty gone");
    }
}
