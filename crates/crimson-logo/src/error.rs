use std::fmt;

/// Errors raised while building or drawing the logo.
///
/// Any error aborts the current draw call; there is no partial output to recover.
#[derive(Debug, Clone, PartialEq)]
pub enum LogoError {
    /// A coordinate was NaN or infinite. `argument` names the offending one (`"x"` or `"y"`).
    TypeMismatch { argument: &'static str },
    /// A polyline with fewer than two points was asked to produce lines.
    InvalidGeometry { points: usize },
    /// Point or triangle lookup past the end of its sequence.
    IndexOutOfRange { index: usize, len: usize },
    /// Width/height must be finite and positive.
    InvalidSize { width: f32, height: f32 },
    /// A `LogoConfig` field is unusable.
    InvalidConfig(String),
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoError::TypeMismatch { argument } => write!(f, "'{argument}' is not a number"),
            LogoError::InvalidGeometry { points } => {
                write!(f, "polyline contains no lines, {points} points total")
            }
            LogoError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
            LogoError::InvalidSize { width, height } => {
                write!(f, "invalid logo size {width}x{height}")
            }
            LogoError::InvalidConfig(msg) => write!(f, "invalid logo config: {msg}"),
        }
    }
}

impl std::error::Error for LogoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            LogoError::TypeMismatch { argument: "y" }.to_string(),
            "'y' is not a number"
        );
        assert_eq!(
            LogoError::InvalidGeometry { points: 1 }.to_string(),
            "polyline contains no lines, 1 points total"
        );
    }
}
