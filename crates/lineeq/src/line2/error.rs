use std::fmt;

/// Errors surfaced by the validating line constructor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineError {
    /// Slope is NaN; no line can be classified from it.
    NanSlope,
    /// The anchor point has a NaN or infinite coordinate.
    NonFinitePoint { x: f64, y: f64 },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::NanSlope => write!(f, "slope is NaN"),
            LineError::NonFinitePoint { x, y } => {
                write!(f, "point ({x}, {y}) has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for LineError {}
