//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! shape/buffer disagreements, degenerate normalization ranges, invalid color
//! ramp control points, IO, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("shape mismatch: shape declares {expected} elements but buffer holds {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("degenerate value range [{lo}, {hi}]")]
    DegenerateRange { lo: f32, hi: f32 },

    #[error("invalid control points: {0}")]
    InvalidControlPoints(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        matches!(err, Error::Other(_))
            .then_some(())
            .expect("expected Other variant");
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "issue".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn shape_mismatch_reports_both_counts() {
        let err = Error::ShapeMismatch {
            expected: 8,
            actual: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains('8') && msg.contains('7'));
    }
}
