//! Centralized error handling for telco-colors.
//!
//! Every fallible operation in the crate returns the unified
//! [`ColorCodeError`] through the [`Result`] alias.

use thiserror::Error;

/// Which half of a color pair a name was looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Major,
    Minor,
}

impl std::fmt::Display for ColorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorKind::Major => f.write_str("major"),
            ColorKind::Minor => f.write_str("minor"),
        }
    }
}

/// Unified error type for telco-colors.
#[derive(Error, Debug)]
pub enum ColorCodeError {
    /// Pair number outside `1..=max`
    #[error("Pair number {pair_number} is out of range (expected 1 to {max})")]
    PairNumberOutOfRange { pair_number: u32, max: u32 },

    /// Color name not in the major or minor table
    #[error("Unknown {kind} color: {name}")]
    UnknownColor { kind: ColorKind, name: String },

    /// Manual output format not recognized
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// A self-test check did not hold
    #[error("Self-test failed: {0}")]
    SelfTest(String),

    /// General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Result using the unified error type
pub type Result<T> = std::result::Result<T, ColorCodeError>;
