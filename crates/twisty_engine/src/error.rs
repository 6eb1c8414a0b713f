//! Engine error types

use thiserror::Error;

/// Engine-level errors
///
/// Rejected moves (unknown face, engine busy) are not errors: they resolve
/// the caller's handle with `false` and mutate nothing. The variants here
/// cover construction-time failures and contract violations only.
#[derive(Error, Debug)]
pub enum CubeError {
    /// Configuration validation failed
    #[error("invalid cube configuration: {0}")]
    InvalidConfig(String),

    /// Layer selection produced the wrong number of cubies
    ///
    /// Indicates the grid invariant was broken (drift not corrected by a
    /// prior move, or mismatched spacing constants). This is a programming
    /// contract violation, not a recoverable condition.
    #[error("layer selection returned {found} cubies, expected {expected}")]
    SelectionAnomaly {
        /// Number of cubies a face layer must contain
        expected: usize,
        /// Number actually matched
        found: usize,
    },
}
