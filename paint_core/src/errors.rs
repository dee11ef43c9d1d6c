//! # Error Types
//!
//! Structured error types for paint_core. Every failure carries enough
//! context to be presented to an end user or handled programmatically
//! by an API shell.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::errors::{PaintError, PaintResult};
//!
//! fn validate_width(width: f64) -> PaintResult<()> {
//!     if width <= 0.0 {
//!         return Err(PaintError::invalid_input(
//!             "width",
//!             width.to_string(),
//!             "Width must be greater than 0",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for paint_core operations
pub type PaintResult<T> = Result<T, PaintError>;

/// Per-wall violation report: wall label (`Wall_1`..`Wall_4`) to the
/// ordered list of failed-check messages for that wall.
pub type ViolationReport = BTreeMap<String, Vec<String>>;

/// Structured error type for the paint-can estimation engine.
///
/// `InvalidRoomDimensions` is the only error the engine itself raises
/// after a room has been constructed; the other variants guard the
/// construction and serialization boundaries.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PaintError {
    /// An input value is invalid (non-positive dimension, wrong wall arity, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The room failed geometric validation. Carries the complete
    /// per-wall violation report, never just the first failure.
    #[error("The room dimensions are invalid for {} wall(s)", .walls.len())]
    InvalidRoomDimensions { walls: ViolationReport },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl PaintError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PaintError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidRoomDimensions error from a violation report
    pub fn invalid_room_dimensions(walls: ViolationReport) -> Self {
        PaintError::InvalidRoomDimensions { walls }
    }

    /// Check if this error is recoverable by correcting the input
    /// (as opposed to a defect in the calling program)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaintError::InvalidInput { .. } | PaintError::InvalidRoomDimensions { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PaintError::InvalidInput { .. } => "INVALID_INPUT",
            PaintError::InvalidRoomDimensions { .. } => "INVALID_ROOM_DIMENSIONS",
            PaintError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for PaintError {
    fn from(err: serde_json::Error) -> Self {
        PaintError::Serialization {
            reason: err.to_string(),
        }
    }
}
