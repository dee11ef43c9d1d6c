//! # Wire Envelopes
//!
//! Request/response shapes for shells (CLI, HTTP) sitting in front of
//! the engine. The request side is just [`Room`](crate::geometry::Room)
//! itself - its deserialization already enforces arity and positive
//! dimensions - so only the two response envelopes live here.

use serde::{Deserialize, Serialize};

use crate::allocator::PaintCanPlan;
use crate::errors::{PaintError, ViolationReport};

/// Success envelope: `{"paint_cans": {"18.0": 1, ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaintCansNeeded {
    pub paint_cans: PaintCanPlan,
}

impl PaintCansNeeded {
    pub fn new(paint_cans: PaintCanPlan) -> Self {
        PaintCansNeeded { paint_cans }
    }
}

/// Failure envelope enumerating per-wall violations keyed `Wall_N`.
///
/// ```json
/// { "errors": { "Wall_1": ["The wall area, 0.25m2, is out of range between 1m2 and 50m2."] } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationFailure {
    pub errors: ViolationReport,
}

impl ValidationFailure {
    pub fn new(errors: ViolationReport) -> Self {
        ValidationFailure { errors }
    }

    /// Build the envelope from an engine error, if it is a validation
    /// failure. Other error variants have no per-wall report to show.
    pub fn from_error(error: &PaintError) -> Option<Self> {
        match error {
            PaintError::InvalidRoomDimensions { walls } => {
                Some(ValidationFailure::new(walls.clone()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::{PaintCansAllocator, PaintCansCalculator};
    use crate::geometry::{Room, Wall};

    #[test]
    fn test_success_envelope_shape() {
        let plain = Wall::new(7.0, 5.0).unwrap();
        let room = Room::new([
            plain.clone(),
            plain.clone().with_doors(1).with_windows(2),
            plain.clone().with_doors(2).with_windows(2),
            plain,
        ]);
        let plan = PaintCansAllocator::new(room)
            .calculate_paint_cans_needed()
            .unwrap();

        let json = serde_json::to_string(&PaintCansNeeded::new(plan)).unwrap();
        assert_eq!(json, r#"{"paint_cans":{"18.0":1,"3.6":1,"2.5":1,"0.5":3}}"#);
    }

    #[test]
    fn test_failure_envelope_from_error() {
        let mut walls = ViolationReport::new();
        walls.insert(
            "Wall_1".to_string(),
            vec!["Wall is 0.20m shorter than the door.".to_string()],
        );
        let error = PaintError::invalid_room_dimensions(walls);

        let envelope = ValidationFailure::from_error(&error).unwrap();
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(
            json,
            r#"{"errors":{"Wall_1":["Wall is 0.20m shorter than the door."]}}"#
        );
    }

    #[test]
    fn test_failure_envelope_only_for_validation_errors() {
        let error = PaintError::invalid_input("width", "0", "must be positive");
        assert!(ValidationFailure::from_error(&error).is_none());
    }
}
