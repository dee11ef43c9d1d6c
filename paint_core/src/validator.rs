//! # Room Validator
//!
//! Geometric plausibility checks for a [`Room`]. Each wall is run
//! through five independent rules; every failed rule contributes one
//! message to that wall's entry in the report. The validator never
//! stops at the first failure - the caller always gets the complete
//! picture.
//!
//! ## Rules
//!
//! 1. Wall area within `[MIN_WALL_AREA, MAX_WALL_AREA]` (inclusive)
//! 2. At most half the wall area taken by doors and windows
//!    (only checked when the wall has openings)
//! 3. Wall at least `MIN_WALL_TALLER_THAN_DOOR_MARGIN` taller than the
//!    standard door (only when the wall has doors)
//! 4. Wall at least as tall as the standard window (only when the wall
//!    has windows)
//! 5. Wall at least as wide as all its doors and windows side by side
//!    (only when the wall has openings)
//!
//! ## Example
//!
//! ```rust
//! use paint_core::geometry::{Room, Wall};
//! use paint_core::validator::{DimensionValidator, RoomValidator};
//!
//! let wall = Wall::new(7.0, 5.0).unwrap();
//! let room = Room::new([wall.clone(), wall.clone(), wall.clone(), wall]);
//!
//! let validator = RoomValidator::new(room);
//! assert!(validator.validate_dimensions().is_ok());
//! ```

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::errors::{PaintError, PaintResult, ViolationReport};
use crate::geometry::{Room, Wall, DEFAULT_DOOR, DEFAULT_WINDOW};

/// Minimum plausible wall area (m²), inclusive.
pub const MIN_WALL_AREA: f64 = 1.0;

/// Maximum plausible wall area (m²), inclusive.
pub const MAX_WALL_AREA: f64 = 50.0;

/// Openings may take at most this fraction of a wall's area.
pub const MIN_FREE_AREA_RATE: f64 = 0.5;

/// A wall with doors must be taller than the door by this margin (m).
pub const MIN_WALL_TALLER_THAN_DOOR_MARGIN: f64 = 0.3;

/// Anything able to vouch for a room's geometry.
pub trait DimensionValidator {
    /// Validate the room, returning `Ok(())` or
    /// [`PaintError::InvalidRoomDimensions`] with the full per-wall report.
    fn validate_dimensions(&self) -> PaintResult<()>;
}

/// A single failed geometric check for one wall.
///
/// The `Display` text of each variant is exactly the message that ends
/// up in the per-wall violation report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WallCheckError {
    #[error("The wall area, {area:.2}m2, is out of range between {min}m2 and {max}m2.")]
    AreaOutOfRange { area: f64, min: f64, max: f64 },

    #[error("The wall free area, {free_area:.2}m2, must be >= of the total area of windows + doors, {opening_area:.2}m2.")]
    InsufficientFreeArea { free_area: f64, opening_area: f64 },

    #[error("Wall is {shortfall:.2}m shorter than the door.")]
    NotTallerThanDoor { shortfall: f64 },

    #[error("Wall is {shortfall:.2}m shorter than the window.")]
    NotTallerThanWindow { shortfall: f64 },

    #[error("Wall is {shortfall:.2}m narrower than the width of amount of window(s) + doors.")]
    NotWiderThanOpenings { shortfall: f64 },
}

/// Validates the geometry of one [`Room`].
///
/// The outcome is memoized: the checks run once, and repeated
/// [`validate_dimensions`](DimensionValidator::validate_dimensions)
/// calls return the cached result.
#[derive(Debug)]
pub struct RoomValidator {
    room: Room,
    report: OnceCell<ViolationReport>,
}

impl RoomValidator {
    pub fn new(room: Room) -> Self {
        RoomValidator {
            room,
            report: OnceCell::new(),
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Run all five checks on every wall and collect the report,
    /// `Wall_1`..`Wall_4`, only for walls with at least one violation.
    fn violation_report(&self) -> &ViolationReport {
        self.report.get_or_init(|| {
            let mut report = ViolationReport::new();
            for (index, wall) in self.room.walls().iter().enumerate() {
                let failures = [
                    Self::wall_area_within_range(wall),
                    Self::wall_free_area_sufficient(wall),
                    Self::wall_taller_than_door(wall),
                    Self::wall_taller_than_window(wall),
                    Self::wall_wider_than_openings(wall),
                ];
                let messages: Vec<String> = failures
                    .into_iter()
                    .filter_map(|check| check.err())
                    .map(|error| error.to_string())
                    .collect();
                if !messages.is_empty() {
                    report.insert(format!("Wall_{}", index + 1), messages);
                }
            }
            report
        })
    }

    /// Rule 1: wall area within the plausible range, bounds inclusive.
    fn wall_area_within_range(wall: &Wall) -> Result<(), WallCheckError> {
        let area = wall.area();
        if !(MIN_WALL_AREA..=MAX_WALL_AREA).contains(&area) {
            return Err(WallCheckError::AreaOutOfRange {
                area,
                min: MIN_WALL_AREA,
                max: MAX_WALL_AREA,
            });
        }
        Ok(())
    }

    /// Rule 2: openings must fit in at most half the wall area.
    fn wall_free_area_sufficient(wall: &Wall) -> Result<(), WallCheckError> {
        if wall.has_openings() {
            let free_area = wall.area() * MIN_FREE_AREA_RATE;
            let opening_area = wall.windows_area() + wall.doors_area();
            if free_area < opening_area {
                return Err(WallCheckError::InsufficientFreeArea {
                    free_area,
                    opening_area,
                });
            }
        }
        Ok(())
    }

    /// Rule 3: a wall with doors must clear the door height plus margin.
    fn wall_taller_than_door(wall: &Wall) -> Result<(), WallCheckError> {
        if wall.number_doors() > 0 {
            let min_height = DEFAULT_DOOR.height() + MIN_WALL_TALLER_THAN_DOOR_MARGIN;
            if wall.height() < min_height {
                return Err(WallCheckError::NotTallerThanDoor {
                    shortfall: min_height - wall.height(),
                });
            }
        }
        Ok(())
    }

    /// Rule 4: a wall with windows must be at least window height.
    fn wall_taller_than_window(wall: &Wall) -> Result<(), WallCheckError> {
        if wall.number_windows() > 0 && wall.height() < DEFAULT_WINDOW.height() {
            return Err(WallCheckError::NotTallerThanWindow {
                shortfall: DEFAULT_WINDOW.height() - wall.height(),
            });
        }
        Ok(())
    }

    /// Rule 5: all openings must fit side by side across the wall.
    fn wall_wider_than_openings(wall: &Wall) -> Result<(), WallCheckError> {
        if wall.has_openings() {
            let opening_width = f64::from(wall.number_windows()) * DEFAULT_WINDOW.width()
                + f64::from(wall.number_doors()) * DEFAULT_DOOR.width();
            if wall.width() < opening_width {
                return Err(WallCheckError::NotWiderThanOpenings {
                    shortfall: opening_width - wall.width(),
                });
            }
        }
        Ok(())
    }
}

impl DimensionValidator for RoomValidator {
    fn validate_dimensions(&self) -> PaintResult<()> {
        let report = self.violation_report();
        if report.is_empty() {
            Ok(())
        } else {
            Err(PaintError::invalid_room_dimensions(report.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_of(walls: [Wall; 4]) -> RoomValidator {
        RoomValidator::new(Room::new(walls))
    }

    fn plain_wall() -> Wall {
        Wall::new(7.0, 5.0).unwrap()
    }

    fn report_for(validator: &RoomValidator) -> ViolationReport {
        match validator.validate_dimensions() {
            Err(PaintError::InvalidRoomDimensions { walls }) => walls,
            other => panic!("expected InvalidRoomDimensions, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_room_passes() {
        let validator = room_of([
            plain_wall(),
            plain_wall().with_doors(1).with_windows(2),
            plain_wall().with_doors(2).with_windows(2),
            plain_wall(),
        ]);
        assert!(validator.validate_dimensions().is_ok());
    }

    #[test]
    fn test_area_bounds_inclusive() {
        // Exactly 1 m2 and exactly 50 m2 both pass.
        let validator = room_of([
            Wall::new(1.0, 1.0).unwrap(),
            Wall::new(10.0, 5.0).unwrap(),
            plain_wall(),
            plain_wall(),
        ]);
        assert!(validator.validate_dimensions().is_ok());
    }

    #[test]
    fn test_area_out_of_range_message() {
        let validator = room_of([
            Wall::new(0.5, 0.5).unwrap(),
            plain_wall(),
            plain_wall(),
            plain_wall(),
        ]);
        let report = report_for(&validator);
        assert_eq!(
            report["Wall_1"],
            vec!["The wall area, 0.25m2, is out of range between 1m2 and 50m2.".to_string()]
        );
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_insufficient_free_area_message() {
        // 4.5 x 2.0 wall = 9 m2, free limit 4.5 m2, two windows = 4.8 m2.
        let validator = room_of([
            plain_wall(),
            Wall::new(4.5, 2.0).unwrap().with_windows(2),
            plain_wall(),
            plain_wall(),
        ]);
        let report = report_for(&validator);
        assert_eq!(
            report["Wall_2"],
            vec![
                "The wall free area, 4.50m2, must be >= of the total area of windows + doors, 4.80m2."
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_wall_shorter_than_door() {
        // Door needs 1.9 + 0.3 = 2.2 m of height.
        let validator = room_of([
            plain_wall(),
            plain_wall(),
            Wall::new(10.0, 2.0).unwrap().with_doors(1),
            plain_wall(),
        ]);
        let report = report_for(&validator);
        assert_eq!(
            report["Wall_3"],
            vec!["Wall is 0.20m shorter than the door.".to_string()]
        );
    }

    #[test]
    fn test_wall_shorter_than_window() {
        let validator = room_of([
            plain_wall(),
            plain_wall(),
            plain_wall(),
            Wall::new(10.0, 1.0).unwrap().with_windows(1),
        ]);
        let report = report_for(&validator);
        assert_eq!(
            report["Wall_4"],
            vec!["Wall is 0.20m shorter than the window.".to_string()]
        );
    }

    #[test]
    fn test_wall_narrower_than_openings() {
        // 2 windows (4.0 m) + 1 door (0.8 m) need 4.8 m of width.
        let validator = room_of([
            Wall::new(4.0, 5.0).unwrap().with_doors(1).with_windows(2),
            plain_wall(),
            plain_wall(),
            plain_wall(),
        ]);
        let report = report_for(&validator);
        assert_eq!(
            report["Wall_1"],
            vec![
                "Wall is 0.80m narrower than the width of amount of window(s) + doors.".to_string()
            ]
        );
    }

    #[test]
    fn test_tiny_wall_accumulates_all_violations() {
        // 0.1 x 0.1 wall with a door and a window fails all five rules.
        let validator = room_of([
            Wall::new(0.1, 0.1).unwrap().with_doors(1).with_windows(1),
            plain_wall(),
            plain_wall(),
            plain_wall(),
        ]);
        let report = report_for(&validator);
        assert_eq!(report["Wall_1"].len(), 5);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_messages_in_check_order() {
        let validator = room_of([
            Wall::new(0.1, 0.1).unwrap().with_doors(1),
            plain_wall(),
            plain_wall(),
            plain_wall(),
        ]);
        let report = report_for(&validator);
        let messages = &report["Wall_1"];
        assert!(messages[0].contains("out of range"));
        assert!(messages[1].contains("free area"));
        assert!(messages[2].contains("shorter than the door"));
        assert!(messages[3].contains("narrower"));
    }

    #[test]
    fn test_multiple_walls_reported() {
        let validator = room_of([
            Wall::new(0.5, 0.5).unwrap(),
            plain_wall(),
            Wall::new(10.0, 2.0).unwrap().with_doors(1),
            plain_wall(),
        ]);
        let report = report_for(&validator);
        assert_eq!(report.len(), 2);
        assert!(report.contains_key("Wall_1"));
        assert!(report.contains_key("Wall_3"));
        assert!(!report.contains_key("Wall_2"));
        assert!(!report.contains_key("Wall_4"));
    }

    #[test]
    fn test_no_opening_checks_without_openings() {
        // A short, narrow wall with no openings only fails the area rule.
        let validator = room_of([
            Wall::new(0.5, 0.5).unwrap(),
            plain_wall(),
            plain_wall(),
            plain_wall(),
        ]);
        let report = report_for(&validator);
        assert_eq!(report["Wall_1"].len(), 1);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let validator = room_of([
            Wall::new(0.5, 0.5).unwrap(),
            plain_wall(),
            plain_wall(),
            plain_wall(),
        ]);
        let first = validator.validate_dimensions();
        let second = validator.validate_dimensions();
        assert_eq!(first, second);

        let valid = room_of([plain_wall(), plain_wall(), plain_wall(), plain_wall()]);
        assert!(valid.validate_dimensions().is_ok());
        assert!(valid.validate_dimensions().is_ok());
    }
}
