//! A room with exactly four walls.

use serde::{Deserialize, Serialize};

use crate::errors::{PaintError, PaintResult};
use crate::geometry::wall::Wall;

/// Number of walls in every room.
pub const WALLS_PER_ROOM: usize = 4;

/// A rectangular room, always exactly four walls.
///
/// Wall order is significant: validation reports label walls
/// `Wall_1`..`Wall_4` by their position here.
///
/// ## JSON Example
///
/// ```json
/// {
///   "walls": [
///     { "width": 7.0, "height": 5.0 },
///     { "width": 7.0, "height": 5.0, "number_windows": 2 },
///     { "width": 7.0, "height": 5.0, "number_doors": 1 },
///     { "width": 7.0, "height": 5.0 }
///   ]
/// }
/// ```
///
/// Any other wall arity is rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRoom", into = "RawRoom")]
pub struct Room {
    walls: [Wall; WALLS_PER_ROOM],
}

/// Wire shape of a room, before the arity check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRoom {
    walls: Vec<Wall>,
}

impl TryFrom<RawRoom> for Room {
    type Error = PaintError;

    fn try_from(raw: RawRoom) -> PaintResult<Self> {
        let count = raw.walls.len();
        let walls: [Wall; WALLS_PER_ROOM] = raw.walls.try_into().map_err(|_| {
            PaintError::invalid_input(
                "walls",
                count.to_string(),
                format!("A room must have exactly {WALLS_PER_ROOM} walls"),
            )
        })?;
        Ok(Room::new(walls))
    }
}

impl From<Room> for RawRoom {
    fn from(room: Room) -> Self {
        RawRoom {
            walls: room.walls.to_vec(),
        }
    }
}

impl Room {
    /// Create a room from exactly four walls.
    pub fn new(walls: [Wall; WALLS_PER_ROOM]) -> Self {
        Room { walls }
    }

    /// The four walls, in label order.
    pub fn walls(&self) -> &[Wall; WALLS_PER_ROOM] {
        &self.walls
    }

    /// Total area of all four walls, in square meters.
    ///
    /// Always positive: each wall's dimensions are strictly positive
    /// by construction.
    pub fn walls_area(&self) -> f64 {
        self.walls.iter().map(Wall::area).sum()
    }

    /// Total window area across all walls, in square meters.
    pub fn windows_area(&self) -> f64 {
        self.walls.iter().map(Wall::windows_area).sum()
    }

    /// Total door area across all walls, in square meters.
    pub fn doors_area(&self) -> f64 {
        self.walls.iter().map(Wall::doors_area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_room() -> Room {
        let plain = Wall::new(7.0, 5.0).unwrap();
        Room::new([
            plain.clone(),
            plain.clone().with_doors(1).with_windows(2),
            plain.clone().with_doors(2).with_windows(2),
            plain,
        ])
    }

    #[test]
    fn test_aggregate_areas() {
        let room = sample_room();
        assert_eq!(room.walls_area(), 140.0);
        assert!((room.windows_area() - 9.6).abs() < 1e-12);
        assert!((room.doors_area() - 4.56).abs() < 1e-12);
    }

    #[test]
    fn test_walls_area_positive() {
        let room = sample_room();
        assert!(room.walls_area() > 0.0);
        assert!(room.windows_area() >= 0.0);
        assert!(room.doors_area() >= 0.0);
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "walls": [
                { "width": 7.0, "height": 5.0 },
                { "width": 7.0, "height": 5.0, "number_windows": 2 },
                { "width": 7.0, "height": 5.0, "number_doors": 1 },
                { "width": 7.0, "height": 5.0 }
            ]
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.walls_area(), 140.0);
        assert_eq!(room.walls()[1].number_windows(), 2);
    }

    #[test]
    fn test_deserialize_rejects_wrong_arity() {
        let json = r#"{
            "walls": [
                { "width": 7.0, "height": 5.0 },
                { "width": 7.0, "height": 5.0 }
            ]
        }"#;
        let result = serde_json::from_str::<Room>(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exactly 4 walls"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let json = r#"{ "walls": [], "floor": true }"#;
        assert!(serde_json::from_str::<Room>(json).is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let room = sample_room();
        let json = serde_json::to_string(&room).unwrap();
        let roundtrip: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(room, roundtrip);
    }
}
