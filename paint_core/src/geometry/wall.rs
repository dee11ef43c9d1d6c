//! A single rectangular wall with door and window counts.

use serde::{Deserialize, Serialize};

use crate::errors::{PaintError, PaintResult};
use crate::geometry::opening::{DEFAULT_DOOR, DEFAULT_WINDOW};

/// One wall of a room.
///
/// Width and height are in meters and strictly positive; door and
/// window counts default to zero. Every opening is a [`DEFAULT_DOOR`]
/// or [`DEFAULT_WINDOW`] - there is no per-wall opening size.
///
/// ## JSON Example
///
/// ```json
/// { "width": 7.0, "height": 5.0, "number_doors": 1, "number_windows": 2 }
/// ```
///
/// Unknown fields are rejected, and deserialization runs the same
/// dimension checks as [`Wall::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWall", into = "RawWall")]
pub struct Wall {
    width: f64,
    height: f64,
    number_doors: u32,
    number_windows: u32,
}

/// Wire shape of a wall, before dimension checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWall {
    width: f64,
    height: f64,
    #[serde(default)]
    number_doors: u32,
    #[serde(default)]
    number_windows: u32,
}

impl TryFrom<RawWall> for Wall {
    type Error = PaintError;

    fn try_from(raw: RawWall) -> PaintResult<Self> {
        Ok(Wall::new(raw.width, raw.height)?
            .with_doors(raw.number_doors)
            .with_windows(raw.number_windows))
    }
}

impl From<Wall> for RawWall {
    fn from(wall: Wall) -> Self {
        RawWall {
            width: wall.width,
            height: wall.height,
            number_doors: wall.number_doors,
            number_windows: wall.number_windows,
        }
    }
}

impl Wall {
    /// Create a wall with no openings, rejecting non-positive dimensions.
    pub fn new(width: f64, height: f64) -> PaintResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(PaintError::invalid_input(
                "width",
                width.to_string(),
                "The width must be greater than zero",
            ));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(PaintError::invalid_input(
                "height",
                height.to_string(),
                "The height must be greater than zero",
            ));
        }
        Ok(Wall {
            width,
            height,
            number_doors: 0,
            number_windows: 0,
        })
    }

    /// Set the number of doors in this wall.
    pub fn with_doors(mut self, number_doors: u32) -> Self {
        self.number_doors = number_doors;
        self
    }

    /// Set the number of windows in this wall.
    pub fn with_windows(mut self, number_windows: u32) -> Self {
        self.number_windows = number_windows;
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn number_doors(&self) -> u32 {
        self.number_doors
    }

    pub fn number_windows(&self) -> u32 {
        self.number_windows
    }

    /// Wall area in square meters.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Total area taken by this wall's doors, in square meters.
    pub fn doors_area(&self) -> f64 {
        f64::from(self.number_doors) * DEFAULT_DOOR.area()
    }

    /// Total area taken by this wall's windows, in square meters.
    pub fn windows_area(&self) -> f64 {
        f64::from(self.number_windows) * DEFAULT_WINDOW.area()
    }

    /// Whether the wall contains at least one door or window.
    pub fn has_openings(&self) -> bool {
        self.number_doors > 0 || self.number_windows > 0
    }
}
