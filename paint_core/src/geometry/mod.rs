//! # Geometric Model
//!
//! Immutable value types describing a rectangular room: [`Door`],
//! [`Window`], [`Wall`] and [`Room`]. All dimensions are in meters and
//! areas in square meters.
//!
//! Construction is the validation boundary: a `Wall` cannot exist with
//! a non-positive dimension and a `Room` always has exactly four walls.
//! Serde deserialization funnels through the same constructors, so a
//! deserialized model is always well-formed.
//!
//! Every wall references the single process-wide [`DEFAULT_DOOR`] and
//! [`DEFAULT_WINDOW`]; there is no per-wall door or window sizing.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::geometry::{Room, Wall};
//!
//! let wall = Wall::new(7.0, 5.0).unwrap().with_doors(1).with_windows(2);
//! assert_eq!(wall.area(), 35.0);
//! assert_eq!(wall.doors_area(), 1.52);
//! assert_eq!(wall.windows_area(), 4.8);
//!
//! let plain = Wall::new(7.0, 5.0).unwrap();
//! let room = Room::new([wall, plain.clone(), plain.clone(), plain]);
//! assert_eq!(room.walls_area(), 140.0);
//! ```

pub mod opening;
pub mod room;
pub mod wall;

pub use opening::{Door, Window, DEFAULT_DOOR, DEFAULT_WINDOW};
pub use room::Room;
pub use wall::Wall;
