//! # paint_core - Paint-Can Estimation Engine
//!
//! `paint_core` computes how many paint cans of the fixed retail sizes
//! (18, 3.6, 2.5 and 0.5 liters) are needed to paint a four-walled
//! room, after checking that the room's geometry is physically
//! plausible. All inputs and outputs are JSON-serializable, making the
//! engine easy to sit behind a CLI or HTTP shell.
//!
//! ## Design Philosophy
//!
//! - **Construct, then trust**: walls and rooms cannot be built with
//!   invalid dimensions, so the engine never re-checks basics
//! - **Complete reports**: validation collects every violation of
//!   every wall, never just the first
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Request-scoped**: entities are immutable values, built once per
//!   computation and discarded afterwards
//!
//! ## Quick Start
//!
//! ```rust
//! use paint_core::coordinator::PaintCansCoordinator;
//! use paint_core::geometry::{Room, Wall};
//!
//! let wall = Wall::new(7.0, 5.0).unwrap();
//! let room = Room::new([
//!     wall.clone(),
//!     wall.clone().with_doors(1).with_windows(2),
//!     wall.clone().with_doors(2).with_windows(2),
//!     wall,
//! ]);
//!
//! let coordinator = PaintCansCoordinator::for_room(room);
//! let plan = coordinator.paint_cans_needed().unwrap();
//! println!("{}", serde_json::to_string_pretty(&plan).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Door, Window, Wall and Room value types
//! - [`validator`] - per-wall geometric plausibility checks
//! - [`allocator`] - greedy can allocation over the fixed size set
//! - [`coordinator`] - validate-then-allocate sequencing with caching
//! - [`schema`] - wire envelopes for shells
//! - [`errors`] - structured error types

pub mod allocator;
pub mod coordinator;
pub mod errors;
pub mod geometry;
pub mod schema;
pub mod validator;

// Re-export commonly used types at crate root for convenience
pub use allocator::{CanSize, PaintCanPlan, PaintCansAllocator, PaintCansCalculator};
pub use coordinator::PaintCansCoordinator;
pub use errors::{PaintError, PaintResult};
pub use geometry::{Room, Wall};
pub use validator::{DimensionValidator, RoomValidator};
