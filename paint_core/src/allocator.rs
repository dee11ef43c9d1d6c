//! # Paint-Can Allocator
//!
//! Computes how many cans of each fixed size are needed to paint the
//! free (paintable) area of a room. The allocation is greedy by
//! largest can first, with one extra smallest can if any area is left
//! uncovered at the end. For this particular size set the greedy pass
//! is already minimal in can count, so no search is performed.
//!
//! The allocator assumes nothing about the room's plausibility; it is
//! meant to run after [`RoomValidator`](crate::validator::RoomValidator),
//! but a non-positive free area simply yields an all-zero plan.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::allocator::{CanSize, PaintCansAllocator, PaintCansCalculator};
//! use paint_core::geometry::{Room, Wall};
//!
//! let wall = Wall::new(7.0, 5.0).unwrap();
//! let room = Room::new([wall.clone(), wall.clone(), wall.clone(), wall]);
//!
//! let allocator = PaintCansAllocator::new(room);
//! let plan = allocator.calculate_paint_cans_needed().unwrap();
//! assert_eq!(plan.count(CanSize::Liters18), 1);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::PaintResult;
use crate::geometry::Room;

/// Square meters covered by one liter of paint.
pub const COVERAGE_PER_LITER_M2: f64 = 5.0;

/// Anything able to produce a can plan for a room.
pub trait PaintCansCalculator {
    /// Compute the can counts covering the room's free area.
    fn calculate_paint_cans_needed(&self) -> PaintResult<PaintCanPlan>;
}

/// One of the fixed paint-can sizes sold, in liters.
///
/// The derived ordering runs from the largest size to the smallest, so
/// ordered collections iterate in greedy allocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanSize {
    #[serde(rename = "18.0")]
    Liters18,
    #[serde(rename = "3.6")]
    Liters3_6,
    #[serde(rename = "2.5")]
    Liters2_5,
    #[serde(rename = "0.5")]
    Liters0_5,
}

impl CanSize {
    /// Every size, largest first - the greedy allocation order.
    pub const SIZES_DESCENDING: [CanSize; 4] = [
        CanSize::Liters18,
        CanSize::Liters3_6,
        CanSize::Liters2_5,
        CanSize::Liters0_5,
    ];

    /// The smallest size sold, used for the residual top-up can.
    pub const SMALLEST: CanSize = CanSize::Liters0_5;

    /// Capacity in liters.
    pub fn liters(self) -> f64 {
        match self {
            CanSize::Liters18 => 18.0,
            CanSize::Liters3_6 => 3.6,
            CanSize::Liters2_5 => 2.5,
            CanSize::Liters0_5 => 0.5,
        }
    }

    /// Wire label, as used in JSON plan keys.
    pub fn label(self) -> &'static str {
        match self {
            CanSize::Liters18 => "18.0",
            CanSize::Liters3_6 => "3.6",
            CanSize::Liters2_5 => "2.5",
            CanSize::Liters0_5 => "0.5",
        }
    }
}

impl fmt::Display for CanSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} L", self.label())
    }
}

/// The can counts needed to cover a room's free area.
///
/// Always contains an entry for every size in
/// [`CanSize::SIZES_DESCENDING`], zeros included. Iteration and JSON
/// key order run from the largest size to the smallest.
///
/// ## JSON Example
///
/// ```json
/// { "18.0": 1, "3.6": 1, "2.5": 1, "0.5": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaintCanPlan {
    counts: BTreeMap<CanSize, u32>,
}

impl PaintCanPlan {
    /// An all-zero plan covering nothing.
    pub fn empty() -> Self {
        let counts = CanSize::SIZES_DESCENDING
            .into_iter()
            .map(|size| (size, 0))
            .collect();
        PaintCanPlan { counts }
    }

    /// Count for one size.
    pub fn count(&self, size: CanSize) -> u32 {
        self.counts.get(&size).copied().unwrap_or(0)
    }

    fn set(&mut self, size: CanSize, count: u32) {
        self.counts.insert(size, count);
    }

    fn add(&mut self, size: CanSize, count: u32) {
        *self.counts.entry(size).or_insert(0) += count;
    }

    /// Iterate `(size, count)` pairs, largest size first.
    pub fn iter(&self) -> impl Iterator<Item = (CanSize, u32)> + '_ {
        self.counts.iter().map(|(size, count)| (*size, *count))
    }

    /// Total number of cans across all sizes.
    pub fn total_cans(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Total liters of paint bought.
    pub fn total_liters(&self) -> f64 {
        self.iter()
            .map(|(size, count)| size.liters() * f64::from(count))
            .sum()
    }

    /// Square meters this plan can cover.
    pub fn coverage_m2(&self) -> f64 {
        self.total_liters() * COVERAGE_PER_LITER_M2
    }
}

/// Greedy paint-can allocator for one [`Room`].
#[derive(Debug, Clone)]
pub struct PaintCansAllocator {
    room: Room,
}

impl PaintCansAllocator {
    pub fn new(room: Room) -> Self {
        PaintCansAllocator { room }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Paintable area: total wall area minus door and window area.
    pub fn free_area(&self) -> f64 {
        self.room.walls_area() - (self.room.windows_area() + self.room.doors_area())
    }
}

impl PaintCansCalculator for PaintCansAllocator {
    fn calculate_paint_cans_needed(&self) -> PaintResult<PaintCanPlan> {
        let mut free_area = self.free_area();
        let mut plan = PaintCanPlan::empty();

        for size in CanSize::SIZES_DESCENDING {
            let cans = free_area / COVERAGE_PER_LITER_M2 / size.liters();
            // A negative free area must not produce negative counts.
            let count = if cans >= 1.0 { cans.floor() as u32 } else { 0 };
            plan.set(size, count);
            free_area -= f64::from(count) * COVERAGE_PER_LITER_M2 * size.liters();
        }

        // Residual uncovered area gets one extra can of the smallest size.
        if free_area > 0.0 {
            plan.add(CanSize::SMALLEST, 1);
        }

        Ok(plan)
    }
}
