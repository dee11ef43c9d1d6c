//! # Coordinator
//!
//! Sequences validation and allocation: the allocator never runs
//! against geometry that has not passed the validator. Both steps are
//! memoized, so repeated calls return cached results, and a failed
//! validation is re-raised on every later attempt to compute a plan.
//!
//! This is also the engine's single logging boundary; the validator
//! and allocator themselves stay silent.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::coordinator::PaintCansCoordinator;
//! use paint_core::geometry::{Room, Wall};
//!
//! let wall = Wall::new(7.0, 5.0).unwrap();
//! let room = Room::new([wall.clone(), wall.clone(), wall.clone(), wall]);
//!
//! let coordinator = PaintCansCoordinator::for_room(room);
//! let plan = coordinator.paint_cans_needed().unwrap();
//! assert_eq!(plan.total_cans(), 5);
//! ```

use once_cell::sync::OnceCell;

use crate::allocator::{PaintCanPlan, PaintCansAllocator, PaintCansCalculator};
use crate::errors::PaintResult;
use crate::geometry::Room;
use crate::validator::{DimensionValidator, RoomValidator};

/// Runs a validator and a calculator in order, caching both outcomes.
#[derive(Debug)]
pub struct PaintCansCoordinator<V, C>
where
    V: DimensionValidator,
    C: PaintCansCalculator,
{
    validator: V,
    calculator: C,
    validation: OnceCell<PaintResult<()>>,
    plan: OnceCell<PaintCanPlan>,
}

impl PaintCansCoordinator<RoomValidator, PaintCansAllocator> {
    /// Coordinator with the standard validator and allocator for one room.
    pub fn for_room(room: Room) -> Self {
        PaintCansCoordinator::new(RoomValidator::new(room.clone()), PaintCansAllocator::new(room))
    }
}

impl<V, C> PaintCansCoordinator<V, C>
where
    V: DimensionValidator,
    C: PaintCansCalculator,
{
    pub fn new(validator: V, calculator: C) -> Self {
        PaintCansCoordinator {
            validator,
            calculator,
            validation: OnceCell::new(),
            plan: OnceCell::new(),
        }
    }

    /// Validate the room geometry. Runs the checks once; later calls
    /// return the cached outcome.
    pub fn validate(&self) -> PaintResult<()> {
        self.validation
            .get_or_init(|| match self.validator.validate_dimensions() {
                Ok(()) => Ok(()),
                Err(error) => {
                    log::warn!(
                        "room validation failed ({}): {error}",
                        error.error_code()
                    );
                    Err(error)
                }
            })
            .clone()
    }

    /// Compute the can plan for a validated room.
    ///
    /// Validates first if [`validate`](Self::validate) has not run yet.
    /// If validation failed, the stored error is re-raised and the
    /// calculator is never invoked.
    pub fn paint_cans_needed(&self) -> PaintResult<PaintCanPlan> {
        self.validate()?;
        if let Some(plan) = self.plan.get() {
            return Ok(plan.clone());
        }
        let plan = self.calculator.calculate_paint_cans_needed()?;
        log::debug!("allocated {} can(s), {} L total", plan.total_cans(), plan.total_liters());
        Ok(self.plan.get_or_init(|| plan).clone())
    }
}
