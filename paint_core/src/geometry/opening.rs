//! Door and window openings.
//!
//! Both are plain rectangles. The engine only ever works with the
//! standard-sized [`DEFAULT_DOOR`] and [`DEFAULT_WINDOW`]; the
//! constructors exist for callers that want to reason about other
//! sizes but walls always deduct the default ones.

use crate::errors::{PaintError, PaintResult};

/// The standard door every wall refers to: 0.8 m wide, 1.9 m tall (1.52 m²).
pub const DEFAULT_DOOR: Door = Door {
    width: 0.8,
    height: 1.9,
};

/// The standard window every wall refers to: 2.0 m wide, 1.2 m tall (2.4 m²).
pub const DEFAULT_WINDOW: Window = Window {
    width: 2.0,
    height: 1.2,
};

fn check_rectangle(kind: &'static str, width: f64, height: f64) -> PaintResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(PaintError::invalid_input(
            format!("{kind}.width"),
            width.to_string(),
            "Width must be greater than 0",
        ));
    }
    if !height.is_finite() || height <= 0.0 {
        return Err(PaintError::invalid_input(
            format!("{kind}.height"),
            height.to_string(),
            "Height must be greater than 0",
        ));
    }
    Ok(())
}

/// A door opening with a given width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Door {
    width: f64,
    height: f64,
}

impl Door {
    /// Create a door, rejecting non-positive dimensions.
    pub fn new(width: f64, height: f64) -> PaintResult<Self> {
        check_rectangle("door", width, height)?;
        Ok(Door { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Area in square meters.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A window opening with a given width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    width: f64,
    height: f64,
}

impl Window {
    /// Create a window, rejecting non-positive dimensions.
    pub fn new(width: f64, height: f64) -> PaintResult<Self> {
        check_rectangle("window", width, height)?;
        Ok(Window { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Area in square meters.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_door_area() {
        assert_eq!(DEFAULT_DOOR.width(), 0.8);
        assert_eq!(DEFAULT_DOOR.height(), 1.9);
        assert!((DEFAULT_DOOR.area() - 1.52).abs() < 1e-12);
    }

    #[test]
    fn test_default_window_area() {
        assert_eq!(DEFAULT_WINDOW.width(), 2.0);
        assert_eq!(DEFAULT_WINDOW.height(), 1.2);
        assert!((DEFAULT_WINDOW.area() - 2.4).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(Door::new(0.0, 1.9).is_err());
        assert!(Door::new(0.8, -1.0).is_err());
        assert!(Window::new(f64::NAN, 1.2).is_err());
        assert!(Window::new(2.0, 0.0).is_err());
    }

    #[test]
    fn test_custom_door() {
        let door = Door::new(0.9, 2.1).unwrap();
        assert!((door.area() - 1.89).abs() < 1e-12);
    }
}
