//! Flat-area shapes and the [`Shape2D`] capability they share.

pub mod circle;
pub mod rectangle;
pub mod square;
pub mod triangle;

use std::fmt;

// Re-export the specific shape types
pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::Triangle;

/// A shape that covers a flat region and can report its area.
///
/// `Display` renders the shape's fields, e.g. `{radius:5}`, and is what the
/// report writers print above the computed measurement.
pub trait Shape2D: fmt::Display {
    /// Area enclosed by the shape.
    fn area(&self) -> f64;
}
