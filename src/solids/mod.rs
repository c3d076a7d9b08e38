//! Solid shapes and the [`Shape3D`] capability they share.

pub mod cube;
pub mod rectangular_prism;
pub mod sphere;
pub mod triangular_prism;

use std::fmt;

pub use cube::Cube;
pub use rectangular_prism::RectangularPrism;
pub use sphere::Sphere;
pub use triangular_prism::TriangularPrism;

/// A solid that can report its outer surface area and enclosed volume.
pub trait Shape3D: fmt::Display {
    /// Total area of the solid's outer surface.
    fn surface_area(&self) -> f64;

    /// Space enclosed by the solid.
    fn volume(&self) -> f64;
}
