//! Sums of a single measurement over a mixed collection of shapes.
//!
//! Every function folds from `0.0` in slice order, so an empty slice yields
//! `0.0` and NaN or infinity in any element carries through to the total.

use crate::shapes::Shape2D;
use crate::solids::Shape3D;

/// Sums [`Shape2D::area`] over `shapes`.
pub fn total_area(shapes: &[&dyn Shape2D]) -> f64 {
    shapes.iter().fold(0.0, |acc, shape| acc + shape.area())
}

/// Sums [`Shape3D::surface_area`] over `shapes`.
pub fn total_surface_area(shapes: &[&dyn Shape3D]) -> f64 {
    shapes.iter().fold(0.0, |acc, shape| acc + shape.surface_area())
}

/// Sums [`Shape3D::volume`] over `shapes`.
pub fn total_volume(shapes: &[&dyn Shape3D]) -> f64 {
    shapes.iter().fold(0.0, |acc, shape| acc + shape.volume())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle, Square, Triangle};
    use crate::solids::{Cube, RectangularPrism, Sphere, TriangularPrism};
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_total_area_empty() {
        assert_eq!(total_area(&[]), 0.0);
    }

    #[test]
    fn test_total_surface_area_and_volume_empty() {
        assert_eq!(total_surface_area(&[]), 0.0);
        assert_eq!(total_volume(&[]), 0.0);
    }

    #[test]
    fn test_total_area_squares() {
        let a = Square::new(2.0);
        let b = Square::new(3.0);
        assert_eq!(total_area(&[&a, &b]), 13.0);
    }

    #[test]
    fn test_total_area_mixed_shapes() {
        let circle = Circle::new(1.0);
        let square = Square::new(2.0);
        let rectangle = Rectangle::new(4.0, 7.0);
        let triangle = Triangle::new(5.0, 12.0);
        let total = total_area(&[&circle, &square, &rectangle, &triangle]);
        assert!((total - (PI + 4.0 + 28.0 + 30.0)).abs() < EPSILON);
    }

    #[test]
    fn test_total_volume_cubes() {
        let a = Cube::new(5.0);
        let b = Cube::new(7.0);
        assert_eq!(total_volume(&[&a, &b]), 468.0);
    }

    #[test]
    fn test_totals_mixed_solids() {
        let cube = Cube::new(5.0);
        let sphere = Sphere::new(3.0);
        let rect = RectangularPrism::new(4.0, 9.0, 10.0);
        let tri = TriangularPrism::new(9.0, 9.0, 10.0);
        let solids: [&dyn Shape3D; 4] = [&cube, &sphere, &rect, &tri];

        let expected_surface = 150.0 + 36.0 * PI + 332.0 + 261.0;
        let expected_volume = 125.0 + 36.0 * PI + 360.0 + 270.0;
        assert!((total_surface_area(&solids) - expected_surface).abs() < EPSILON);
        assert!((total_volume(&solids) - expected_volume).abs() < EPSILON);
    }

    #[test]
    fn test_total_area_propagates_nan() {
        let good = Square::new(2.0);
        let bad = Square::new(f64::NAN);
        assert!(total_area(&[&good, &bad]).is_nan());
    }
}
