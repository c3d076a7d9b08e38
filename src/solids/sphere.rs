use std::f64::consts::PI;
use std::fmt;

use super::Shape3D;
use crate::math::{cubed, squared, FOUR_THIRDS};

/// A sphere described by its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f64,
}

impl Sphere {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape3D for Sphere {
    fn surface_area(&self) -> f64 {
        4.0 * PI * squared(self.radius)
    }

    fn volume(&self) -> f64 {
        FOUR_THIRDS * PI * cubed(self.radius)
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{radius:{}}}", self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_sphere_surface_area() {
        let s = Sphere::new(9.0);
        assert!((s.surface_area() - 324.0 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_sphere_volume() {
        let s = Sphere::new(3.0);
        // 4/3 * pi * 27 = 36 pi
        assert!((s.volume() - 36.0 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_sphere_volume_is_nonzero_for_positive_radius() {
        for r in [0.5, 1.0, 9.0, 11.0, 21.0] {
            assert!(Sphere::new(r).volume() > 0.0, "radius {r} produced zero volume");
        }
    }

    #[test]
    fn test_sphere_zero_radius() {
        let s = Sphere::new(0.0);
        assert_eq!(s.surface_area(), 0.0);
        assert_eq!(s.volume(), 0.0);
    }

    #[test]
    fn test_sphere_display() {
        assert_eq!(Sphere::new(21.0).to_string(), "{radius:21}");
    }
}
