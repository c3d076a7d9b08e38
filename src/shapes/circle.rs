use std::f64::consts::PI;
use std::fmt;

use super::Shape2D;
use crate::math::squared;

/// A circle described by its radius. The radius is expected to be non-negative
/// but is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape2D for Circle {
    fn area(&self) -> f64 {
        PI * squared(self.radius)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{radius:{}}}", self.radius)
    }
}
