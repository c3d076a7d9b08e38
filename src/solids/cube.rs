use std::fmt;

use super::Shape3D;
use crate::math::{cubed, squared};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    pub side: f64,
}

impl Cube {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape3D for Cube {
    fn surface_area(&self) -> f64 {
        6.0 * squared(self.side)
    }

    fn volume(&self) -> f64 {
        cubed(self.side)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{side:{}}}", self.side)
    }
}
