use std::fmt;

use super::Shape2D;
use crate::math::squared;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape2D for Square {
    fn area(&self) -> f64 {
        squared(self.side)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{side:{}}}", self.side)
    }
}
