use std::fmt;

use super::Shape2D;

/// An axis-free rectangle given by its two side lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }
}

impl Shape2D for Rectangle {
    fn area(&self) -> f64 {
        self.length * self.width
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{length:{} width:{}}}", self.length, self.width)
    }
}
