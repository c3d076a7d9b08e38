use std::fmt;

use super::Shape3D;

/// A box with three independent edge lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularPrism {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl RectangularPrism {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self { length, width, height }
    }
}

impl Shape3D for RectangularPrism {
    fn surface_area(&self) -> f64 {
        2.0 * (self.length * self.width + self.length * self.height + self.width * self.height)
    }

    fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

impl fmt::Display for RectangularPrism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{length:{} width:{} height:{}}}",
            self.length, self.width, self.height
        )
    }
}
