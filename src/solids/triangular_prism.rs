use std::fmt;

use super::Shape3D;

/// A triangular prism given as three edge lengths.
///
/// Both measurements use simplified formulas rather than the exact geometry
/// of a triangular prism: the surface area is `lw + lh + wh` and the volume is
/// `lwh / 3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularPrism {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl TriangularPrism {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self { length, width, height }
    }
}

impl Shape3D for TriangularPrism {
    fn surface_area(&self) -> f64 {
        self.length * self.width + self.length * self.height + self.width * self.height
    }

    fn volume(&self) -> f64 {
        self.length * self.width * self.height / 3.0
    }
}

impl fmt::Display for TriangularPrism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{length:{} width:{} height:{}}}",
            self.length, self.width, self.height
        )
    }
}
