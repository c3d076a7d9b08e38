use std::fmt;

use super::Shape2D;

/// A triangle described by its base and perpendicular height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }
}

impl Shape2D for Triangle {
    fn area(&self) -> f64 {
        self.base / 2.0 * self.height
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{base:{} height:{}}}", self.base, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_triangle_area() {
        assert!((Triangle::new(5.0, 12.0).area() - 30.0).abs() < EPSILON);
        assert!((Triangle::new(2.0, 11.0).area() - 11.0).abs() < EPSILON);
    }

    #[test]
    fn test_triangle_odd_base_keeps_fraction() {
        // 3 / 2 must stay 1.5, not truncate.
        assert!((Triangle::new(3.0, 2.0).area() - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_triangle_display() {
        assert_eq!(Triangle::new(20.0, 3.0).to_string(), "{base:20 height:3}");
    }
}
