//! Scalar helpers shared by the 2D and 3D shape formulas.

/// Floating-point `4/3`, used by the sphere volume.
pub const FOUR_THIRDS: f64 = 4.0 / 3.0;

/// Returns `x * x`.
pub fn squared(x: f64) -> f64 {
    x * x
}

/// Returns `x * x * x`.
pub fn cubed(x: f64) -> f64 {
    x * x * x
}
