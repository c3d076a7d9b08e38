pub mod scalar;

pub use scalar::{cubed, squared, FOUR_THIRDS};
