pub mod aggregate;
pub mod catalog;
pub mod math;
pub mod report;
pub mod shapes;
pub mod solids;

// Re-export key types for easier use
pub use aggregate::{total_area, total_surface_area, total_volume};
pub use catalog::{write_catalog, Catalog};
pub use report::{report_2d, report_3d};
pub use shapes::{Circle, Rectangle, Shape2D, Square, Triangle};
pub use solids::{Cube, RectangularPrism, Shape3D, Sphere, TriangularPrism};
