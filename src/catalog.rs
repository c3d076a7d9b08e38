//! The fixed demonstration data set and the full report built from it.

use std::io::{self, Write};

use crate::report::{write_section_2d, write_section_3d, write_totals};
use crate::shapes::{Circle, Rectangle, Shape2D, Square, Triangle};
use crate::solids::{Cube, RectangularPrism, Shape3D, Sphere, TriangularPrism};

/// Ordered collections of every shape type, populated once and then only read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub squares: Vec<Square>,
    pub circles: Vec<Circle>,
    pub rectangles: Vec<Rectangle>,
    pub triangles: Vec<Triangle>,
    pub cubes: Vec<Cube>,
    pub spheres: Vec<Sphere>,
    pub rectangular_prisms: Vec<RectangularPrism>,
    pub triangular_prisms: Vec<TriangularPrism>,
}

impl Catalog {
    /// Three instances of each shape type with fixed dimensions.
    pub fn demo() -> Self {
        Catalog {
            squares: vec![Square::new(2.0), Square::new(3.0), Square::new(5.0)],
            circles: vec![Circle::new(5.0), Circle::new(7.0), Circle::new(9.0)],
            rectangles: vec![
                Rectangle::new(4.0, 7.0),
                Rectangle::new(12.0, 3.0),
                Rectangle::new(8.0, 9.0),
            ],
            triangles: vec![
                Triangle::new(5.0, 12.0),
                Triangle::new(2.0, 11.0),
                Triangle::new(20.0, 3.0),
            ],
            cubes: vec![Cube::new(5.0), Cube::new(7.0), Cube::new(19.0)],
            spheres: vec![Sphere::new(9.0), Sphere::new(11.0), Sphere::new(21.0)],
            rectangular_prisms: vec![
                RectangularPrism::new(4.0, 9.0, 10.0),
                RectangularPrism::new(20.0, 13.0, 2.0),
                RectangularPrism::new(12.0, 12.0, 6.0),
            ],
            triangular_prisms: vec![
                TriangularPrism::new(9.0, 9.0, 10.0),
                TriangularPrism::new(15.0, 6.0, 27.0),
                TriangularPrism::new(3.0, 20.0, 5.0),
            ],
        }
    }

    /// Every flat shape, in report order.
    pub fn flat_shapes(&self) -> Vec<&dyn Shape2D> {
        as_flat(&self.squares)
            .into_iter()
            .chain(as_flat(&self.circles))
            .chain(as_flat(&self.rectangles))
            .chain(as_flat(&self.triangles))
            .collect()
    }

    /// Every solid, in report order.
    pub fn solids(&self) -> Vec<&dyn Shape3D> {
        as_solid(&self.cubes)
            .into_iter()
            .chain(as_solid(&self.spheres))
            .chain(as_solid(&self.rectangular_prisms))
            .chain(as_solid(&self.triangular_prisms))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.flat_shapes().len() + self.solids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn as_flat<'a, S: Shape2D + 'a>(shapes: &'a [S]) -> Vec<&'a dyn Shape2D> {
    shapes.iter().map(|s| s as &dyn Shape2D).collect()
}

fn as_solid<'a, S: Shape3D + 'a>(shapes: &'a [S]) -> Vec<&'a dyn Shape3D> {
    shapes.iter().map(|s| s as &dyn Shape3D).collect()
}

/// Writes every category section followed by the totals block.
pub fn write_catalog<W: Write + ?Sized>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    write_section_2d(out, "Square", &as_flat(&catalog.squares))?;
    write_section_2d(out, "Circle", &as_flat(&catalog.circles))?;
    write_section_2d(out, "Rectangle", &as_flat(&catalog.rectangles))?;
    write_section_2d(out, "Triangle", &as_flat(&catalog.triangles))?;

    write_section_3d(out, "Cube", &as_solid(&catalog.cubes))?;
    write_section_3d(out, "Sphere", &as_solid(&catalog.spheres))?;
    write_section_3d(out, "Rectangular Prism", &as_solid(&catalog.rectangular_prisms))?;
    write_section_3d(out, "Triangular Prism", &as_solid(&catalog.triangular_prisms))?;

    let flat = catalog.flat_shapes();
    let solids = catalog.solids();
    write_totals(out, &flat, &solids)?;

    tracing::info!(flat = flat.len(), solids = solids.len(), "catalog report written");
    Ok(())
}
