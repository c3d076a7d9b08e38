//! Text reports for individual shapes and labelled groups of shapes.
//!
//! Writers take any [`io::Write`] so the binary can target stdout while tests
//! capture into a `Vec<u8>`. Lines are written in a fixed order: the field
//! dump, then area (2D) or surface area followed by volume (3D).

use std::io::{self, Write};

use crate::aggregate::{total_area, total_surface_area, total_volume};
use crate::shapes::Shape2D;
use crate::solids::Shape3D;

/// Writes a flat shape's fields and its area.
pub fn report_2d<W: Write + ?Sized>(out: &mut W, shape: &dyn Shape2D) -> io::Result<()> {
    writeln!(out, "{shape}")?;
    writeln!(out, "Area:  {}", shape.area())
}

/// Writes a solid's fields, its surface area and its volume.
pub fn report_3d<W: Write + ?Sized>(out: &mut W, shape: &dyn Shape3D) -> io::Result<()> {
    writeln!(out, "{shape}")?;
    writeln!(out, "Surface Area:  {}", shape.surface_area())?;
    writeln!(out, "Volume:  {}", shape.volume())
}

/// Writes a `<title> Data:` header followed by one report per shape.
pub fn write_section_2d<W: Write + ?Sized>(
    out: &mut W,
    title: &str,
    shapes: &[&dyn Shape2D],
) -> io::Result<()> {
    tracing::debug!(section = title, count = shapes.len(), "writing 2D section");
    writeln!(out, "{title} Data:")?;
    for shape in shapes {
        report_2d(&mut *out, *shape)?;
    }
    Ok(())
}

pub fn write_section_3d<W: Write + ?Sized>(
    out: &mut W,
    title: &str,
    shapes: &[&dyn Shape3D],
) -> io::Result<()> {
    tracing::debug!(section = title, count = shapes.len(), "writing 3D section");
    writeln!(out, "{title} Data:")?;
    for shape in shapes {
        report_3d(&mut *out, *shape)?;
    }
    Ok(())
}

/// Writes the aggregate block: total area of `flat`, then total surface area
/// and total volume of `solids`.
pub fn write_totals<W: Write + ?Sized>(
    out: &mut W,
    flat: &[&dyn Shape2D],
    solids: &[&dyn Shape3D],
) -> io::Result<()> {
    writeln!(out, "Totals:")?;
    writeln!(out, "Total Area:  {}", total_area(flat))?;
    writeln!(out, "Total Surface Area:  {}", total_surface_area(solids))?;
    writeln!(out, "Total Volume:  {}", total_volume(solids))
}
