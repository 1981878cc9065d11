//! Reading polygons and colour palettes from plain-text files.
//!
//! Vertex files hold one `x,y` pair per line. Colour files hold one colour
//! per line, in whatever form the SVG `fill` property accepts.

use std::fs;
use std::path::Path;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::geometry::{Point, Polygon};

/// Split text into lines, ignoring carriage returns.
fn lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split('\n').map(|line| line.replace('\r', ""))
}

/// Parse one `x,y` line.
///
/// Anything other than exactly two comma-separated numbers is rejected.
pub fn parse_vertex(line: &str) -> Option<Point> {
    let mut fields = line.split(',');
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        return None;
    };
    let x = x.trim().parse::<f64>().ok()?;
    let y = y.trim().parse::<f64>().ok()?;
    Some(Point::new(x, y))
}

/// Parse every vertex line in `text`, dropping lines that are not vertices.
pub fn parse_vertices(text: &str) -> Vec<Point> {
    lines(text)
        .enumerate()
        .filter_map(|(n, line)| {
            let vertex = parse_vertex(&line);
            if vertex.is_none() && !line.trim().is_empty() {
                trace!("skipping line {}: {:?}", n + 1, line);
            }
            vertex
        })
        .collect()
}

/// Parse a polygon; `source_name` only shows up in the error.
pub fn parse_polygon(text: &str, source_name: &str) -> Result<Polygon> {
    Polygon::try_new(parse_vertices(text)).ok_or_else(|| Error::EmptyPolygon {
        source_name: source_name.to_string(),
    })
}

/// Parse a colour list: one trimmed, non-blank entry per line.
pub fn parse_colours(text: &str, source_name: &str) -> Result<Vec<String>> {
    let colours: Vec<String> = lines(text)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    if colours.is_empty() {
        Err(Error::NoColours {
            source_name: source_name.to_string(),
        })
    } else {
        Ok(colours)
    }
}

/// Read a whole text file, tagging errors with its path.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a polygon from a vertex file.
pub fn load_polygon(path: &Path) -> Result<Polygon> {
    let polygon = parse_polygon(&read_text(path)?, &path.display().to_string())?;
    debug!("loaded {} vertices from {}", polygon.len(), path.display());
    Ok(polygon)
}

/// Load a colour palette.
pub fn load_colours(path: &Path) -> Result<Vec<String>> {
    let colours = parse_colours(&read_text(path)?, &path.display().to_string())?;
    debug!("loaded {} colours from {}", colours.len(), path.display());
    Ok(colours)
}
