//! Inspect command: describe a vertex file or a rendered SVG.
//!
//! Handy for checking a clip polygon before a run: the clipper needs it
//! counter-clockwise (clockwise on screen) and free of zero-length edges.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use stripe_logo::{Polygon, inspect_document, load_polygon, loader::read_text};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// A vertex file (x,y per line) or an .svg document
    pub file: PathBuf,
}

/// Human-readable report for a polygon.
pub fn describe_polygon(polygon: &Polygon) -> String {
    let (min_x, min_y, max_x, max_y) = polygon.bounding_box();
    let area = polygon.signed_area();
    let winding = if area > 0.0 {
        "counter-clockwise (y up), usable as a clip polygon"
    } else if area < 0.0 {
        "clockwise (y up), will clip to nothing"
    } else {
        "degenerate"
    };

    let mut report = String::new();
    report.push_str(&format!("vertices:        {}\n", polygon.len()));
    report.push_str(&format!("first:           {}\n", polygon.first()));
    report.push_str(&format!("last:            {}\n", polygon.last()));
    report.push_str(&format!("bounds:          ({}, {}) - ({}, {})\n", min_x, min_y, max_x, max_y));
    report.push_str(&format!("signed area:     {}\n", area));
    report.push_str(&format!("winding:         {}\n", winding));
    report.push_str(&format!("closed (ref):    {}\n", polygon.is_closed()));
    report.push_str(&format!("first == last:   {}\n", polygon.is_explicitly_closed()));
    report.push_str(&format!("zero-len edges:  {}\n", polygon.degenerate_edge_count()));
    report
}

/// Execute the inspect command.
pub fn cmd_inspect(args: &InspectArgs) -> Result<()> {
    let is_svg = args
        .file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let text = read_text(&args.file)?;
        let summary = inspect_document(&text).with_context(|| format!("failed to parse {}", args.file.display()))?;
        println!("paths:   {}", summary.paths);
        println!("filled:  {}", summary.filled);
        if !summary.ids.is_empty() {
            println!("ids:     {}", summary.ids.join(", "));
        }
    } else {
        let polygon = load_polygon(&args.file)?;
        print!("{}", describe_polygon(&polygon));
    }
    Ok(())
}
