//! SVG output: path elements, template substitution, and a usvg check of
//! the finished document.

use std::fmt::Write as _;

use log::{debug, warn};

use crate::error::Result;
use crate::geometry::{Point, Polygon};
use crate::stripe::Stripe;

/// Placeholder the template carries where the paths go.
pub const DEFAULT_PLACEHOLDER: &str = "<!--%PATHS%-->";

/// Id of the element drawn for the uncut subject polygon.
pub const BASE_ID: &str = "base";

/// Id of the element drawn for stripe `index`.
pub fn stripe_id(index: usize) -> String {
    format!("path_{}", index)
}

/// Colour for stripe `index`: entry 0 belongs to the base shape, so stripes
/// start at entry 1 and wrap around.
///
/// # Panics
///
/// Panics if `colours` is empty; [`crate::loader::parse_colours`] never
/// returns an empty list.
pub fn stripe_colour(colours: &[String], index: usize) -> &str {
    &colours[(index + 1) % colours.len()]
}

/// A filled path wrapped in its own group.
///
/// ```text
/// <g id="group_ID"><path id="ID" d="M x,y x,y Z" style="fill:COLOUR;fill-opacity:1" /></g>
/// ```
///
/// Coordinates use `{:?}` so `1.0` stays `1.0`. An empty point list gives
/// `d="M Z"`, which renderers ignore.
pub fn path_element(points: &[Point], id: &str, colour: &str) -> String {
    // ## Rust Lesson #24: fmt::Write
    //
    // `write!` into a String appends in place, like `+=` on a JS string
    // but without building a temporary for every piece. Writing to a String
    // cannot fail, so ignoring the fmt::Result is fine.
    let mut element = String::with_capacity(96 + points.len() * 24);
    let _ = write!(element, "<g id=\"group_{}\"><path id=\"{}\" d=\"M ", id, id);
    for p in points {
        let _ = write!(element, "{:?},{:?} ", p.x, p.y);
    }
    let _ = write!(
        element,
        "Z\" style=\"fill:{};fill-opacity:1\" /></g>",
        colour
    );
    element
}

/// Render the base shape followed by every stripe, in paint order.
pub fn render_paths(subject: &Polygon, stripes: &[Stripe], colours: &[String]) -> String {
    let mut paths = path_element(subject.points(), BASE_ID, &colours[0]);
    for stripe in stripes {
        paths.push_str(&path_element(
            &stripe.points,
            &stripe_id(stripe.index),
            stripe_colour(colours, stripe.index),
        ));
    }
    paths
}

/// Replace every occurrence of `placeholder` in `template` with `paths`.
pub fn substitute(template: &str, placeholder: &str, paths: &str) -> String {
    if !template.contains(placeholder) {
        warn!("template has no {} placeholder; output will not contain the paths", placeholder);
    }
    template.replace(placeholder, paths)
}

/// What usvg made of a rendered document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSummary {
    /// Paths that survived parsing
    pub paths: usize,
    /// Of those, how many have a fill
    pub filled: usize,
    /// Non-empty path ids, in document order
    pub ids: Vec<String>,
}

/// Parse `svg` with usvg and count the paths it resolves.
///
/// Empty stripes (`d="M Z"`) and stripes with non-finite coordinates are
/// dropped by the parser, so `paths` can be smaller than the number of
/// elements written.
pub fn inspect_document(svg: &str) -> Result<DocumentSummary> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)?;

    let mut summary = DocumentSummary::default();
    summarize_group(tree.root(), &mut summary);
    debug!("document resolved {} paths ({} filled)", summary.paths, summary.filled);
    Ok(summary)
}

fn summarize_group(group: &usvg::Group, summary: &mut DocumentSummary) {
    for child in group.children() {
        match child {
            usvg::Node::Group(group) => summarize_group(group, summary),
            usvg::Node::Path(path) => {
                summary.paths += 1;
                if path.fill().is_some() {
                    summary.filled += 1;
                }
                if !path.id().is_empty() {
                    summary.ids.push(path.id().to_string());
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn colours(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const TEMPLATE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100"><!--%PATHS%--></svg>"#;

    #[test]
    fn path_element_format() {
        let points = [Point::new(0.0, 0.0), Point::new(4.0, 0.5), Point::new(-1.0, 3.0)];
        assert_eq!(
            path_element(&points, "path_0", "#ff0000"),
            "<g id=\"group_path_0\"><path id=\"path_0\" d=\"M 0.0,0.0 4.0,0.5 -1.0,3.0 Z\" \
             style=\"fill:#ff0000;fill-opacity:1\" /></g>"
        );
    }

    #[test]
    fn empty_path_element() {
        assert_eq!(
            path_element(&[], "path_3", "blue"),
            "<g id=\"group_path_3\"><path id=\"path_3\" d=\"M Z\" style=\"fill:blue;fill-opacity:1\" /></g>"
        );
    }

    #[test]
    fn stripe_colours_skip_base_colour_and_wrap() {
        let palette = colours(&["base", "a", "b"]);
        assert_eq!(stripe_colour(&palette, 0), "a");
        assert_eq!(stripe_colour(&palette, 1), "b");
        assert_eq!(stripe_colour(&palette, 2), "base");
        assert_eq!(stripe_colour(&palette, 3), "a");
    }

    #[test]
    fn single_colour_palette_paints_everything_the_same() {
        let palette = colours(&["black"]);
        assert_eq!(stripe_colour(&palette, 0), "black");
        assert_eq!(stripe_colour(&palette, 7), "black");
    }

    #[test]
    fn render_paths_in_order() {
        let subject = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)]);
        let stripes = vec![
            Stripe { index: 0, points: vec![Point::new(0.0, 0.0)] },
            Stripe { index: 1, points: Vec::new() },
        ];
        let paths = render_paths(&subject, &stripes, &colours(&["red", "green"]));

        let base = paths.find("id=\"base\"").unwrap();
        let first = paths.find("id=\"path_0\"").unwrap();
        let second = paths.find("id=\"path_1\"").unwrap();
        assert!(base < first && first < second);
        assert!(paths.contains("fill:red"));
        assert!(paths.contains("id=\"path_0\" d=\"M 0.0,0.0 Z\" style=\"fill:green"));
        assert!(paths.contains("id=\"path_1\" d=\"M Z\" style=\"fill:red"));
    }

    #[test]
    fn substitute_replaces_every_placeholder() {
        let out = substitute("a<!--%PATHS%-->b<!--%PATHS%-->", DEFAULT_PLACEHOLDER, "X");
        assert_eq!(out, "aXbX");
    }

    #[test]
    fn substitute_without_placeholder_is_identity() {
        assert_eq!(substitute("<svg/>", DEFAULT_PLACEHOLDER, "X"), "<svg/>");
    }

    #[test]
    fn inspect_counts_filled_paths() {
        let subject = Polygon::new(vec![
            Point::new(10.0, 10.0),
            Point::new(90.0, 10.0),
            Point::new(90.0, 90.0),
            Point::new(10.0, 90.0),
        ]);
        let stripes = vec![
            Stripe {
                index: 0,
                points: vec![Point::new(10.0, 10.0), Point::new(90.0, 10.0), Point::new(90.0, 20.0)],
            },
            Stripe { index: 1, points: Vec::new() },
        ];
        let paths = render_paths(&subject, &stripes, &colours(&["#000000", "#ffffff"]));
        let doc = substitute(TEMPLATE, DEFAULT_PLACEHOLDER, &paths);

        let summary = inspect_document(&doc).unwrap();
        // The empty stripe has no geometry and is dropped.
        assert_eq!(summary.paths, 2);
        assert_eq!(summary.filled, 2);
    }

    #[test]
    fn inspect_rejects_garbage() {
        assert!(matches!(inspect_document("not svg at all"), Err(Error::Svg(_))));
    }

    #[test]
    fn parse_error_keeps_its_source() {
        use std::error::Error as _;

        let err = inspect_document("<svg xmlns=\"http://www.w3.org/2000/svg\"><g></svg>").unwrap_err();
        assert_eq!(err.to_string(), "SVG parse error");
        let source = err.source().expect("usvg error should be chained");
        assert!(!source.to_string().is_empty());
    }
}
