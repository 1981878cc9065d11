//! Sutherland-Hodgman polygon clipping.
//!
//! This is the HOT PATH: it runs once per stripe, for every clip edge,
//! over every vertex the previous edge let through.
//!
//! The clip polygon must be convex and counter-clockwise (in a y-up frame,
//! so clockwise on screen where SVG's y axis points down). A clip polygon
//! wound the other way selects the *outside* of each edge and the result
//! comes back empty. That is not detected here.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// How the clipper treats degenerate geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgePolicy {
    /// Plain IEEE arithmetic.
    ///
    /// A zero-length clip edge rejects every point (the inside test is a
    /// strict `>` on a zero cross product) and a zero denominator in
    /// [`intersection`] produces infinite or NaN vertices.
    #[default]
    Reference,
    /// Skip clip edges whose endpoints coincide, and drop intersections whose
    /// denominator is exactly zero.
    SkipDegenerate,
}

impl EdgePolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "reference" => Some(Self::Reference),
            "skip-degenerate" | "skip_degenerate" => Some(Self::SkipDegenerate),
            _ => None,
        }
    }
}

// ============================================================================
// HALF-PLANE TEST
// ============================================================================

/// Is `p` strictly on the left of the directed edge `cp1 -> cp2`?
///
/// Points exactly on the edge's line are outside.
#[inline]
pub fn inside(p: Point, cp1: Point, cp2: Point) -> bool {
    (cp2.x - cp1.x) * (p.y - cp1.y) > (cp2.y - cp1.y) * (p.x - cp1.x)
}

// ============================================================================
// LINE-LINE INTERSECTION
// ============================================================================

/// Intersection of the infinite lines through `p1 -> p2` and `cp1 -> cp2`.
///
/// Parallel lines divide by zero; the result is then infinite or NaN.
#[inline]
pub fn intersection(p1: Point, p2: Point, cp1: Point, cp2: Point) -> Point {
    let dc = Point::new(cp1.x - cp2.x, cp1.y - cp2.y);
    let dp = Point::new(p1.x - p2.x, p1.y - p2.y);
    let n1 = cp1.x * cp2.y - cp1.y * cp2.x;
    let n2 = p1.x * p2.y - p1.y * p2.x;
    let n3 = 1.0 / (dc.x * dp.y - dc.y * dp.x);
    Point::new((n1 * dp.x - n2 * dc.x) * n3, (n1 * dp.y - n2 * dc.y) * n3)
}

/// [`intersection`], or `None` when the lines are parallel.
#[inline]
pub fn try_intersection(p1: Point, p2: Point, cp1: Point, cp2: Point) -> Option<Point> {
    let denom = (cp1.x - cp2.x) * (p1.y - p2.y) - (cp1.y - cp2.y) * (p1.x - p2.x);
    if denom == 0.0 {
        None
    } else {
        Some(intersection(p1, p2, cp1, cp2))
    }
}

// ============================================================================
// POLYGON CLIPPING
// ============================================================================

/// Clip `subject` against the convex polygon `clip`.
///
/// Returns the vertices of the intersection, in the subject's order, with new
/// vertices inserted where the subject crosses a clip edge. An empty result
/// means the two polygons do not overlap.
pub fn sutherland_hodgman(subject: &[Point], clip: &[Point]) -> Vec<Point> {
    sutherland_hodgman_with(subject, clip, EdgePolicy::Reference)
}

/// [`sutherland_hodgman`] with an explicit [`EdgePolicy`].
pub fn sutherland_hodgman_with(subject: &[Point], clip: &[Point], policy: EdgePolicy) -> Vec<Point> {
    let mut output: Vec<Point> = subject.to_vec();

    let Some(&last) = clip.last() else {
        return output;
    };

    // ## Rust Lesson #9: Two Buffers, No Copies
    //
    // Each clip edge reads the previous edge's output and writes a new list.
    // Instead of allocating a fresh Vec every time we keep two and swap them;
    // `clear()` keeps the capacity around for the next edge.
    let mut input: Vec<Point> = Vec::with_capacity(output.len());

    let mut cp1 = last;
    for &cp2 in clip {
        if policy == EdgePolicy::SkipDegenerate && cp1 == cp2 {
            continue;
        }

        std::mem::swap(&mut input, &mut output);
        output.clear();

        // Once the working list is empty every later edge leaves it empty.
        let Some(&tail) = input.last() else {
            cp1 = cp2;
            continue;
        };

        let mut s = tail;
        let mut s_inside = inside(s, cp1, cp2);
        for &e in &input {
            let e_inside = inside(e, cp1, cp2);
            if e_inside != s_inside {
                push_intersection(&mut output, s, e, cp1, cp2, policy);
            }
            if e_inside {
                output.push(e);
            }
            s = e;
            s_inside = e_inside;
        }

        cp1 = cp2;
    }

    output
}

#[inline]
fn push_intersection(out: &mut Vec<Point>, s: Point, e: Point, cp1: Point, cp2: Point, policy: EdgePolicy) {
    match policy {
        EdgePolicy::Reference => out.push(intersection(s, e, cp1, cp2)),
        EdgePolicy::SkipDegenerate => {
            if let Some(p) = try_intersection(s, e, cp1, cp2) {
                out.push(p);
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
