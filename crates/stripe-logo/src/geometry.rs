//! Core geometry types for stripe-logo.
//!
//! ## Rust Lesson #3: Value Types
//!
//! A `Point` is `Copy`: passing it around duplicates the two floats, so there
//! is nothing to alias. A `Polygon` owns a `Vec<Point>`, which is NOT `Copy`,
//! so every operation here borrows the polygon (`&self`) and builds a brand new
//! one. Nobody can change a polygon after it has been constructed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2D point with x,y coordinates.
///
/// Equality is exact coordinate equality (no epsilon).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite (not NaN, not infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Offset this point by (dx, dy).
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Canonical diagnostic form: `{x, y}`.
///
/// Floats are written with `{:?}` so whole numbers keep their fractional
/// part (`1.0`, not `1`) and non-finite values read `inf` / `NaN`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}, {:?}}}", self.x, self.y)
    }
}

// ============================================================================
// POLYGON
// ============================================================================

/// Which test decides whether a polygon already repeats its first vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosureMode {
    /// The historical predicate: the first vertex has `x == y` and the last
    /// vertex has `x == y`. It never compares the two vertices with each
    /// other. See [`Polygon::is_closed`].
    #[default]
    Reference,
    /// First vertex equals last vertex.
    Endpoints,
}

impl ClosureMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "reference" => Some(Self::Reference),
            "endpoints" => Some(Self::Endpoints),
            _ => None,
        }
    }
}

/// An ordered, non-empty sequence of vertices, read as a closed ring.
///
/// The edge from the last vertex back to the first is always implied,
/// whether or not the first vertex is also repeated at the end.
///
/// ## Rust Lesson #4: Private Fields
///
/// `points` has no `pub`, so code outside this module can only get at it
/// through `points()`, which hands out a read-only slice `&[Point]`.
/// That is how we make the polygon immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its vertices.
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty. Use [`Polygon::try_new`] for data coming
    /// from outside the program.
    pub fn new(points: Vec<Point>) -> Self {
        assert!(!points.is_empty(), "a polygon needs at least one vertex");
        Self { points }
    }

    /// Create a polygon, returning `None` when there are no vertices.
    pub fn try_new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a polygon built through `new` or `try_new`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Reference closure predicate.
    ///
    /// True when the first vertex has `x == y` AND the last vertex has
    /// `x == y`. This is not a real "first == last" test, but the rendered
    /// artwork depends on it, so it is reproduced as-is. Use
    /// [`Polygon::is_explicitly_closed`] for the comparison it looks like it
    /// meant to make.
    pub fn is_closed(&self) -> bool {
        let first = self.first();
        let last = self.last();
        first.x == first.y && last.x == last.y
    }

    /// First vertex equals last vertex.
    pub fn is_explicitly_closed(&self) -> bool {
        self.first() == self.last()
    }

    /// Closure test selected by `mode`.
    pub fn is_closed_by(&self, mode: ClosureMode) -> bool {
        match mode {
            ClosureMode::Reference => self.is_closed(),
            ClosureMode::Endpoints => self.is_explicitly_closed(),
        }
    }

    /// Append a copy of the first vertex unless [`Polygon::is_closed`] says
    /// the polygon is already closed.
    pub fn close(&self) -> Polygon {
        self.close_by(ClosureMode::Reference)
    }

    /// [`Polygon::close`] with the predicate chosen by `mode`.
    pub fn close_by(&self, mode: ClosureMode) -> Polygon {
        let mut points = self.points.clone();
        if !self.is_closed_by(mode) {
            points.push(self.first());
        }
        Polygon { points }
    }

    /// Shift every vertex by (dx, dy).
    pub fn translate(&self, dx: f64, dy: f64) -> Polygon {
        Polygon {
            points: self.points.iter().map(|p| p.offset(dx, dy)).collect(),
        }
    }

    /// Bounding box as (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        bounding_box_of_points(&self.points).unwrap_or((0.0, 0.0, 0.0, 0.0))
    }

    /// Signed area using the shoelace formula.
    ///
    /// Positive for counter-clockwise winding in a y-up frame.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area_of_points(&self.points)
    }

    /// Winding that the clipper's inside test expects for a clip polygon.
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Number of edges (including the implied closing edge) whose two ends
    /// are the same point.
    pub fn degenerate_edge_count(&self) -> usize {
        let n = self.points.len();
        (0..n)
            .filter(|&i| self.points[i] == self.points[(i + 1) % n])
            .count()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "]")
    }
}

/// Bounding box of a point sequence, `None` when it is empty.
pub fn bounding_box_of_points(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    if points.is_empty() {
        return None;
    }

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    Some((min_x, min_y, max_x, max_y))
}

/// Calculate signed area of a point sequence using the shoelace formula.
///
/// Returns:
/// - Positive value for counter-clockwise winding
/// - Negative value for clockwise winding
pub fn signed_area_of_points(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}

// ============================================================================
// TESTS
// ============================================================================
