//! Stripe driver: carve horizontal bands out of a subject polygon.
//!
//! Each stripe is the base clip polygon moved down by `index * height` and
//! intersected with the subject. Stripes come out in index order, which is
//! also the order they are painted in.

use log::{debug, warn};

use crate::clip::{EdgePolicy, sutherland_hodgman_with};
use crate::geometry::{Point, Polygon};

/// Configuration for a stripe run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripeConfig {
    /// Number of stripes to cut
    pub count: usize,
    /// Vertical distance between consecutive stripes
    pub height: f64,
    /// Degenerate-geometry handling passed to the clipper
    pub edge_policy: EdgePolicy,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            count: 0,
            height: 0.0,
            edge_policy: EdgePolicy::Reference,
        }
    }
}

impl StripeConfig {
    pub fn new(count: usize, height: f64) -> Self {
        Self {
            count,
            height,
            ..Self::default()
        }
    }
}

/// One clipped band.
#[derive(Debug, Clone, PartialEq)]
pub struct Stripe {
    /// Position in the run, starting at 0
    pub index: usize,
    /// Vertices of the clipped region; empty when the band misses the subject
    pub points: Vec<Point>,
}

impl Stripe {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Lazily cut stripes, one per `next()`.
///
/// ## Rust Lesson #17: Borrowing Iterators
///
/// `Stripes<'a>` holds references to the subject and clip polygons, so the
/// compiler guarantees they outlive the iterator. Nothing is copied until a
/// stripe is actually produced.
#[derive(Debug, Clone)]
pub struct Stripes<'a> {
    subject: &'a Polygon,
    clip: &'a Polygon,
    config: StripeConfig,
    next: usize,
}

impl Iterator for Stripes<'_> {
    type Item = Stripe;

    fn next(&mut self) -> Option<Stripe> {
        if self.next >= self.config.count {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let offset = index as f64 * self.config.height;
        let band = self.clip.translate(0.0, offset);
        let points = sutherland_hodgman_with(self.subject.points(), band.points(), self.config.edge_policy);

        debug!("stripe {}: offset {}, {} vertices", index, offset, points.len());

        Some(Stripe { index, points })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.config.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Stripes<'_> {}

/// Iterate the stripes of `subject` cut by `clip`.
pub fn stripes<'a>(subject: &'a Polygon, clip: &'a Polygon, config: StripeConfig) -> Stripes<'a> {
    Stripes {
        subject,
        clip,
        config,
        next: 0,
    }
}

/// Cut every stripe and collect them.
///
/// Logs a warning up front when the clip polygon is wound the wrong way or
/// has zero-length edges that the reference policy will trip over; the run
/// itself proceeds either way.
pub fn generate_stripes(subject: &Polygon, clip: &Polygon, config: &StripeConfig) -> Vec<Stripe> {
    if clip.len() >= 3 && clip.signed_area() < 0.0 {
        warn!(
            "clip polygon is wound clockwise (signed area {}); every stripe will come out empty",
            clip.signed_area()
        );
    }
    let degenerate = clip.degenerate_edge_count();
    if degenerate > 0 && config.edge_policy == EdgePolicy::Reference {
        warn!(
            "clip polygon has {} zero-length edge(s); with the reference edge policy every stripe will come out empty",
            degenerate
        );
    }

    let out: Vec<Stripe> = stripes(subject, clip, *config).collect();

    let empty = out.iter().filter(|s| s.is_empty()).count();
    debug!("cut {} stripes ({} empty)", out.len(), empty);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::bounding_box_of_points;

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        Polygon::new(coords.iter().map(|&c| Point::from(c)).collect())
    }

    fn square4() -> Polygon {
        poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    }

    fn band() -> Polygon {
        poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (0.0, 1.0)])
    }

    fn area(points: &[Point]) -> f64 {
        crate::geometry::signed_area_of_points(points).abs()
    }

    #[test]
    fn four_bands_slice_the_square() {
        let stripes = generate_stripes(&square4(), &band(), &StripeConfig::new(4, 1.0));
        assert_eq!(stripes.len(), 4);

        let mut total = 0.0;
        for (i, stripe) in stripes.iter().enumerate() {
            assert_eq!(stripe.index, i);
            assert!(!stripe.is_empty(), "stripe {} should not be empty", i);

            let (_, min_y, _, max_y) = bounding_box_of_points(&stripe.points).unwrap();
            assert!((min_y - i as f64).abs() < 1e-12, "stripe {} starts at {}", i, min_y);
            assert!((max_y - (i + 1) as f64).abs() < 1e-12, "stripe {} ends at {}", i, max_y);

            let a = area(&stripe.points);
            assert!((a - 4.0).abs() < 1e-9, "stripe {} area {}", i, a);
            total += a;
        }

        // Four disjoint 4x1 slices cover the 4x4 square exactly.
        assert!((total - 16.0).abs() < 1e-9);
    }

    #[test]
    fn zero_stripes() {
        let stripes = generate_stripes(&square4(), &band(), &StripeConfig::new(0, 1.0));
        assert!(stripes.is_empty());
    }

    #[test]
    fn bands_past_the_subject_are_empty() {
        let stripes = generate_stripes(&square4(), &band(), &StripeConfig::new(6, 1.0));
        assert_eq!(stripes.len(), 6);
        assert!(stripes[..4].iter().all(|s| !s.is_empty()));
        assert!(stripes[4].is_empty());
        assert!(stripes[5].is_empty());
    }

    #[test]
    fn negative_height_moves_up() {
        let subject = poly(&[(0.0, -4.0), (4.0, -4.0), (4.0, 0.0), (0.0, 0.0)]);
        let clip = poly(&[(0.0, -1.0), (4.0, -1.0), (4.0, 0.0), (0.0, 0.0)]);
        let stripes = generate_stripes(&subject, &clip, &StripeConfig::new(4, -1.0));
        for stripe in &stripes {
            let (_, min_y, _, _) = bounding_box_of_points(&stripe.points).unwrap();
            assert!((min_y + (stripe.index + 1) as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn inputs_are_not_modified() {
        let subject = square4();
        let clip = band();
        let _ = generate_stripes(&subject, &clip, &StripeConfig::new(3, 1.0));
        assert_eq!(subject, square4());
        assert_eq!(clip, band());
    }

    #[test]
    fn iterator_reports_exact_length() {
        let subject = square4();
        let clip = band();
        let mut it = stripes(&subject, &clip, StripeConfig::new(3, 1.0));
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn closed_clip_needs_skip_degenerate() {
        let subject = square4().close();
        let clip = band().close();

        let reference = generate_stripes(&subject, &clip, &StripeConfig::new(4, 1.0));
        assert!(reference.iter().all(Stripe::is_empty));

        let config = StripeConfig {
            edge_policy: EdgePolicy::SkipDegenerate,
            ..StripeConfig::new(4, 1.0)
        };
        let hardened = generate_stripes(&subject, &clip, &config);
        assert!(hardened.iter().all(|s| !s.is_empty()));
    }
}
