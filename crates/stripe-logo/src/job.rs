//! One complete run: close the inputs, cut the stripes, render the document.
//!
//! Everything here works on values already in memory. Reading the files and
//! writing the result is the caller's business (see [`crate::loader`]).

use log::info;

use crate::geometry::{ClosureMode, Polygon};
use crate::stripe::{Stripe, StripeConfig, generate_stripes};
use crate::svg::{render_paths, substitute};

/// Subject and clip after closure, plus the stripes cut from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub subject: Polygon,
    pub clip: Polygon,
    pub stripes: Vec<Stripe>,
}

impl Artwork {
    /// Close both polygons with `closure`, then cut `config.count` stripes.
    pub fn cut(subject: &Polygon, base_clip: &Polygon, closure: ClosureMode, config: &StripeConfig) -> Self {
        let subject = subject.close_by(closure);
        let clip = base_clip.close_by(closure);
        let stripes = generate_stripes(&subject, &clip, config);

        info!(
            "cut {} stripes of height {} from a {}-vertex subject",
            stripes.len(),
            config.height,
            subject.len()
        );

        Self { subject, clip, stripes }
    }

    /// Number of stripes that missed the subject entirely.
    pub fn empty_stripes(&self) -> usize {
        self.stripes.iter().filter(|s| s.is_empty()).count()
    }

    /// Base shape and stripes as concatenated path elements.
    pub fn paths(&self, colours: &[String]) -> String {
        render_paths(&self.subject, &self.stripes, colours)
    }

    /// Substitute the rendered paths into `template`.
    pub fn render_svg(&self, template: &str, placeholder: &str, colours: &[String]) -> String {
        substitute(template, placeholder, &self.paths(colours))
    }
}
