//! # stripe-logo
//!
//! Cut a polygon into horizontal stripes and render them as SVG fills.
//!
//! The base polygon is clipped against a convex band that steps down by a
//! fixed height for every stripe (Sutherland-Hodgman clipping). Each
//! resulting piece becomes a coloured `<path>` in an SVG template.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod clip;
pub mod config;
pub mod error;
pub mod geometry;
pub mod job;
pub mod loader;
pub mod stripe;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use clip::{EdgePolicy, inside, intersection, sutherland_hodgman, sutherland_hodgman_with};
pub use config::JobConfig;
pub use error::{Error, Result};
pub use geometry::{ClosureMode, Point, Polygon};
pub use job::Artwork;
pub use loader::{load_colours, load_polygon, parse_colours, parse_vertices};
pub use stripe::{Stripe, StripeConfig, generate_stripes, stripes};
pub use svg::{DocumentSummary, inspect_document, path_element, render_paths, substitute};
