//! CLI command implementations.
//!
//! - `generate` - cut stripes and write the SVG or JSON output
//! - `inspect` - describe a vertex file or a rendered SVG

pub mod common;
pub mod generate;
pub mod inspect;

pub use generate::{GenerateArgs, cmd_generate};
pub use inspect::{InspectArgs, cmd_inspect};
