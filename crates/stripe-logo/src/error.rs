//! Error type for the file-facing parts of stripe-logo.
//!
//! The geometry itself never fails: bad numbers flow through as NaN or
//! infinity and a missed overlap is just an empty stripe. Errors only come
//! from reading inputs and producing documents.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no vertices found in {source_name}")]
    EmptyPolygon { source_name: String },

    #[error("no colours found in {source_name}")]
    NoColours { source_name: String },

    #[error("invalid job config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("missing job setting: {0}")]
    MissingSetting(&'static str),

    #[error("SVG parse error")]
    Svg(#[from] usvg::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
