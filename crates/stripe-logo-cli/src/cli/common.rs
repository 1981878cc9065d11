//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use stripe_logo::{ClosureMode, EdgePolicy};

/// Output format for generated stripes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

pub fn parse_closure(name: &str) -> Result<ClosureMode, String> {
    ClosureMode::from_name(name).ok_or_else(|| format!("unknown closure mode '{}' (use reference or endpoints)", name))
}

pub fn parse_edge_policy(name: &str) -> Result<EdgePolicy, String> {
    EdgePolicy::from_name(name)
        .ok_or_else(|| format!("unknown edge policy '{}' (use reference or skip-degenerate)", name))
}

/// Write `text` to `path`, or to stdout when the path is `-`.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes()).context("failed to write to stdout")?;
        out.flush().context("failed to write to stdout")?;
    } else {
        fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_names() {
        assert_eq!(parse_closure("endpoints"), Ok(ClosureMode::Endpoints));
        assert_eq!(parse_edge_policy("skip-degenerate"), Ok(EdgePolicy::SkipDegenerate));
        assert!(parse_closure("sideways").is_err());
        assert!(parse_edge_policy("sideways").is_err());
    }
}
