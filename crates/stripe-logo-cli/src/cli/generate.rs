//! Generate command implementation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use log::{info, warn};
use serde::Serialize;

use stripe_logo::{
    Artwork, ClosureMode, EdgePolicy, JobConfig, Point, inspect_document, load_colours, load_polygon,
    loader::read_text, svg::stripe_colour,
};

use super::common::{OutputFormat, parse_closure, parse_edge_policy, write_output};

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Number of stripes to cut
    pub stripes: Option<usize>,

    /// Vertical distance between stripes (may be negative)
    #[arg(allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// YAML job file; flags given here override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Subject polygon vertex file [default: base.poly]
    #[arg(long)]
    pub base: Option<PathBuf>,

    /// Clip polygon vertex file [default: clip.poly]
    #[arg(long)]
    pub clip: Option<PathBuf>,

    /// Colour palette file [default: colours.txt]
    #[arg(long)]
    pub colours: Option<PathBuf>,

    /// SVG template [default: outline.svg]
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Output file, or - for stdout [default: logo.svg]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Template marker replaced by the paths [default: <!--%PATHS%-->]
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Closure test: reference or endpoints
    #[arg(long, value_parser = parse_closure)]
    pub closure: Option<ClosureMode>,

    /// Clip edge handling: reference or skip-degenerate
    #[arg(long, value_parser = parse_edge_policy)]
    pub edge_policy: Option<EdgePolicy>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Parse the finished SVG and report how many paths it resolves
    #[arg(long)]
    pub check: bool,
}

impl GenerateArgs {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<JobConfig> {
        let mut config = match &self.config {
            Some(path) => JobConfig::load(path).with_context(|| format!("failed to load job config {}", path.display()))?,
            None => JobConfig::default(),
        };

        if let Some(v) = self.stripes {
            config.stripes = Some(v);
        }
        if let Some(v) = self.height {
            config.height = Some(v);
        }
        if let Some(v) = &self.base {
            config.base = v.clone();
        }
        if let Some(v) = &self.clip {
            config.clip = v.clone();
        }
        if let Some(v) = &self.colours {
            config.colours = v.clone();
        }
        if let Some(v) = &self.template {
            config.template = v.clone();
        }
        if let Some(v) = &self.output {
            config.output = v.clone();
        }
        if let Some(v) = &self.placeholder {
            config.placeholder = v.clone();
        }
        if let Some(v) = self.closure {
            config.closure = v;
        }
        if let Some(v) = self.edge_policy {
            config.edge_policy = v;
        }
        Ok(config)
    }
}

/// A stripe in JSON output format.
#[derive(Serialize)]
struct JsonStripe<'a> {
    index: usize,
    colour: &'a str,
    points: Vec<[f64; 2]>,
}

/// JSON output: the closed base shape and every stripe.
#[derive(Serialize)]
struct JsonOutput<'a> {
    base: Vec<[f64; 2]>,
    base_colour: &'a str,
    stripes: Vec<JsonStripe<'a>>,
}

fn json_points(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

fn to_json(art: &Artwork, colours: &[String]) -> Result<String> {
    let output = JsonOutput {
        base: json_points(art.subject.points()),
        base_colour: &colours[0],
        stripes: art
            .stripes
            .iter()
            .map(|s| JsonStripe {
                index: s.index,
                colour: stripe_colour(colours, s.index),
                points: json_points(&s.points),
            })
            .collect(),
    };
    let mut text = serde_json::to_string_pretty(&output).context("failed to serialize stripes")?;
    text.push('\n');
    Ok(text)
}

/// Execute the generate command.
pub fn cmd_generate(args: &GenerateArgs) -> Result<()> {
    let config = args.resolve()?;
    let stripe_config = config
        .stripe_config()
        .context("stripe count and height are required (positional arguments or job config)")?;
    if !stripe_config.height.is_finite() {
        warn!("stripe height {} is not finite; stripe coordinates will be too", stripe_config.height);
    }

    let subject = load_polygon(&config.base)?;
    let clip = load_polygon(&config.clip)?;
    let colours = load_colours(&config.colours)?;

    let start = Instant::now();
    let art = Artwork::cut(&subject, &clip, config.closure, &stripe_config);
    info!("clipping took {:.3}ms", start.elapsed().as_secs_f64() * 1000.0);

    let empty = art.empty_stripes();
    if empty > 0 {
        warn!("{} of {} stripes do not overlap the base shape", empty, art.stripes.len());
    }

    let text = match args.format {
        OutputFormat::Json => to_json(&art, &colours)?,
        OutputFormat::Svg => {
            let template = read_text(&config.template)?;
            let svg = art.render_svg(&template, &config.placeholder, &colours);
            if args.check {
                let summary = inspect_document(&svg).context("rendered SVG does not parse")?;
                eprintln!(
                    "check: {} paths resolved ({} filled) from {} written",
                    summary.paths,
                    summary.filled,
                    art.stripes.len() + 1
                );
            }
            svg
        }
    };

    write_output(&config.output, &text)?;
    info!("wrote {}", config.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = GenerateArgs {
            stripes: Some(4),
            height: Some(-2.0),
            output: Some(PathBuf::from("-")),
            edge_policy: Some(EdgePolicy::SkipDegenerate),
            ..GenerateArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.stripes, Some(4));
        assert_eq!(config.height, Some(-2.0));
        assert_eq!(config.output, PathBuf::from("-"));
        assert_eq!(config.edge_policy, EdgePolicy::SkipDegenerate);
        assert_eq!(config.base, PathBuf::from("base.poly"));
    }

    #[test]
    fn json_uses_null_for_non_finite() {
        let art = Artwork {
            subject: stripe_logo::Polygon::new(vec![Point::new(0.0, 0.0)]),
            clip: stripe_logo::Polygon::new(vec![Point::new(0.0, 0.0)]),
            stripes: vec![stripe_logo::Stripe {
                index: 0,
                points: vec![Point::new(f64::NAN, 1.0)],
            }],
        };
        let json = to_json(&art, &["a".to_string(), "b".to_string()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stripes"][0]["colour"], "b");
        assert!(value["stripes"][0]["points"][0][0].is_null());
        assert_eq!(value["base_colour"], "a");
    }
}
