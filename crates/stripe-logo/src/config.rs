//! Job configuration.
//!
//! A job can be described entirely on the command line, or in a YAML file
//! such as:
//!
//! ```yaml
//! base: shapes/base.poly
//! clip: shapes/band.poly
//! colours: palette.txt
//! template: outline.svg
//! output: logo.svg
//! stripes: 12
//! height: 8.5
//! closure: reference
//! edge_policy: skip-degenerate
//! ```
//!
//! Every field is optional in the file. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::clip::EdgePolicy;
use crate::error::{Error, Result};
use crate::geometry::ClosureMode;
use crate::loader::read_text;
use crate::stripe::StripeConfig;
use crate::svg::DEFAULT_PLACEHOLDER;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobConfig {
    /// Subject polygon vertex file
    pub base: PathBuf,
    /// Clip polygon vertex file
    pub clip: PathBuf,
    /// Colour palette file
    pub colours: PathBuf,
    /// SVG template
    pub template: PathBuf,
    /// Where the finished SVG goes
    pub output: PathBuf,
    /// Marker in the template replaced by the rendered paths
    pub placeholder: String,
    /// Number of stripes
    pub stripes: Option<usize>,
    /// Vertical step between stripes
    pub height: Option<f64>,
    pub closure: ClosureMode,
    pub edge_policy: EdgePolicy,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from("base.poly"),
            clip: PathBuf::from("clip.poly"),
            colours: PathBuf::from("colours.txt"),
            template: PathBuf::from("outline.svg"),
            output: PathBuf::from("logo.svg"),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            stripes: None,
            height: None,
            closure: ClosureMode::default(),
            edge_policy: EdgePolicy::default(),
        }
    }
}

impl JobConfig {
    /// Parse a YAML job description.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a YAML job description from disk.
    ///
    /// Relative paths in the file are taken relative to the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_yaml_str(&read_text(path)?)?;
        if let Some(dir) = path.parent() {
            config.rebase(dir);
        }
        Ok(config)
    }

    fn rebase(&mut self, dir: &Path) {
        for p in [
            &mut self.base,
            &mut self.clip,
            &mut self.colours,
            &mut self.template,
            &mut self.output,
        ] {
            if p.is_relative() && p.as_os_str() != "-" {
                *p = dir.join(&*p);
            }
        }
    }

    /// Stripe settings, once both count and height are known.
    pub fn stripe_config(&self) -> Result<StripeConfig> {
        let count = self.stripes.ok_or(Error::MissingSetting("stripes"))?;
        let height = self.height.ok_or(Error::MissingSetting("height"))?;
        Ok(StripeConfig {
            count,
            height,
            edge_policy: self.edge_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_file_names() {
        let config = JobConfig::default();
        assert_eq!(config.base, PathBuf::from("base.poly"));
        assert_eq!(config.clip, PathBuf::from("clip.poly"));
        assert_eq!(config.colours, PathBuf::from("colours.txt"));
        assert_eq!(config.template, PathBuf::from("outline.svg"));
        assert_eq!(config.output, PathBuf::from("logo.svg"));
        assert_eq!(config.placeholder, "<!--%PATHS%-->");
        assert_eq!(config.closure, ClosureMode::Reference);
        assert_eq!(config.edge_policy, EdgePolicy::Reference);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = JobConfig::from_yaml_str("stripes: 5\nheight: 2.5\nedge_policy: skip-degenerate\n").unwrap();
        assert_eq!(config.stripes, Some(5));
        assert_eq!(config.height, Some(2.5));
        assert_eq!(config.edge_policy, EdgePolicy::SkipDegenerate);
        assert_eq!(config.base, PathBuf::from("base.poly"));
    }

    #[test]
    fn closure_mode_from_yaml() {
        let config = JobConfig::from_yaml_str("closure: endpoints\n").unwrap();
        assert_eq!(config.closure, ClosureMode::Endpoints);
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(matches!(
            JobConfig::from_yaml_str("stripez: 5\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn stripe_config_needs_count_and_height() {
        let mut config = JobConfig::default();
        assert!(matches!(config.stripe_config(), Err(Error::MissingSetting("stripes"))));
        config.stripes = Some(3);
        assert!(matches!(config.stripe_config(), Err(Error::MissingSetting("height"))));
        config.height = Some(-1.5);
        let stripe = config.stripe_config().unwrap();
        assert_eq!(stripe.count, 3);
        assert_eq!(stripe.height, -1.5);
    }

    #[test]
    fn rebase_joins_relative_paths() {
        let mut config = JobConfig::default();
        config.output = PathBuf::from("/abs/logo.svg");
        config.rebase(Path::new("jobs"));
        assert_eq!(config.base, PathBuf::from("jobs/base.poly"));
        assert_eq!(config.output, PathBuf::from("/abs/logo.svg"));
    }
}
