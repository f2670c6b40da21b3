//! Configuration (swatch.yaml) and report settings.
//!
//! `swatch.yaml` holds defaults for the command line: output directory,
//! report format, rgb conversion and HTTP settings. Flags given on the
//! command line take precedence.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::types::RgbPadding;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "swatch.yaml";

/// Report printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Colour and frequency table
    #[default]
    Text,
    /// One colour per line
    List,
    /// JSON document
    Json,
}

/// Settings loaded from swatch.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the HTML report is written to.
    pub output: PathBuf,

    /// Stdout report format.
    pub format: Format,

    /// Only report the most frequent colours.
    pub max: Option<usize>,

    /// Whether to write the HTML swatch page.
    pub html: bool,

    /// How rgb() components become hex digits.
    pub rgb_padding: RgbPadding,

    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            format: Format::default(),
            max: None,
            html: true,
            rgb_padding: RgbPadding::default(),
            timeout_secs: 30,
            user_agent: format!("swatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SwatchError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check swatch.yaml syntax".to_string()),
        })
    }

    /// Load an explicit config file, or `swatch.yaml` if one exists here.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    log::debug!("loading {}", DEFAULT_CONFIG_FILE);
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// What a report renderer needs to know about the run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Used for the page title and the report file name.
    pub site_name: String,
    pub output_dir: PathBuf,
}

impl ReportConfig {
    pub fn new(site_name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            site_name: site_name.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Path of the HTML report: `<output_dir>/<site_name>.html`.
    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.html", self.site_name))
    }
}
