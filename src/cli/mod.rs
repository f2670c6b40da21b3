pub mod completions;
pub mod fetch;
pub mod scan;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, Format, ReportConfig};
use crate::error::Result;
use crate::extract::Extraction;
use crate::output::{display_path, plural, Printer};
use crate::render::{render_json, render_list, render_text, write_html};
use crate::types::{Palette, RgbPadding};

/// swatch - Colour palette extractor for web pages
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the palette of a web page's linked stylesheets
    Fetch(fetch::FetchArgs),

    /// Extract the palette of local stylesheet files
    Scan(scan::ScanArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Report options shared by `fetch` and `scan`.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Report format printed to stdout
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Directory for the HTML report
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Maximum number of colours to report
    #[arg(long)]
    pub max: Option<usize>,

    /// Don't write the HTML report
    #[arg(long)]
    pub no_html: bool,

    /// Convert rgb() components without zero-padding
    #[arg(long)]
    pub legacy_rgb: bool,

    /// Config file (default: ./swatch.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ReportArgs {
    /// Load the config file and apply command-line overrides.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = Config::discover(self.config.as_deref())?;

        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if self.max.is_some() {
            config.max = self.max;
        }
        if self.no_html {
            config.html = false;
        }
        if self.legacy_rgb {
            config.rgb_padding = RgbPadding::Legacy;
        }

        Ok(config)
    }
}

/// Print per-stylesheet progress for a finished extraction.
fn print_progress(extraction: &Extraction, printer: &Printer) {
    for (url, found) in &extraction.scanned {
        let count = plural(*found, "colour", "colours");
        printer.status("Scanned", &format!("{} {}", url, printer.dim(&format!("({})", count))));
    }
    for (url, reason) in &extraction.skipped {
        printer.warning(
            "Skipping",
            &format!("Did not pull any colors from badly formed url: {}", url),
        );
        log::debug!("{}: {}", url, reason);
    }
}

/// Print the palette report and write the HTML page.
fn emit(
    heading: &str,
    palette: &Palette,
    report: &ReportConfig,
    config: &Config,
    printer: &Printer,
) -> Result<()> {
    let palette = match config.max {
        Some(max) => palette.limited(max),
        None => palette.clone(),
    };

    match config.format {
        Format::Text => {
            println!("Palette for {}", heading);
            print!("{}", render_text(&palette));
        }
        Format::List => {
            printer.info("Palette", heading);
            print!("{}", render_list(&palette));
        }
        Format::Json => {
            printer.info("Palette", heading);
            println!("{}", render_json(&palette, &report.site_name)?);
        }
    }

    if config.html {
        let path = write_html(&palette, report)?;
        printer.info("Wrote", &printer.cyan(&display_path(&path)));
    }

    Ok(())
}
