//! Fetch command implementation.
//!
//! Downloads a page, follows its stylesheet links and reports the palette.

use clap::Args;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::extract::extract_palette;
use crate::fetch::{collect_resources, normalize_target, site_name, HttpFetcher};
use crate::output::Printer;

use super::{emit, print_progress, ReportArgs};

/// Extract the palette of a web page's linked stylesheets
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Page URL (a bare host gets http://)
    pub url: String,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub report: ReportArgs,
}

pub fn run(args: FetchArgs, printer: &Printer) -> Result<()> {
    let mut config = args.report.resolve()?;
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }

    let page = normalize_target(&args.url)?;
    let report = ReportConfig::new(site_name(&page), config.output.clone());

    printer.status("Fetching", &printer.cyan(page.as_str()));
    let fetcher = HttpFetcher::new(config.timeout(), &config.user_agent);
    let resources = collect_resources(&fetcher, &page)?;

    let extraction = extract_palette(resources, config.rgb_padding);
    print_progress(&extraction, printer);

    emit(&args.url, &extraction.palette, &report, &config, printer)
}
