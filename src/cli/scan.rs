//! Scan command implementation.
//!
//! Runs local stylesheet files through the same palette pipeline as `fetch`.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use walkdir::WalkDir;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::extract::extract_palette;
use crate::fetch::Resource;
use crate::output::{display_path, plural, Printer};

use super::{emit, print_progress, ReportArgs};

/// Extract the palette of local stylesheet files
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Stylesheet files, or directories to search for *.css
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Name used for the report title and file name
    #[arg(long, default_value = "stylesheets")]
    pub name: String,

    #[command(flatten)]
    pub report: ReportArgs,
}

pub fn run(args: ScanArgs, printer: &Printer) -> Result<()> {
    let config = args.report.resolve()?;
    let report = ReportConfig::new(args.name.clone(), config.output.clone());

    let files = collect_stylesheets(&args.paths);
    printer.status("Found", &plural(files.len(), "stylesheet", "stylesheets"));

    let resources = files.iter().map(|path| read_resource(path, printer));
    let extraction = extract_palette(resources, config.rgb_padding);
    print_progress(&extraction, printer);

    emit(&args.name, &extraction.palette, &report, &config, printer)
}

/// Expand directories into the `.css` files below them, sorted by path.
///
/// Plain file arguments are kept as given, whatever their extension.
pub fn collect_stylesheets(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_css(e.path()))
            .map(|e| e.into_path())
            .collect();
        found.sort();
        files.extend(found);
    }

    files
}

fn is_css(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("css"))
}

fn read_resource(path: &Path, printer: &Printer) -> Resource {
    let url = display_path(path);
    match fs::read(path) {
        Ok(bytes) => Resource::Fetched {
            url,
            text: String::from_utf8_lossy(&bytes).into_owned(),
        },
        Err(e) => {
            printer.error("Unreadable", &format!("{}: {}", url, e));
            Resource::Skipped {
                url,
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_stylesheets_walks_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("theme")).unwrap();
        fs::write(root.join("b.css"), "").unwrap();
        fs::write(root.join("theme").join("a.CSS"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();

        let files = collect_stylesheets(&[root.to_path_buf()]);
        assert_eq!(files, vec![root.join("b.css"), root.join("theme").join("a.CSS")]);
    }

    #[test]
    fn test_collect_stylesheets_keeps_files() {
        let files = collect_stylesheets(&[PathBuf::from("inline.html")]);
        assert_eq!(files, vec![PathBuf::from("inline.html")]);
    }

    #[test]
    fn test_read_resource_decodes_latin1_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.css");
        fs::write(&path, b"/* caf\xE9 */ a { color: #fff }").unwrap();

        match read_resource(&path, &Printer::new()) {
            Resource::Fetched { text, .. } => {
                assert!(text.starts_with("/* caf\u{FFFD} */"));
                assert!(text.contains("color: #fff"));
            }
            other => panic!("expected fetched stylesheet, got {:?}", other),
        }
    }

    #[test]
    fn test_read_resource_missing_file_is_skipped() {
        let resource = read_resource(Path::new("/nonexistent/site.css"), &Printer::new());
        assert!(matches!(resource, Resource::Skipped { .. }));
    }
}
