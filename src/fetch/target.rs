//! Turning user input into fetchable URLs.

use std::path::Path;

use url::Url;

use crate::error::{Result, SwatchError};

/// Normalize a command-line target into a URL.
///
/// An existing filesystem path becomes a `file:` URL. Otherwise, input
/// without a scheme is treated as a host and given `http://`.
pub fn normalize_target(input: &str) -> Result<Url> {
    let input = input.trim();

    let path = Path::new(input);
    if !input.is_empty() && path.exists() {
        let absolute = path.canonicalize().map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        return Url::from_file_path(&absolute).map_err(|()| SwatchError::Url {
            input: input.to_string(),
            message: "path cannot be expressed as a file URL".to_string(),
        });
    }

    let candidate = if input.contains("://") || input.starts_with("file:") {
        input.to_string()
    } else {
        format!("http://{}", input)
    };

    let url = Url::parse(&candidate).map_err(|e| SwatchError::Url {
        input: input.to_string(),
        message: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(SwatchError::Url {
            input: input.to_string(),
            message: "not a page URL".to_string(),
        });
    }

    Ok(url)
}

/// Name used for report titles and file names.
///
/// The host for network URLs, the file stem for `file:` URLs.
pub fn site_name(url: &Url) -> String {
    if let Some(host) = url.host_str() {
        if !host.is_empty() {
            return host.to_string();
        }
    }

    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .map(|last| last.split('.').next().unwrap_or(last))
        .filter(|stem| !stem.is_empty())
        .unwrap_or("site")
        .to_string()
}

/// Resolve a stylesheet `href` against the page it was found on.
pub fn resolve_href(page: &Url, href: &str) -> Result<Url> {
    page.join(href).map_err(|e| SwatchError::Url {
        input: href.to_string(),
        message: e.to_string(),
    })
}
