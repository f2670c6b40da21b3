//! Page and stylesheet fetching.
//!
//! Fetching sits outside the colour pipeline: it turns a page URL into one
//! [`Resource`] per linked stylesheet. A stylesheet that can't be fetched
//! becomes [`Resource::Skipped`] and the run carries on; only a page that
//! can't be fetched at all is an error.

mod http;
mod target;

pub use http::HttpFetcher;
pub use target::{normalize_target, resolve_href, site_name};

use url::Url;

use crate::error::{Result, SwatchError};
use crate::parser::stylesheet_links;

/// Source of page and stylesheet text.
pub trait Fetcher {
    /// Fetch the decoded text behind a URL.
    fn fetch(&self, url: &Url) -> Result<String>;
}

/// Outcome of fetching one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Fetched { url: String, text: String },
    Skipped { url: String, reason: String },
}

impl Resource {
    pub fn url(&self) -> &str {
        match self {
            Resource::Fetched { url, .. } | Resource::Skipped { url, .. } => url,
        }
    }
}

/// Fetch a page and every stylesheet it links to.
pub fn collect_resources(fetcher: &dyn Fetcher, page: &Url) -> Result<Vec<Resource>> {
    log::debug!("fetching page {}", page);
    let html = fetcher.fetch(page).map_err(|e| SwatchError::Fetch {
        url: page.to_string(),
        message: match e {
            SwatchError::Fetch { message, .. } => message,
            other => other.to_string(),
        },
        help: Some("Not a valid link. Try another one.".to_string()),
    })?;

    let hrefs = stylesheet_links(&html);
    log::debug!("found {} stylesheet link(s) on {}", hrefs.len(), page);

    Ok(hrefs
        .iter()
        .map(|href| fetch_stylesheet(fetcher, page, href))
        .collect())
}

fn fetch_stylesheet(fetcher: &dyn Fetcher, page: &Url, href: &str) -> Resource {
    let url = match resolve_href(page, href) {
        Ok(url) => url,
        Err(e) => {
            log::debug!("skipping stylesheet {}: {}", href, e);
            return Resource::Skipped {
                url: href.to_string(),
                reason: e.to_string(),
            };
        }
    };

    log::debug!("fetching stylesheet {}", url);
    match fetcher.fetch(&url) {
        Ok(text) => Resource::Fetched {
            url: url.to_string(),
            text,
        },
        Err(e) => {
            log::debug!("skipping stylesheet {}: {}", url, e);
            Resource::Skipped {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Serves fixed documents; anything else fails.
    struct MapFetcher(HashMap<String, String>);

    impl MapFetcher {
        fn new(docs: &[(&str, &str)]) -> Self {
            Self(
                docs.iter()
                    .map(|(u, t)| (u.to_string(), t.to_string()))
                    .collect(),
            )
        }
    }

    impl Fetcher for MapFetcher {
        fn fetch(&self, url: &Url) -> Result<String> {
            self.0.get(url.as_str()).cloned().ok_or_else(|| SwatchError::Fetch {
                url: url.to_string(),
                message: "404 Not Found".to_string(),
                help: None,
            })
        }
    }

    #[test]
    fn test_collect_resources() {
        let fetcher = MapFetcher::new(&[
            (
                "http://example.com/",
                r#"<head><link rel="stylesheet" href="/a.css"><link rel="stylesheet" href="missing.css"></head>"#,
            ),
            ("http://example.com/a.css", "p { color: #fff }"),
        ]);
        let page = Url::parse("http://example.com/").unwrap();

        let resources = collect_resources(&fetcher, &page).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(
            resources[0],
            Resource::Fetched {
                url: "http://example.com/a.css".to_string(),
                text: "p { color: #fff }".to_string(),
            }
        );
        assert!(matches!(&resources[1], Resource::Skipped { url, .. } if url == "http://example.com/missing.css"));
    }

    #[test]
    fn test_unreachable_page_is_error() {
        let fetcher = MapFetcher::new(&[]);
        let page = Url::parse("http://nowhere.invalid/").unwrap();

        let err = collect_resources(&fetcher, &page).unwrap_err();
        assert!(matches!(err, SwatchError::Fetch { help: Some(_), .. }));
    }

    #[test]
    fn test_page_error_names_url_once() {
        let fetcher = MapFetcher::new(&[]);
        let page = Url::parse("http://nowhere.invalid/").unwrap();

        let err = collect_resources(&fetcher, &page).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Fetch error for http://nowhere.invalid/: 404 Not Found"
        );
    }

    #[test]
    fn test_page_without_stylesheets() {
        let fetcher = MapFetcher::new(&[("http://example.com/", "<html><body>hi</body></html>")]);
        let page = Url::parse("http://example.com/").unwrap();
        assert!(collect_resources(&fetcher, &page).unwrap().is_empty());
    }
}
