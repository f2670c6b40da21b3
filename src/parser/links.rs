//! Stylesheet link discovery.
//!
//! Finds `<link rel=stylesheet href=...>` elements in an HTML page. Only the
//! `<head>` is searched when the page has one.

use std::sync::LazyLock;

use regex::Regex;

static HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<head\b[^>]*>(.*?)</head\s*>").expect("head regex is valid"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link\b([^>]*)>").expect("link regex is valid"));

/// Attribute with a double-quoted, single-quoted or bare value.
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)(?:^|\s)([a-z][a-z0-9_:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("attribute regex is valid")
});

/// Return the `href` of every stylesheet link, in document order.
///
/// Links without an `href` are skipped. The `rel` value must be exactly
/// `stylesheet` (ignoring case and surrounding whitespace).
pub fn stylesheet_links(html: &str) -> Vec<String> {
    let head = HEAD_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map_or(html, |m| m.as_str());

    LINK_RE
        .captures_iter(head)
        .filter_map(|caps| {
            let attrs = caps.get(1)?.as_str();
            let rel = attribute(attrs, "rel")?;
            if !rel.trim().eq_ignore_ascii_case("stylesheet") {
                return None;
            }
            let href = attribute(attrs, "href")?;
            let href = href.trim();
            (!href.is_empty()).then(|| href.to_string())
        })
        .collect()
}

/// Find an attribute value inside the body of a tag.
fn attribute<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    ATTR_RE.captures_iter(attrs).find_map(|caps| {
        if !caps.get(1)?.as_str().eq_ignore_ascii_case(name) {
            return None;
        }
        caps.get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_links_in_head() {
        let html = r#"<html><head>
            <link rel="stylesheet" href="/css/main.css">
            <link rel='icon' href='/favicon.ico'>
            <LINK HREF=print.css REL=StyleSheet>
        </head><body></body></html>"#;
        assert_eq!(stylesheet_links(html), vec!["/css/main.css", "print.css"]);
    }

    #[test]
    fn test_body_links_ignored_when_head_present() {
        let html = r#"<head><link rel="stylesheet" href="a.css"></head>
            <body><link rel="stylesheet" href="b.css"></body>"#;
        assert_eq!(stylesheet_links(html), vec!["a.css"]);
    }

    #[test]
    fn test_no_head_searches_whole_document() {
        let html = r#"<link rel="stylesheet" href="a.css" />"#;
        assert_eq!(stylesheet_links(html), vec!["a.css"]);
    }

    #[test]
    fn test_link_without_href_skipped() {
        let html = r#"<head><link rel="stylesheet"><link rel="stylesheet" href=""></head>"#;
        assert!(stylesheet_links(html).is_empty());
    }

    #[test]
    fn test_data_href_not_confused_with_href() {
        let html = r#"<head><link data-href="x.css" rel="stylesheet" href="y.css"></head>"#;
        assert_eq!(stylesheet_links(html), vec!["y.css"]);
    }

    #[test]
    fn test_alternate_stylesheet_ignored() {
        let html = r#"<head><link rel="alternate stylesheet" href="alt.css"></head>"#;
        assert!(stylesheet_links(html).is_empty());
    }
}
