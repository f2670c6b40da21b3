//! Colour expression scanner.
//!
//! Pattern-matches colour expressions anywhere in a block of text. This is a
//! heuristic, not a CSS tokenizer: hex and named colours are only picked up
//! directly after a `color:` keyword, so `background: #fff` is ignored, while
//! `rgb()`/`rgba()` calls are picked up wherever they appear.
//!
//! The keyword is matched as a plain substring, which means it also fires on
//! properties whose name ends in `color` (`background-color: #fff`).

use std::sync::LazyLock;

use regex::{CaptureMatches, Captures, Regex};

use crate::types::{RawColour, NAMED_COLOURS};

/// Whitespace between tokens: ASCII only, so `\u{a0}` does not separate.
const WS: &str = r"(?-u:\s)";

/// Colour expression pattern.
///
/// Alternatives are tried left to right at each position, so a single
/// occurrence is reported at most once.
static COLOUR_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        concat!(
            r"color{ws}*:{ws}*(?P<hex>#[0-9A-Fa-f]{{3,6}})",
            r"|rgba?{ws}*\({ws}*(?P<r>[0-9]{{1,3}}){ws}*,{ws}*(?P<g>[0-9]{{1,3}}){ws}*,{ws}*(?P<b>[0-9]{{1,3}})(?:{ws}*,{ws}*[0-9.]+%?)?",
            r"|color{ws}*:{ws}*(?P<name>(?i:{names}))",
        ),
        ws = WS,
        names = NAMED_COLOURS.join("|"),
    );
    Regex::new(&pattern).expect("colour regex is valid")
});

/// Scan text for colour expressions.
///
/// Matching is lazy; iterate the returned [`Scan`] as often as needed, each
/// pass starts over from the beginning of the text.
pub fn scan(text: &str) -> Scan<'_> {
    Scan { text }
}

/// The colour expressions of one block of text.
#[derive(Debug, Clone, Copy)]
pub struct Scan<'t> {
    text: &'t str,
}

impl<'t> Scan<'t> {
    /// Iterate the tokens in order of appearance.
    pub fn iter(&self) -> Tokens<'t> {
        Tokens {
            inner: COLOUR_RE.captures_iter(self.text),
        }
    }
}

impl<'t> IntoIterator for &Scan<'t> {
    type Item = RawColour;
    type IntoIter = Tokens<'t>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'t> IntoIterator for Scan<'t> {
    type Item = RawColour;
    type IntoIter = Tokens<'t>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the [`RawColour`] tokens of a [`Scan`].
pub struct Tokens<'t> {
    inner: CaptureMatches<'static, 't>,
}

impl Iterator for Tokens<'_> {
    type Item = RawColour;

    fn next(&mut self) -> Option<RawColour> {
        self.inner.by_ref().find_map(|caps| token_from(&caps))
    }
}

fn token_from(caps: &Captures<'_>) -> Option<RawColour> {
    if let Some(hex) = caps.name("hex") {
        return Some(RawColour::Hex(hex.as_str().to_string()));
    }
    if let Some(name) = caps.name("name") {
        return Some(RawColour::Named(name.as_str().to_ascii_lowercase()));
    }

    let component = |group: &str| caps.name(group)?.as_str().parse::<u16>().ok();
    Some(RawColour::Rgb(component("r")?, component("g")?, component("b")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(text: &str) -> Vec<RawColour> {
        scan(text).into_iter().collect()
    }

    fn hex(s: &str) -> RawColour {
        RawColour::Hex(s.to_string())
    }

    fn named(s: &str) -> RawColour {
        RawColour::Named(s.to_string())
    }

    #[test]
    fn test_hex_after_color_keyword() {
        assert_eq!(tokens("p { color: #FFF; }"), vec![hex("#FFF")]);
        assert_eq!(tokens("p{color:#1a2B3c}"), vec![hex("#1a2B3c")]);
        assert_eq!(tokens("p { color  :   #abcd }"), vec![hex("#abcd")]);
    }

    #[test]
    fn test_hex_without_keyword_ignored() {
        assert!(tokens("background: #fff; border: 1px solid #000;").is_empty());
    }

    #[test]
    fn test_keyword_suffix_matches() {
        assert_eq!(tokens("background-color: #fff"), vec![hex("#fff")]);
    }

    #[test]
    fn test_hex_too_short_ignored() {
        assert!(tokens("color: #ab;").is_empty());
    }

    #[test]
    fn test_hex_longer_than_six_takes_first_six() {
        assert_eq!(tokens("color: #11223344"), vec![hex("#112233")]);
    }

    #[test]
    fn test_rgb_and_rgba() {
        assert_eq!(
            tokens("background: rgb(0, 128, 255)"),
            vec![RawColour::Rgb(0, 128, 255)]
        );
        assert_eq!(
            tokens("background: rgba(0, 0, 0, 0.5)"),
            vec![RawColour::Rgb(0, 0, 0)]
        );
        assert_eq!(
            tokens("box-shadow: 0 0 2px rgba ( 10 ,20,30 )"),
            vec![RawColour::Rgb(10, 20, 30)]
        );
    }

    #[test]
    fn test_rgb_not_range_checked() {
        assert_eq!(tokens("rgb(999,0,0)"), vec![RawColour::Rgb(999, 0, 0)]);
    }

    #[test]
    fn test_rgb_malformed_ignored() {
        assert!(tokens("rgb(10%, 20%, 30%)").is_empty());
        assert!(tokens("rgb(1000, 0, 0)").is_empty());
        assert!(tokens("rgb(1, 2)").is_empty());
    }

    #[test]
    fn test_named_colours() {
        assert_eq!(tokens("color: purple"), vec![named("purple")]);
        assert_eq!(tokens("color:Navy"), vec![named("navy")]);
        assert!(tokens("color: red").is_empty());
    }

    #[test]
    fn test_named_without_keyword_ignored() {
        assert!(tokens("border: 1px solid black").is_empty());
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        assert!(tokens("COLOR: #fff; Color: white").is_empty());
    }

    #[test]
    fn test_interleaved_in_order() {
        let css = "a { color: #000 } b { background: rgb(1,2,3) } c { color: white }";
        assert_eq!(
            tokens(css),
            vec![hex("#000"), RawColour::Rgb(1, 2, 3), named("white")]
        );
    }

    #[test]
    fn test_color_rgb_reported_once() {
        assert_eq!(tokens("color: rgb(1, 2, 3)"), vec![RawColour::Rgb(1, 2, 3)]);
    }

    #[test]
    fn test_only_ascii_whitespace_separates() {
        assert_eq!(tokens("color:\t#fff"), vec![hex("#fff")]);
        assert_eq!(tokens("color\n:\r\n#fff"), vec![hex("#fff")]);
        assert!(tokens("color:\u{a0}#fff").is_empty());
        assert!(tokens("color:\u{2003}white").is_empty());
        assert!(tokens("rgb(\u{a0}1, 2, 3)").is_empty());
    }

    #[test]
    fn test_empty_and_colourless_text() {
        assert!(tokens("").is_empty());
        assert!(tokens("body { margin: 0; padding: 0 }").is_empty());
    }

    #[test]
    fn test_scan_is_restartable() {
        let s = scan("color: #fff; color: black");
        let first: Vec<_> = s.iter().collect();
        let second: Vec<_> = s.iter().collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }
}
