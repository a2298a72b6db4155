/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation marker parsing.
//!
//! Markers are found by scanning for `[` and trying the marker grammar at
//! each candidate position, so spans never overlap and come back in order.

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited};
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::token::take_till;

/// A citation marker found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// `[N]`: a numbered reference to the source list.
    Numbered {
        /// The digits as written, e.g. `"01"` for `[01]`.
        label: String,
        /// 1-based value of `label`, `None` when it overflows.
        index: Option<usize>,
    },
    /// `[@Web](URL)` or a bare `[@Web]`.
    Web { url: Option<String> },
}

impl Marker {
    pub fn numbered(label: &str) -> Self {
        Marker::Numbered {
            label: label.to_string(),
            index: label.parse().ok(),
        }
    }
}

/// A trait for parsers that can identify citation markers.
pub trait MarkerParser {
    /// Find citation markers in a string.
    /// Returns a list of (start_index, end_index, marker) tuples in byte offsets.
    fn parse_markers(&self, content: &str) -> Vec<(usize, usize, Marker)>;
}

/// Recognises numeric markers only: `[1]`, `[23]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericMarkerParser;

/// Recognises `[@Web](URL)`, `[@Web]` and numeric markers.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebMarkerParser;

impl MarkerParser for NumericMarkerParser {
    fn parse_markers(&self, content: &str) -> Vec<(usize, usize, Marker)> {
        scan(content, parse_numbered)
    }
}

impl MarkerParser for WebMarkerParser {
    fn parse_markers(&self, content: &str) -> Vec<(usize, usize, Marker)> {
        scan(content, parse_web_or_numbered)
    }
}

fn scan<P>(content: &str, mut parser: P) -> Vec<(usize, usize, Marker)>
where
    P: FnMut(&mut &str) -> winnow::Result<Marker, ContextError>,
{
    let mut results = Vec::new();
    let mut offset = 0;

    while let Some(rel) = content[offset..].find('[') {
        let start = offset + rel;
        let potential = &content[start..];
        let mut input = potential;

        match parser(&mut input) {
            Ok(marker) => {
                let end = start + (potential.len() - input.len());
                results.push((start, end, marker));
                offset = end;
            }
            // `[` is one byte, so this stays on a char boundary.
            Err(_) => offset = start + 1,
        }
    }

    results
}

/// Parse `[digits]`.
fn parse_numbered(input: &mut &str) -> winnow::Result<Marker, ContextError> {
    delimited('[', digit1, ']')
        .map(Marker::numbered)
        .parse_next(input)
}

/// Parse `[@Web](URL)`; the URL runs to the first `)`.
fn parse_web_with_url(input: &mut &str) -> winnow::Result<Marker, ContextError> {
    delimited("[@Web](", take_till(1.., ')'), ')')
        .map(|url: &str| Marker::Web {
            url: Some(url.to_string()),
        })
        .parse_next(input)
}

/// Parse a bare `[@Web]`.
fn parse_bare_web(input: &mut &str) -> winnow::Result<Marker, ContextError> {
    "[@Web]".value(Marker::Web { url: None }).parse_next(input)
}

fn parse_web_or_numbered(input: &mut &str) -> winnow::Result<Marker, ContextError> {
    alt((parse_web_with_url, parse_bare_web, parse_numbered)).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_spans() {
        let content = "See [1] and [23].";
        let markers = NumericMarkerParser.parse_markers(content);
        assert_eq!(markers.len(), 2);
        assert_eq!(&content[markers[0].0..markers[0].1], "[1]");
        assert_eq!(&content[markers[1].0..markers[1].1], "[23]");
        assert_eq!(markers[1].2, Marker::numbered("23"));
    }

    #[test]
    fn test_numeric_rejects_non_digits() {
        for content in ["[]", "[a]", "[1a]", "[ 1]", "[-1]", "[1.5]", "[1"] {
            assert!(
                NumericMarkerParser.parse_markers(content).is_empty(),
                "unexpected marker in {content:?}"
            );
        }
    }

    #[test]
    fn test_nested_brackets_retry_inner() {
        let content = "[[2]]";
        let markers = NumericMarkerParser.parse_markers(content);
        assert_eq!(markers.len(), 1);
        assert_eq!((markers[0].0, markers[0].1), (1, 4));
    }

    #[test]
    fn test_overflow_has_no_index() {
        let markers = NumericMarkerParser.parse_markers("[99999999999999999999999999]");
        assert_eq!(
            markers[0].2,
            Marker::Numbered {
                label: "99999999999999999999999999".to_string(),
                index: None,
            }
        );
    }

    #[test]
    fn test_leading_zero_keeps_label() {
        let markers = NumericMarkerParser.parse_markers("[01]");
        assert_eq!(
            markers[0].2,
            Marker::Numbered {
                label: "01".to_string(),
                index: Some(1),
            }
        );
    }

    #[test]
    fn test_web_markers() {
        let content = "a [@Web](https://x.org/p) b [@Web] c [4]";
        let markers = WebMarkerParser.parse_markers(content);
        let found: Vec<_> = markers.into_iter().map(|(_, _, m)| m).collect();
        assert_eq!(
            found,
            vec![
                Marker::Web {
                    url: Some("https://x.org/p".to_string())
                },
                Marker::Web { url: None },
                Marker::numbered("4"),
            ]
        );
    }

    #[test]
    fn test_web_marker_without_closing_paren_is_bare() {
        let content = "[@Web](https://x.org";
        let markers = WebMarkerParser.parse_markers(content);
        assert_eq!(markers.len(), 1);
        assert_eq!((markers[0].0, markers[0].1), (0, 6));
        assert_eq!(markers[0].2, Marker::Web { url: None });
    }

    #[test]
    fn test_numeric_parser_ignores_web_markers() {
        assert!(NumericMarkerParser
            .parse_markers("[@Web](https://x.org)")
            .is_empty());
    }

    #[test]
    fn test_multibyte_text_around_markers() {
        let content = "Überblick [1] — ok [2]";
        let markers = NumericMarkerParser.parse_markers(content);
        assert_eq!(markers.len(), 2);
        assert_eq!(&content[markers[1].0..markers[1].1], "[2]");
    }
}
