/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rewriting numeric citation markers into source links.
//!
//! A marker `[n]` refers to the source at position `n - 1`. When that source
//! has a non-empty URL the marker is replaced by a link whose visible text is
//! the marker itself; every other marker is left exactly as written. Linking
//! never fails and never touches text outside the markers.
//!
//! Running the linker over its own output is not idempotent: the visible
//! `[n]` inside a generated link is a marker again and gets wrapped a second
//! time.

use crate::marker::{Marker, MarkerParser, NumericMarkerParser};
use crate::render::html::Html;
use crate::render::OutputFormat;
use citelink_core::{source_for_index, LinkConfig, Source};
use serde::Serialize;

/// Rewrites numeric citation markers using an output format.
#[derive(Debug, Default, Clone)]
pub struct Linker<F: OutputFormat = Html> {
    config: LinkConfig,
    format: F,
}

/// How a single marker resolved against the source list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Resolution {
    /// Byte offset of the opening bracket.
    pub start: usize,
    /// Byte offset just past the closing bracket.
    pub end: usize,
    /// The digits as written.
    pub label: String,
    /// 1-based value of the digits, absent on overflow.
    pub index: Option<usize>,
    /// URL the marker links to; absent when it stays as plain text.
    pub url: Option<String>,
}

impl Resolution {
    pub fn is_linked(&self) -> bool {
        self.url.is_some()
    }
}

impl<F: OutputFormat> Linker<F> {
    pub fn new(config: LinkConfig) -> Self {
        Self {
            config,
            format: F::default(),
        }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Resolve every numeric marker in `content` without rewriting anything.
    pub fn resolve(&self, content: &str, sources: &[Source]) -> Vec<Resolution> {
        NumericMarkerParser
            .parse_markers(content)
            .into_iter()
            .filter_map(|(start, end, marker)| match marker {
                Marker::Numbered { label, index } => {
                    let url = index
                        .and_then(|i| source_for_index(sources, i))
                        .and_then(Source::link_url)
                        .map(str::to_string);
                    Some(Resolution {
                        start,
                        end,
                        label,
                        index,
                        url,
                    })
                }
                Marker::Web { .. } => None,
            })
            .collect()
    }

    /// Rewrite linkable markers in `content`.
    pub fn link(&self, content: &str, sources: &[Source]) -> String {
        if content.is_empty() {
            return String::new();
        }

        let mut result = String::with_capacity(content.len());
        let mut last_idx = 0;

        for resolution in self.resolve(content, sources) {
            result.push_str(&content[last_idx..resolution.start]);
            match &resolution.url {
                Some(url) => {
                    tracing::trace!(marker = %resolution.label, %url, "linked citation marker");
                    result.push_str(&self.format.citation_link(
                        url,
                        &resolution.label,
                        &self.config,
                    ));
                }
                None => {
                    tracing::debug!(
                        marker = %resolution.label,
                        sources = sources.len(),
                        "no linkable source for citation marker"
                    );
                    result.push_str(&content[resolution.start..resolution.end]);
                }
            }
            last_idx = resolution.end;
        }

        result.push_str(&content[last_idx..]);
        result
    }
}

/// Link numeric citation markers as HTML with the default badge styling.
///
/// ```rust
/// use citelink_core::Source;
/// use citelink_processor::linkify;
///
/// let sources = vec![Source::from_url("https://a")];
/// let html = linkify("See [1].", &sources);
/// assert!(html.starts_with(r#"See <a href="https://a""#));
/// assert!(html.ends_with(">[1]</a>."));
/// ```
pub fn linkify(content: &str, sources: &[Source]) -> String {
    Linker::<Html>::default().link(content, sources)
}
