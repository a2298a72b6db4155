/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Web citation processing.
//!
//! Search-backed responses mix three kinds of marker: `[@Web](URL)` icon
//! citations, bare `[@Web]`, and numbered `[N]` references. They may also
//! carry inline `[Source: Type|URL]` references, which are appended to the
//! caller's sources (so they can be cited by number) and then removed.

use crate::marker::{Marker, MarkerParser, WebMarkerParser};
use crate::render::html::Html;
use crate::render::OutputFormat;
use citelink_core::{source_for_index, LinkConfig, Source, SourceKind};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static SOURCE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[Source:\s*([^|]+)\|([^\[\]]+)\]").expect("source reference pattern is valid")
});

/// An inline `[Source: Type|URL]` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReference {
    /// Lower-cased, trimmed type label.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl SourceReference {
    /// Convert to a source, numbered by its position among extracted references.
    fn into_source(self, position: usize, config: &LinkConfig) -> Source {
        let kind = SourceKind::from_label(&self.kind);
        Source {
            url: Some(self.url),
            title: Some(format!("Source {}", position)),
            icon: Some(config.icon(kind).to_string()),
            kind: Some(self.kind),
            ..Default::default()
        }
    }
}

/// Find every inline `[Source: Type|URL]` reference, in order.
pub fn extract_source_references(text: &str) -> Vec<SourceReference> {
    SOURCE_REFERENCE
        .captures_iter(text)
        .map(|caps| SourceReference {
            kind: caps[1].trim().to_lowercase(),
            url: caps[2].trim().to_string(),
        })
        .collect()
}

/// Remove every inline `[Source: Type|URL]` reference.
pub fn remove_source_references(text: &str) -> String {
    SOURCE_REFERENCE.replace_all(text, "").into_owned()
}

/// Processes web citations with a configurable output format.
#[derive(Debug, Default, Clone)]
pub struct WebCitationProcessor<F: OutputFormat = Html> {
    config: LinkConfig,
    format: F,
}

impl<F: OutputFormat> WebCitationProcessor<F> {
    pub fn new(config: LinkConfig) -> Self {
        Self {
            config,
            format: F::default(),
        }
    }

    /// Replace web and numbered citations in `text`.
    pub fn process(&self, text: &str, sources: &[Source]) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut all_sources = sources.to_vec();
        all_sources.extend(
            extract_source_references(text)
                .into_iter()
                .enumerate()
                .map(|(i, r)| r.into_source(i + 1, &self.config)),
        );

        let mut result = String::with_capacity(text.len());
        let mut last_idx = 0;
        for (start, end, marker) in WebMarkerParser.parse_markers(text) {
            result.push_str(&text[last_idx..start]);
            result.push_str(&self.render_marker(&marker, &all_sources));
            last_idx = end;
        }
        result.push_str(&text[last_idx..]);

        remove_source_references(&result)
    }

    fn render_marker(&self, marker: &Marker, sources: &[Source]) -> String {
        match marker {
            Marker::Web { url: Some(url) } => {
                self.format
                    .icon_link(Some(url.as_str()), SourceKind::from_url(url), &self.config)
            }
            Marker::Web { url: None } => self.format.icon_link(None, SourceKind::Web, &self.config),
            Marker::Numbered { label, index } => {
                let url = index
                    .and_then(|i| source_for_index(sources, i))
                    .and_then(Source::link_url);
                match url {
                    Some(u) => self.format.badge_link(u, label, &self.config),
                    None => {
                        tracing::debug!(marker = %label, "unmatched web citation number");
                        self.format.badge(label)
                    }
                }
            }
        }
    }
}

/// Process web citations as HTML with default options.
pub fn process_web_citations(text: &str, sources: &[Source]) -> String {
    WebCitationProcessor::<Html>::default().process(text, sources)
}
