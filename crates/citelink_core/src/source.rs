/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Source records cited by a response.
//!
//! A response refers to its sources with numeric markers such as `[1]`. The
//! number is the 1-based position of the source in the ordered list supplied
//! alongside the response, so a `Sources` list carries no explicit ids.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use url::Url;

/// An ordered list of sources; position `n - 1` answers marker `[n]`.
pub type Sources = Vec<Source>;

/// A source a response may cite.
///
/// Only `url` matters for linking; the other fields feed reference lists and
/// icon selection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Source {
    /// Where the source lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Kind label as supplied by the search backend (`reddit`, `web`, ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Icon path overriding the kind default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Publication or retrieval date, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Unknown fields captured for forward compatibility.
    #[serde(flatten)]
    #[cfg_attr(feature = "schema", schemars(skip))]
    pub _extra: HashMap<String, serde_json::Value>,
}

impl Source {
    /// Create a source that only carries a URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Builder-style title setter.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder-style date setter.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// The URL to link to, if present and non-empty.
    pub fn link_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// The URL parsed as an absolute URL, if it is one.
    pub fn parsed_url(&self) -> Option<Url> {
        self.link_url().and_then(|u| Url::parse(u).ok())
    }

    /// The kind of this source.
    ///
    /// An explicit `type` label wins; otherwise the kind is guessed from the URL.
    pub fn source_kind(&self) -> SourceKind {
        match self.kind.as_deref() {
            Some(label) => SourceKind::from_label(label),
            None => SourceKind::from_url(self.url.as_deref().unwrap_or_default()),
        }
    }
}

/// Look up the source answering a 1-based citation number.
///
/// Zero and out-of-range numbers give `None`.
pub fn source_for_index(sources: &[Source], index: usize) -> Option<&Source> {
    index.checked_sub(1).and_then(|i| sources.get(i))
}

/// Broad family of a source, used to pick an icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    Reddit,
    Wikipedia,
    Github,
    Web,
    #[default]
    Default,
}

impl SourceKind {
    /// Guess the kind from a URL by host substring.
    ///
    /// An empty URL is `Default`; anything unrecognised is `Web`.
    pub fn from_url(url: &str) -> Self {
        if url.is_empty() {
            return SourceKind::Default;
        }
        let lower = url.to_lowercase();
        if lower.contains("reddit.com") {
            SourceKind::Reddit
        } else if lower.contains("wikipedia.org") {
            SourceKind::Wikipedia
        } else if lower.contains("github.com") {
            SourceKind::Github
        } else {
            SourceKind::Web
        }
    }

    /// Parse a kind label, case-insensitively. Unknown labels map to `Default`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "reddit" => SourceKind::Reddit,
            "wikipedia" => SourceKind::Wikipedia,
            "github" => SourceKind::Github,
            "web" => SourceKind::Web,
            _ => SourceKind::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Reddit => "reddit",
            SourceKind::Wikipedia => "wikipedia",
            SourceKind::Github => "github",
            SourceKind::Web => "web",
            SourceKind::Default => "default",
        }
    }

    /// Built-in icon path for this kind.
    pub fn icon(&self) -> &'static str {
        match self {
            SourceKind::Reddit => "/icons/reddit-icon.svg",
            SourceKind::Wikipedia => "/icons/wikipedia-icon.svg",
            SourceKind::Github => "/icons/github-icon.svg",
            SourceKind::Web => "/icons/web-icon.svg",
            SourceKind::Default => "/icons/link-icon.svg",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted shapes for a serialized source list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InputSources {
    /// `[{url: ...}, ...]`
    List(Sources),
    /// `{sources: [{url: ...}, ...]}`
    Wrapped { sources: Sources },
}

impl From<InputSources> for Sources {
    fn from(input: InputSources) -> Self {
        match input {
            InputSources::List(sources) | InputSources::Wrapped { sources } => sources,
        }
    }
}
