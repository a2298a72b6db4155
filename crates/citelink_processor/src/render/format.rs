/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

use citelink_core::{LinkConfig, SourceKind};

/// Trait for defining how citation markers are rendered into a specific format.
///
/// Implementations decide the markup for linked markers, unlinked badges and
/// web icon links. URLs are passed through untouched; callers that render the
/// output as HTML must trust their sources.
pub trait OutputFormat: Default + Clone {
    /// Link a numeric marker to its source.
    ///
    /// The visible text is the marker as written, brackets included.
    fn citation_link(&self, url: &str, label: &str, config: &LinkConfig) -> String;

    /// Link a numeric marker in badge form, showing only the number.
    fn badge_link(&self, url: &str, label: &str, config: &LinkConfig) -> String;

    /// Render a numeric marker that has no source to link to.
    fn badge(&self, label: &str) -> String;

    /// Render a web citation as an icon link.
    ///
    /// `url` is `None` for a bare `[@Web]` marker.
    fn icon_link(&self, url: Option<&str>, kind: SourceKind, config: &LinkConfig) -> String;
}
