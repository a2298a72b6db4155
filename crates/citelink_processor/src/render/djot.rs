/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Djot output format.

use super::format::OutputFormat;
use citelink_core::{LinkConfig, SourceKind};

#[derive(Debug, Default, Clone)]
pub struct Djot;

impl OutputFormat for Djot {
    fn citation_link(&self, url: &str, label: &str, _config: &LinkConfig) -> String {
        // Escaped so the marker brackets do not nest inside the link text.
        format!(r"[\[{}\]]({}){{.citation}}", label, url)
    }

    fn badge_link(&self, url: &str, label: &str, _config: &LinkConfig) -> String {
        format!("[{}]({}){{.citation-badge}}", label, url)
    }

    fn badge(&self, label: &str) -> String {
        format!("[{}]{{.citation-badge}}", label)
    }

    fn icon_link(&self, url: Option<&str>, kind: SourceKind, config: &LinkConfig) -> String {
        format!(
            "[![{}]({})]({}){{.web-citation}}",
            kind,
            config.icon(kind),
            url.unwrap_or("#")
        )
    }
}
