/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.

use super::format::OutputFormat;
use citelink_core::{LinkConfig, SourceKind};

#[derive(Debug, Default, Clone)]
pub struct Html;

impl OutputFormat for Html {
    fn citation_link(&self, url: &str, label: &str, config: &LinkConfig) -> String {
        format!(
            r#"<a href="{}" target="{}" rel="{}" class="{}">[{}]</a>"#,
            url,
            config.target(),
            config.rel(),
            config.badge_class(),
            label
        )
    }

    fn badge_link(&self, url: &str, label: &str, config: &LinkConfig) -> String {
        format!(
            r#"<a href="{}" target="{}" rel="{}" class="web-citation citation-badge">{}</a>"#,
            url,
            config.target(),
            config.rel(),
            label
        )
    }

    fn badge(&self, label: &str) -> String {
        format!(r#"<span class="citation-badge">{}</span>"#, label)
    }

    fn icon_link(&self, url: Option<&str>, kind: SourceKind, config: &LinkConfig) -> String {
        let img = format!(
            r#"<img src="{}" alt="{}" class="citation-icon" />"#,
            config.icon(kind),
            kind
        );
        match url {
            Some(u) => format!(
                r#"<a href="{}" target="{}" rel="{}" class="web-citation">{}</a>"#,
                u,
                config.target(),
                config.rel(),
                img
            ),
            None => format!(r##"<a href="#" class="web-citation">{}</a>"##, img),
        }
    }
}
