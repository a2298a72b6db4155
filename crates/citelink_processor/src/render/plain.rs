/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use super::format::OutputFormat;
use citelink_core::{LinkConfig, SourceKind};

#[derive(Debug, Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn citation_link(&self, url: &str, label: &str, _config: &LinkConfig) -> String {
        format!("[{}] <{}>", label, url)
    }

    fn badge_link(&self, url: &str, label: &str, _config: &LinkConfig) -> String {
        format!("[{}] <{}>", label, url)
    }

    fn badge(&self, label: &str) -> String {
        format!("[{}]", label)
    }

    fn icon_link(&self, url: Option<&str>, kind: SourceKind, _config: &LinkConfig) -> String {
        match url {
            Some(u) => format!("<{}>", u),
            None => format!("[{}]", kind),
        }
    }
}
