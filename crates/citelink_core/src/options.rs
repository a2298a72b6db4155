/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Link rendering options.

use crate::source::SourceKind;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classes for the inline citation badge.
pub const DEFAULT_BADGE_CLASS: &str = "inline-flex items-center px-1 py-0.5 rounded bg-blue-900/30 text-blue-400 text-xs hover:bg-blue-800/40 transition-colors";

/// Browsing context citation links open in.
pub const DEFAULT_TARGET: &str = "_blank";

/// Keeps the opened page from seeing the referrer or the opener.
pub const DEFAULT_REL: &str = "noopener noreferrer";

/// Top-level link configuration.
///
/// Every field is optional; accessors fall back to the defaults above.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct LinkConfig {
    /// Class attribute for linked numeric markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_class: Option<String>,
    /// Link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Link rel attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    /// Icon overrides keyed by source kind.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub icons: HashMap<SourceKind, String>,
    /// Unknown fields captured for forward compatibility.
    #[serde(flatten)]
    #[cfg_attr(feature = "schema", schemars(skip))]
    pub _extra: HashMap<String, serde_json::Value>,
}

impl LinkConfig {
    pub fn badge_class(&self) -> &str {
        self.badge_class.as_deref().unwrap_or(DEFAULT_BADGE_CLASS)
    }

    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or(DEFAULT_TARGET)
    }

    pub fn rel(&self) -> &str {
        self.rel.as_deref().unwrap_or(DEFAULT_REL)
    }

    /// Icon for a source kind, honouring overrides.
    pub fn icon(&self, kind: SourceKind) -> &str {
        self.icons
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.icon())
    }
}
