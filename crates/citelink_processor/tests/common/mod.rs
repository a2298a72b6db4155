/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use citelink_core::{LinkConfig, Source};
use citelink_processor::render::OutputFormat;
use citelink_processor::render::html::Html;

// --- Helper Functions for Test Data Construction ---

/// Sources that each carry only a URL.
pub fn url_sources(urls: &[&str]) -> Vec<Source> {
    urls.iter().map(|u| Source::from_url(*u)).collect()
}

/// The HTML the default linker emits for a marker.
pub fn default_anchor(url: &str, label: &str) -> String {
    Html.citation_link(url, label, &LinkConfig::default())
}
