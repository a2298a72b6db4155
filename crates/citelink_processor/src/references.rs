/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Numbered reference lists.

use citelink_core::Source;
use std::fmt::Write;

/// Format sources as a numbered reference list, one per line.
///
/// Each line reads `[n] Title (date) - URL`. A missing title becomes
/// `Source n`; the date and URL parts are left out when absent.
pub fn format_source_references(sources: &[Source]) -> String {
    let mut output = String::new();
    for (i, source) in sources.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let number = i + 1;
        let _ = write!(&mut output, "[{}] ", number);
        match source.title.as_deref() {
            Some(title) => output.push_str(title),
            None => {
                let _ = write!(&mut output, "Source {}", number);
            }
        }
        if let Some(date) = source.date.as_deref() {
            let _ = write!(&mut output, " ({})", date);
        }
        if let Some(url) = source.link_url() {
            let _ = write!(&mut output, " - {}", url);
        }
    }
    output
}
