/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Text clean-up helpers for model responses.

use crate::marker::{MarkerParser, NumericMarkerParser};
use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s|$)").expect("sentence pattern is valid"));

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

static NON_PRINTABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x20-\x7E\s]").expect("printable pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("think pattern is valid"));

// Planning chatter up to the next blank line; the blank line itself is kept.
static PLANNING_PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)(?:I'll search for|Let me search for|I need to find|(?:Based on|According to) (?:the|my) search results).*?\n\n",
    )
    .expect("preamble pattern is valid")
});

static STEP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"STEP \d+[:\-].*\n").expect("step pattern is valid"));

static EXTRA_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline pattern is valid"));

// `- **Term**: ` at the start of a bullet.
static BULLET_LEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[- ]+\*\*[^*]+\*\*: ?").expect("bullet lead pattern is valid"));

static BULLET_DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[- ]+").expect("bullet dash pattern is valid"));

static TRAILING_CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]$").expect("trailing citation pattern is valid"));

/// Sentence cap for introduction and conclusion paragraphs.
const PARAGRAPH_SENTENCES: usize = 5;

/// Sentence cap for a single bullet.
const BULLET_SENTENCES: usize = 4;

const DEFAULT_SUMMARY_TABLE: &str = "| Category | Information | Source |
| -------- | ----------- | ------ |
| Key Finding | Main insight from research | [1] |
| Best Practice | Recommended approach | [2] |
| Consideration | Important factor to note | [3] |
";

/// Remove every numeric citation marker (`[1]`, `[23]`).
pub fn strip_citations(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last_idx = 0;
    for (start, end, _) in NumericMarkerParser.parse_markers(text) {
        result.push_str(&text[last_idx..start]);
        last_idx = end;
    }
    result.push_str(&text[last_idx..]);
    result
}

/// Keep at most `max_sentences` sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` followed by whitespace or the
/// end of the text. Text with no sentence ending is returned as-is.
pub fn limit_sentences(text: &str, max_sentences: usize) -> String {
    if max_sentences == 0 {
        return String::new();
    }

    let mut sentences: Vec<&str> = Vec::new();
    let mut remaining = text;
    while let Some(m) = SENTENCE_END.find(remaining) {
        sentences.push(&remaining[..m.end()]);
        if sentences.len() >= max_sentences {
            break;
        }
        remaining = &remaining[m.end()..];
        if remaining.trim().is_empty() {
            break;
        }
    }

    if !remaining.trim().is_empty() && sentences.len() < max_sentences {
        sentences.push(remaining);
    }

    if sentences.is_empty() {
        text.to_string()
    } else {
        sentences.concat()
    }
}

/// Flatten text for display: drop tags, hide URLs, keep printable ASCII,
/// collapse whitespace.
pub fn clean_text(text: &str) -> String {
    let cleaned = HTML_TAG.replace_all(text, "");
    let cleaned = BARE_URL.replace_all(&cleaned, "[link]");
    let cleaned = NON_PRINTABLE.replace_all(&cleaned, "");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}

/// Remove reasoning blocks, planning chatter and step markers from model output.
pub fn clean_ai_output(text: &str) -> String {
    let cleaned = THINK_BLOCK.replace_all(text, "");
    let cleaned = PLANNING_PREAMBLE.replace_all(&cleaned, "\n\n");
    let cleaned = STEP_LINE.replace_all(&cleaned, "");
    let cleaned = EXTRA_NEWLINES.replace_all(&cleaned, "\n\n");
    cleaned.trim().to_string()
}

/// Join the non-blank lines of a paragraph, drop citations, cap its length
/// and flatten it.
fn process_paragraph<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    let joined = lines
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let stripped = strip_citations(joined.trim());
    clean_text(&limit_sentences(&stripped, PARAGRAPH_SENTENCES))
}

/// Build an introduction paragraph: at most five sentences, no citations.
pub fn process_introduction(lines: &[&str]) -> String {
    process_paragraph(lines.iter().copied())
}

/// Build the conclusion section, ignoring any table rows mixed into it.
pub fn process_conclusion(lines: &[&str]) -> String {
    let body = process_paragraph(lines.iter().copied().filter(|line| !line.contains('|')));
    format!("## Conclusion\n{}", body)
}

/// Normalise one bullet to `- **Term**: text [N]`.
///
/// A bullet without a bold term gets one from the text before its first
/// colon. The text is flattened and capped at four sentences; a citation at
/// the very end of the bullet is kept and re-attached after the cap.
pub fn format_bullet_point(bullet: &str) -> String {
    let mut text = bullet.trim().to_string();
    if let Some(rest) = text.strip_prefix("* ") {
        text = format!("- {}", rest);
    }
    if !text.starts_with('-') {
        text = format!("- {}", text);
    }

    if !text.contains("**") {
        if let Some(colon) = text.find(':').filter(|&c| c > 0) {
            let term = BULLET_DASHES.replace(&text[..colon], "").into_owned();
            text = format!("- **{}**{}", term, &text[colon..]);
        }
    }

    let (lead, content) = match BULLET_LEAD.find(&text) {
        Some(m) => (m.as_str(), &text[m.end()..]),
        None => ("- ", &text[BULLET_DASHES.find(&text).map_or(0, |m| m.end())..]),
    };

    let (body, citation) = match TRAILING_CITATION.captures(content) {
        Some(caps) => {
            let start = caps.get(0).map_or(content.len(), |m| m.start());
            (&content[..start], Some(caps[1].to_string()))
        }
        None => (content, None),
    };

    let limited = limit_sentences(&clean_text(body), BULLET_SENTENCES);
    let mut output = format!("{}{}", lead, limited.trim_end());
    if let Some(number) = citation {
        output.push_str(&format!(" [{}]", number));
    }
    output
}

/// Group lines into bullets and format each one.
///
/// A line starting with `-` or `*` opens a bullet; other lines continue the
/// current one. Every formatted bullet ends with a newline.
pub fn process_bullet_points(lines: &[&str]) -> String {
    let mut output = String::new();
    let mut current = String::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.starts_with('-') || trimmed.starts_with('*') {
            if !current.trim().is_empty() {
                output.push_str(&format_bullet_point(&current));
                output.push('\n');
            }
            current = line.to_string();
        } else {
            current.push(' ');
            current.push_str(line);
        }
    }

    if !current.trim().is_empty() {
        output.push_str(&format_bullet_point(&current));
        output.push('\n');
    }
    output
}

/// Build the summary table section.
///
/// Rows are kept when the lines hold a real markdown table (a header
/// separator row and at least two lines); otherwise a placeholder table is
/// emitted.
pub fn process_table_section(lines: &[&str]) -> String {
    let mut output = String::from("## Summary Table\n");
    let rows: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
        .collect();
    let has_header = rows
        .iter()
        .any(|line| line.contains('|') && line.contains("--"));

    if rows.len() >= 2 && has_header {
        for row in rows.iter().filter(|line| line.contains('|')) {
            output.push_str(row);
            output.push('\n');
        }
    } else {
        output.push_str(DEFAULT_SUMMARY_TABLE);
    }
    output
}
