/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Renderers for citation links.

pub mod djot;
pub mod format;
pub mod html;
pub mod plain;

pub use format::OutputFormat;

#[cfg(test)]
mod tests {
    use super::djot::Djot;
    use super::html::Html;
    use super::plain::PlainText;
    use super::OutputFormat;
    use citelink_core::{LinkConfig, SourceKind};

    #[test]
    fn test_html_citation_link() {
        let result = Html.citation_link("https://a", "1", &LinkConfig::default());
        assert_eq!(
            result,
            r#"<a href="https://a" target="_blank" rel="noopener noreferrer" class="inline-flex items-center px-1 py-0.5 rounded bg-blue-900/30 text-blue-400 text-xs hover:bg-blue-800/40 transition-colors">[1]</a>"#
        );
    }

    #[test]
    fn test_html_citation_link_with_config() {
        let config = LinkConfig {
            badge_class: Some("cite".to_string()),
            target: Some("_self".to_string()),
            ..Default::default()
        };
        let result = Html.citation_link("https://a", "2", &config);
        assert_eq!(
            result,
            r#"<a href="https://a" target="_self" rel="noopener noreferrer" class="cite">[2]</a>"#
        );
    }

    #[test]
    fn test_html_badges() {
        let config = LinkConfig::default();
        assert_eq!(
            Html.badge_link("https://a", "3", &config),
            r#"<a href="https://a" target="_blank" rel="noopener noreferrer" class="web-citation citation-badge">3</a>"#
        );
        assert_eq!(Html.badge("4"), r#"<span class="citation-badge">4</span>"#);
    }

    #[test]
    fn test_html_icon_links() {
        let config = LinkConfig::default();
        assert_eq!(
            Html.icon_link(Some("https://github.com/x"), SourceKind::Github, &config),
            r#"<a href="https://github.com/x" target="_blank" rel="noopener noreferrer" class="web-citation"><img src="/icons/github-icon.svg" alt="github" class="citation-icon" /></a>"#
        );
        assert_eq!(
            Html.icon_link(None, SourceKind::Web, &config),
            r##"<a href="#" class="web-citation"><img src="/icons/web-icon.svg" alt="web" class="citation-icon" /></a>"##
        );
    }

    #[test]
    fn test_djot_citation_link() {
        let result = Djot.citation_link("https://a", "1", &LinkConfig::default());
        assert_eq!(result, r"[\[1\]](https://a){.citation}");
        assert_eq!(Djot.badge("5"), "[5]{.citation-badge}");
    }

    #[test]
    fn test_djot_badge_and_icon_links() {
        let config = LinkConfig::default();
        assert_eq!(
            Djot.badge_link("https://a", "2", &config),
            "[2](https://a){.citation-badge}"
        );
        assert_eq!(
            Djot.icon_link(None, SourceKind::Web, &config),
            "[![web](/icons/web-icon.svg)](#){.web-citation}"
        );
    }

    #[test]
    fn test_plain_citation_link() {
        let config = LinkConfig::default();
        assert_eq!(
            PlainText.citation_link("https://a", "1", &config),
            "[1] <https://a>"
        );
        assert_eq!(PlainText.badge("7"), "[7]");
        assert_eq!(
            PlainText.icon_link(None, SourceKind::Web, &config),
            "[web]"
        );
    }
}
