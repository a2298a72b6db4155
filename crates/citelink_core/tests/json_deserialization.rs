use citelink_core::{InputSources, Source, SourceKind, Sources};

#[test]
fn test_bare_source_list() {
    let json = r#"[
        {"url": "https://example.com/a", "title": "A"},
        {"title": "No link"},
        {}
    ]"#;
    let sources: Sources = serde_json::from_str::<InputSources>(json).unwrap().into();
    assert_eq!(sources.len(), 3);
    assert_eq!(sources[0].link_url(), Some("https://example.com/a"));
    assert_eq!(sources[1].link_url(), None);
    assert_eq!(sources[2], Source::default());
}

#[test]
fn test_wrapped_source_list() {
    let json = r#"{"sources": [{"url": "https://en.wikipedia.org/wiki/Rust", "type": "wikipedia"}]}"#;
    let sources: Sources = serde_json::from_str::<InputSources>(json).unwrap().into();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].kind.as_deref(), Some("wikipedia"));
    assert_eq!(sources[0].source_kind(), SourceKind::Wikipedia);
}

#[test]
fn test_null_url_is_absent() {
    let json = r#"[{"url": null}]"#;
    let sources: Sources = serde_json::from_str::<InputSources>(json).unwrap().into();
    assert_eq!(sources[0].url, None);
}

#[test]
fn test_parsed_url_rejects_relative() {
    assert!(Source::from_url("/relative/path").parsed_url().is_none());
    let parsed = Source::from_url("https://example.com").parsed_url().unwrap();
    assert_eq!(parsed.host_str(), Some("example.com"));
}

#[test]
fn test_source_serializes_kebab_case_and_type() {
    let source = Source {
        url: Some("https://a".to_string()),
        kind: Some("web".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&source).unwrap();
    assert_eq!(value["type"], "web");
    assert_eq!(value["url"], "https://a");
    assert!(value.get("title").is_none());
}
