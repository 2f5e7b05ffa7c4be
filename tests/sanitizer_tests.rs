// tests/sanitizer_tests.rs

use recipe_blog::utils::html::{RICH_TEXT, SanitizePolicy, sanitize, sanitize_with};

#[test]
fn strips_script_tags_and_their_content() {
    let out = sanitize("<p>привет</p><script>alert('x')</script>");

    assert_eq!(out, "<p>привет</p>");
    assert!(!out.contains("script"));
    assert!(!out.contains("alert"));
}

#[test]
fn allowed_markup_passes_through_unchanged() {
    let input = "<h2>Котлеты</h2><p>Смешайте <strong>фарш</strong> с <em>луком</em>.</p><ul><li>соль</li><li>перец</li></ul>";

    assert_eq!(sanitize(input), input);
}

#[test]
fn strips_event_handlers_but_keeps_href() {
    let out = sanitize(r#"<a href="x" onclick="evil()">link</a>"#);

    assert_eq!(out, r#"<a href="x">link</a>"#);
}

#[test]
fn keeps_target_and_rel_attributes() {
    let input = r#"<a href="https://example.com" target="_blank" rel="nofollow">site</a>"#;

    assert_eq!(sanitize(input), input);
}

#[test]
fn strips_data_attributes_on_allowed_tags() {
    let out = sanitize(r#"<p data-tracking-id="42">текст</p>"#);

    assert_eq!(out, "<p>текст</p>");
}

#[test]
fn removes_disallowed_wrappers_but_keeps_their_children() {
    let out = sanitize("<div><p>kept</p></div>");

    // The wrapper is removed, not escaped.
    assert_eq!(out, "<p>kept</p>");
    assert!(!out.contains("&lt;"));
}

#[test]
fn strips_disallowed_headings() {
    let out = sanitize("<h1>big</h1><h2>ok</h2>");

    assert_eq!(out, "big<h2>ok</h2>");
}

#[test]
fn honors_a_custom_policy() {
    const HEADINGS_ONLY: SanitizePolicy = SanitizePolicy {
        tags: &["h2", "h3"],
        attributes: &[],
    };

    let out = sanitize_with(&HEADINGS_ONLY, "<h2>ok</h2><p>prose</p>");
    assert_eq!(out, "<h2>ok</h2>prose");

    // The default policy would have kept the paragraph.
    assert_eq!(sanitize_with(&RICH_TEXT, "<p>prose</p>"), "<p>prose</p>");
}

#[test]
fn never_fails_on_malformed_markup() {
    let out = sanitize("<p>unclosed <strong>nested <em>deep");

    assert!(out.contains("unclosed"));
    assert!(out.contains("deep"));
}
