use ammonia::Builder;
use std::collections::{HashMap, HashSet};

/// Allow-list sanitization policy: everything not listed here is removed
/// from the output, not escaped.
///
/// The policy is an explicit value rather than a pre-built cleaner so it can
/// be inspected in tests and swapped without touching call sites.
#[derive(Debug, Clone, Copy)]
pub struct SanitizePolicy {
    /// Elements preserved in the output. Children of a stripped element are
    /// kept, except for script/style whose bodies are dropped entirely.
    pub tags: &'static [&'static str],

    /// Attributes preserved on any allowed element. Data-attributes are
    /// never allowed, whatever this list contains.
    pub attributes: &'static [&'static str],
}

/// Policy for user-facing rich text: paragraphs, basic inline formatting,
/// two heading levels, lists, and links.
pub const RICH_TEXT: SanitizePolicy = SanitizePolicy {
    tags: &["p", "br", "strong", "em", "u", "h2", "h3", "ul", "ol", "li", "a"],
    attributes: &["href", "target", "rel"],
};

/// Clean HTML content down to the `RICH_TEXT` allow-list.
///
/// This employs a whitelist-based sanitization strategy: unknown or future
/// dangerous tags are excluded by default instead of having to be
/// enumerated. Malformed input is cleaned best-effort; this never fails.
///
/// Note: this serves as a fail-safe against Stored XSS. If the goal is to
/// display raw code, use HTML entity escaping instead of sanitization.
pub fn sanitize(input: &str) -> String {
    sanitize_with(&RICH_TEXT, input)
}

/// Clean HTML content according to an explicit policy.
pub fn sanitize_with(policy: &SanitizePolicy, input: &str) -> String {
    let tags: HashSet<&str> = policy.tags.iter().copied().collect();
    let attributes: HashSet<&str> = policy.attributes.iter().copied().collect();

    Builder::default()
        .tags(tags)
        // Per-tag attribute defaults are replaced wholesale; only the
        // generic allow-list below applies.
        .tag_attributes(HashMap::new())
        .generic_attributes(attributes)
        // Keep links exactly as written; without this ammonia appends its
        // own rel="noopener noreferrer" to every anchor.
        .link_rel(None)
        .clean(input)
        .to_string()
}
