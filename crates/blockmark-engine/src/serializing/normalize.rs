use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?([A-Za-z][A-Za-z0-9-]*)(\s[^<>]*)?/?>").expect("valid regex")
});

/// Reduce rich-editor markup in `content` to plain text.
///
/// Content without anything tag-shaped is returned unchanged, so plain text
/// that merely contains `&` or `<` is never touched. Otherwise:
///
/// - `<br>` becomes a newline
/// - `<p>` and `<div>` (opening and closing) become newlines
/// - every other tag is dropped, keeping its text
/// - entities are decoded, and any `<` that would read back as a tag is
///   re-encoded as `&lt;`
///
/// Leading and trailing newlines are trimmed. Inline formatting is lost.
/// Content that is nothing but markup is returned unchanged.
pub fn strip_html(content: &str) -> String {
    if !TAG.is_match(content) {
        return content.to_string();
    }

    let text = TAG.replace_all(content, |caps: &regex::Captures<'_>| {
        let name = caps.get(1).map_or("", |m| m.as_str()).to_ascii_lowercase();
        match name.as_str() {
            "br" | "p" | "div" => "\n",
            _ => "",
        }
    });
    let decoded = html_escape::decode_html_entities(&text);
    let reencoded = TAG.replace_all(&decoded, |caps: &regex::Captures<'_>| {
        caps[0].replacen('<', "&lt;", 1)
    });
    let stripped = reencoded.trim_matches('\n');
    if stripped.trim().is_empty() {
        return content.to_string();
    }
    stripped.to_string()
}
