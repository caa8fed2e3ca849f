//! # Serialization
//!
//! Flattens a block list back into markup text. Each block renders on its
//! own; renders are joined with one blank line, and blocks whose render is
//! empty (an empty paragraph, say) are left out.
//!
//! Text-like content (headings, paragraphs, lists, quotes, admonitions) is
//! first passed through [`strip_html`]. Code, math, diagram and media content
//! is written verbatim.
//!
//! Output is canonical: parsing it and serializing again yields the same
//! text.

pub mod markdown;
pub mod normalize;
pub mod rst;

use crate::models::Block;
use crate::parsing::Dialect;

pub use normalize::strip_html;

/// Serialize to the Markdown-like dialect.
pub fn serialize(blocks: &[Block]) -> String {
    serialize_with(blocks, Dialect::Markdown)
}

pub fn serialize_with(blocks: &[Block], dialect: Dialect) -> String {
    match dialect {
        Dialect::Markdown => markdown::render(blocks),
        Dialect::Rst => rst::render(blocks),
    }
}

/// Join block renders with a blank line, skipping empty ones.
fn join(parts: impl IntoIterator<Item = String>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim_matches('\n')
        .to_string()
}

/// Heading text on a single line.
fn one_line(content: &str) -> String {
    strip_html(content)
        .split('\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text content with surrounding blank lines removed.
fn trimmed_text(content: &str) -> String {
    let text = strip_html(content);
    let lines: Vec<&str> = text.split('\n').collect();
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
