//! The Markdown-like dialect.
//!
//! Regions: backtick/tilde code fences, `$$`/`$` display math and `:::`
//! admonitions, tried in that order. Lines: heading, list item, quote, media
//! reference, blank, inline formula, text.

use crate::parsing::blocks::LineClass;
use crate::parsing::blocks::kinds::{
    Admonition, AtxHeading, BlockQuote, CodeFence, InlineMath, ListItem, MathFence, MediaRef,
    Paragraph,
};
use crate::parsing::{Extracted, MarkupGrammar};

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownGrammar;

impl MarkdownGrammar {
    /// Whether `line`, standing alone, reads back as exactly this paragraph text.
    pub fn is_plain(line: &str) -> bool {
        let lines = [line];
        MarkdownGrammar.open_region(&lines, 0).is_none()
            && matches!(classify_line(line), LineClass::Text(text) if text == line)
    }
}

impl MarkupGrammar for MarkdownGrammar {
    fn open_region(&self, lines: &[&str], at: usize) -> Option<Extracted> {
        CodeFence::extract(lines, at)
            .or_else(|| MathFence::extract(lines, at))
            .or_else(|| Admonition::extract(lines, at))
    }

    fn classify(&self, lines: &[&str], at: usize) -> (LineClass, usize) {
        (classify_line(lines[at]), 1)
    }
}

fn classify_line(line: &str) -> LineClass {
    if let Some(rest) = Paragraph::unescape(line, MarkdownGrammar::is_plain) {
        return LineClass::Text(rest.trim_end().to_string());
    }
    if let Some((level, text)) = AtxHeading::parse(line) {
        return LineClass::Heading {
            level,
            text: text.to_string(),
        };
    }
    if let Some((kind, text)) = ListItem::parse(line) {
        return LineClass::ListItem {
            kind,
            text: text.to_string(),
        };
    }
    if let Some(text) = BlockQuote::strip_prefix(line) {
        return LineClass::Quote(text.to_string());
    }
    if let Some(block) = MediaRef::parse(line) {
        return LineClass::Media(block);
    }
    if line.trim().is_empty() {
        return LineClass::Blank;
    }
    if let Some(found) = InlineMath::find_dollar(line) {
        return LineClass::InlineMath {
            before: found.before.to_string(),
            formula: found.formula.to_string(),
            after: found.after.to_string(),
        };
    }
    LineClass::Text(line.trim_end().to_string())
}
