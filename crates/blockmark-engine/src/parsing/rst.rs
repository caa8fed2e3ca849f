//! The reStructuredText-like dialect.
//!
//! Regions are directives and `..` separators. Lines: underline heading
//! (two lines), blank, indented quote, list item, `:math:` role, text.

use crate::parsing::blocks::LineClass;
use crate::parsing::blocks::kinds::{Directive, InlineMath, ListItem, Paragraph, UnderlineHeading};
use crate::parsing::{Extracted, MarkupGrammar};

#[derive(Debug, Clone, Copy, Default)]
pub struct RstGrammar;

impl RstGrammar {
    /// Whether `line` reads back as exactly this paragraph text wherever it
    /// sits in a paragraph. Underline-shaped lines never do, since they turn
    /// the line above them into a heading.
    pub fn is_plain(line: &str) -> bool {
        let lines = [line];
        UnderlineHeading::underline_level(line).is_none()
            && RstGrammar.open_region(&lines, 0).is_none()
            && matches!(classify_line(line), LineClass::Text(text) if text == line)
    }
}

impl MarkupGrammar for RstGrammar {
    fn open_region(&self, lines: &[&str], at: usize) -> Option<Extracted> {
        Directive::extract(lines, at)
    }

    fn classify(&self, lines: &[&str], at: usize) -> (LineClass, usize) {
        let line = lines[at];
        if is_title_line(line)
            && let Some(next) = lines.get(at + 1)
            && let Some(level) = UnderlineHeading::underline_level(next)
        {
            let heading = LineClass::Heading {
                level,
                text: line.trim().to_string(),
            };
            return (heading, 2);
        }
        (classify_line(line), 1)
    }
}

fn is_title_line(line: &str) -> bool {
    !line.trim().is_empty() && !is_indented(line)
}

fn is_indented(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

fn classify_line(line: &str) -> LineClass {
    if line.trim().is_empty() {
        return LineClass::Blank;
    }
    if let Some(rest) = Paragraph::unescape(line, RstGrammar::is_plain) {
        return LineClass::Text(rest.trim_end().to_string());
    }
    if is_indented(line) {
        return LineClass::Quote(line.trim().to_string());
    }
    if let Some((kind, text)) = ListItem::parse(line) {
        return LineClass::ListItem {
            kind,
            text: text.to_string(),
        };
    }
    if let Some(found) = InlineMath::find_role(line) {
        return LineClass::InlineMath {
            before: found.before.to_string(),
            formula: found.formula.to_string(),
            after: found.after.to_string(),
        };
    }
    LineClass::Text(line.trim_end().to_string())
}
