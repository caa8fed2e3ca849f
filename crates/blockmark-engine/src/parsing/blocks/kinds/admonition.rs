use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Block, BlockType, Meta};
use crate::parsing::Extracted;

static OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^:::\s*(info|warning|danger)(?:\s+"(.*)")?\s*$"#).expect("valid regex")
});

/// Callout block opened by `:::kind "optional title"` and closed by `:::`.
pub struct Admonition;

impl Admonition {
    pub const SIGIL: &'static str = ":::";

    pub fn kind_for(keyword: &str) -> Option<BlockType> {
        match keyword {
            "info" => Some(BlockType::Info),
            "warning" => Some(BlockType::Warning),
            "danger" => Some(BlockType::Danger),
            _ => None,
        }
    }

    /// Parses an opener line into the block type and title.
    pub fn opener(line: &str) -> Option<(BlockType, &str)> {
        let caps = OPENER.captures(line.trim_end())?;
        let kind = Self::kind_for(caps.get(1)?.as_str())?;
        let title = caps.get(2).map_or("", |m| m.as_str());
        Some((kind, title))
    }

    pub fn closes(line: &str) -> bool {
        line.trim_start().starts_with(Self::SIGIL)
    }

    /// Body lines that `render` prefixes with a backslash: sigil lines and
    /// lines that already look escaped.
    fn needs_escape(line: &str) -> bool {
        Self::closes(line) || line.strip_prefix('\\').is_some_and(Self::needs_escape)
    }

    fn unescape(line: &str) -> &str {
        match line.strip_prefix('\\') {
            Some(rest) if Self::needs_escape(rest) => rest,
            _ => line,
        }
    }

    pub fn extract(lines: &[&str], at: usize) -> Option<Extracted> {
        let (kind, title) = Self::opener(lines[at])?;

        let mut body = Vec::new();
        let mut i = at + 1;
        let mut closed = false;
        while i < lines.len() {
            let line = lines[i];
            i += 1;
            if Self::closes(line) {
                closed = true;
                break;
            }
            body.push(Self::unescape(line));
        }
        if !closed {
            log::debug!("unterminated admonition opened on line {}", at + 1);
        }

        let mut meta = Meta::new();
        if !title.is_empty() {
            meta.insert(Meta::TITLE, title);
        }
        Some(Extracted {
            block: Some(Block::with_meta(kind, body.join("\n"), meta)),
            consumed: i - at,
        })
    }

    /// Render an admonition. Body lines that would close the sigil early are
    /// backslash-escaped.
    pub fn render(kind: BlockType, title: &str, content: &str) -> String {
        let mut out = format!("{}{}", Self::SIGIL, kind.as_str());
        let title = title.replace('\n', " ");
        if !title.trim().is_empty() {
            out.push_str(&format!(" \"{}\"", title.trim()));
        }
        out.push('\n');
        if !content.is_empty() {
            for line in content.split('\n') {
                if Self::needs_escape(line) {
                    out.push('\\');
                }
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str(Self::SIGIL);
        out
    }
}
