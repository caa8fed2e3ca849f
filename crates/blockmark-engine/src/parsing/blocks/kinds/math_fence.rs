use crate::models::{Block, BlockType};
use crate::parsing::Extracted;

/// Display formula delimited by `$$` (single- or multi-line) or by lines
/// holding a lone `$`.
pub struct MathFence;

impl MathFence {
    pub const DELIMITER: &'static str = "$$";
    pub const LONE_DOLLAR: &'static str = "$";

    pub fn opens(line: &str) -> bool {
        let t = line.trim();
        t.starts_with(Self::DELIMITER) || t == Self::LONE_DOLLAR
    }

    pub fn extract(lines: &[&str], at: usize) -> Option<Extracted> {
        if !Self::opens(lines[at]) {
            return None;
        }
        let t = lines[at].trim();
        if t == Self::LONE_DOLLAR {
            return Some(Self::extract_lone_dollar(lines, at));
        }

        // `$$x$$` on one line
        if t.len() >= 2 * Self::DELIMITER.len() && t.ends_with(Self::DELIMITER) {
            let inner = &t[Self::DELIMITER.len()..t.len() - Self::DELIMITER.len()];
            return Some(Extracted {
                block: Some(Block::new(BlockType::Math, inner.trim())),
                consumed: 1,
            });
        }

        let mut parts: Vec<&str> = Vec::new();
        let rest = t[Self::DELIMITER.len()..].trim();
        if !rest.is_empty() {
            parts.push(rest);
        }

        let mut i = at + 1;
        let mut closed = false;
        while i < lines.len() {
            let line = lines[i];
            i += 1;
            if let Some(idx) = line.find(Self::DELIMITER) {
                let before = line[..idx].trim_end();
                if !before.trim().is_empty() {
                    parts.push(before);
                }
                closed = true;
                break;
            }
            parts.push(line);
        }
        if !closed {
            log::debug!("unterminated math fence opened on line {}", at + 1);
        }

        Some(Extracted {
            block: Some(Block::new(BlockType::Math, parts.join("\n"))),
            consumed: i - at,
        })
    }

    fn extract_lone_dollar(lines: &[&str], at: usize) -> Extracted {
        let mut body = Vec::new();
        let mut i = at + 1;
        while i < lines.len() {
            let line = lines[i];
            i += 1;
            if line.trim() == Self::LONE_DOLLAR {
                break;
            }
            body.push(line);
        }
        Extracted {
            block: Some(Block::new(BlockType::Math, body.join("\n"))),
            consumed: i - at,
        }
    }

    /// Render display math, choosing delimiters the content cannot close.
    ///
    /// `$$` lines are the default. Content holding `$$` is wrapped in lone
    /// `$` lines instead, unless one of its lines is itself a lone `$`; then
    /// the `$$` sits on the first line, which the opener keeps as content.
    pub fn render(content: &str) -> String {
        let has_delimiter = |line: &str| line.contains(Self::DELIMITER);
        if !content.lines().any(has_delimiter) {
            return Self::wrap(Self::DELIMITER, content);
        }
        if !content.lines().any(|l| l.trim() == Self::LONE_DOLLAR) {
            return Self::wrap(Self::LONE_DOLLAR, content);
        }

        let (first, rest) = content.split_once('\n').unwrap_or((content, ""));
        let opener_keeps_first = first == first.trim()
            && !first.is_empty()
            && !first.ends_with(Self::DELIMITER)
            && !rest.lines().any(has_delimiter);
        if opener_keeps_first {
            return format!("{d} {first}\n{rest}\n{d}", d = Self::DELIMITER);
        }
        log::debug!("math content cannot be delimited without changing it");
        Self::wrap(Self::DELIMITER, content)
    }

    fn wrap(delimiter: &str, content: &str) -> String {
        if content.is_empty() {
            format!("{delimiter}\n{delimiter}")
        } else {
            format!("{delimiter}\n{content}\n{delimiter}")
        }
    }
}
