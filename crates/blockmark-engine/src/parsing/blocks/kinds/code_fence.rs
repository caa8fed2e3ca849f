use crate::models::{Block, BlockType, Meta};
use crate::parsing::Extracted;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// Fenced code block syntax (```` ``` ```` or `~~~`).
///
/// A fence whose info string is [`CodeFence::DIAGRAM_LANGUAGE`] holds a
/// diagram rather than code.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";
    /// Reserved info string routing a fence to a `diagram` block.
    pub const DIAGRAM_LANGUAGE: &'static str = "mermaid";

    pub fn sig(line: &str) -> Option<FenceKind> {
        let t = line.trim_start();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    pub fn marker(kind: FenceKind) -> &'static str {
        match kind {
            FenceKind::Backticks => Self::BACKTICKS,
            FenceKind::Tildes => Self::TILDES,
        }
    }

    /// The language tag following the opening fence.
    pub fn info_string(line: &str) -> &str {
        line.trim_start().trim_start_matches(['`', '~']).trim()
    }

    pub fn closes(kind: FenceKind, line: &str) -> bool {
        Self::sig(line) == Some(kind)
    }

    /// Extract a fenced region opening at `lines[at]`.
    ///
    /// An unterminated fence takes everything up to the end of input.
    pub fn extract(lines: &[&str], at: usize) -> Option<Extracted> {
        let kind = Self::sig(lines[at])?;
        let language = Self::info_string(lines[at]);

        let mut body = Vec::new();
        let mut i = at + 1;
        let mut closed = false;
        while i < lines.len() {
            let line = lines[i];
            i += 1;
            if Self::closes(kind, line) {
                closed = true;
                break;
            }
            body.push(line);
        }
        if !closed {
            log::debug!("unterminated code fence opened on line {}", at + 1);
        }

        let content = body.join("\n");
        let block = if language == Self::DIAGRAM_LANGUAGE {
            Block::new(BlockType::Diagram, content)
        } else if language.is_empty() {
            Block::new(BlockType::Code, content)
        } else {
            Block::with_meta(
                BlockType::Code,
                content,
                Meta::new().with(Meta::LANGUAGE, language),
            )
        };

        Some(Extracted {
            block: Some(block),
            consumed: i - at,
        })
    }

    /// Render a fenced block, switching to tildes when the body itself
    /// contains a backtick fence line.
    pub fn render(language: &str, content: &str) -> String {
        let kind = if content.lines().any(|l| Self::closes(FenceKind::Backticks, l)) {
            FenceKind::Tildes
        } else {
            FenceKind::Backticks
        };
        let marker = Self::marker(kind);

        let mut out = format!("{marker}{language}\n");
        if !content.is_empty() {
            out.push_str(content);
            out.push('\n');
        }
        out.push_str(marker);
        out
    }
}
