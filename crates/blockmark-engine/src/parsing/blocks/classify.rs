use crate::models::{Block, BlockType};

/// Which list flavour a list line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    pub fn block_type(self) -> BlockType {
        match self {
            ListKind::Bullet => BlockType::BulletList,
            ListKind::Numbered => BlockType::NumberedList,
        }
    }
}

/// Classification of a single plain-text line.
///
/// Produced by a grammar's `classify` and consumed by the `BlockBuilder`.
/// Carries owned text so the builder never looks back at the source.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    /// Whitespace only; ends any open accumulation.
    Blank,
    /// A heading with its level (1..=3) and text.
    Heading { level: usize, text: String },
    /// One list item, without its marker.
    ListItem { kind: ListKind, text: String },
    /// One quote line, without its prefix.
    Quote(String),
    /// A media reference standing alone on its line.
    Media(Block),
    /// A line carrying an inline formula, split around it.
    InlineMath {
        before: String,
        formula: String,
        after: String,
    },
    /// Anything else: paragraph text.
    Text(String),
}
