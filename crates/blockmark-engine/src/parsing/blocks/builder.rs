use crate::models::{Block, BlockType, Meta};

use super::classify::{LineClass, ListKind};

#[derive(Debug, Clone, Default)]
enum LeafState {
    #[default]
    None,
    Paragraph {
        lines: Vec<String>,
    },
    List {
        kind: ListKind,
        items: Vec<String>,
    },
    Quote {
        lines: Vec<String>,
    },
}

/// Accumulates classified lines into blocks.
///
/// Lists, quotes and paragraphs stay open across consecutive lines of the
/// same kind; everything else is emitted immediately.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, class: LineClass) {
        match class {
            LineClass::Blank => self.flush(),
            LineClass::Heading { level, text } => {
                self.flush();
                let kind = BlockType::heading(level);
                let meta = Meta::new().with(Meta::LEVEL, format!("h{}", level.clamp(1, 3)));
                self.out.push(Block::with_meta(kind, text, meta));
            }
            LineClass::ListItem { kind, text } => self.extend_list(kind, text),
            LineClass::Quote(text) => self.extend_quote(text),
            LineClass::Media(block) => self.push_block(block),
            LineClass::InlineMath {
                before,
                formula,
                after,
            } => {
                if !before.trim().is_empty() {
                    self.extend_paragraph(before.trim_end().to_string());
                }
                self.flush();
                let meta = Meta::new().with(Meta::INLINE, "true");
                self.out
                    .push(Block::with_meta(BlockType::Math, formula, meta));
                if !after.trim().is_empty() {
                    self.extend_paragraph(after.trim_start().to_string());
                }
            }
            LineClass::Text(text) => self.extend_paragraph(text),
        }
    }

    /// Emit a finished block, closing whatever was open.
    pub fn push_block(&mut self, block: Block) {
        self.flush();
        self.out.push(block);
    }

    /// Close the open accumulation, if any.
    pub fn flush(&mut self) {
        match std::mem::take(&mut self.leaf) {
            LeafState::None => {}
            LeafState::Paragraph { lines } => {
                self.out
                    .push(Block::new(BlockType::Paragraph, lines.join("\n")));
            }
            LeafState::List { kind, items } => {
                self.out.push(Block::new(kind.block_type(), items.join("\n")));
            }
            LeafState::Quote { lines } => {
                self.out.push(Block::new(BlockType::Quote, lines.join("\n")));
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush();
        self.out
    }

    fn extend_paragraph(&mut self, text: String) {
        if let LeafState::Paragraph { lines } = &mut self.leaf {
            lines.push(text);
            return;
        }
        self.flush();
        self.leaf = LeafState::Paragraph { lines: vec![text] };
    }

    fn extend_list(&mut self, kind: ListKind, text: String) {
        if let LeafState::List { kind: open, items } = &mut self.leaf
            && *open == kind
        {
            items.push(text);
            return;
        }
        self.flush();
        self.leaf = LeafState::List {
            kind,
            items: vec![text],
        };
    }

    fn extend_quote(&mut self, text: String) {
        if let LeafState::Quote { lines } = &mut self.leaf {
            lines.push(text);
            return;
        }
        self.flush();
        self.leaf = LeafState::Quote { lines: vec![text] };
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
