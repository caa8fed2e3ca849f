use std::collections::HashSet;

use crate::models::{Block, BlockId};
use crate::parsing::{self, Dialect};
use crate::serializing;

/// A structural invariant of [`BlockList`] that does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("block list is empty")]
    Empty,
    #[error("duplicate block id {0}")]
    DuplicateId(BlockId),
    #[error("selection {0} does not reference a block in the list")]
    DanglingSelection(BlockId),
}

/// Ordered, session-owned collection of blocks plus the selected block.
///
/// Invariants maintained by every operation:
/// - the list is never empty (a default empty paragraph stands in)
/// - ids are unique
/// - `selected` is `None` or the id of a block currently in the list
///
/// Order in `blocks` is the only record of document order.
#[derive(Debug, Clone)]
pub struct BlockList {
    pub(crate) blocks: Vec<Block>,
    pub(crate) selected: Option<BlockId>,
    /// Incremented by every operation that changes the list
    pub(crate) version: u64,
}

impl BlockList {
    /// A list holding a single empty paragraph.
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::empty_paragraph()],
            selected: None,
            version: 0,
        }
    }

    /// Adopt an existing sequence of blocks.
    ///
    /// An empty sequence becomes the default paragraph; repeated ids are
    /// replaced with fresh ones so uniqueness holds.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let mut seen = HashSet::with_capacity(blocks.len());
        let mut blocks = blocks;
        for block in &mut blocks {
            if !seen.insert(block.id) {
                log::debug!("re-minting duplicate block id {}", block.id);
                block.id = BlockId::new();
                seen.insert(block.id);
            }
        }
        if blocks.is_empty() {
            blocks.push(Block::empty_paragraph());
        }
        Self {
            blocks,
            selected: None,
            version: 0,
        }
    }

    /// Parse markup text into a fresh list.
    pub fn from_text(text: &str, dialect: Dialect) -> Self {
        Self::from_blocks(parsing::parse_with(text, dialect))
    }

    /// Parse raw file bytes, rejecting invalid UTF-8.
    pub fn from_bytes(bytes: &[u8], dialect: Dialect) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text, dialect))
    }

    /// Canonical markup for the current blocks.
    pub fn to_text(&self, dialect: Dialect) -> String {
        serializing::serialize_with(&self.blocks, dialect)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false for a list built through the public API.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Select a block. Unknown ids leave the selection untouched.
    pub fn select(&mut self, id: BlockId) -> bool {
        if self.index_of(id).is_none() {
            log::debug!("select: ignoring stale block id {id}");
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Toggle a block's preview flag. Unknown ids are ignored.
    pub fn set_preview(&mut self, id: BlockId, preview: bool) -> bool {
        match self.blocks.iter_mut().find(|b| b.id == id) {
            Some(block) => {
                block.is_preview = preview;
                true
            }
            None => {
                log::debug!("set_preview: ignoring stale block id {id}");
                false
            }
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Verify the structural invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.blocks.is_empty() {
            return Err(InvariantError::Empty);
        }
        let mut seen = HashSet::with_capacity(self.blocks.len());
        for block in &self.blocks {
            if !seen.insert(block.id) {
                return Err(InvariantError::DuplicateId(block.id));
            }
        }
        match self.selected {
            Some(id) if !seen.contains(&id) => Err(InvariantError::DanglingSelection(id)),
            _ => Ok(()),
        }
    }

    /// Restore the non-empty invariant, returning the id of the stand-in
    /// paragraph if one had to be created.
    pub(crate) fn ensure_not_empty(&mut self) -> Option<BlockId> {
        if !self.blocks.is_empty() {
            return None;
        }
        let block = Block::empty_paragraph();
        let id = block.id;
        self.blocks.push(block);
        Some(id)
    }

    pub(crate) fn bump_version(&mut self) -> u64 {
        self.version += 1;
        self.version
    }
}

impl Default for BlockList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockType;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_list_holds_one_empty_paragraph() {
        let list = BlockList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.blocks()[0].kind, BlockType::Paragraph);
        assert_eq!(list.blocks()[0].content, "");
        assert_eq!(list.selected(), None);
        assert_eq!(list.check_invariants(), Ok(()));
    }

    #[test]
    fn from_empty_blocks_falls_back_to_paragraph() {
        let list = BlockList::from_blocks(vec![]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.blocks()[0].kind, BlockType::Paragraph);
    }

    #[test]
    fn from_blocks_re_mints_duplicate_ids() {
        let a = Block::new(BlockType::Paragraph, "a");
        let mut b = Block::new(BlockType::Paragraph, "b");
        b.id = a.id;

        let list = BlockList::from_blocks(vec![a.clone(), b]);

        assert_eq!(list.blocks()[0].id, a.id);
        assert_ne!(list.blocks()[1].id, a.id);
        assert_eq!(list.check_invariants(), Ok(()));
    }

    #[test]
    fn select_ignores_unknown_ids() {
        let mut list = BlockList::new();
        let id = list.blocks()[0].id;

        assert!(list.select(id));
        assert!(!list.select(BlockId::new()));
        assert_eq!(list.selected(), Some(id));
        assert_eq!(list.selected_block().map(|b| b.id), Some(id));

        list.clear_selection();
        assert_eq!(list.selected(), None);
        assert!(list.selected_block().is_none());
    }

    #[test]
    fn set_preview_flags_block() {
        let mut list = BlockList::new();
        let id = list.blocks()[0].id;

        assert!(list.set_preview(id, true));
        assert!(list.get(id).unwrap().is_preview);
        assert!(!list.set_preview(BlockId::new(), true));
    }

    #[test]
    fn dangling_selection_is_reported() {
        let mut list = BlockList::new();
        let stale = BlockId::new();
        list.selected = Some(stale);
        assert_eq!(
            list.check_invariants(),
            Err(InvariantError::DanglingSelection(stale))
        );
    }

    #[test]
    fn from_bytes_rejects_invalid_utf8() {
        assert!(BlockList::from_bytes(&[0xff, 0xfe], Dialect::Markdown).is_err());
        let list = BlockList::from_bytes(b"# Hi", Dialect::Markdown).unwrap();
        assert_eq!(list.blocks()[0].kind, BlockType::Heading1);
    }
}
