use crate::editing::MoveTarget;
use crate::models::{Block, BlockId, BlockList, BlockType};

impl BlockList {
    /// Insert a new block at `position` (clamped to `0..=len`) and select it.
    pub fn insert(&mut self, kind: BlockType, content: impl Into<String>, position: usize) -> BlockId {
        let block = Block::new(kind, content);
        let id = block.id;
        let at = position.min(self.blocks.len());
        self.blocks.insert(at, block);
        self.selected = Some(id);
        self.bump_version();
        id
    }

    /// Remove a block and select the one now at its index (or the last one).
    ///
    /// Removing the only block leaves a fresh empty paragraph in its place.
    /// Returns `false` for an unknown id.
    pub fn remove(&mut self, id: BlockId) -> bool {
        let Some(idx) = self.index_of(id) else {
            log::debug!("remove: ignoring stale block id {id}");
            return false;
        };
        self.blocks.remove(idx);
        self.ensure_not_empty();
        let next = idx.min(self.blocks.len().saturating_sub(1));
        self.selected = self.blocks.get(next).map(|b| b.id);
        self.bump_version();
        true
    }

    /// Move a block one step or to an absolute slot.
    ///
    /// `MoveTarget::Index(i)` names a slot in the current list (`0..=len`,
    /// clamped): the block ends up just before whatever is at `i` now. The
    /// moved block stays selected. Returns `false` when nothing moved.
    pub fn move_block(&mut self, id: BlockId, to: MoveTarget) -> bool {
        let Some(from) = self.index_of(id) else {
            log::debug!("move: ignoring stale block id {id}");
            return false;
        };
        let len = self.blocks.len();
        let target = match to {
            MoveTarget::Up if from == 0 => return false,
            MoveTarget::Up => from - 1,
            MoveTarget::Down if from + 1 >= len => return false,
            MoveTarget::Down => from + 1,
            MoveTarget::Index(index) => {
                let index = index.min(len);
                // removing the block shifts later slots down by one
                if index > from { index - 1 } else { index }
            }
        };
        if target == from {
            return false;
        }

        let block = self.blocks.remove(from);
        self.blocks.insert(target, block);
        self.selected = Some(id);
        self.bump_version();
        true
    }

    /// Split a block at the cursor (Enter).
    ///
    /// The block keeps `before`; a new block holding `after` is inserted right
    /// after it and selected. The new block keeps the source type and meta,
    /// except that heading continuations and empty `after` text become a
    /// plain paragraph.
    pub fn split_at_cursor(
        &mut self,
        id: BlockId,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Option<BlockId> {
        let Some(idx) = self.index_of(id) else {
            log::debug!("split: ignoring stale block id {id}");
            return None;
        };
        let after = after.into();
        let source = &mut self.blocks[idx];
        source.content = before.into();

        let block = if after.is_empty() || source.kind.heading_level().is_some() {
            Block::new(BlockType::Paragraph, after)
        } else {
            Block::with_meta(source.kind, after, source.meta.clone())
        };
        let new_id = block.id;
        self.blocks.insert(idx + 1, block);
        self.selected = Some(new_id);
        self.bump_version();
        Some(new_id)
    }

    /// Merge a block into the one before it (Backspace at block start).
    ///
    /// Any content is appended to the previous block, the block is removed
    /// and the previous block selected. The first block cannot merge.
    /// Returns the id of the block merged into.
    pub fn merge_with_previous(&mut self, id: BlockId) -> Option<BlockId> {
        let Some(idx) = self.index_of(id) else {
            log::debug!("merge: ignoring stale block id {id}");
            return None;
        };
        if idx == 0 {
            return None;
        }

        let block = self.blocks.remove(idx);
        let previous = &mut self.blocks[idx - 1];
        previous.content.push_str(&block.content);
        let previous_id = previous.id;
        self.selected = Some(previous_id);
        self.bump_version();
        Some(previous_id)
    }

    /// Replace a block's content in place. Returns `false` for an unknown id.
    pub fn update_content(&mut self, id: BlockId, content: impl Into<String>) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) else {
            log::debug!("update: ignoring stale block id {id}");
            return false;
        };
        let content = content.into();
        if block.content != content {
            block.content = content;
            self.bump_version();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Meta;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn list(contents: &[&str]) -> BlockList {
        BlockList::from_blocks(
            contents
                .iter()
                .map(|c| Block::new(BlockType::Paragraph, *c))
                .collect(),
        )
    }

    fn contents(list: &BlockList) -> Vec<&str> {
        list.iter().map(|b| b.content.as_str()).collect()
    }

    #[test]
    fn insert_selects_new_block() {
        let mut l = list(&["a", "b"]);
        let id = l.insert(BlockType::Paragraph, "", 1);

        assert_eq!(l.len(), 3);
        assert_eq!(l.index_of(id), Some(1));
        assert_eq!(l.selected(), Some(id));
        assert!(l.get(id).unwrap().meta.is_empty());
        assert_eq!(l.check_invariants(), Ok(()));
    }

    #[test]
    fn insert_position_is_clamped() {
        let mut l = list(&["a"]);
        let id = l.insert(BlockType::Quote, "q", 99);
        assert_eq!(l.index_of(id), Some(1));
    }

    #[test]
    fn remove_reselects_same_index() {
        let mut l = list(&["a", "b", "c"]);
        let b = l.blocks()[1].id;
        let c = l.blocks()[2].id;

        assert!(l.remove(b));
        assert_eq!(contents(&l), vec!["a", "c"]);
        assert_eq!(l.selected(), Some(c));
    }

    #[test]
    fn remove_last_block_reselects_previous() {
        let mut l = list(&["a", "b"]);
        let a = l.blocks()[0].id;
        let b = l.blocks()[1].id;

        l.remove(b);
        assert_eq!(l.selected(), Some(a));
    }

    #[test]
    fn remove_only_block_leaves_empty_paragraph() {
        let mut l = list(&["only"]);
        let only = l.blocks()[0].id;

        assert!(l.remove(only));
        assert_eq!(l.len(), 1);
        assert_eq!(l.blocks()[0].kind, BlockType::Paragraph);
        assert_eq!(l.blocks()[0].content, "");
        assert_eq!(l.selected(), Some(l.blocks()[0].id));
        assert_eq!(l.check_invariants(), Ok(()));
    }

    #[test]
    fn stale_ids_are_ignored() {
        let mut l = list(&["a", "b"]);
        let stale = BlockId::new();
        let version = l.version();

        assert!(!l.remove(stale));
        assert!(!l.move_block(stale, MoveTarget::Up));
        assert_eq!(l.split_at_cursor(stale, "x", "y"), None);
        assert_eq!(l.merge_with_previous(stale), None);
        assert!(!l.update_content(stale, "z"));

        assert_eq!(contents(&l), vec!["a", "b"]);
        assert_eq!(l.version(), version);
    }

    #[test]
    fn move_at_boundaries_is_noop() {
        let mut l = list(&["a", "b", "c"]);
        let a = l.blocks()[0].id;
        let c = l.blocks()[2].id;

        assert!(!l.move_block(a, MoveTarget::Up));
        assert!(!l.move_block(c, MoveTarget::Down));
        assert_eq!(contents(&l), vec!["a", "b", "c"]);
        assert_eq!(l.version(), 0);
    }

    #[test]
    fn move_up_and_down_swap_neighbours() {
        let mut l = list(&["a", "b", "c"]);
        let b = l.blocks()[1].id;

        assert!(l.move_block(b, MoveTarget::Up));
        assert_eq!(contents(&l), vec!["b", "a", "c"]);
        assert!(l.move_block(b, MoveTarget::Down));
        assert!(l.move_block(b, MoveTarget::Down));
        assert_eq!(contents(&l), vec!["a", "c", "b"]);
        assert_eq!(l.selected(), Some(b));
    }

    #[rstest]
    #[case(0, 0, vec!["a", "b", "c", "d"])]
    #[case(0, 1, vec!["a", "b", "c", "d"])]
    #[case(0, 2, vec!["b", "a", "c", "d"])]
    #[case(0, 4, vec!["b", "c", "d", "a"])]
    #[case(0, 99, vec!["b", "c", "d", "a"])]
    #[case(3, 0, vec!["d", "a", "b", "c"])]
    #[case(3, 4, vec!["a", "b", "c", "d"])]
    #[case(1, 3, vec!["a", "c", "b", "d"])]
    #[case(2, 1, vec!["a", "c", "b", "d"])]
    fn move_to_index(#[case] from: usize, #[case] to: usize, #[case] expected: Vec<&str>) {
        let mut l = list(&["a", "b", "c", "d"]);
        let id = l.blocks()[from].id;

        l.move_block(id, MoveTarget::Index(to));

        assert_eq!(contents(&l), expected);
        assert_eq!(l.check_invariants(), Ok(()));
    }

    #[test]
    fn split_heading_continues_as_paragraph() {
        let mut l = BlockList::from_blocks(vec![Block::new(BlockType::Heading2, "abcdef")]);
        let id = l.blocks()[0].id;

        let new_id = l.split_at_cursor(id, "abc", "def").unwrap();

        assert_eq!(l.blocks()[0].kind, BlockType::Heading2);
        assert_eq!(l.blocks()[0].content, "abc");
        assert_eq!(l.blocks()[0].id, id);
        assert_eq!(l.blocks()[1].kind, BlockType::Paragraph);
        assert_eq!(l.blocks()[1].content, "def");
        assert_eq!(l.selected(), Some(new_id));
    }

    #[test]
    fn split_keeps_type_and_meta() {
        let code = Block::with_meta(
            BlockType::Code,
            "a\nb",
            Meta::new().with(Meta::LANGUAGE, "rust"),
        );
        let id = code.id;
        let mut l = BlockList::from_blocks(vec![code]);

        let new_id = l.split_at_cursor(id, "a", "\nb").unwrap();

        let new = l.get(new_id).unwrap();
        assert_eq!(new.kind, BlockType::Code);
        assert_eq!(new.meta.language(), "rust");
    }

    #[test]
    fn split_at_end_resets_type() {
        let mut l = BlockList::from_blocks(vec![Block::new(BlockType::Quote, "quoted")]);
        let id = l.blocks()[0].id;

        let new_id = l.split_at_cursor(id, "quoted", "").unwrap();

        assert_eq!(l.get(new_id).unwrap().kind, BlockType::Paragraph);
        assert_eq!(l.get(new_id).unwrap().content, "");
    }

    #[test]
    fn merge_appends_and_selects_previous() {
        let mut l = list(&["abc", "def", "x"]);
        let abc = l.blocks()[0].id;
        let def = l.blocks()[1].id;

        assert_eq!(l.merge_with_previous(def), Some(abc));
        assert_eq!(contents(&l), vec!["abcdef", "x"]);
        assert_eq!(l.selected(), Some(abc));
    }

    #[test]
    fn merge_empty_block_just_removes_it() {
        let mut l = list(&["abc", ""]);
        let empty = l.blocks()[1].id;

        l.merge_with_previous(empty);
        assert_eq!(contents(&l), vec!["abc"]);
    }

    #[test]
    fn first_block_cannot_merge() {
        let mut l = list(&["a", "b"]);
        let a = l.blocks()[0].id;

        assert_eq!(l.merge_with_previous(a), None);
        assert_eq!(l.len(), 2);
    }

    #[test]
    fn update_content_bumps_version_only_on_change() {
        let mut l = list(&["a"]);
        let a = l.blocks()[0].id;

        assert!(l.update_content(a, "a"));
        assert_eq!(l.version(), 0);
        assert!(l.update_content(a, "b"));
        assert_eq!(l.version(), 1);
        assert_eq!(contents(&l), vec!["b"]);
    }
}
