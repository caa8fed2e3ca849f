use crate::editing::Patch;
use crate::models::{BlockId, BlockList, BlockType};

/// Where `Cmd::Move` sends a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    Up,
    Down,
    /// Slot in the current list, `0..=len`
    Index(usize),
}

/// Commands that can be applied to a block list
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    Insert {
        kind: BlockType,
        content: String,
        position: usize,
    },
    Remove {
        id: BlockId,
    },
    Move {
        id: BlockId,
        to: MoveTarget,
    },
    SplitAtCursor {
        id: BlockId,
        before: String,
        after: String,
    },
    MergeWithPrevious {
        id: BlockId,
    },
    UpdateContent {
        id: BlockId,
        content: String,
    },
    Select {
        id: BlockId,
    },
}

impl BlockList {
    /// Apply a command and describe its effect.
    ///
    /// Commands naming a stale id produce a no-op patch.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        log::trace!("apply {cmd:?} at version {}", self.version);

        let mut changed = Vec::new();
        let mut inserted = None;
        match cmd {
            Cmd::Insert {
                kind,
                content,
                position,
            } => {
                let id = self.insert(kind, content, position);
                changed.push(id);
                inserted = Some(id);
            }
            Cmd::Remove { id } => {
                let was_only = self.len() == 1;
                if self.remove(id) {
                    changed.push(id);
                    if was_only {
                        let stand_in = self.blocks[0].id;
                        changed.push(stand_in);
                        inserted = Some(stand_in);
                    }
                }
            }
            Cmd::Move { id, to } => {
                if self.move_block(id, to) {
                    changed.push(id);
                }
            }
            Cmd::SplitAtCursor { id, before, after } => {
                if let Some(new_id) = self.split_at_cursor(id, before, after) {
                    changed.extend([id, new_id]);
                    inserted = Some(new_id);
                }
            }
            Cmd::MergeWithPrevious { id } => {
                if let Some(previous) = self.merge_with_previous(id) {
                    changed.extend([previous, id]);
                }
            }
            Cmd::UpdateContent { id, content } => {
                let version = self.version;
                if self.update_content(id, content) && self.version != version {
                    changed.push(id);
                }
            }
            Cmd::Select { id } => {
                self.select(id);
            }
        }

        Patch {
            changed,
            selection: self.selected,
            inserted,
            version: self.version,
        }
    }
}
