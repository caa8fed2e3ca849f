use crate::models::BlockId;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Blocks that were created, removed, moved or rewritten
    pub changed: Vec<BlockId>,
    /// Selection after the command
    pub selection: Option<BlockId>,
    /// Block created by the command, if any
    pub inserted: Option<BlockId>,
    pub version: u64,
}

impl Patch {
    /// True when the command left the list untouched.
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}
