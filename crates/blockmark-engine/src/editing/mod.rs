/*!
 * # Structural Editing
 *
 * Block-level edit operations over a [`BlockList`](crate::models::BlockList),
 * called by a UI layer in response to user intents.
 *
 * ## Architecture Overview
 *
 * ### 1. Operations are inherent `BlockList` methods
 * - `insert`, `remove`, `move_block`, `split_at_cursor`,
 *   `merge_with_previous`, `update_content`
 * - Each runs to completion synchronously and is total: a stale id is logged
 *   at debug level and the call does nothing
 *
 * ### 2. Command-Based Editing
 * - Every operation is also a `Cmd` value; `BlockList::apply(cmd)` runs it and
 *   returns a `Patch` describing what changed
 * - Useful for UIs that queue intents or replay them in tests
 *
 * ### 3. Invariants by construction
 * - The list is never empty: removing the last block leaves an empty paragraph
 * - The selection is `None` or an id present in the list
 * - Ids are unique and never reused
 *
 * ### 4. Drop-target resolution
 * - `nearest_slot` maps a pointer position over rendered block extents to an
 *   insertion slot; `BlockList::resolve_drop_index` turns that slot into the
 *   index `move_block` expects
 *
 * ## Module Structure
 *
 * - **`operations`**: the edit operations
 * - **`commands`**: `Cmd`, `MoveTarget` and `BlockList::apply`
 * - **`patch`**: edit result metadata
 * - **`drop_target`**: pointer geometry for drag and drop
 *
 * ## Usage Pattern
 *
 * ```rust
 * use blockmark_engine::editing::{Cmd, MoveTarget};
 * use blockmark_engine::models::{BlockList, BlockType};
 * use blockmark_engine::parsing::Dialect;
 *
 * let mut list = BlockList::from_text("# Title\n\nHello", Dialect::Markdown);
 * let hello = list.blocks()[1].id;
 *
 * let patch = list.apply(Cmd::Move { id: hello, to: MoveTarget::Up });
 * assert_eq!(patch.selection, Some(hello));
 *
 * let id = list.insert(BlockType::Quote, "Cited", 2);
 * assert_eq!(list.selected(), Some(id));
 * assert_eq!(list.to_text(Dialect::Markdown), "Hello\n\n# Title\n\n> Cited");
 * ```
 */

pub mod commands;
pub mod drop_target;
pub mod operations;
pub mod patch;

pub use commands::{Cmd, MoveTarget};
pub use drop_target::{BlockRect, nearest_slot};
pub use patch::Patch;
