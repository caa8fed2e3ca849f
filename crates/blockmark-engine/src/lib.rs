pub mod editing;
pub mod io;
pub mod models;
pub mod parsing;
pub mod serializing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{BlockRect, Cmd, MoveTarget, Patch, nearest_slot};
pub use io::{IoError, load_document, save_document, scan_documents};
pub use models::{Block, BlockId, BlockList, BlockType, InvariantError, Meta};
pub use parsing::{Dialect, parse, parse_with};
pub use serializing::{serialize, serialize_with};
