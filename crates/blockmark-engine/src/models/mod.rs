pub mod block;
pub mod block_list;

pub use block::{Block, BlockId, BlockType, Meta};
pub use block_list::{BlockList, InvariantError};
