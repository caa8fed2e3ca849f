//! Syntax knowledge per block kind.
//!
//! Each kind owns both directions of its syntax: recognising it while parsing
//! and writing it back while serializing.

pub mod admonition;
pub mod block_quote;
pub mod code_fence;
pub mod directive;
pub mod heading;
pub mod inline_math;
pub mod list;
pub mod math_fence;
pub mod media;
pub mod paragraph;

pub use admonition::Admonition;
pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind};
pub use directive::Directive;
pub use heading::{AtxHeading, UnderlineHeading};
pub use inline_math::{InlineFormula, InlineMath};
pub use list::ListItem;
pub use math_fence::MathFence;
pub use media::MediaRef;
pub use paragraph::Paragraph;
