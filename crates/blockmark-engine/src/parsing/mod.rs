//! # Markup Parsing
//!
//! Turns flat markup text into an ordered block list. Both dialects share one
//! two-pass driver ([`parse_document`]) and differ only in their
//! [`MarkupGrammar`]:
//!
//! 1. **Region extraction**: delimiter- or indentation-bounded regions
//!    (fences, directives) are cut out first so their bodies are never seen
//!    by the line rules.
//! 2. **Line scanning**: the remaining text is classified line by line in a
//!    fixed precedence order and fed to a [`BlockBuilder`] that accumulates
//!    list, quote and paragraph lines.
//!
//! Parsing never fails. Anything that matches no rule becomes paragraph text,
//! and an unterminated region runs to the end of the input.

pub mod blocks;
pub mod markdown;
pub mod rst;

#[cfg(test)]
mod tests;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::Block;
use blocks::{BlockBuilder, LineClass, Region, extract_regions};

pub use markdown::MarkdownGrammar;
pub use rst::RstGrammar;

/// The flat-text markup grammars a document can be stored in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Markdown,
    Rst,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Markdown => "markdown",
            Dialect::Rst => "rst",
        }
    }

    /// Accepts the usual short and long spellings (`md`, `markdown`, `rst`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Some(Dialect::Markdown),
            "rst" | "rest" | "restructuredtext" => Some(Dialect::Rst),
            _ => None,
        }
    }

    /// Dialect implied by a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_name)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A region cut out of the text during the first pass.
#[derive(Debug)]
pub struct Extracted {
    /// `None` for pure separators that end accumulation without producing a block.
    pub block: Option<Block>,
    /// Number of source lines the region spans (at least 1).
    pub consumed: usize,
}

/// Per-dialect syntax knowledge plugged into [`parse_document`].
pub trait MarkupGrammar {
    /// Pass 1: does a fenced/directive region open at `lines[at]`?
    fn open_region(&self, lines: &[&str], at: usize) -> Option<Extracted>;

    /// Pass 2: classify `lines[at]`, returning the class and how many lines
    /// it consumed (underline headings take two).
    fn classify(&self, lines: &[&str], at: usize) -> (LineClass, usize);
}

/// Parse Markdown-like text.
pub fn parse(text: &str) -> Vec<Block> {
    parse_with(text, Dialect::Markdown)
}

/// Parse text in the given dialect.
pub fn parse_with(text: &str, dialect: Dialect) -> Vec<Block> {
    match dialect {
        Dialect::Markdown => parse_document(text, &MarkdownGrammar),
        Dialect::Rst => parse_document(text, &RstGrammar),
    }
}

/// The shared two-pass driver.
///
/// Empty or whitespace-only input yields a single empty paragraph.
pub fn parse_document<G: MarkupGrammar>(text: &str, grammar: &G) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().collect();
    let mut builder = BlockBuilder::new();

    for region in extract_regions(grammar, &lines) {
        match region {
            Region::Extracted(block) => builder.push_block(block),
            Region::Break => builder.flush(),
            Region::Text(text_lines) => {
                let mut at = 0;
                while at < text_lines.len() {
                    let (class, consumed) = grammar.classify(&text_lines, at);
                    builder.push(class);
                    at += consumed.max(1);
                }
                builder.flush();
            }
        }
    }

    let blocks = builder.finish();
    if blocks.is_empty() {
        vec![Block::empty_paragraph()]
    } else {
        blocks
    }
}
