use crate::models::{Block, BlockType};
use crate::parsing::MarkdownGrammar;
use crate::parsing::blocks::ListKind;
use crate::parsing::blocks::kinds::{
    Admonition, AtxHeading, BlockQuote, CodeFence, InlineMath, ListItem, MathFence, MediaRef,
    Paragraph,
};

use super::{join, one_line, strip_html, trimmed_text};

pub fn render(blocks: &[Block]) -> String {
    join(blocks.iter().map(render_block))
}

/// Markdown for one block; empty when the block has nothing to write.
pub fn render_block(block: &Block) -> String {
    let content = block.content.as_str();
    match block.kind {
        BlockType::Heading1 | BlockType::Heading2 | BlockType::Heading3 => {
            let level = block.kind.heading_level().unwrap_or(1);
            AtxHeading::render(level, &one_line(content))
        }
        BlockType::Paragraph => paragraph(content),
        BlockType::BulletList => ListItem::render(ListKind::Bullet, &strip_html(content)),
        BlockType::NumberedList => ListItem::render(ListKind::Numbered, &strip_html(content)),
        // an empty quote still writes its prefix
        BlockType::Quote => BlockQuote::render(&trimmed_text(content)),
        BlockType::Code => CodeFence::render(block.meta.language().trim(), content),
        BlockType::Diagram => CodeFence::render(CodeFence::DIAGRAM_LANGUAGE, content),
        BlockType::Math if block.meta.is_inline() => {
            if content.trim().is_empty() {
                return String::new();
            }
            InlineMath::render_dollar(content.trim())
        }
        BlockType::Math => MathFence::render(content),
        BlockType::Image | BlockType::Audio | BlockType::Video => {
            MediaRef::render(block.kind, content, &block.meta)
        }
        BlockType::Info | BlockType::Warning | BlockType::Danger => {
            Admonition::render(block.kind, block.meta.title(), &trimmed_text(content))
        }
    }
}

fn paragraph(content: &str) -> String {
    let text = strip_html(content);
    Paragraph::lines(&text)
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                Paragraph::escape(line, MarkdownGrammar::is_plain)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
