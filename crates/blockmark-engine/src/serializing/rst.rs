use crate::models::{Block, BlockType, Meta};
use crate::parsing::RstGrammar;
use crate::parsing::blocks::ListKind;
use crate::parsing::blocks::kinds::{Directive, InlineMath, ListItem, Paragraph, UnderlineHeading};

use super::{join, one_line, strip_html, trimmed_text};

const QUOTE_INDENT: &str = "    ";

pub fn render(blocks: &[Block]) -> String {
    let mut parts = Vec::with_capacity(blocks.len());
    let mut after_directive = false;
    for block in blocks {
        let text = render_block(block);
        if text.trim().is_empty() {
            continue;
        }
        // a quote directly after a directive would be read as its body
        if block.kind == BlockType::Quote && after_directive {
            parts.push(Directive::BREAK.to_string());
        }
        after_directive = is_directive(block);
        parts.push(text);
    }
    join(parts)
}

fn is_directive(block: &Block) -> bool {
    Directive::name_for(block.kind).is_some()
        && !(block.kind == BlockType::Math && block.meta.is_inline())
}

/// reStructuredText for one block; empty when the block has nothing to write.
pub fn render_block(block: &Block) -> String {
    let content = block.content.as_str();
    let meta = &block.meta;
    match block.kind {
        BlockType::Heading1 | BlockType::Heading2 | BlockType::Heading3 => {
            let text = one_line(content);
            if text.is_empty() {
                return String::new();
            }
            UnderlineHeading::render(block.kind.heading_level().unwrap_or(1), &text)
        }
        BlockType::Paragraph => paragraph(content),
        BlockType::BulletList => ListItem::render(ListKind::Bullet, &strip_html(content)),
        BlockType::NumberedList => ListItem::render(ListKind::Numbered, &strip_html(content)),
        BlockType::Quote => trimmed_text(content)
            .split('\n')
            .map(|line| match line.trim() {
                "" => String::new(),
                line => format!("{QUOTE_INDENT}{line}"),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        BlockType::Code => Directive::render(Directive::CODE, meta.language(), &[], content),
        BlockType::Diagram => Directive::render(Directive::DIAGRAM, "", &[], content),
        BlockType::Math if meta.is_inline() => {
            if content.trim().is_empty() {
                return String::new();
            }
            InlineMath::render_role(content.trim())
        }
        BlockType::Math => Directive::render(Directive::MATH, "", &[], content),
        BlockType::Image => Directive::render(
            Directive::IMAGE,
            content,
            &[(Meta::ALT, meta.alt()), (Meta::CAPTION, meta.caption())],
            "",
        ),
        BlockType::Audio | BlockType::Video => {
            let name = if block.kind == BlockType::Audio {
                Directive::AUDIO
            } else {
                Directive::VIDEO
            };
            Directive::render(
                name,
                content,
                &[(Meta::CAPTION, meta.caption()), (Meta::ALT, meta.alt())],
                "",
            )
        }
        BlockType::Info | BlockType::Warning | BlockType::Danger => {
            let name = Directive::name_for(block.kind).unwrap_or(Directive::INFO);
            Directive::render(name, "", &[(Meta::TITLE, meta.title())], &trimmed_text(content))
        }
    }
}

fn paragraph(content: &str) -> String {
    let text = strip_html(content);
    Paragraph::lines(&text)
        .into_iter()
        .map(|line| {
            let line = line.trim_start();
            if line.is_empty() {
                String::new()
            } else {
                Paragraph::escape(line, RstGrammar::is_plain)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
