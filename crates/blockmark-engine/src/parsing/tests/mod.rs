//! Tests for the parsing module.
//!
//! Every parse result is also run through the parser output invariants.


use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Block, BlockType};
use crate::parsing::{Dialect, parse, parse_with};
use normalize::{kinds, metas};

fn md(text: &str) -> Vec<Block> {
    let blocks = parse(text);
    invariants::check(&blocks);
    blocks
}

fn rst(text: &str) -> Vec<Block> {
    let blocks = parse_with(text, Dialect::Rst);
    invariants::check(&blocks);
    blocks
}

// Markdown

#[test]
fn heading_paragraph_and_code() {
    let blocks = md("# Title\n\nHello world\n\n```python\nprint(1)\n```\n");
    assert_eq!(
        kinds(&blocks),
        vec![
            (BlockType::Heading1, "Title"),
            (BlockType::Paragraph, "Hello world"),
            (BlockType::Code, "print(1)"),
        ]
    );
    assert_eq!(blocks[2].meta.language(), "python");
}

#[test]
fn display_math_fence() {
    let blocks = md("$$\nx^2\n$$\n");
    assert_eq!(kinds(&blocks), vec![(BlockType::Math, "x^2")]);
    assert!(!blocks[0].meta.is_inline());
}

#[rstest]
#[case("")]
#[case("   \n\n \t\n")]
fn empty_input_yields_one_paragraph(#[case] text: &str) {
    for blocks in [md(text), rst(text)] {
        assert_eq!(kinds(&blocks), vec![(BlockType::Paragraph, "")]);
    }
}

#[test]
fn unterminated_fence_consumes_rest() {
    let blocks = md("intro\n```\ncode\n\n# more");
    assert_eq!(
        kinds(&blocks),
        vec![
            (BlockType::Paragraph, "intro"),
            (BlockType::Code, "code\n\n# more"),
        ]
    );
}

#[test]
fn fence_bodies_are_not_line_classified() {
    let blocks = md("```\n# not a heading\n- not a list\n```");
    assert_eq!(
        kinds(&blocks),
        vec![(BlockType::Code, "# not a heading\n- not a list")]
    );
}

#[test]
fn list_lines_accumulate_by_kind() {
    let blocks = md("* a\n- b\n1. c\n2) d\n\n+ e");
    assert_eq!(
        kinds(&blocks),
        vec![
            (BlockType::BulletList, "a\nb"),
            (BlockType::NumberedList, "c\nd"),
            (BlockType::BulletList, "e"),
        ]
    );
}

#[test]
fn list_item_after_paragraph_starts_new_block() {
    let blocks = md("para line\n- item\nmore text");
    assert_eq!(
        kinds(&blocks),
        vec![
            (BlockType::Paragraph, "para line"),
            (BlockType::BulletList, "item"),
            (BlockType::Paragraph, "more text"),
        ]
    );
}

#[test]
fn quote_lines_accumulate() {
    let blocks = md("> first\n>\n> second\nafter");
    assert_eq!(
        kinds(&blocks),
        vec![
            (BlockType::Quote, "first\n\nsecond"),
            (BlockType::Paragraph, "after"),
        ]
    );
}

#[rstest]
#[case("# One", BlockType::Heading1, "h1")]
#[case("## Two", BlockType::Heading2, "h2")]
#[case("### Three", BlockType::Heading3, "h3")]
#[case("##### Five", BlockType::Heading3, "h3")]
fn heading_levels_are_clamped(#[case] text: &str, #[case] kind: BlockType, #[case] level: &str) {
    let blocks = md(text);
    assert_eq!(blocks[0].kind, kind);
    assert_eq!(blocks[0].meta.level(), Some(level));
}

#[test]
fn media_references() {
    let blocks = md("![A cat](cat.png)\n[Song](a.mp3){.audio}\n[Clip](v.mp4){.video}");
    assert_eq!(
        kinds(&blocks),
        vec![
            (BlockType::Image, "cat.png"),
            (BlockType::Audio, "a.mp3"),
            (BlockType::Video, "v.mp4"),
        ]
    );
    assert_eq!(
        metas(&blocks),
        vec![
            vec!["alt=A cat".to_string()],
            vec!["caption=Song".to_string()],
            vec!["caption=Clip".to_string()],
        ]
    );
}

#[test]
fn inline_formula_splits_paragraph() {
    let blocks = md("Before\nEnergy $E=mc^2$ rocks\nAfter");
    assert_eq!(
        kinds(&blocks),
        vec![
            (BlockType::Paragraph, "Before\nEnergy"),
            (BlockType::Math, "E=mc^2"),
            (BlockType::Paragraph, "rocks\nAfter"),
        ]
    );
    assert!(blocks[1].meta.is_inline());
}

#[test]
fn lone_dollar_and_single_line_display_math() {
    let blocks = md("$\na + b\n$\n\n$$c$$");
    assert_eq!(
        kinds(&blocks),
        vec![(BlockType::Math, "a + b"), (BlockType::Math, "c")]
    );
    assert!(blocks.iter().all(|b| !b.meta.is_inline()));
}

#[test]
fn admonitions_and_diagrams() {
    let blocks = md(":::warning \"Hot\"\nDo not touch\n:::\n```mermaid\ngraph TD;\n```\n:::tip\nnope");
    assert_eq!(
        kinds(&blocks),
        vec![
            (BlockType::Warning, "Do not touch"),
            (BlockType::Diagram, "graph TD;"),
            (BlockType::Paragraph, ":::tip\nnope"),
        ]
    );
    assert_eq!(blocks[0].meta.title(), "Hot");
}

#[test]
fn escaped_lines_stay_paragraph_text() {
    let blocks = md("\\# not a heading\n\\- not a list");
    assert_eq!(
        kinds(&blocks),
        vec![(BlockType::Paragraph, "# not a heading\n- not a list")]
    );
}

#[test]
fn parse_is_total_on_garbage() {
    let blocks = md("```\n$$\n:::\n~~~");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockType::Code);
}

// reStructuredText

#[test]
fn rst_document() {
    let blocks = rst(concat!(
        "Title\n",
        "=====\n",
        "\n",
        "Some text\n",
        "\n",
        ".. code-block:: rust\n",
        "\n",
        "   fn main() {}\n",
        "\n",
        "* a\n",
        "* b\n",
        "\n",
        "    quoted\n",
    ));
    assert_eq!(
        kinds(&blocks),
        vec![
            (BlockType::Heading1, "Title"),
            (BlockType::Paragraph, "Some text"),
            (BlockType::Code, "fn main() {}"),
            (BlockType::BulletList, "a\nb"),
            (BlockType::Quote, "quoted"),
        ]
    );
    assert_eq!(blocks[2].meta.language(), "rust");
}

#[rstest]
#[case("=", BlockType::Heading1)]
#[case("-", BlockType::Heading2)]
#[case("~", BlockType::Heading3)]
fn rst_underline_levels(#[case] ch: &str, #[case] kind: BlockType) {
    let blocks = rst(&format!("Heading\n{}\n", ch.repeat(3)));
    assert_eq!(kinds(&blocks), vec![(kind, "Heading")]);
}

#[test]
fn rst_empty_comment_separates_directive_from_quote() {
    let blocks = rst(".. note::\n   :title: FYI\n\n   body\n\n..\n\n    quote");
    assert_eq!(
        kinds(&blocks),
        vec![(BlockType::Info, "body"), (BlockType::Quote, "quote")]
    );
    assert_eq!(blocks[0].meta.title(), "FYI");
}

#[test]
fn rst_math_role() {
    let blocks = rst("Let :math:`a^2` hold");
    assert_eq!(
        kinds(&blocks),
        vec![
            (BlockType::Paragraph, "Let"),
            (BlockType::Math, "a^2"),
            (BlockType::Paragraph, "hold"),
        ]
    );
    assert!(blocks[1].meta.is_inline());
}

#[test]
fn rst_unterminated_directive_runs_to_end() {
    let blocks = rst(".. math::\n\n   a\n\n   b");
    assert_eq!(kinds(&blocks), vec![(BlockType::Math, "a\n\nb")]);
}

#[test]
fn rst_media_directives() {
    let blocks = rst(".. image:: cat.png\n   :alt: Cat\n\n.. video:: v.mp4\n   :caption: Clip");
    assert_eq!(
        kinds(&blocks),
        vec![(BlockType::Image, "cat.png"), (BlockType::Video, "v.mp4")]
    );
    assert_eq!(blocks[0].meta.alt(), "Cat");
    assert_eq!(blocks[1].meta.caption(), "Clip");
}

#[test]
fn dialect_is_chosen_by_caller_not_content() {
    let text = "Title\n=====";
    assert_eq!(
        kinds(&md(text)),
        vec![(BlockType::Paragraph, "Title\n=====")]
    );
    assert_eq!(kinds(&rst(text)), vec![(BlockType::Heading1, "Title")]);
}

// Dialect names

#[rstest]
#[case("md", Some(Dialect::Markdown))]
#[case("Markdown", Some(Dialect::Markdown))]
#[case("rst", Some(Dialect::Rst))]
#[case("reStructuredText", Some(Dialect::Rst))]
#[case("txt", None)]
fn dialect_names(#[case] name: &str, #[case] expected: Option<Dialect>) {
    assert_eq!(Dialect::from_name(name), expected);
}

#[test]
fn dialect_from_path() {
    assert_eq!(Dialect::from_path(Path::new("a/b.rst")), Some(Dialect::Rst));
    assert_eq!(Dialect::from_path(Path::new("notes.md")), Some(Dialect::Markdown));
    assert_eq!(Dialect::from_path(Path::new("README")), None);
    assert_eq!(Dialect::Rst.to_string(), "rst");
}
