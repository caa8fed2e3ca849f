use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Block, BlockType, Meta};
use crate::parsing::Extracted;

use super::CodeFence;

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\.\.\s+([A-Za-z][\w-]*)::\s*(.*?)\s*$").expect("valid regex")
});
static OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+:([\w-]+):\s*(.*?)\s*$").expect("valid regex"));

/// reStructuredText directives (`.. name:: argument`), their option lines and
/// indented bodies.
///
/// A line holding only `..` is an empty comment: it separates blocks without
/// producing one.
pub struct Directive;

impl Directive {
    pub const BREAK: &'static str = "..";
    pub const BODY_INDENT: &'static str = "   ";

    pub const CODE: &'static str = "code-block";
    pub const DIAGRAM: &'static str = "mermaid";
    pub const MATH: &'static str = "math";
    pub const INFO: &'static str = "note";
    pub const WARNING: &'static str = "warning";
    pub const DANGER: &'static str = "danger";
    pub const IMAGE: &'static str = "image";
    pub const AUDIO: &'static str = "audio";
    pub const VIDEO: &'static str = "video";

    pub fn is_break(line: &str) -> bool {
        line.trim_end() == Self::BREAK
    }

    /// Directive name to block type. Unknown directives are not regions.
    pub fn kind_for(name: &str) -> Option<BlockType> {
        let kind = match name.to_ascii_lowercase().as_str() {
            "code-block" | "code" | "sourcecode" => BlockType::Code,
            "mermaid" => BlockType::Diagram,
            "math" => BlockType::Math,
            "note" | "info" | "tip" | "hint" => BlockType::Info,
            "warning" | "caution" | "attention" => BlockType::Warning,
            "danger" | "error" => BlockType::Danger,
            "image" => BlockType::Image,
            "audio" => BlockType::Audio,
            "video" => BlockType::Video,
            _ => return None,
        };
        Some(kind)
    }

    /// Directive name written for a block type, if the type is a directive.
    pub fn name_for(kind: BlockType) -> Option<&'static str> {
        let name = match kind {
            BlockType::Code => Self::CODE,
            BlockType::Diagram => Self::DIAGRAM,
            BlockType::Math => Self::MATH,
            BlockType::Info => Self::INFO,
            BlockType::Warning => Self::WARNING,
            BlockType::Danger => Self::DANGER,
            BlockType::Image => Self::IMAGE,
            BlockType::Audio => Self::AUDIO,
            BlockType::Video => Self::VIDEO,
            _ => return None,
        };
        Some(name)
    }

    pub fn extract(lines: &[&str], at: usize) -> Option<Extracted> {
        if Self::is_break(lines[at]) {
            return Some(Extracted {
                block: None,
                consumed: 1,
            });
        }

        let caps = DIRECTIVE.captures(lines[at])?;
        let name = caps.get(1)?.as_str();
        let argument = caps.get(2).map_or("", |m| m.as_str());
        let kind = Self::kind_for(name)?;

        let mut meta = Meta::new();
        let mut i = at + 1;
        while i < lines.len() {
            let Some(option) = OPTION.captures(lines[i]) else {
                break;
            };
            let key = option.get(1).map_or("", |m| m.as_str());
            let value = option.get(2).map_or("", |m| m.as_str());
            match key {
                Meta::TITLE | Meta::ALT | Meta::CAPTION if !value.is_empty() => {
                    meta.insert(key, value);
                }
                _ => log::debug!("ignoring option :{key}: on directive {name}"),
            }
            i += 1;
        }

        let (body, end) = Self::body(lines, i);
        let block = Self::build(kind, argument, body, meta);
        Some(Extracted {
            block: Some(block),
            consumed: end - at,
        })
    }

    /// The indented body starting at `lines[from]`, dedented, and the index
    /// just past it. Leading and trailing blank lines are not part of it.
    fn body(lines: &[&str], from: usize) -> (String, usize) {
        let mut end = from;
        let mut last_content = from;
        while end < lines.len() {
            let line = lines[end];
            if line.trim().is_empty() {
                end += 1;
                continue;
            }
            if !line.starts_with([' ', '\t']) {
                break;
            }
            end += 1;
            last_content = end;
        }

        let taken = &lines[from..last_content];
        let indent = taken
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
            .min()
            .unwrap_or(0);
        let body = taken
            .iter()
            .skip_while(|l| l.trim().is_empty())
            .map(|l| if l.trim().is_empty() { "" } else { &l[indent..] })
            .collect::<Vec<_>>()
            .join("\n");
        (body, last_content)
    }

    fn build(kind: BlockType, argument: &str, body: String, mut meta: Meta) -> Block {
        match kind {
            BlockType::Code if argument == CodeFence::DIAGRAM_LANGUAGE => {
                Block::with_meta(BlockType::Diagram, body, meta)
            }
            BlockType::Code => {
                if !argument.is_empty() {
                    meta.insert(Meta::LANGUAGE, argument);
                }
                Block::with_meta(kind, body, meta)
            }
            kind if kind.is_media() => {
                if !body.is_empty() && meta.get(Meta::CAPTION).is_none() {
                    meta.insert(Meta::CAPTION, body.replace('\n', " "));
                }
                Block::with_meta(kind, argument, meta)
            }
            _ => {
                let content = match (argument.is_empty(), body.is_empty()) {
                    (true, _) => body,
                    (false, true) => argument.to_string(),
                    (false, false) => format!("{argument}\n{body}"),
                };
                Block::with_meta(kind, content, meta)
            }
        }
    }

    /// Render a directive: header line, option lines, then the body indented
    /// by [`Directive::BODY_INDENT`] after a blank line.
    pub fn render(name: &str, argument: &str, options: &[(&str, &str)], body: &str) -> String {
        let argument = argument.replace('\n', " ");
        let mut out = format!("{} {name}:: {}", Self::BREAK, argument.trim())
            .trim_end()
            .to_string();
        for (key, value) in options {
            if !value.trim().is_empty() {
                out.push_str(&format!(
                    "\n{}:{key}: {}",
                    Self::BODY_INDENT,
                    value.replace('\n', " ").trim()
                ));
            }
        }
        if !body.trim().is_empty() {
            out.push('\n');
            for line in body.split('\n') {
                out.push('\n');
                if !line.trim().is_empty() {
                    out.push_str(Self::BODY_INDENT);
                    out.push_str(line);
                }
            }
        }
        out
    }
}
