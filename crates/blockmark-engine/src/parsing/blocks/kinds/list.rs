use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::ListKind;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[*+•-]\s+(.*)$").expect("valid regex"));
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:\d+|#)[.)]\s+(.*)$").expect("valid regex"));

/// Bullet (`*`, `-`, `+`, `•`) and numbered (`1.`, `1)`, `#.`) list items.
pub struct ListItem;

impl ListItem {
    pub const BULLET: &'static str = "*";

    /// A marker with no item text after it is not a list item.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        let (kind, caps) = match BULLET.captures(line) {
            Some(caps) => (ListKind::Bullet, caps),
            None => (ListKind::Numbered, NUMBERED.captures(line)?),
        };
        let text = caps.get(1)?.as_str().trim_end();
        (!text.is_empty()).then_some((kind, text))
    }

    /// One marker line per non-blank item; numbering restarts at 1 per block.
    pub fn render(kind: ListKind, content: &str) -> String {
        content
            .split('\n')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .enumerate()
            .map(|(i, item)| match kind {
                ListKind::Bullet => format!("{} {item}", Self::BULLET),
                ListKind::Numbered => format!("{}. {item}", i + 1),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
