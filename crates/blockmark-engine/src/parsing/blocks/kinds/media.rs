use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Block, BlockType, Meta};

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[(.*?)\]\((.*?)\)$").expect("valid regex"));
static LINKED_MEDIA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(.*?)\]\((.*?)\)\s*\{\.(audio|video)\}$").expect("valid regex")
});

/// Media references standing alone on a line:
///
/// - `![alt](url)` for images
/// - `[caption](url){.audio}` / `[caption](url){.video}` for audio and video
pub struct MediaRef;

impl MediaRef {
    pub fn parse(line: &str) -> Option<Block> {
        let line = line.trim();
        if let Some(caps) = IMAGE.captures(line) {
            let alt = caps.get(1)?.as_str();
            let url = caps.get(2)?.as_str().trim();
            return Some(Self::block(BlockType::Image, url, Meta::ALT, alt));
        }
        let caps = LINKED_MEDIA.captures(line)?;
        let kind = match caps.get(3)?.as_str() {
            "audio" => BlockType::Audio,
            _ => BlockType::Video,
        };
        let caption = caps.get(1)?.as_str();
        let url = caps.get(2)?.as_str().trim();
        Some(Self::block(kind, url, Meta::CAPTION, caption))
    }

    fn block(kind: BlockType, url: &str, key: &str, label: &str) -> Block {
        let mut meta = Meta::new();
        if !label.is_empty() {
            meta.insert(key, label);
        }
        Block::with_meta(kind, url, meta)
    }

    pub fn render(kind: BlockType, url: &str, meta: &Meta) -> String {
        let url = url.trim();
        match kind {
            BlockType::Audio => format!("[{}]({url}){{.audio}}", label(meta.caption(), meta.alt())),
            BlockType::Video => format!("[{}]({url}){{.video}}", label(meta.caption(), meta.alt())),
            _ => format!("![{}]({url})", label(meta.alt(), meta.caption())),
        }
    }
}

/// Preferred label, falling back to the other attribute; kept on one line.
fn label(preferred: &str, fallback: &str) -> String {
    let text = if preferred.is_empty() { fallback } else { preferred };
    text.replace('\n', " ")
}
