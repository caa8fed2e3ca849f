use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a block
///
/// Minted once when the block is created and never reused or changed, so UI
/// layers can keep referring to a block while the list around it is edited.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The closed set of block kinds an editor can hold.
///
/// Deserializing an unknown type name yields `Paragraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    BulletList,
    NumberedList,
    Quote,
    Code,
    Math,
    Diagram,
    Image,
    Audio,
    Video,
    Info,
    Warning,
    Danger,
}

impl BlockType {
    pub const ALL: [BlockType; 16] = [
        BlockType::Heading1,
        BlockType::Heading2,
        BlockType::Heading3,
        BlockType::Paragraph,
        BlockType::BulletList,
        BlockType::NumberedList,
        BlockType::Quote,
        BlockType::Code,
        BlockType::Math,
        BlockType::Diagram,
        BlockType::Image,
        BlockType::Audio,
        BlockType::Video,
        BlockType::Info,
        BlockType::Warning,
        BlockType::Danger,
    ];

    /// Glossary name of the type (`bullet-list`, `heading2`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Heading1 => "heading1",
            BlockType::Heading2 => "heading2",
            BlockType::Heading3 => "heading3",
            BlockType::Paragraph => "paragraph",
            BlockType::BulletList => "bullet-list",
            BlockType::NumberedList => "numbered-list",
            BlockType::Quote => "quote",
            BlockType::Code => "code",
            BlockType::Math => "math",
            BlockType::Diagram => "diagram",
            BlockType::Image => "image",
            BlockType::Audio => "audio",
            BlockType::Video => "video",
            BlockType::Info => "info",
            BlockType::Warning => "warning",
            BlockType::Danger => "danger",
        }
    }

    /// Look up a type by its glossary name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Heading type for a marker level, clamped to 1..=3.
    pub fn heading(level: usize) -> Self {
        match level {
            0 | 1 => BlockType::Heading1,
            2 => BlockType::Heading2,
            _ => BlockType::Heading3,
        }
    }

    pub fn heading_level(self) -> Option<usize> {
        match self {
            BlockType::Heading1 => Some(1),
            BlockType::Heading2 => Some(2),
            BlockType::Heading3 => Some(3),
            _ => None,
        }
    }

    pub fn is_media(self) -> bool {
        matches!(self, BlockType::Image | BlockType::Audio | BlockType::Video)
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name).unwrap_or_else(|| {
            log::debug!("unknown block type {name:?}, treating as paragraph");
            BlockType::Paragraph
        }))
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary block attributes. Absent keys mean "use the type's default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meta(BTreeMap<String, String>);

impl Meta {
    pub const LANGUAGE: &'static str = "language";
    pub const TITLE: &'static str = "title";
    pub const ALT: &'static str = "alt";
    pub const CAPTION: &'static str = "caption";
    pub const INLINE: &'static str = "inline";
    pub const LEVEL: &'static str = "level";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn language(&self) -> &str {
        self.get(Self::LANGUAGE).unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.get(Self::TITLE).unwrap_or_default()
    }

    pub fn alt(&self) -> &str {
        self.get(Self::ALT).unwrap_or_default()
    }

    pub fn caption(&self) -> &str {
        self.get(Self::CAPTION).unwrap_or_default()
    }

    pub fn level(&self) -> Option<&str> {
        self.get(Self::LEVEL)
    }

    pub fn is_inline(&self) -> bool {
        self.get(Self::INLINE) == Some("true")
    }
}

/// An atomic typed unit of document content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub kind: BlockType,
    /// Primary payload: heading text, list lines, code body, media URL...
    pub content: String,
    #[serde(default)]
    pub meta: Meta,
    /// UI display mode; ignored by the parser and serializer.
    #[serde(default, rename = "isPreview")]
    pub is_preview: bool,
}

impl Block {
    pub fn new(kind: BlockType, content: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            content: content.into(),
            meta: Meta::new(),
            is_preview: false,
        }
    }

    pub fn with_meta(kind: BlockType, content: impl Into<String>, meta: Meta) -> Self {
        Self {
            meta,
            ..Self::new(kind, content)
        }
    }

    /// The block an empty list falls back to.
    pub fn empty_paragraph() -> Self {
        Self::new(BlockType::Paragraph, "")
    }
}
