/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or serializer code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one quote prefix (and the single space after it, if any).
    ///
    /// Returns `None` when the line does not start with the prefix. Nested
    /// quotes keep their inner `>` as content.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest).trim_end())
    }

    /// Prefix every line; empty lines get a bare `>`.
    pub fn render(content: &str) -> String {
        content
            .split('\n')
            .map(|line| {
                let line = line.trim_end();
                if line.is_empty() {
                    Self::PREFIX.to_string()
                } else {
                    format!("{} {line}", Self::PREFIX)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
