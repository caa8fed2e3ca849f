/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other rule matches. A paragraph line that would read back as something
/// else is written with a leading [`Paragraph::ESCAPE`], which the line
/// scanner removes again.
pub struct Paragraph;

impl Paragraph {
    pub const ESCAPE: char = '\\';

    /// Strip the escape from a line, given the grammar's test for lines that
    /// read back as plain text. Returns `None` for lines that are not escaped.
    pub fn unescape(line: &str, is_plain: impl Fn(&str) -> bool) -> Option<&str> {
        let rest = line
            .strip_prefix(Self::ESCAPE)
            .filter(|rest| !rest.trim().is_empty())?;
        (!is_plain(rest)).then_some(rest)
    }

    /// Write one line so it reads back verbatim.
    pub fn escape(line: &str, is_plain: impl Fn(&str) -> bool) -> String {
        if is_plain(line) {
            line.to_string()
        } else {
            format!("{}{line}", Self::ESCAPE)
        }
    }

    /// Paragraph lines in canonical shape: trailing whitespace removed, runs
    /// of blank lines collapsed and blank lines trimmed at both ends.
    pub fn lines(content: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for line in content.split('\n').map(str::trim_end) {
            if line.is_empty() && out.last().is_none_or(|l| l.is_empty()) {
                continue;
            }
            out.push(line);
        }
        while out.last().is_some_and(|l| l.is_empty()) {
            out.pop();
        }
        out
    }
}
