/// `#`-prefixed headings (`# Title`).
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 3;

    /// Returns the clamped level and heading text.
    ///
    /// The marker run must start the line and be followed by a space or the
    /// end of the line.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let run = line.chars().take_while(|&c| c == Self::MARKER).count();
        if run == 0 {
            return None;
        }
        let rest = &line[run..];
        if rest.trim().is_empty() {
            return Some((run.min(Self::MAX_LEVEL), ""));
        }
        let rest = rest.strip_prefix(' ')?;
        Some((run.min(Self::MAX_LEVEL), rest.trim()))
    }

    pub fn render(level: usize, text: &str) -> String {
        let marker = Self::MARKER
            .to_string()
            .repeat(level.clamp(1, Self::MAX_LEVEL));
        format!("{marker} {text}").trim_end().to_string()
    }
}

/// reStructuredText section titles: a text line underlined by `=`, `-` or `~`.
pub struct UnderlineHeading;

impl UnderlineHeading {
    pub const LEVEL_CHARS: [char; 3] = ['=', '-', '~'];

    /// Level implied by an underline line, or `None` if the line is not one.
    pub fn underline_level(line: &str) -> Option<usize> {
        let t = line.trim_end();
        let first = t.chars().next()?;
        let level = Self::LEVEL_CHARS.iter().position(|&c| c == first)? + 1;
        t.chars().all(|c| c == first).then_some(level)
    }

    pub fn render(level: usize, text: &str) -> String {
        let ch = Self::LEVEL_CHARS[level.clamp(1, 3) - 1];
        let width = text.chars().count().max(1);
        format!("{text}\n{}", ch.to_string().repeat(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("## Two", Some((2, "Two")))]
    #[case("### Three ", Some((3, "Three")))]
    #[case("###### Deep", Some((3, "Deep")))]
    #[case("#NoSpace", None)]
    #[case(" # Indented", None)]
    #[case("# ", Some((1, "")))]
    #[case("##", Some((2, "")))]
    #[case("plain", None)]
    fn atx_cases(#[case] line: &str, #[case] expected: Option<(usize, &str)>) {
        assert_eq!(AtxHeading::parse(line), expected);
    }

    #[rstest]
    #[case("=====", Some(1))]
    #[case("---", Some(2))]
    #[case("~", Some(3))]
    #[case("=-=", None)]
    #[case("", None)]
    #[case("***", None)]
    fn underline_cases(#[case] line: &str, #[case] expected: Option<usize>) {
        assert_eq!(UnderlineHeading::underline_level(line), expected);
    }

    #[test]
    fn render_matches_text_width() {
        assert_eq!(AtxHeading::render(2, "Hi"), "## Hi");
        assert_eq!(AtxHeading::render(1, ""), "#");
        assert_eq!(UnderlineHeading::render(1, "Title"), "Title\n=====");
        assert_eq!(UnderlineHeading::render(3, "Ünï"), "Ünï\n~~~");
    }
}
