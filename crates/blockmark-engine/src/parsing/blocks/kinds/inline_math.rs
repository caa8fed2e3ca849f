use std::sync::LazyLock;

use regex::Regex;

// A `$` escaped with a backslash or doubled never opens a formula, and a
// formula is never blank.
static DOLLAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^\\$])\$([^$]*[^$\s][^$]*)\$").expect("valid regex")
});
static ROLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":math:`([^`]*[^`\s][^`]*)`").expect("valid regex"));

/// A formula found inside a text line, with the text around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineFormula<'a> {
    pub before: &'a str,
    pub formula: &'a str,
    pub after: &'a str,
}

/// Inline formulas: `$x$` in Markdown, `` :math:`x` `` in reStructuredText.
pub struct InlineMath;

impl InlineMath {
    pub fn find_dollar(line: &str) -> Option<InlineFormula<'_>> {
        let caps = DOLLAR.captures(line)?;
        let whole = caps.get(0)?;
        let lead = caps.get(1)?;
        let formula = caps.get(2)?;
        Some(InlineFormula {
            before: &line[..lead.end()],
            formula: formula.as_str(),
            after: &line[whole.end()..],
        })
    }

    pub fn find_role(line: &str) -> Option<InlineFormula<'_>> {
        let caps = ROLE.captures(line)?;
        let whole = caps.get(0)?;
        Some(InlineFormula {
            before: &line[..whole.start()],
            formula: caps.get(1)?.as_str(),
            after: &line[whole.end()..],
        })
    }

    pub fn render_dollar(formula: &str) -> String {
        format!("${}$", formula.replace('\n', " "))
    }

    pub fn render_role(formula: &str) -> String {
        format!(":math:`{}`", formula.replace('\n', " "))
    }
}
