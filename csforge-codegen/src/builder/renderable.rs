//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Declarations describe themselves as fragment trees; the [`CodeBuilder`]
//! decides how those fragments become indented text.

use super::CodeBuilder;
use crate::format::format;

/// A fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (a newline is appended). Embedded newlines are
    /// written verbatim, only the first line receives the indentation.
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, indented body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a `{ ... }` block whose header line ends with the opening brace.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: format!("{} {{", header.into()),
            body,
            close: Some("}".to_string()),
        }
    }

    /// Join groups of fragments, putting exactly one blank line between
    /// consecutive groups. Empty groups are skipped.
    pub fn separated(groups: impl IntoIterator<Item = Vec<CodeFragment>>) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for group in groups.into_iter().filter(|g| !g.is_empty()) {
            if !fragments.is_empty() {
                fragments.push(Self::Blank);
            }
            fragments.extend(group);
        }
        fragments
    }
}

/// Types that can be converted to code fragments.
pub trait Renderable {
    /// Describe this node as a list of fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Render the node, with its outermost lines at `indent_level`.
    fn render(&self, indent_level: usize) -> String {
        let mut builder = CodeBuilder::csharp().with_indent_level(indent_level);
        builder.emit(self);
        builder.build()
    }

    /// Render at level 0, passing the text through the [`Formatter`] when
    /// `formatted` is set.
    ///
    /// [`Formatter`]: crate::Formatter
    fn to_source_code(&self, formatted: bool) -> String {
        let raw = self.render(0);
        if formatted { format(&raw) } else { raw }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point;

    impl Renderable for Point {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::braced(
                "public struct Point",
                vec![
                    CodeFragment::line("public int X;"),
                    CodeFragment::line("public int Y;"),
                ],
            )]
        }
    }

    #[test]
    fn test_braced_block() {
        let block = CodeFragment::braced("class A", vec![]);
        assert_eq!(
            block,
            CodeFragment::Block {
                header: "class A {".to_string(),
                body: vec![],
                close: Some("}".to_string()),
            }
        );
    }

    #[test]
    fn test_separated_skips_empty_groups() {
        let fragments = CodeFragment::separated(vec![
            vec![CodeFragment::line("a;")],
            vec![],
            vec![CodeFragment::line("b;"), CodeFragment::line("c;")],
        ]);
        assert_eq!(
            fragments,
            vec![
                CodeFragment::line("a;"),
                CodeFragment::Blank,
                CodeFragment::line("b;"),
                CodeFragment::line("c;"),
            ]
        );
    }

    #[test]
    fn test_render_at_indent_level() {
        assert_eq!(
            Point.render(1),
            "    public struct Point {\n        public int X;\n        public int Y;\n    }\n"
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        assert_eq!(Point.render(0), Point.render(0));
    }

    #[test]
    fn test_to_source_code_unformatted_is_raw_render() {
        assert_eq!(Point.to_source_code(false), Point.render(0));
    }
}
