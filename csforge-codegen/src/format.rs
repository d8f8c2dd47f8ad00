//! Brace-aware source formatter.
//!
//! The formatter re-indents rendered C# text by brace depth. It does not
//! parse declarations: it only tracks braces, parentheses, statement
//! terminators, literals and comments, which is enough to normalize the text
//! the renderers produce (including opaque bodies supplied by callers).
//!
//! A `//` comment stays on the line it was written on. When an Allman-style
//! `{` is moved up onto a line that ends in such a comment, the brace goes
//! before the comment.
//!
//! Formatting is idempotent: `format(&format(x)) == format(x)`.

use crate::builder::Indent;

/// Keywords that make up an accessor declaration such as `private set;`.
const ACCESSOR_KEYWORDS: &[&str] = &["get", "set", "init"];
const ACCESSOR_MODIFIERS: &[&str] = &["public", "private", "protected", "internal"];

/// Keywords that stay on the line of the `}` closing the previous block.
const CONTINUATION_KEYWORDS: &[&str] = &["else", "catch", "finally"];

/// Re-indents source text so that every brace scope is one [`Indent`] unit
/// deeper than its parent, with opening braces at the end of the line.
///
/// # Example
///
/// ```
/// use csforge_codegen::Formatter;
///
/// let formatted = Formatter::default().format("class A\n{\nint x;\n}");
/// assert_eq!(formatted, "class A {\n    int x;\n}\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    indent: Indent,
}

impl Formatter {
    /// Create a formatter with the given indentation unit.
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    /// Format `source`, returning text that ends with a newline (or the empty
    /// string when `source` holds no code).
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn format(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len());
        for line in Scanner::new(source).scan() {
            match line {
                Line::Text {
                    depth,
                    code,
                    comment,
                } => {
                    self.indent.write_to(&mut out, depth);
                    out.push_str(&code);
                    if let Some(comment) = comment {
                        if !code.is_empty() {
                            out.push(' ');
                        }
                        out.push_str(&comment);
                    }
                    out.push('\n');
                }
                Line::Blank => out.push('\n'),
            }
        }
        out
    }
}

/// Format `source` with the default 4-space indentation.
pub fn format(source: &str) -> String {
    Formatter::default().format(source)
}

#[derive(Debug, PartialEq)]
enum Line {
    /// Code followed by the `//` comment written after it. At least one of
    /// the two is present.
    Text {
        depth: usize,
        code: String,
        comment: Option<String>,
    },
    Blank,
}

/// Single pass over the source that splits it into logical lines.
struct Scanner {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
    /// Open parentheses within the current brace scope.
    parens: usize,
    paren_stack: Vec<usize>,
    current: String,
    /// Line comment that closes the current line.
    comment: Option<String>,
    pending_space: bool,
    pending_blank: bool,
    /// Line breaks seen since the last piece of code.
    newlines: usize,
    lines: Vec<Line>,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            depth: 0,
            parens: 0,
            paren_stack: Vec::new(),
            current: String::new(),
            comment: None,
            pending_space: false,
            pending_blank: false,
            newlines: 0,
            lines: Vec::new(),
        }
    }

    fn scan(mut self) -> Vec<Line> {
        while let Some(c) = self.peek(0) {
            match c {
                '\n' => {
                    self.pos += 1;
                    self.newline();
                }
                c if c.is_whitespace() => {
                    self.pos += 1;
                    self.pending_space = true;
                }
                '"' | '\'' => self.quoted(c),
                '@' if self.peek(1) == Some('"') => self.verbatim_string(),
                '/' if self.peek(1) == Some('/') => self.line_comment(),
                '/' if self.peek(1) == Some('*') => self.block_comment(),
                '{' => self.open_brace(),
                '}' => self.close_brace(),
                ';' => {
                    self.advance(c);
                    if self.parens == 0 {
                        self.end_line();
                    }
                }
                '(' => {
                    self.parens += 1;
                    self.advance(c);
                }
                ')' => {
                    self.parens = self.parens.saturating_sub(1);
                    self.advance(c);
                }
                _ => self.advance(c),
            }
        }
        self.flush();
        self.lines
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.push_str(c.encode_utf8(&mut buf));
        self.pos += 1;
    }

    fn push_str(&mut self, s: &str) {
        if self.pending_space && !self.current.is_empty() {
            self.current.push(' ');
        }
        self.pending_space = false;
        self.newlines = 0;
        self.current.push_str(s);
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end.min(self.chars.len())].iter().collect()
    }

    fn newline(&mut self) {
        if self.current.is_empty() {
            self.newlines += 1;
        } else {
            self.flush();
            self.newlines = 1;
        }
        if self.newlines >= 2 {
            self.pending_blank = true;
        }
        self.pending_space = false;
    }

    fn quoted(&mut self, quote: char) {
        let start = self.pos;
        self.pos += 1;
        while let Some(c) = self.peek(0) {
            self.pos += 1;
            if c == '\\' {
                self.pos += 1;
            } else if c == quote {
                break;
            }
        }
        let literal = self.slice(start, self.pos);
        self.push_str(&literal);
    }

    fn verbatim_string(&mut self) {
        let start = self.pos;
        self.pos += 2;
        while let Some(c) = self.peek(0) {
            self.pos += 1;
            if c == '"' {
                if self.peek(0) == Some('"') {
                    self.pos += 1;
                } else {
                    break;
                }
            }
        }
        let literal = self.slice(start, self.pos);
        self.push_str(&literal);
    }

    fn line_comment(&mut self) {
        let start = self.pos;
        while self.peek(0).is_some_and(|c| c != '\n') {
            self.pos += 1;
        }
        let text = self.slice(start, self.pos).trim_end().to_string();
        self.comment = Some(match self.comment.take() {
            Some(earlier) => format!("{earlier} {text}"),
            None => text,
        });
        self.newlines = 0;
        self.flush();
    }

    /// Finish the current line, taking along a `//` comment that follows on
    /// the same physical line.
    fn end_line(&mut self) {
        let mut next = self.pos;
        while matches!(self.chars.get(next).copied(), Some(' ' | '\t')) {
            next += 1;
        }
        let starts_comment =
            self.chars.get(next) == Some(&'/') && self.chars.get(next + 1) == Some(&'/');
        if starts_comment {
            self.pos = next;
            self.line_comment();
        } else {
            self.flush();
        }
    }

    fn block_comment(&mut self) {
        let start = self.pos;
        self.pos += 2;
        while let Some(c) = self.peek(0) {
            if c == '*' && self.peek(1) == Some('/') {
                self.pos += 2;
                break;
            }
            self.pos += 1;
        }
        let comment = self.slice(start, self.pos);
        self.push_str(&comment);
    }

    fn open_brace(&mut self) {
        if self.current.is_empty() {
            self.attach_to_previous_line();
        }
        self.pending_space = !self.current.ends_with('(');

        if let Some((group, end)) = self.inline_group() {
            self.push_str(&group);
            self.pos = end;
            return;
        }

        self.push_str("{");
        self.pos += 1;
        self.end_line();
        self.depth += 1;
        self.paren_stack.push(self.parens);
        self.parens = 0;
    }

    fn close_brace(&mut self) {
        self.flush();
        self.depth = self.depth.saturating_sub(1);
        self.parens = self.paren_stack.pop().unwrap_or(0);
        self.push_str("}");
        self.pos += 1;

        let mut next = self.pos;
        while matches!(self.chars.get(next).copied(), Some(' ' | '\t')) {
            next += 1;
        }
        let next_char = self.chars.get(next).copied();
        match next_char {
            Some(';' | ',' | ')') => self.pos = next,
            Some(_) if self.continuation_keyword_at(next) => {
                self.pos = next;
                self.pending_space = true;
            }
            _ => self.end_line(),
        }
    }

    fn continuation_keyword_at(&self, index: usize) -> bool {
        CONTINUATION_KEYWORDS.iter().any(|keyword| {
            let end = index + keyword.len();
            end <= self.chars.len()
                && self.chars[index..end].iter().copied().eq(keyword.chars())
                && !self
                    .chars
                    .get(end)
                    .is_some_and(|c| c.is_alphanumeric() || *c == '_')
        })
    }

    /// Move an Allman-style `{` up onto the declaration line it belongs to.
    /// A comment ending that line is kept and written after the brace.
    fn attach_to_previous_line(&mut self) {
        let attachable = matches!(
            self.lines.last(),
            Some(Line::Text { code, .. })
                if !code.is_empty()
                    && !code.ends_with([';', '{', '}'])
                    && !code.ends_with("*/")
                    && !code.starts_with('#')
        );
        if !attachable {
            return;
        }
        if let Some(Line::Text { code, comment, .. }) = self.lines.pop() {
            self.current = code;
            self.comment = comment;
            self.pending_blank = false;
        }
    }

    /// Recognize `{ }` and accessor-only groups such as `{ get; private set; }`
    /// starting at the current `{`. Returns the normalized group and the
    /// position just past its `}`.
    fn inline_group(&self) -> Option<(String, usize)> {
        let mut end = self.pos + 1;
        loop {
            match self.chars.get(end).copied()? {
                '}' => break,
                '{' | '"' | '\'' | '/' | '(' | '=' => return None,
                _ => end += 1,
            }
        }

        let inner = self.slice(self.pos + 1, end);
        let declarations: Vec<&str> = inner.split(';').map(str::trim).collect();
        let (last, accessors) = declarations.split_last()?;
        if !last.is_empty() || !accessors.iter().all(|d| is_accessor_declaration(d)) {
            return None;
        }

        let group = if accessors.is_empty() {
            "{ }".to_string()
        } else {
            let body: Vec<String> = accessors
                .iter()
                .map(|d| format!("{};", d.split_whitespace().collect::<Vec<_>>().join(" ")))
                .collect();
            format!("{{ {} }}", body.join(" "))
        };
        Some((group, end + 1))
    }

    fn flush(&mut self) {
        let code = self.current.trim_end().to_string();
        self.current.clear();
        self.pending_space = false;
        let comment = self.comment.take();
        if code.is_empty() && comment.is_none() {
            return;
        }

        if self.pending_blank {
            self.pending_blank = false;
            let separates_members = matches!(
                self.lines.last(),
                Some(Line::Text { code: previous, .. }) if !previous.ends_with('{')
            );
            if separates_members && !code.starts_with('}') {
                self.lines.push(Line::Blank);
            }
        }
        self.lines.push(Line::Text {
            depth: self.depth,
            code,
            comment,
        });
    }
}

fn is_accessor_declaration(declaration: &str) -> bool {
    let words: Vec<&str> = declaration.split_whitespace().collect();
    match words.split_last() {
        Some((keyword, modifiers)) => {
            ACCESSOR_KEYWORDS.contains(keyword)
                && modifiers.iter().all(|m| ACCESSOR_MODIFIERS.contains(m))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURES: &[&str] = &[
        "public class Person {\n    private readonly string _name;\n\n    public string Name {\n        get => _name;\n    }\n\n    public Person(string name) { _name = name; }\n}\n",
        "public class A\n{\npublic int X\n{ get;   set; }\n\n\n\npublic A() {}\n}",
        "class B { void M() { if (x) { y(); } else { z(); } } }",
        "  class C {\n      string s = \"{ not a brace }\";\n  char c = '}';\n}\n",
        "class D {\n    // a comment {\n    /* block\n       comment */\n    int x; }",
        "class E { void M() { for (int i = 0; i < 3; i++) { Run(i); } } }",
        "class F { void M() { Call(() => { a(); b(); }); } }",
        "enum Color {\nRed,\nGreen = 2,\nBlue\n}",
        "void M() // c\n{\nif (ready) // guard\n{\nStart();\n}\n}",
        "int x; // a\n\n// b\nint y; /* c */ // d",
        "",
        "\n\n\n",
    ];

    #[test]
    fn test_format_is_idempotent() {
        for fixture in FIXTURES {
            let once = format(fixture);
            assert_eq!(format(&once), once, "not idempotent for {fixture:?}");
        }
    }

    #[test]
    fn test_reindents_nested_scopes() {
        let formatted = format("class A {\nvoid M() {\nreturn;\n}\n}");
        assert_eq!(
            formatted,
            "class A {\n    void M() {\n        return;\n    }\n}\n"
        );
    }

    #[test]
    fn test_allman_brace_joins_declaration_line() {
        let formatted = format("public class A\n{\n    int x;\n}");
        assert_eq!(formatted, "public class A {\n    int x;\n}\n");
    }

    #[test]
    fn test_block_on_one_line_is_expanded() {
        let formatted = format("public A(string name) { _name = name; }");
        assert_eq!(formatted, "public A(string name) {\n    _name = name;\n}\n");
    }

    #[test]
    fn test_accessor_group_stays_inline() {
        let formatted = format("class A {\npublic int X\n{ get;   private  set; }\n}");
        assert_eq!(
            formatted,
            "class A {\n    public int X { get; private set; }\n}\n"
        );
    }

    #[test]
    fn test_empty_group_stays_inline() {
        assert_eq!(format("class A {\n\n}"), "class A { }\n");
        assert_eq!(format("public A() {}"), "public A() { }\n");
    }

    #[test]
    fn test_blank_lines_collapse_and_trim() {
        let formatted = format("class A {\n\n\nint x;\n\n\n\nint y;\n\n}\n\n");
        assert_eq!(formatted, "class A {\n    int x;\n\n    int y;\n}\n");
    }

    #[test]
    fn test_literals_are_opaque() {
        let formatted = format("class A { string s = \"a { b ; c }\"; char c = '{'; }");
        assert_eq!(
            formatted,
            "class A {\n    string s = \"a { b ; c }\";\n    char c = '{';\n}\n"
        );
    }

    #[test]
    fn test_verbatim_string_is_opaque() {
        let formatted = format("class A { string s = @\"x \"\"{\"\" y\"; }");
        assert_eq!(formatted, "class A {\n    string s = @\"x \"\"{\"\" y\";\n}\n");
    }

    #[test]
    fn test_semicolons_inside_parentheses_do_not_split() {
        let formatted = format("for (int i = 0; i < 3; i++) { Run(i); }");
        assert_eq!(formatted, "for (int i = 0; i < 3; i++) {\n    Run(i);\n}\n");
    }

    #[test]
    fn test_lambda_body_inside_call_is_split() {
        let formatted = format("Call(() => { a(); b(); });");
        assert_eq!(formatted, "Call(() => {\n    a();\n    b();\n});\n");
    }

    #[test]
    fn test_else_stays_on_closing_line() {
        let formatted = format("if (x) { a(); } else { b(); }");
        assert_eq!(formatted, "if (x) {\n    a();\n} else {\n    b();\n}\n");
    }

    #[test]
    fn test_trailing_comment_stays_on_line() {
        assert_eq!(
            format("class A { // note\nint x; }"),
            "class A { // note\n    int x;\n}\n"
        );
        assert_eq!(
            format("int x;   // trailing\nint y;"),
            "int x; // trailing\nint y;\n"
        );
        assert_eq!(format("if (a) { b(); } // done"), "if (a) {\n    b();\n} // done\n");
    }

    #[test]
    fn test_comment_line_ends_line() {
        assert_eq!(
            format("class A {\n// note\nint x; }"),
            "class A {\n    // note\n    int x;\n}\n"
        );
    }

    #[test]
    fn test_allman_brace_goes_before_trailing_comment() {
        let formatted = format("void M() // c\n{\nx();\n}");
        assert_eq!(formatted, "void M() { // c\n    x();\n}\n");
        assert_eq!(format(&formatted), formatted);
    }

    #[test]
    fn test_allman_inline_group_keeps_trailing_comment() {
        let formatted = format("public int X // id\n{ get; }");
        assert_eq!(formatted, "public int X { get; } // id\n");
        assert_eq!(format(&formatted), formatted);
    }

    #[test]
    fn test_brace_after_comment_line_is_not_attached() {
        assert_eq!(format("// c\n{\nx();\n}"), "// c\n{\n    x();\n}\n");
        assert_eq!(format("/* c */\n{ }"), "/* c */\n{ }\n");
    }

    #[test]
    fn test_custom_indent() {
        let formatted = Formatter::new(Indent::Tab).format("class A { int x; }");
        assert_eq!(formatted, "class A {\n\tint x;\n}\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format(""), "");
        assert_eq!(format("  \n\n "), "");
    }

    #[test]
    fn test_accessor_declaration_detection() {
        assert!(is_accessor_declaration("get"));
        assert!(is_accessor_declaration("protected internal set"));
        assert!(is_accessor_declaration("init"));
        assert!(!is_accessor_declaration("return 1"));
        assert!(!is_accessor_declaration(""));
    }
}
