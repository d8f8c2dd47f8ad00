//! Property-based tests for the formatter.
//!
//! Inputs are assembled from declaration lines, Allman and K&R blocks, line and
//! block comments, literals, blank lines and stray indentation.

use csforge_codegen::{Formatter, Indent, format};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Item {
    Statement {
        text: String,
        comment: Option<String>,
    },
    LineComment(String),
    BlockComment(String),
    Block {
        header: String,
        allman: bool,
        comment: Option<String>,
        body: Vec<Entry>,
    },
}

/// An item with the whitespace written before it and the separator after it.
type Entry = (String, Item, &'static str);

impl Item {
    fn ends_with_line_comment(&self) -> bool {
        matches!(
            self,
            Item::LineComment(_) | Item::Statement { comment: Some(_), .. }
        )
    }
}

fn render(entries: &[Entry], out: &mut String) {
    for (indent, item, separator) in entries {
        out.push_str(indent);
        render_item(item, out);
        if item.ends_with_line_comment() && *separator == " " {
            out.push('\n');
        } else {
            out.push_str(separator);
        }
    }
}

fn render_item(item: &Item, out: &mut String) {
    match item {
        Item::Statement { text, comment } => {
            out.push_str(text);
            if let Some(comment) = comment {
                out.push_str(" // ");
                out.push_str(comment);
            }
        }
        Item::LineComment(text) => {
            out.push_str("// ");
            out.push_str(text);
        }
        Item::BlockComment(text) => {
            out.push_str("/* ");
            out.push_str(text);
            out.push_str(" */");
        }
        Item::Block {
            header,
            allman,
            comment,
            body,
        } => {
            out.push_str(header);
            if !allman {
                out.push_str(" {");
            }
            if let Some(comment) = comment {
                out.push_str(" // ");
                out.push_str(comment);
            }
            if *allman {
                out.push_str("\n{");
            }
            out.push('\n');
            render(body, out);
            out.push_str("\n}");
        }
    }
}

fn ident() -> impl Strategy<Value = String> {
    "v[a-z0-9]{0,5}"
}

fn literal() -> impl Strategy<Value = String> {
    prop_oneof![
        "\"[a-z {};/]{0,8}\"",
        "'[a-z{};]'",
        "@\"[a-z {};]{0,8}\"",
        "[0-9]{1,3}",
    ]
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        (ident(), literal()).prop_map(|(name, value)| format!("{name} = {value};")),
        (ident(), literal()).prop_map(|(call, arg)| format!("{call}({arg});")),
        (ident(), ident(), literal()).prop_map(|(call, a, b)| format!("{call}({a}, {b});")),
    ]
}

fn comment_text() -> impl Strategy<Value = String> {
    "[a-z {};]{0,10}"
}

fn header() -> impl Strategy<Value = String> {
    prop_oneof![
        ident().prop_map(|name| format!("void {name}()")),
        ident().prop_map(|name| format!("if ({name})")),
        ident().prop_map(|name| format!("class {name}")),
        (ident(), ident()).prop_map(|(ty, name)| format!("public {ty} {name}")),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\n\n"), Just("\n\n\n"), Just(" ")]
}

fn indentation() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

fn item() -> impl Strategy<Value = Item> {
    let leaf = prop_oneof![
        (statement(), proptest::option::of(comment_text()))
            .prop_map(|(text, comment)| Item::Statement { text, comment }),
        comment_text().prop_map(Item::LineComment),
        "[a-z {};/\n]{0,12}".prop_map(Item::BlockComment),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        (
            header(),
            any::<bool>(),
            proptest::option::of(comment_text()),
            prop::collection::vec((indentation(), inner, separator()), 0..4),
        )
            .prop_map(|(header, allman, comment, body)| Item::Block {
                header,
                allman,
                comment,
                body,
            })
    })
}

fn source() -> impl Strategy<Value = String> {
    prop::collection::vec((indentation(), item(), separator()), 0..6).prop_map(|entries| {
        let mut out = String::new();
        render(&entries, &mut out);
        out
    })
}

proptest! {
    #[test]
    fn format_is_idempotent(source in source()) {
        let once = format(&source);
        prop_assert_eq!(format(&once), once);
    }

    #[test]
    fn indentation_unit_does_not_change_layout(source in source()) {
        let spaces = format(&source);
        let tabs = Formatter::new(Indent::Tab).format(&source);
        prop_assert_eq!(format(&tabs), spaces);
    }
}
