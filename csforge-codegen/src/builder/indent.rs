//! Indentation unit shared by the code builder and the formatter.

use std::iter;

/// Whitespace written once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A run of spaces of the given width. `Spaces(0)` flattens the output.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 4-space indentation, the canonical C# layout.
    pub const CSHARP: Self = Self::Spaces(4);

    /// Append `levels` units of indentation to `out`.
    pub fn write_to(&self, out: &mut String, levels: usize) {
        match *self {
            Self::Spaces(width) => out.extend(iter::repeat_n(' ', levels * usize::from(width))),
            Self::Tab => out.extend(iter::repeat_n('\t', levels)),
        }
    }

    /// Indentation for `levels` nesting levels.
    pub fn repeat(&self, levels: usize) -> String {
        let mut out = String::new();
        self.write_to(&mut out, levels);
        out
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_space_width() {
        assert_eq!(Indent::Spaces(2).repeat(1), "  ");
        assert_eq!(Indent::Spaces(3).repeat(2), "      ");
        assert_eq!(Indent::Spaces(0).repeat(5), "");
        assert_eq!(Indent::CSHARP.repeat(0), "");
    }

    #[test]
    fn test_tabs() {
        assert_eq!(Indent::Tab.repeat(3), "\t\t\t");
    }

    #[test]
    fn test_write_appends() {
        let mut out = String::from("x");
        Indent::Spaces(2).write_to(&mut out, 2);
        assert_eq!(out, "x    ");
    }

    #[test]
    fn test_default_is_four_spaces() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }
}
