//! Access modifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visibility of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessModifier {
    #[default]
    Public,
    Private,
    Internal,
    Protected,
    #[serde(alias = "protected internal")]
    ProtectedInternal,
    #[serde(alias = "private protected")]
    PrivateProtected,
}

impl AccessModifier {
    /// The modifier keyword(s) as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::ProtectedInternal => "protected internal",
            Self::PrivateProtected => "private protected",
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(AccessModifier::Public.as_str(), "public");
        assert_eq!(AccessModifier::Internal.as_str(), "internal");
        assert_eq!(AccessModifier::ProtectedInternal.as_str(), "protected internal");
        assert_eq!(AccessModifier::PrivateProtected.to_string(), "private protected");
    }

    #[test]
    fn test_default_is_public() {
        assert_eq!(AccessModifier::default(), AccessModifier::Public);
    }
}
