use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for building declarations.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of declaration a builder produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Class,
    Field,
    Property,
    Constructor,
    Parameter,
    Enum,
    EnumMember,
    Interface,
    Namespace,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Field => "field",
            Self::Property => "property",
            Self::Constructor => "constructor",
            Self::Parameter => "parameter",
            Self::Enum => "enum",
            Self::EnumMember => "enum member",
            Self::Interface => "interface",
            Self::Namespace => "namespace",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A builder setting that must be provided before building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Name,
    Type,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Type => "type",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("providing the {setting} of the {entity} is required when building a {entity}")]
    #[diagnostic(
        code(csforge::missing_configuration),
        help("set the {setting} on the {entity} builder before building it")
    )]
    MissingConfiguration { entity: Entity, setting: Setting },
}

impl Error {
    /// Create a missing configuration error.
    pub fn missing(entity: Entity, setting: Setting) -> Self {
        tracing::debug!(%entity, %setting, "builder is missing a required setting");
        Self::MissingConfiguration { entity, setting }
    }
}
