//! Declarative TOML descriptions of C# declarations.
//!
//! A schema lists classes, interfaces and enums by name and, optionally, the
//! namespace that wraps them. [`Schema::generate`] turns it into source text
//! through the `csforge` builders.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod definition;
mod error;

use std::{path::Path, str::FromStr};

use csforge::Build;
use indexmap::IndexMap;
use serde::Deserialize;

pub use definition::{
    ClassDef, ConstructorDef, EnumDef, EnumMemberDef, FieldDef, InterfaceDef, MemberValue,
    ParameterDef, PropertyDef,
};
pub use error::{Error, Result};

/// Root of a declaration schema file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// Namespace wrapping every declaration, if any
    pub namespace: Option<String>,

    /// `using` directives, only emitted together with a namespace
    #[serde(default)]
    pub usings: Vec<String>,

    #[serde(default)]
    pub classes: IndexMap<String, ClassDef>,

    #[serde(default)]
    pub interfaces: IndexMap<String, InterfaceDef>,

    #[serde(default)]
    pub enums: IndexMap<String, EnumDef>,
}

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "schema.toml")
    }
}

impl Schema {
    /// Parse a schema file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a schema from a string with a custom filename for error reporting
    #[tracing::instrument(skip(content), fields(content_len = content.len()))]
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let schema: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        tracing::debug!(
            classes = schema.classes.len(),
            interfaces = schema.interfaces.len(),
            enums = schema.enums.len(),
            "parsed schema"
        );
        Ok(schema)
    }

    /// Render every declaration: classes, then interfaces, then enums.
    ///
    /// Without a namespace the declarations are separated by one blank line.
    /// Any declaration that fails to build aborts generation.
    pub fn generate(&self, formatted: bool) -> Result<String> {
        if let Some(name) = &self.namespace {
            let mut namespace =
                csforge::namespace(name.clone()).with_usings(self.usings.iter().cloned());
            for (name, class) in &self.classes {
                namespace = namespace.with_class(class.to_builder(name));
            }
            for (name, interface) in &self.interfaces {
                namespace = namespace.with_interface(interface.to_builder(name));
            }
            for (name, enumeration) in &self.enums {
                namespace = namespace.with_enum(enumeration.to_builder(name));
            }
            return Ok(namespace.to_source_code(formatted)?);
        }

        let mut sections = Vec::new();
        for (name, class) in &self.classes {
            sections.push(class.to_builder(name).to_source_code(formatted)?);
        }
        for (name, interface) in &self.interfaces {
            sections.push(interface.to_builder(name).to_source_code(formatted)?);
        }
        for (name, enumeration) in &self.enums {
            sections.push(enumeration.to_builder(name).to_source_code(formatted)?);
        }
        Ok(sections.join("\n"))
    }
}
