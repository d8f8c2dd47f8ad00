//! Field declarations.

use csforge_codegen::{CodeFragment, Renderable};

use super::{Build, require, summary_fragments};
use crate::{AccessModifier, Entity, Result, Setting};

/// A built field: `private readonly string _name;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    access: AccessModifier,
    ty: String,
    name: String,
    readonly: bool,
    summary: Option<String>,
}

impl Field {
    pub fn access_modifier(&self) -> AccessModifier {
        self.access
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let readonly = if self.readonly { "readonly " } else { "" };
        let mut fragments = summary_fragments(self.summary.as_deref());
        fragments.push(CodeFragment::line(format!(
            "{} {}{} {};",
            self.access, readonly, self.ty, self.name
        )));
        fragments
    }
}

/// Builder for [`Field`]s. Fields are private unless configured otherwise.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    access: AccessModifier,
    ty: Option<String>,
    name: Option<String>,
    readonly: bool,
    summary: Option<String>,
}

impl FieldBuilder {
    pub(crate) fn new() -> Self {
        Self {
            access: AccessModifier::Private,
            ty: None,
            name: None,
            readonly: false,
            summary: None,
        }
    }

    pub fn with_access_modifier(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark the field `readonly` (or not).
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Set the `<summary>` documentation comment.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

impl Build for FieldBuilder {
    type Output = Field;

    /// Fails when the name, then the type, is missing.
    fn build(&self) -> Result<Field> {
        let name = require(&self.name, Entity::Field, Setting::Name)?;
        let ty = require(&self.ty, Entity::Field, Setting::Type)?;
        Ok(Field {
            access: self.access,
            ty: ty.to_string(),
            name: name.to_string(),
            readonly: self.readonly,
            summary: self.summary.clone(),
        })
    }
}
