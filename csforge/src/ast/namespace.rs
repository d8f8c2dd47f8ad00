//! Namespaces grouping declarations.

use csforge_codegen::{CodeFragment, Renderable};

use super::{Build, Class, ClassBuilder, Enum, EnumBuilder, Interface, InterfaceBuilder, require};
use crate::{Entity, Result, Setting};

/// A type declaration that can live in a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Class(Class),
    Interface(Interface),
    Enum(Enum),
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Class(class) => class.to_fragments(),
            Self::Interface(interface) => interface.to_fragments(),
            Self::Enum(enumeration) => enumeration.to_fragments(),
        }
    }
}

#[derive(Debug, Clone)]
enum DeclarationBuilder {
    Class(ClassBuilder),
    Interface(InterfaceBuilder),
    Enum(EnumBuilder),
}

impl DeclarationBuilder {
    fn build(&self) -> Result<Declaration> {
        Ok(match self {
            Self::Class(builder) => Declaration::Class(builder.build()?),
            Self::Interface(builder) => Declaration::Interface(builder.build()?),
            Self::Enum(builder) => Declaration::Enum(builder.build()?),
        })
    }
}

/// A built namespace with its `using` directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    name: String,
    usings: Vec<String>,
    declarations: Vec<Declaration>,
}

impl Namespace {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usings(&self) -> &[String] {
        &self.usings
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

impl Renderable for Namespace {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .usings
            .iter()
            .map(|using| CodeFragment::line(format!("using {using};")))
            .collect();
        if !fragments.is_empty() {
            fragments.push(CodeFragment::Blank);
        }

        let header = format!("namespace {}", self.name);
        let body = CodeFragment::separated(self.declarations.iter().map(|d| d.to_fragments()));
        if body.is_empty() {
            fragments.push(CodeFragment::line(format!("{header} {{ }}")));
        } else {
            fragments.push(CodeFragment::braced(header, body));
        }
        fragments
    }
}

/// Builder for [`Namespace`]s. Declarations keep the order they were added in.
#[derive(Debug, Clone)]
pub struct NamespaceBuilder {
    name: Option<String>,
    usings: Vec<String>,
    declarations: Vec<DeclarationBuilder>,
}

impl NamespaceBuilder {
    pub(crate) fn new() -> Self {
        Self {
            name: None,
            usings: Vec::new(),
            declarations: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a `using <namespace>;` directive.
    pub fn with_using(mut self, namespace: impl Into<String>) -> Self {
        self.usings.push(namespace.into());
        self
    }

    pub fn with_usings(mut self, namespaces: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.usings.extend(namespaces.into_iter().map(Into::into));
        self
    }

    pub fn with_class(mut self, class: ClassBuilder) -> Self {
        self.declarations.push(DeclarationBuilder::Class(class));
        self
    }

    pub fn with_interface(mut self, interface: InterfaceBuilder) -> Self {
        self.declarations
            .push(DeclarationBuilder::Interface(interface));
        self
    }

    pub fn with_enum(mut self, enumeration: EnumBuilder) -> Self {
        self.declarations.push(DeclarationBuilder::Enum(enumeration));
        self
    }
}

impl Build for NamespaceBuilder {
    type Output = Namespace;

    #[tracing::instrument(skip_all, fields(namespace = self.name.as_deref().unwrap_or_default()))]
    fn build(&self) -> Result<Namespace> {
        let name = require(&self.name, Entity::Namespace, Setting::Name)?;
        let declarations = self
            .declarations
            .iter()
            .map(DeclarationBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        Ok(Namespace {
            name: name.to_string(),
            usings: self.usings.clone(),
            declarations,
        })
    }
}
