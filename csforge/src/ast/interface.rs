//! Interface declarations.

use csforge_codegen::{CodeFragment, Renderable};

use super::{Build, Property, PropertyBuilder, named, require, summary_fragments};
use crate::{AccessModifier, Entity, Result, Setting};

/// A built interface with property declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    access: AccessModifier,
    name: String,
    extended_interfaces: Vec<String>,
    properties: Vec<Property>,
    summary: Option<String>,
}

impl Interface {
    pub fn access_modifier(&self) -> AccessModifier {
        self.access
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extended_interfaces(&self) -> &[String] {
        &self.extended_interfaces
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut header = format!("{} interface {}", self.access, self.name);
        if !self.extended_interfaces.is_empty() {
            header.push_str(" : ");
            header.push_str(&self.extended_interfaces.join(", "));
        }

        let members =
            CodeFragment::separated(self.properties.iter().map(Property::interface_fragments));
        let mut fragments = summary_fragments(self.summary.as_deref());
        if members.is_empty() {
            fragments.push(CodeFragment::line(format!("{header} {{ }}")));
        } else {
            fragments.push(CodeFragment::braced(header, members));
        }
        fragments
    }
}

/// Builder for [`Interface`] declarations.
///
/// Properties added here render without an access modifier and without
/// bodies: a configured getter or setter only declares that accessor.
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    access: AccessModifier,
    name: Option<String>,
    extended_interfaces: Vec<String>,
    properties: Vec<PropertyBuilder>,
    summary: Option<String>,
}

impl InterfaceBuilder {
    pub(crate) fn new() -> Self {
        Self {
            access: AccessModifier::Public,
            name: None,
            extended_interfaces: Vec::new(),
            properties: Vec::new(),
            summary: None,
        }
    }

    pub fn with_access_modifier(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_extended_interface(mut self, name: impl Into<String>) -> Self {
        self.extended_interfaces.push(name.into());
        self
    }

    pub fn with_extended_interfaces(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.extended_interfaces
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_property(mut self, property: PropertyBuilder) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_properties(
        mut self,
        properties: impl IntoIterator<Item = PropertyBuilder>,
    ) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

impl Build for InterfaceBuilder {
    type Output = Interface;

    fn build(&self) -> Result<Interface> {
        let name = require(&self.name, Entity::Interface, Setting::Name)?;
        let properties = self
            .properties
            .iter()
            .map(Build::build)
            .collect::<Result<Vec<_>>>()?;

        Ok(Interface {
            access: self.access,
            name: name.to_string(),
            extended_interfaces: named(&self.extended_interfaces),
            properties,
            summary: self.summary.clone(),
        })
    }
}
