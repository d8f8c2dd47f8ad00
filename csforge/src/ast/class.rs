//! Class declarations.

use csforge_codegen::{CodeFragment, Renderable};

use super::{
    Build, ConstructorBuilder, FieldBuilder, PropertyBuilder, named, require, summary_fragments,
};
use super::{Constructor, Field, Property};
use crate::{AccessModifier, Entity, Result, Setting};

/// A built class.
///
/// Members always render grouped: fields, then properties, then
/// constructors, each group in the order the members were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    access: AccessModifier,
    name: String,
    inherited_class: Option<String>,
    implemented_interfaces: Vec<String>,
    fields: Vec<Field>,
    properties: Vec<Property>,
    constructors: Vec<Constructor>,
    summary: Option<String>,
}

impl Class {
    pub fn access_modifier(&self) -> AccessModifier {
        self.access
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inherited_class(&self) -> Option<&str> {
        self.inherited_class.as_deref()
    }

    pub fn implemented_interfaces(&self) -> &[String] {
        &self.implemented_interfaces
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// `<access> class <Name>[ : <Base>, <IFoo>, ...]`
    fn header(&self) -> String {
        let mut header = format!("{} class {}", self.access, self.name);
        let bases: Vec<&str> = self
            .inherited_class
            .iter()
            .chain(&self.implemented_interfaces)
            .map(String::as_str)
            .collect();
        if !bases.is_empty() {
            header.push_str(" : ");
            header.push_str(&bases.join(", "));
        }
        header
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let members = CodeFragment::separated(
            self.fields
                .iter()
                .map(|f| f.to_fragments())
                .chain(self.properties.iter().map(|p| p.to_fragments()))
                .chain(self.constructors.iter().map(|c| c.to_fragments())),
        );

        let mut fragments = summary_fragments(self.summary.as_deref());
        if members.is_empty() {
            fragments.push(CodeFragment::line(format!("{} {{ }}", self.header())));
        } else {
            fragments.push(CodeFragment::braced(self.header(), members));
        }
        fragments
    }
}

/// Builder for [`Class`] declarations.
///
/// Member builders are kept as they are and only built, in order, when the
/// class itself is built.
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    access: AccessModifier,
    name: Option<String>,
    inherited_class: Option<String>,
    implemented_interfaces: Vec<String>,
    fields: Vec<FieldBuilder>,
    properties: Vec<PropertyBuilder>,
    constructors: Vec<ConstructorBuilder>,
    summary: Option<String>,
}

impl ClassBuilder {
    pub(crate) fn new() -> Self {
        Self {
            access: AccessModifier::Public,
            name: None,
            inherited_class: None,
            implemented_interfaces: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            constructors: Vec::new(),
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

    /// Set the base class. It is listed first in the inheritance clause.
    pub fn with_inherited_class(mut self, name: impl Into<String>) -> Self {
        self.inherited_class = Some(name.into());
        self
    }

    /// Add an implemented interface. Duplicates are kept as given.
    pub fn with_implemented_interface(mut self, name: impl Into<String>) -> Self {
        self.implemented_interfaces.push(name.into());
        self
    }

    pub fn with_implemented_interfaces(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.implemented_interfaces
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_field(mut self, field: FieldBuilder) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldBuilder>) -> Self {
        self.fields.extend(fields);
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

    pub fn with_constructor(mut self, constructor: ConstructorBuilder) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_constructors(
        mut self,
        constructors: impl IntoIterator<Item = ConstructorBuilder>,
    ) -> Self {
        self.constructors.extend(constructors);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

impl Build for ClassBuilder {
    type Output = Class;

    /// Fails when the name is missing, then on the first invalid field,
    /// property or constructor (in that order).
    #[tracing::instrument(skip_all, fields(class = self.name.as_deref().unwrap_or_default()))]
    fn build(&self) -> Result<Class> {
        let name = require(&self.name, Entity::Class, Setting::Name)?;
        let fields = self
            .fields
            .iter()
            .map(Build::build)
            .collect::<Result<Vec<_>>>()?;
        let properties = self
            .properties
            .iter()
            .map(Build::build)
            .collect::<Result<Vec<_>>>()?;
        let constructors = self
            .constructors
            .iter()
            .map(|c| c.build_for(name))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            fields = fields.len(),
            properties = properties.len(),
            constructors = constructors.len(),
            "built class"
        );

        Ok(Class {
            access: self.access,
            name: name.to_string(),
            inherited_class: self
                .inherited_class
                .clone()
                .filter(|base| !base.trim().is_empty()),
            implemented_interfaces: named(&self.implemented_interfaces),
            fields,
            properties,
            constructors,
            summary: self.summary.clone(),
        })
    }
}
