//! Property declarations and their accessors.

use csforge_codegen::{CodeFragment, Renderable};

use super::{Build, require, summary_fragments};
use crate::{AccessModifier, Entity, Result, Setting};

/// The body of a `get` or `set` accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// `get => <expression>;`
    Expression(String),
    /// `get { ... }`, the block text kept verbatim.
    Block(String),
    /// A bare `get;` declaration.
    Declared,
}

impl Accessor {
    /// Classify accessor text supplied by the caller.
    ///
    /// Surrounding whitespace is ignored. Text starting with `{` is a block,
    /// empty text declares the accessor without a body, and anything else is
    /// an expression (a trailing `;` is dropped, the renderer adds its own).
    pub fn classify(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            Self::Declared
        } else if text.starts_with('{') {
            Self::Block(text.to_string())
        } else {
            let expr = text.strip_suffix(';').unwrap_or(text).trim_end();
            Self::Expression(expr.to_string())
        }
    }

    fn render(&self, keyword: &str) -> String {
        match self {
            Self::Expression(expr) => format!("{keyword} => {expr};"),
            Self::Block(block) => format!("{keyword} {block}"),
            Self::Declared => format!("{keyword};"),
        }
    }
}

/// A built property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    access: AccessModifier,
    ty: String,
    name: String,
    getter: Option<Accessor>,
    setter: Option<Accessor>,
    summary: Option<String>,
}

impl Property {
    pub fn access_modifier(&self) -> AccessModifier {
        self.access
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn getter(&self) -> Option<&Accessor> {
        self.getter.as_ref()
    }

    pub fn setter(&self) -> Option<&Accessor> {
        self.setter.as_ref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Accessors to render as `(keyword, accessor)` pairs, getter first.
    ///
    /// A property configured with neither accessor is an auto-property with
    /// both declared.
    fn accessors(&self) -> Vec<(&'static str, &Accessor)> {
        const DECLARED: &Accessor = &Accessor::Declared;
        match (&self.getter, &self.setter) {
            (None, None) => vec![("get", DECLARED), ("set", DECLARED)],
            (getter, setter) => getter
                .as_ref()
                .map(|a| ("get", a))
                .into_iter()
                .chain(setter.as_ref().map(|a| ("set", a)))
                .collect(),
        }
    }

    fn declaration_fragments(&self, header: String) -> Vec<CodeFragment> {
        let accessors = self.accessors();
        let mut fragments = summary_fragments(self.summary.as_deref());
        if accessors.iter().all(|(_, a)| **a == Accessor::Declared) {
            let declared: Vec<String> = accessors.iter().map(|(kw, a)| a.render(kw)).collect();
            fragments.push(CodeFragment::line(format!(
                "{header} {{ {} }}",
                declared.join(" ")
            )));
        } else {
            let body = accessors
                .iter()
                .map(|(kw, a)| CodeFragment::line(a.render(kw)))
                .collect();
            fragments.push(CodeFragment::braced(header, body));
        }
        fragments
    }

    /// Render as an interface member: no access modifier, accessors declared
    /// by presence only.
    pub(crate) fn interface_fragments(&self) -> Vec<CodeFragment> {
        let declared: Vec<&str> = self
            .accessors()
            .iter()
            .map(|(kw, _)| if *kw == "get" { "get;" } else { "set;" })
            .collect();
        let mut fragments = summary_fragments(self.summary.as_deref());
        fragments.push(CodeFragment::line(format!(
            "{} {} {{ {} }}",
            self.ty,
            self.name,
            declared.join(" ")
        )));
        fragments
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.declaration_fragments(format!("{} {} {}", self.access, self.ty, self.name))
    }
}

/// Builder for [`Property`] declarations.
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    access: AccessModifier,
    ty: Option<String>,
    name: Option<String>,
    getter: Option<String>,
    setter: Option<String>,
    summary: Option<String>,
}

impl PropertyBuilder {
    pub(crate) fn new() -> Self {
        Self {
            access: AccessModifier::Public,
            ty: None,
            name: None,
            getter: None,
            setter: None,
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

    /// Set the getter logic: an expression (`_id`) or a block
    /// (`{ return _id; }`).
    ///
    /// ```
    /// use csforge::{AccessModifier, Build};
    ///
    /// let code = csforge::property_named(AccessModifier::Public, "int", "Identifier")
    ///     .with_getter("_id")
    ///     .to_source_code(true)
    ///     .unwrap();
    /// assert_eq!(code, "public int Identifier {\n    get => _id;\n}\n");
    /// ```
    pub fn with_getter(mut self, logic: impl Into<String>) -> Self {
        self.getter = Some(logic.into());
        self
    }

    pub fn without_getter(mut self) -> Self {
        self.getter = None;
        self
    }

    /// Set the setter logic. The logic can use the implicit `value`.
    pub fn with_setter(mut self, logic: impl Into<String>) -> Self {
        self.setter = Some(logic.into());
        self
    }

    pub fn without_setter(mut self) -> Self {
        self.setter = None;
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

impl Build for PropertyBuilder {
    type Output = Property;

    /// Fails when the name, then the type, is missing.
    fn build(&self) -> Result<Property> {
        let name = require(&self.name, Entity::Property, Setting::Name)?;
        let ty = require(&self.ty, Entity::Property, Setting::Type)?;
        Ok(Property {
            access: self.access,
            ty: ty.to_string(),
            name: name.to_string(),
            getter: self.getter.as_deref().map(Accessor::classify),
            setter: self.setter.as_deref().map(Accessor::classify),
            summary: self.summary.clone(),
        })
    }
}
