//! Constructor declarations.

use csforge_codegen::{CodeFragment, Renderable};

use super::summary_fragments;
use crate::{AccessModifier, Entity, Error, Result, Setting};

/// A constructor parameter, rendered `<type> <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    ty: String,
    name: String,
}

impl Parameter {
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A built constructor. Its name is always the name of the declaring class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    access: AccessModifier,
    class_name: String,
    parameters: Vec<Parameter>,
    base_call: Option<Vec<String>>,
    body: Option<String>,
    summary: Option<String>,
}

impl Constructor {
    pub fn access_modifier(&self) -> AccessModifier {
        self.access
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Arguments passed to `base(...)`, if the constructor chains to one.
    pub fn base_call(&self) -> Option<&[String]> {
        self.base_call.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    fn signature(&self) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect();
        let mut signature = format!("{} {}({})", self.access, self.class_name, params.join(", "));
        if let Some(args) = &self.base_call {
            signature.push_str(&format!(" : base({})", args.join(", ")));
        }
        signature
    }
}

/// Wrap a body in braces unless it already is a block.
fn body_block(body: Option<&str>) -> String {
    let body = body.map(str::trim).unwrap_or_default();
    if body.is_empty() {
        "{ }".to_string()
    } else if body.starts_with('{') {
        body.to_string()
    } else {
        format!("{{ {body} }}")
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = summary_fragments(self.summary.as_deref());
        fragments.push(CodeFragment::line(format!(
            "{} {}",
            self.signature(),
            body_block(self.body.as_deref())
        )));
        fragments
    }
}

/// Builder for constructors.
///
/// A constructor only becomes a [`Constructor`] when the class it is added
/// to is built, since its name is the class name.
#[derive(Debug, Clone)]
pub struct ConstructorBuilder {
    access: AccessModifier,
    parameters: Vec<(String, String)>,
    base_call: Option<Vec<String>>,
    body: Option<String>,
    summary: Option<String>,
}

impl ConstructorBuilder {
    pub(crate) fn new() -> Self {
        Self {
            access: AccessModifier::Public,
            parameters: Vec::new(),
            base_call: None,
            body: None,
            summary: None,
        }
    }

    pub fn with_access_modifier(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    /// Append a `<type> <name>` parameter.
    pub fn with_parameter(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameters.push((ty.into(), name.into()));
        self
    }

    /// Append several `(type, name)` parameters in order.
    pub fn with_parameters<T, N>(mut self, parameters: impl IntoIterator<Item = (T, N)>) -> Self
    where
        T: Into<String>,
        N: Into<String>,
    {
        self.parameters.extend(
            parameters
                .into_iter()
                .map(|(ty, name)| (ty.into(), name.into())),
        );
        self
    }

    /// Chain to the base class constructor with the given argument
    /// expressions. An empty list renders `: base()`.
    pub fn with_base_call(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.base_call = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Set the body: statements (`_x = x;`) or a whole block (`{ _x = x; }`).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Assemble the constructor for the class named `class_name`.
    ///
    /// Parameters are checked in order, type before name.
    pub(crate) fn build_for(&self, class_name: &str) -> Result<Constructor> {
        let mut parameters = Vec::with_capacity(self.parameters.len());
        for (ty, name) in &self.parameters {
            if ty.is_empty() {
                return Err(Error::missing(Entity::Parameter, Setting::Type));
            }
            if name.is_empty() {
                return Err(Error::missing(Entity::Parameter, Setting::Name));
            }
            parameters.push(Parameter {
                ty: ty.clone(),
                name: name.clone(),
            });
        }

        Ok(Constructor {
            access: self.access,
            class_name: class_name.to_string(),
            parameters,
            base_call: self.base_call.clone(),
            body: self.body.clone(),
            summary: self.summary.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_block() {
        assert_eq!(body_block(None), "{ }");
        assert_eq!(body_block(Some("  ")), "{ }");
        assert_eq!(body_block(Some("_x = x;")), "{ _x = x; }");
        assert_eq!(body_block(Some(" { _x = x; } ")), "{ _x = x; }");
    }

    #[test]
    fn test_parameters_in_declaration_order() {
        let ctor = ConstructorBuilder::new()
            .with_parameter("string", "name")
            .with_parameters([("int", "age"), ("bool", "active")])
            .build_for("Person")
            .unwrap();
        assert_eq!(
            ctor.render(0),
            "public Person(string name, int age, bool active) { }\n"
        );
    }

    #[test]
    fn test_base_call() {
        let ctor = ConstructorBuilder::new()
            .with_access_modifier(AccessModifier::Protected)
            .with_parameter("string", "name")
            .with_base_call(["name", "42"])
            .with_body("Init();")
            .build_for("Employee")
            .unwrap();
        assert_eq!(
            ctor.render(0),
            "protected Employee(string name) : base(name, 42) { Init(); }\n"
        );
        assert_eq!(ctor.base_call(), Some(&["name".to_string(), "42".to_string()][..]));
    }

    #[test]
    fn test_empty_base_call() {
        let ctor = ConstructorBuilder::new()
            .with_base_call(Vec::<String>::new())
            .build_for("Child")
            .unwrap();
        assert_eq!(ctor.render(0), "public Child() : base() { }\n");
    }

    #[test]
    fn test_formatted_body() {
        let ctor = ConstructorBuilder::new()
            .with_parameter("string", "name")
            .with_body("{ _name = name; }")
            .build_for("Person")
            .unwrap();
        assert_eq!(
            ctor.to_source_code(true),
            "public Person(string name) {\n    _name = name;\n}\n"
        );
    }

    #[test]
    fn test_empty_parameter_type_fails() {
        let result = ConstructorBuilder::new()
            .with_parameter("", "name")
            .build_for("Person");
        assert_eq!(result, Err(Error::missing(Entity::Parameter, Setting::Type)));
    }
}
