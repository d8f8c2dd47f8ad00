//! Declaration tables of a schema and their conversion into builders.

use csforge::{
    AccessModifier, ClassBuilder, ConstructorBuilder, EnumBuilder, FieldBuilder,
    InterfaceBuilder, PropertyBuilder,
};
use indexmap::IndexMap;
use serde::Deserialize;

/// `[classes.<Name>]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDef {
    pub access: Option<AccessModifier>,

    /// Base class, rendered before the implemented interfaces
    pub inherits: Option<String>,

    #[serde(default)]
    pub implements: Vec<String>,

    pub summary: Option<String>,

    #[serde(default)]
    pub fields: IndexMap<String, FieldDef>,

    #[serde(default)]
    pub properties: IndexMap<String, PropertyDef>,

    #[serde(default)]
    pub constructors: Vec<ConstructorDef>,
}

impl ClassDef {
    pub fn to_builder(&self, name: &str) -> ClassBuilder {
        let mut builder = csforge::class()
            .with_name(name)
            .with_implemented_interfaces(self.implements.iter().cloned());
        if let Some(access) = self.access {
            builder = builder.with_access_modifier(access);
        }
        if let Some(base) = &self.inherits {
            builder = builder.with_inherited_class(base.clone());
        }
        if let Some(summary) = &self.summary {
            builder = builder.with_summary(summary.clone());
        }

        builder
            .with_fields(self.fields.iter().map(|(name, f)| f.to_builder(name)))
            .with_properties(self.properties.iter().map(|(name, p)| p.to_builder(name)))
            .with_constructors(self.constructors.iter().map(ConstructorDef::to_builder))
    }
}

/// `[classes.<Class>.fields.<name>]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    #[serde(rename = "type")]
    pub ty: Option<String>,

    pub access: Option<AccessModifier>,

    #[serde(default)]
    pub readonly: bool,

    pub summary: Option<String>,
}

impl FieldDef {
    pub fn to_builder(&self, name: &str) -> FieldBuilder {
        let mut builder = csforge::field().with_name(name).with_readonly(self.readonly);
        if let Some(ty) = &self.ty {
            builder = builder.with_type(ty.clone());
        }
        if let Some(access) = self.access {
            builder = builder.with_access_modifier(access);
        }
        if let Some(summary) = &self.summary {
            builder = builder.with_summary(summary.clone());
        }
        builder
    }
}

/// `[classes.<Class>.properties.<Name>]` and `[interfaces.<Interface>.properties.<Name>]`
///
/// An empty `getter` or `setter` declares the accessor without a body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDef {
    #[serde(rename = "type")]
    pub ty: Option<String>,

    pub access: Option<AccessModifier>,

    pub getter: Option<String>,

    pub setter: Option<String>,

    pub summary: Option<String>,
}

impl PropertyDef {
    pub fn to_builder(&self, name: &str) -> PropertyBuilder {
        let mut builder = csforge::property().with_name(name);
        if let Some(ty) = &self.ty {
            builder = builder.with_type(ty.clone());
        }
        if let Some(access) = self.access {
            builder = builder.with_access_modifier(access);
        }
        if let Some(getter) = &self.getter {
            builder = builder.with_getter(getter.clone());
        }
        if let Some(setter) = &self.setter {
            builder = builder.with_setter(setter.clone());
        }
        if let Some(summary) = &self.summary {
            builder = builder.with_summary(summary.clone());
        }
        builder
    }
}

/// `[[classes.<Class>.constructors]]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorDef {
    pub access: Option<AccessModifier>,

    #[serde(default)]
    pub parameters: Vec<ParameterDef>,

    /// Arguments of a `base(...)` call
    pub base: Option<Vec<String>>,

    pub body: Option<String>,

    pub summary: Option<String>,
}

impl ConstructorDef {
    pub fn to_builder(&self) -> ConstructorBuilder {
        let mut builder = csforge::constructor();
        if let Some(access) = self.access {
            builder = builder.with_access_modifier(access);
        }
        for parameter in &self.parameters {
            builder = builder.with_parameter(parameter.ty.clone(), parameter.name.clone());
        }
        if let Some(args) = &self.base {
            builder = builder.with_base_call(args.iter().cloned());
        }
        if let Some(body) = &self.body {
            builder = builder.with_body(body.clone());
        }
        if let Some(summary) = &self.summary {
            builder = builder.with_summary(summary.clone());
        }
        builder
    }
}

/// `{ type = "string", name = "name" }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDef {
    #[serde(rename = "type", default)]
    pub ty: String,

    #[serde(default)]
    pub name: String,
}

/// `[enums.<Name>]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDef {
    pub access: Option<AccessModifier>,

    #[serde(default)]
    pub members: Vec<EnumMemberDef>,

    pub summary: Option<String>,
}

impl EnumDef {
    pub fn to_builder(&self, name: &str) -> EnumBuilder {
        let mut builder = csforge::enumeration().with_name(name);
        if let Some(access) = self.access {
            builder = builder.with_access_modifier(access);
        }
        if let Some(summary) = &self.summary {
            builder = builder.with_summary(summary.clone());
        }
        for member in &self.members {
            builder = match member {
                EnumMemberDef::Name(name) => builder.with_member(name.clone()),
                EnumMemberDef::Valued { name, value } => {
                    builder.with_member_value(name.clone(), value.to_string())
                }
            };
        }
        builder
    }
}

/// Enum members are either a bare name or `{ name = "...", value = ... }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EnumMemberDef {
    Name(String),
    Valued { name: String, value: MemberValue },
}

/// Explicit enum member value, written as a TOML integer or as source text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MemberValue {
    Integer(i64),
    Text(String),
}

impl std::fmt::Display for MemberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// `[interfaces.<Name>]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceDef {
    pub access: Option<AccessModifier>,

    #[serde(default)]
    pub extends: Vec<String>,

    pub summary: Option<String>,

    #[serde(default)]
    pub properties: IndexMap<String, PropertyDef>,
}

impl InterfaceDef {
    pub fn to_builder(&self, name: &str) -> InterfaceBuilder {
        let mut builder = csforge::interface()
            .with_name(name)
            .with_extended_interfaces(self.extends.iter().cloned());
        if let Some(access) = self.access {
            builder = builder.with_access_modifier(access);
        }
        if let Some(summary) = &self.summary {
            builder = builder.with_summary(summary.clone());
        }
        builder.with_properties(self.properties.iter().map(|(name, p)| p.to_builder(name)))
    }
}

#[cfg(test)]
mod tests {
    use csforge::{Build, Entity, Error, Setting};

    use super::*;

    #[test]
    fn test_enum_member_formats() {
        let def: EnumDef = toml::from_str(
            r#"
            members = [
                "Red",
                { name = "Green", value = 2 },
                { name = "Blue", value = "Green << 1" },
            ]
            "#,
        )
        .unwrap();

        assert!(matches!(&def.members[0], EnumMemberDef::Name(n) if n == "Red"));
        assert!(matches!(
            &def.members[1],
            EnumMemberDef::Valued { value: MemberValue::Integer(2), .. }
        ));
        assert_eq!(
            def.to_builder("Color").to_source_code(false).unwrap(),
            "public enum Color {\n    Red,\n    Green = 2,\n    Blue = Green << 1\n}\n"
        );
    }

    #[test]
    fn test_access_modifier_names() {
        let def: FieldDef = toml::from_str(
            r#"
            type = "int"
            access = "protected-internal"
            "#,
        )
        .unwrap();
        assert_eq!(def.access, Some(AccessModifier::ProtectedInternal));

        let def: FieldDef = toml::from_str(r#"access = "private protected""#).unwrap();
        assert_eq!(def.access, Some(AccessModifier::PrivateProtected));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = toml::from_str::<FieldDef>(r#"kind = "int""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_field_without_type_fails_to_build() {
        let def = FieldDef::default();
        let err = def.to_builder("_count").build().unwrap_err();
        assert_eq!(
            err,
            Error::MissingConfiguration {
                entity: Entity::Field,
                setting: Setting::Type,
            }
        );
    }

    #[test]
    fn test_property_accessors() {
        let def: PropertyDef = toml::from_str(
            r#"
            type = "int"
            getter = ""
            setter = ""
            "#,
        )
        .unwrap();
        assert_eq!(
            def.to_builder("Id").to_source_code(false).unwrap(),
            "public int Id { get; set; }\n"
        );
    }

    #[test]
    fn test_constructor_parameters_and_base() {
        let def: ClassDef = toml::from_str(
            r#"
            inherits = "Entity"

            [[constructors]]
            access = "protected"
            parameters = [{ type = "int", name = "id" }]
            base = ["id"]
            "#,
        )
        .unwrap();
        assert_eq!(
            def.to_builder("Order").to_source_code(false).unwrap(),
            "public class Order : Entity {\n    protected Order(int id) : base(id) { }\n}\n"
        );
    }

    #[test]
    fn test_constructor_parameter_without_type_fails() {
        let def: ClassDef = toml::from_str(
            r#"
            [[constructors]]
            parameters = [{ name = "id" }]
            "#,
        )
        .unwrap();
        let err = def.to_builder("Order").build().unwrap_err();
        assert_eq!(
            err,
            Error::MissingConfiguration {
                entity: Entity::Parameter,
                setting: Setting::Type,
            }
        );
    }
}
