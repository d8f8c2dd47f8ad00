//! Fluent builders that render C# declarations to source text.
//!
//! Builders are created through the factory functions of this crate,
//! configured with `with_*` calls, and turned into immutable entities by
//! [`Build::build`]. Entities render through [`Renderable`], either raw or
//! passed through the formatter.
//!
//! ```
//! use csforge::{AccessModifier, Build};
//!
//! let code = csforge::class_named(AccessModifier::Public, "Person")
//!     .with_field(
//!         csforge::field_named(AccessModifier::Private, "string", "_name").with_readonly(true),
//!     )
//!     .with_property(
//!         csforge::property_named(AccessModifier::Public, "string", "Name")
//!             .with_getter("_name")
//!             .without_setter(),
//!     )
//!     .with_constructor(
//!         csforge::constructor_with(AccessModifier::Public)
//!             .with_parameter("string", "name")
//!             .with_body("{ _name = name; }"),
//!     )
//!     .to_source_code(true)?;
//!
//! assert_eq!(
//!     code,
//!     "public class Person {
//!     private readonly string _name;
//!
//!     public string Name {
//!         get => _name;
//!     }
//!
//!     public Person(string name) {
//!         _name = name;
//!     }
//! }
//! "
//! );
//! # Ok::<(), csforge::Error>(())
//! ```

mod access;
mod ast;
mod error;

pub use access::AccessModifier;
pub use ast::{
    Accessor, Build, Class, ClassBuilder, Constructor, ConstructorBuilder, Declaration, Enum,
    EnumBuilder, EnumMember, Field, FieldBuilder, Interface, InterfaceBuilder, Namespace,
    NamespaceBuilder, Parameter, Property, PropertyBuilder,
};
pub use csforge_codegen::{Formatter, Indent, Renderable, format};
pub use error::{Entity, Error, Result, Setting};

/// Start a class declaration.
pub fn class() -> ClassBuilder {
    ClassBuilder::new()
}

/// Start a class declaration with its access modifier and name.
pub fn class_named(access: AccessModifier, name: impl Into<String>) -> ClassBuilder {
    ClassBuilder::new()
        .with_access_modifier(access)
        .with_name(name)
}

/// Start a field declaration (private by default).
pub fn field() -> FieldBuilder {
    FieldBuilder::new()
}

/// Start a field declaration with its access modifier, type and name.
pub fn field_named(
    access: AccessModifier,
    ty: impl Into<String>,
    name: impl Into<String>,
) -> FieldBuilder {
    FieldBuilder::new()
        .with_access_modifier(access)
        .with_type(ty)
        .with_name(name)
}

/// Start a property declaration.
pub fn property() -> PropertyBuilder {
    PropertyBuilder::new()
}

/// Start a property declaration with its access modifier, type and name.
pub fn property_named(
    access: AccessModifier,
    ty: impl Into<String>,
    name: impl Into<String>,
) -> PropertyBuilder {
    PropertyBuilder::new()
        .with_access_modifier(access)
        .with_type(ty)
        .with_name(name)
}

/// Start a constructor. It is named after the class it is added to.
pub fn constructor() -> ConstructorBuilder {
    ConstructorBuilder::new()
}

/// Start a constructor with the given access modifier.
pub fn constructor_with(access: AccessModifier) -> ConstructorBuilder {
    ConstructorBuilder::new().with_access_modifier(access)
}

/// Start an enum declaration.
pub fn enumeration() -> EnumBuilder {
    EnumBuilder::new()
}

/// Start an enum declaration with its access modifier and name.
pub fn enum_named(access: AccessModifier, name: impl Into<String>) -> EnumBuilder {
    EnumBuilder::new().with_access_modifier(access).with_name(name)
}

/// Start an interface declaration.
pub fn interface() -> InterfaceBuilder {
    InterfaceBuilder::new()
}

/// Start an interface declaration with its access modifier and name.
pub fn interface_named(access: AccessModifier, name: impl Into<String>) -> InterfaceBuilder {
    InterfaceBuilder::new()
        .with_access_modifier(access)
        .with_name(name)
}

/// Start a namespace.
pub fn namespace(name: impl Into<String>) -> NamespaceBuilder {
    NamespaceBuilder::new().with_name(name)
}
