//! C# declaration entities and the builders that produce them.
//!
//! Every entity is immutable once built and implements [`Renderable`];
//! every builder implements [`Build`].

mod class;
mod constructor;
mod enumeration;
mod field;
mod interface;
mod namespace;
mod property;

pub use class::{Class, ClassBuilder};
pub use constructor::{Constructor, ConstructorBuilder, Parameter};
pub use enumeration::{Enum, EnumBuilder, EnumMember};
pub use field::{Field, FieldBuilder};
pub use interface::{Interface, InterfaceBuilder};
pub use namespace::{Declaration, Namespace, NamespaceBuilder};
pub use property::{Accessor, Property, PropertyBuilder};

use csforge_codegen::{CodeFragment, Renderable};

use crate::{Entity, Error, Result, Setting};

/// A mutable accumulator that validates and freezes into an entity.
pub trait Build {
    /// The entity produced by [`Build::build`].
    type Output: Renderable;

    /// Validate the required settings and return a newly built entity.
    ///
    /// The returned entity owns copies of everything it needs, so further
    /// changes to the builder never affect it.
    fn build(&self) -> Result<Self::Output>;

    /// Build, then render the entity.
    fn to_source_code(&self, formatted: bool) -> Result<String> {
        Ok(self.build()?.to_source_code(formatted))
    }
}

/// Return the configured value, failing when it is absent or empty.
pub(crate) fn require<'a>(
    value: &'a Option<String>,
    entity: Entity,
    setting: Setting,
) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::missing(entity, setting)),
    }
}

/// Names of an inheritance list, without blank entries.
pub(crate) fn named(names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter(|name| !name.trim().is_empty())
        .cloned()
        .collect()
}

/// XML documentation lines for an optional summary.
pub(crate) fn summary_fragments(summary: Option<&str>) -> Vec<CodeFragment> {
    let Some(text) = summary else {
        return Vec::new();
    };
    let mut fragments = vec![CodeFragment::line("/// <summary>")];
    fragments.extend(
        text.lines()
            .map(|line| CodeFragment::line(format!("/// {}", line.trim()).trim_end())),
    );
    fragments.push(CodeFragment::line("/// </summary>"));
    fragments
}

macro_rules! display_as_source {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.to_source_code(true))
                }
            }
        )+
    };
}

display_as_source!(
    Class,
    Constructor,
    Declaration,
    Enum,
    Field,
    Interface,
    Namespace,
    Property,
);
