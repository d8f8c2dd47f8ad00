//! Enum declarations.

use csforge_codegen::{CodeFragment, Renderable};

use super::{Build, require, summary_fragments};
use crate::{AccessModifier, Entity, Error, Result, Setting};

/// An enum member with an optional explicit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    name: String,
    value: Option<String>,
}

impl EnumMember {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// A built enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    access: AccessModifier,
    name: String,
    members: Vec<EnumMember>,
    summary: Option<String>,
}

impl Enum {
    pub fn access_modifier(&self) -> AccessModifier {
        self.access
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!("{} enum {}", self.access, self.name);
        let mut fragments = summary_fragments(self.summary.as_deref());
        if self.members.is_empty() {
            fragments.push(CodeFragment::line(format!("{header} {{ }}")));
            return fragments;
        }

        let last = self.members.len() - 1;
        let body = self
            .members
            .iter()
            .enumerate()
            .map(|(i, member)| {
                let separator = if i == last { "" } else { "," };
                match &member.value {
                    Some(value) => {
                        CodeFragment::line(format!("{} = {value}{separator}", member.name))
                    }
                    None => CodeFragment::line(format!("{}{separator}", member.name)),
                }
            })
            .collect();
        fragments.push(CodeFragment::braced(header, body));
        fragments
    }
}

/// Builder for [`Enum`] declarations.
#[derive(Debug, Clone)]
pub struct EnumBuilder {
    access: AccessModifier,
    name: Option<String>,
    members: Vec<(String, Option<String>)>,
    summary: Option<String>,
}

impl EnumBuilder {
    pub(crate) fn new() -> Self {
        Self {
            access: AccessModifier::Public,
            name: None,
            members: Vec::new(),
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

    pub fn with_member(mut self, name: impl Into<String>) -> Self {
        self.members.push((name.into(), None));
        self
    }

    /// Add a member with an explicit value expression, e.g. `1 << 2`.
    pub fn with_member_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((name.into(), Some(value.into())));
        self
    }

    pub fn with_members(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.members
            .extend(names.into_iter().map(|name| (name.into(), None)));
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

impl Build for EnumBuilder {
    type Output = Enum;

    fn build(&self) -> Result<Enum> {
        let name = require(&self.name, Entity::Enum, Setting::Name)?;
        let mut members = Vec::with_capacity(self.members.len());
        for (member, value) in &self.members {
            if member.is_empty() {
                return Err(Error::missing(Entity::EnumMember, Setting::Name));
            }
            members.push(EnumMember {
                name: member.clone(),
                value: value.clone(),
            });
        }

        Ok(Enum {
            access: self.access,
            name: name.to_string(),
            members,
            summary: self.summary.clone(),
        })
    }
}
