//! Field references.

use std::borrow::Cow;

use tracing::debug;

use super::function::Function;
use super::relation::Relation;
use crate::render::{Render, RenderContext};

/// A plain field name such as `Name` or `Account.Name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    name: Cow<'static, str>,
}

impl Field {
    /// Creates a field from any string.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// Creates a field from a static name without allocating.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Render for Field {
    fn render(&self, _ctx: &RenderContext) -> String {
        self.name.to_string()
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Self::new(String::from(name))
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// The operand of a predicate, ordering or grouping.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRef {
    /// Plain field.
    Field(Field),
    /// Comma-joined field names.
    FieldGroup(FieldGroup),
    /// Relationship path such as `Account__r.Name`.
    Relation(Box<Relation>),
    /// Function call such as `CALENDAR_YEAR(CreatedDate)`.
    Function(Box<Function>),
}

impl Render for FieldRef {
    fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Field(field) => field.render(ctx),
            Self::FieldGroup(fields) => fields.render(ctx),
            Self::Relation(relation) => relation.render(ctx),
            Self::Function(function) => function.render(ctx),
        }
    }
}

impl From<FieldGroup> for FieldRef {
    fn from(fields: FieldGroup) -> Self {
        Self::FieldGroup(fields)
    }
}

impl From<Relation> for FieldRef {
    fn from(relation: Relation) -> Self {
        Self::Relation(Box::new(relation))
    }
}

impl From<Field> for FieldRef {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Function> for FieldRef {
    fn from(function: Function) -> Self {
        Self::Function(Box::new(function))
    }
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        Self::Field(Field::from(name))
    }
}

impl From<String> for FieldRef {
    fn from(name: String) -> Self {
        Self::Field(Field::from(name))
    }
}

/// An ordered set of fields, keyed by name.
///
/// Adding a field whose name is already present is a no-op, so the group
/// never renders the same column twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldGroup {
    fields: Vec<Field>,
}

impl FieldGroup {
    /// Creates a group from fields, dropping repeated names.
    #[must_use]
    pub fn new<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Self::default().adding(fields)
    }

    /// Returns a copy of the group with the given fields appended.
    ///
    /// Fields whose name is already present are skipped.
    #[must_use]
    pub fn adding<I, F>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        let mut result = self.clone();
        for field in fields {
            let field = field.into();
            if result.contains(field.name()) {
                debug!(field = field.name(), "skipping duplicate field");
            } else {
                result.fields.push(field);
            }
        }
        result
    }

    /// Returns a copy of the group without the given fields.
    #[must_use]
    pub fn removing<I, F>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        let removed: Vec<Field> = fields.into_iter().map(Into::into).collect();
        let before = self.fields.len();
        let kept: Vec<Field> = self
            .fields
            .iter()
            .filter(|field| !removed.iter().any(|r| r.name() == field.name()))
            .cloned()
            .collect();
        if kept.len() == before {
            debug!(count = removed.len(), "no fields matched for removal");
        }
        Self { fields: kept }
    }

    /// Returns true if a field with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name() == name)
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the group has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Render for FieldGroup {
    fn render(&self, _ctx: &RenderContext) -> String {
        self.fields
            .iter()
            .map(Field::name)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<F: Into<Field>> FromIterator<F> for FieldGroup {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::new(iter)
    }
}
