//! Parent relationship lookups.
//!
//! A [`Relation`] expands its body into dot-qualified paths through a
//! lookup field, e.g. `Owner__r.Name`. Relations nest, producing paths
//! such as `Account__r.Owner__r.Name`.

use tracing::trace;

use super::fragment::Fragment;
use super::group::Group;
use crate::render::{Render, RenderContext};
use crate::schema::Table;

/// Suffix of custom object API names.
pub const CUSTOM_OBJECT_SUFFIX: &str = "__c";

/// Suffix of custom relationship names.
pub const CUSTOM_RELATIONSHIP_SUFFIX: &str = "__r";

/// Rewrites an object name into its relationship name.
///
/// A trailing `__c` becomes `__r`; any other name gets `__r` appended.
#[must_use]
pub fn relationship_name(name: &str) -> String {
    let stem = name.strip_suffix(CUSTOM_OBJECT_SUFFIX).unwrap_or(name);
    format!("{stem}{CUSTOM_RELATIONSHIP_SUFFIX}")
}

/// Fields reached through a parent lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    table: String,
    relationship_name: Option<String>,
    group: Group,
}

impl Relation {
    /// Creates a relation to the named object.
    #[must_use]
    pub fn new(table: impl Into<String>, body: impl Into<Fragment>) -> Self {
        Self {
            table: table.into(),
            relationship_name: None,
            group: body.into().into_group(),
        }
    }

    /// Creates a relation to a schema table.
    #[must_use]
    pub fn of<T: Table>(body: impl Into<Fragment>) -> Self {
        Self::new(T::NAME, body)
    }

    /// Overrides the relationship name used instead of the table name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.relationship_name = Some(name.into());
        self
    }

    /// Returns the relationship name after the suffix rewrite.
    #[must_use]
    pub fn resolved_name(&self) -> String {
        relationship_name(self.relationship_name.as_deref().unwrap_or(&self.table))
    }

    /// Expands the body into dot-qualified paths.
    #[must_use]
    pub fn build_children(&self, ctx: &RenderContext) -> Vec<String> {
        let name = self.resolved_name();
        let prefix = |path: &str| format!("{name}.{path}");
        let paths: Vec<String> = self
            .group
            .members()
            .into_iter()
            .flat_map(|member| match member {
                Fragment::Relation(nested) => nested
                    .build_children(ctx)
                    .iter()
                    .map(|path| prefix(path.as_str()))
                    .collect::<Vec<_>>(),
                Fragment::FieldGroup(fields) => {
                    fields.fields().iter().map(|field| prefix(field.name())).collect()
                }
                other => vec![prefix(other.render(ctx).as_str())],
            })
            .collect();
        trace!(relationship = %name, paths = paths.len(), "expanded relationship");
        paths
    }
}

impl Render for Relation {
    fn render(&self, ctx: &RenderContext) -> String {
        self.build_children(ctx).join(",")
    }
}
