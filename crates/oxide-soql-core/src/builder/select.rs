//! `SELECT` statements, top-level or nested as child sub-queries.

use tracing::trace;

use super::fragment::Fragment;
use super::group::Group;
use crate::render::{Render, RenderContext};
use crate::schema::Table;

/// A `SELECT ... FROM ...` statement.
///
/// Fields, field groups, functions and relations in the body form the
/// select list. Everything else (typically nested selections over child
/// relationships) is wrapped in one parenthesized sub-query appended after
/// the fields.
///
/// ```rust
/// use oxide_soql_core::builder::Select;
/// use oxide_soql_core::{group, Render, RenderContext};
///
/// let query = Select::new(
///     "Account",
///     group!["Id", "Name", Select::new("Contacts", "LastName")],
/// );
/// assert_eq!(
///     query.render(&RenderContext::space()),
///     "SELECT Id,Name,(SELECT LastName FROM Contacts) FROM Account"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    table: String,
    relationship_name: Option<String>,
    group: Group,
}

impl Select {
    /// Creates a selection from the named object.
    #[must_use]
    pub fn new(table: impl Into<String>, body: impl Into<Fragment>) -> Self {
        Self {
            table: table.into(),
            relationship_name: None,
            group: body.into().into_group(),
        }
    }

    /// Creates a selection from a schema table.
    #[must_use]
    pub fn of<T: Table>(body: impl Into<Fragment>) -> Self {
        Self::new(T::NAME, body)
    }

    /// Selects from a child relationship name instead of the table name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.relationship_name = Some(name.into());
        self
    }

    /// Returns the name rendered after `FROM`.
    #[must_use]
    pub fn source(&self) -> &str {
        self.relationship_name.as_deref().unwrap_or(&self.table)
    }

    /// Splits the flattened body into select-list fields and the rest.
    fn partition(&self) -> (Vec<&Fragment>, Vec<&Fragment>) {
        self.group
            .members()
            .into_iter()
            .partition(|member| member.is_field_like())
    }
}

impl Render for Select {
    fn render(&self, ctx: &RenderContext) -> String {
        let (fields, nested) = self.partition();
        trace!(
            source = self.source(),
            fields = fields.len(),
            nested = nested.len(),
            "rendering select"
        );
        let mut columns: Vec<String> = fields.iter().map(|field| field.render(ctx)).collect();
        if !nested.is_empty() {
            let inner: String = nested.iter().map(|fragment| fragment.render(ctx)).collect();
            columns.push(format!("({inner})"));
        }
        ctx.join(&["SELECT", columns.join(",").as_str(), "FROM", self.source()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{
        avg, empty, Condition, FieldGroup, Function, GroupBy, Limit, Relation, Where,
    };
    use crate::group;

    #[test]
    fn test_simple_select() {
        let select = Select::new("Account", group!["Id", "Name"]);
        assert_eq!(
            select.render(&RenderContext::space()),
            "SELECT Id,Name FROM Account"
        );
        assert_eq!(select.build(), "SELECT+Id,Name+FROM+Account");
    }

    #[test]
    fn test_field_group_and_relation_are_fields() {
        let select = Select::new(
            "Contact",
            group![
                FieldGroup::new(["Id", "Name"]),
                Relation::new("Account", "Name"),
                avg("Amount"),
            ],
        );
        assert_eq!(
            select.render(&RenderContext::space()),
            "SELECT Id,Name,Account__r.Name,AVG(Amount) FROM Contact"
        );
    }

    #[test]
    fn test_child_query_after_fields() {
        let select = Select::new(
            "Account",
            group![
                Select::new("Contact", "Id").named("Contacts"),
                "Name",
            ],
        );
        assert_eq!(
            select.render(&RenderContext::space()),
            "SELECT Name,(SELECT Id FROM Contacts) FROM Account"
        );
    }

    #[test]
    fn test_child_query_from_is_not_rewritten() {
        let select = Select::new("Test1__c", group!["Id", Select::new("Test2__c", "Id")]);
        assert_eq!(
            select.build(),
            "SELECT+Id,(SELECT+Id+FROM+Test2__c)+FROM+Test1__c"
        );
    }

    #[test]
    fn test_non_field_members_share_one_unit() {
        let select = Select::new(
            "Account",
            group![
                "Id",
                Select::new("Contacts", "Id"),
                Select::new("Cases", "Id"),
            ],
        );
        assert_eq!(
            select.render(&RenderContext::space()),
            "SELECT Id,(SELECT Id FROM ContactsSELECT Id FROM Cases) FROM Account"
        );
    }

    #[test]
    fn test_child_query_with_filter() {
        let select = Select::new(
            "Account",
            group![
                "Id",
                group![Select::new("Contacts", "Id"), Where::new(Condition::is_not_null("Email"))],
            ],
        );
        assert_eq!(
            select.render(&RenderContext::space()),
            "SELECT Id,(SELECT Id FROM Contacts WHERE Email != null) FROM Account"
        );
    }

    #[test]
    fn test_noops_in_body_are_dropped() {
        let select = Select::new("Account", group![empty(), "Id", empty()]);
        assert_eq!(select.build(), "SELECT+Id+FROM+Account");
    }

    #[test]
    fn test_query_group_appends_clauses() {
        let query = group![
            Select::new("Opportunity", group!["CampaignId", Function::avg("Amount")]),
            GroupBy::new("CampaignId"),
            Limit::new(5),
        ];
        assert_eq!(
            query.render(&RenderContext::space()),
            "SELECT CampaignId,AVG(Amount) FROM Opportunity GROUP BY CampaignId LIMIT 5"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let select = Select::new("Account", group!["Id", Relation::new("Owner", "Name")]);
        assert_eq!(select.build(), select.build());
        let ctx = RenderContext::space();
        assert_eq!(select.render(&ctx), select.render(&ctx));
    }
}
