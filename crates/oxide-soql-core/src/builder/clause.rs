//! Top-level clause wrappers.
//!
//! Each clause renders with a leading separator so that a query group can
//! concatenate `SELECT`, `WHERE`, `ORDER BY` and friends without inserting
//! anything between them.

use super::field::FieldRef;
use super::fragment::Fragment;
use super::group::Group;
use crate::render::{Render, RenderContext};

/// `WHERE` clause over the fragments in its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Where {
    group: Group,
}

impl Where {
    /// Creates a WHERE clause.
    #[must_use]
    pub fn new(body: impl Into<Fragment>) -> Self {
        Self {
            group: body.into().into_group(),
        }
    }
}

impl Render for Where {
    fn render(&self, ctx: &RenderContext) -> String {
        ctx.join(&["", "WHERE", self.group.render(ctx).as_str()])
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl OrderDirection {
    const fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Placement of null values in a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    /// `NULLS FIRST`
    First,
    /// `NULLS LAST`
    Last,
}

impl NullsOrder {
    const fn keyword(self) -> &'static str {
        match self {
            Self::First => "FIRST",
            Self::Last => "LAST",
        }
    }
}

/// One sort key with its modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderEntry {
    field: FieldRef,
    direction: Option<OrderDirection>,
    nulls: Option<NullsOrder>,
}

impl OrderEntry {
    /// Creates an entry with no modifiers.
    #[must_use]
    pub fn new(field: impl Into<FieldRef>) -> Self {
        Self {
            field: field.into(),
            direction: None,
            nulls: None,
        }
    }

    /// Sorts ascending.
    #[must_use]
    pub const fn asc(mut self) -> Self {
        self.direction = Some(OrderDirection::Asc);
        self
    }

    /// Sorts descending.
    #[must_use]
    pub const fn desc(mut self) -> Self {
        self.direction = Some(OrderDirection::Desc);
        self
    }

    /// Places nulls first.
    #[must_use]
    pub const fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullsOrder::First);
        self
    }

    /// Places nulls last.
    #[must_use]
    pub const fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullsOrder::Last);
        self
    }
}

impl Render for OrderEntry {
    fn render(&self, ctx: &RenderContext) -> String {
        let mut tokens = vec![String::new(), "ORDER".into(), "BY".into(), self.field.render(ctx)];
        if let Some(direction) = self.direction {
            tokens.push(direction.keyword().into());
        }
        if let Some(nulls) = self.nulls {
            tokens.push("NULLS".into());
            tokens.push(nulls.keyword().into());
        }
        ctx.join(&tokens)
    }
}

/// `ORDER BY` clause with one or more entries, comma-joined.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    entries: Vec<OrderEntry>,
}

impl OrderBy {
    /// Orders by a single entry.
    #[must_use]
    pub fn new(entry: OrderEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    /// Orders by a field with no modifiers.
    #[must_use]
    pub fn field(field: impl Into<FieldRef>) -> Self {
        Self::new(OrderEntry::new(field))
    }

    /// Orders by a list of entries.
    #[must_use]
    pub const fn list(entries: Vec<OrderEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entries.
    #[must_use]
    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }
}

impl Render for OrderBy {
    fn render(&self, ctx: &RenderContext) -> String {
        self.entries
            .iter()
            .map(|entry| entry.render(ctx))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Grouping flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// `GROUP BY a,b`
    Plain,
    /// `GROUP BY ROLLUP(a,b)`
    Rollup,
    /// `GROUP BY CUBE(a,b)`
    Cube,
}

/// `GROUP BY` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    grouping: Grouping,
    fields: Vec<FieldRef>,
}

impl GroupBy {
    /// Groups by a single field.
    #[must_use]
    pub fn new(field: impl Into<FieldRef>) -> Self {
        Self {
            grouping: Grouping::Plain,
            fields: vec![field.into()],
        }
    }

    /// Groups by several fields.
    #[must_use]
    pub fn fields<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldRef>,
    {
        Self::with(Grouping::Plain, fields)
    }

    /// Groups by `ROLLUP(...)` of the fields, adding subtotal rows.
    #[must_use]
    pub fn rollup<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldRef>,
    {
        Self::with(Grouping::Rollup, fields)
    }

    /// Groups by `CUBE(...)` of the fields, adding subtotals for every
    /// combination.
    #[must_use]
    pub fn cube<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldRef>,
    {
        Self::with(Grouping::Cube, fields)
    }

    fn with<I, F>(grouping: Grouping, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldRef>,
    {
        Self {
            grouping,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl Render for GroupBy {
    fn render(&self, ctx: &RenderContext) -> String {
        let fields = self
            .fields
            .iter()
            .map(|field| field.render(ctx))
            .collect::<Vec<_>>()
            .join(",");
        let operand = match self.grouping {
            Grouping::Plain => fields,
            Grouping::Rollup => format!("ROLLUP({fields})"),
            Grouping::Cube => format!("CUBE({fields})"),
        };
        ctx.join(&["", "GROUP", "BY", operand.as_str()])
    }
}

/// `LIMIT` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(u64);

impl Limit {
    /// Limits the number of returned rows.
    #[must_use]
    pub const fn new(limit: u64) -> Self {
        Self(limit)
    }
}

impl Render for Limit {
    fn render(&self, ctx: &RenderContext) -> String {
        ctx.join(&["", "LIMIT", self.0.to_string().as_str()])
    }
}

/// `OFFSET` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset(u64);

impl Offset {
    /// Skips the given number of rows.
    #[must_use]
    pub const fn new(offset: u64) -> Self {
        Self(offset)
    }
}

impl Render for Offset {
    fn render(&self, ctx: &RenderContext) -> String {
        ctx.join(&["", "OFFSET", self.0.to_string().as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{Condition, FieldGroup, Function, Relation};

    fn space(fragment: &impl Render) -> String {
        fragment.render(&RenderContext::space())
    }

    #[test]
    fn test_where() {
        let clause = Where::new(Condition::eq("Name", "Acme"));
        assert_eq!(space(&clause), " WHERE Name = 'Acme'");
        assert_eq!(clause.build(), "+WHERE+Name+=+'Acme'");
    }

    #[test]
    fn test_order_by_plain() {
        assert_eq!(space(&OrderBy::field("Name")), " ORDER BY Name");
    }

    #[test]
    fn test_order_by_modifiers() {
        let order = OrderBy::new(OrderEntry::new("Name").desc().nulls_last());
        assert_eq!(space(&order), " ORDER BY Name DESC NULLS LAST");
        assert_eq!(order.build(), "+ORDER+BY+Name+DESC+NULLS+LAST");
    }

    #[test]
    fn test_order_by_list() {
        let order = OrderBy::list(vec![
            OrderEntry::new("Name").asc(),
            OrderEntry::new("CreatedDate").nulls_first(),
        ]);
        assert_eq!(
            space(&order),
            " ORDER BY Name ASC, ORDER BY CreatedDate NULLS FIRST"
        );
    }

    #[test]
    fn test_group_by() {
        assert_eq!(space(&GroupBy::new("LeadSource")), " GROUP BY LeadSource");
        assert_eq!(
            space(&GroupBy::fields(["Status", "LeadSource"])),
            " GROUP BY Status,LeadSource"
        );
    }

    #[test]
    fn test_group_by_rollup_and_cube() {
        assert_eq!(
            space(&GroupBy::rollup(["Status", "LeadSource"])),
            " GROUP BY ROLLUP(Status,LeadSource)"
        );
        assert_eq!(
            GroupBy::cube(["Type", "BillingCountry"]).build(),
            "+GROUP+BY+CUBE(Type,BillingCountry)"
        );
    }

    #[test]
    fn test_group_by_function() {
        let clause = GroupBy::new(Function::calendar_year("CreatedDate"));
        assert_eq!(space(&clause), " GROUP BY CALENDAR_YEAR(CreatedDate)");
    }

    #[test]
    fn test_limit_offset() {
        assert_eq!(space(&Limit::new(10)), " LIMIT 10");
        assert_eq!(Offset::new(20).build(), "+OFFSET+20");
    }

    #[test]
    fn test_rollup_over_field_group() {
        let clause = GroupBy::rollup([FieldGroup::new(["Type", "Industry"])]);
        assert_eq!(space(&clause), " GROUP BY ROLLUP(Type,Industry)");
    }

    #[test]
    fn test_order_and_group_by_relationship_path() {
        let order = OrderBy::new(OrderEntry::new(Relation::new("Account", "Name")).desc());
        assert_eq!(space(&order), " ORDER BY Account__r.Name DESC");
        let clause = GroupBy::new(Relation::new("Owner", "Name"));
        assert_eq!(clause.build(), "+GROUP+BY+Owner__r.Name");
    }
}
