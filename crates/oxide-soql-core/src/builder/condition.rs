//! Predicates and boolean combinators.

use std::fmt;

use super::field::FieldRef;
use super::fragment::{Combinator, Fragment, FragmentKind};
use super::group::Group;
use super::value::{ToSoqlValue, Value};
use crate::render::{Render, RenderContext};

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Equal (=)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Pattern match (LIKE)
    Like,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => write!(f, "="),
            Self::Ne => write!(f, "!="),
            Self::Lt => write!(f, "<"),
            Self::Lte => write!(f, "<="),
            Self::Gt => write!(f, ">"),
            Self::Gte => write!(f, ">="),
            Self::Like => write!(f, "LIKE"),
        }
    }
}

/// Right-hand side of a membership test.
#[derive(Debug, Clone, PartialEq)]
pub enum Membership {
    /// Literal list, rendered as `('a','b')`.
    Values(Vec<Value>),
    /// Embedded sub-selection (semi-join or anti-join).
    Query(Group),
}

/// A single predicate on a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `field op value`
    Compare {
        field: FieldRef,
        op: CompareOp,
        value: Value,
    },
    /// `field = null`, or `field != null` when negated.
    Null { field: FieldRef, negated: bool },
    /// `field IN (...)`, or `field NOT IN (...)` when negated.
    In {
        field: FieldRef,
        operand: Membership,
        negated: bool,
    },
}

impl Condition {
    fn compare<V: ToSoqlValue>(field: impl Into<FieldRef>, op: CompareOp, value: V) -> Self {
        Self::Compare {
            field: field.into(),
            op,
            value: value.to_soql_value(),
        }
    }

    /// Creates an equality predicate (field = value).
    #[must_use]
    pub fn eq<V: ToSoqlValue>(field: impl Into<FieldRef>, value: V) -> Self {
        Self::compare(field, CompareOp::Eq, value)
    }

    /// Creates an inequality predicate (field != value).
    #[must_use]
    pub fn not_eq<V: ToSoqlValue>(field: impl Into<FieldRef>, value: V) -> Self {
        Self::compare(field, CompareOp::Ne, value)
    }

    /// Creates a less-than predicate (field < value).
    #[must_use]
    pub fn lt<V: ToSoqlValue>(field: impl Into<FieldRef>, value: V) -> Self {
        Self::compare(field, CompareOp::Lt, value)
    }

    /// Creates a less-than-or-equal predicate (field <= value).
    #[must_use]
    pub fn lt_eq<V: ToSoqlValue>(field: impl Into<FieldRef>, value: V) -> Self {
        Self::compare(field, CompareOp::Lte, value)
    }

    /// Creates a greater-than predicate (field > value).
    #[must_use]
    pub fn gt<V: ToSoqlValue>(field: impl Into<FieldRef>, value: V) -> Self {
        Self::compare(field, CompareOp::Gt, value)
    }

    /// Creates a greater-than-or-equal predicate (field >= value).
    #[must_use]
    pub fn gt_eq<V: ToSoqlValue>(field: impl Into<FieldRef>, value: V) -> Self {
        Self::compare(field, CompareOp::Gte, value)
    }

    /// Creates a LIKE predicate.
    #[must_use]
    pub fn like<V: ToSoqlValue>(field: impl Into<FieldRef>, pattern: V) -> Self {
        Self::compare(field, CompareOp::Like, pattern)
    }

    /// Creates a null check (field = null).
    #[must_use]
    pub fn is_null(field: impl Into<FieldRef>) -> Self {
        Self::Null {
            field: field.into(),
            negated: false,
        }
    }

    /// Creates a non-null check (field != null).
    #[must_use]
    pub fn is_not_null(field: impl Into<FieldRef>) -> Self {
        Self::Null {
            field: field.into(),
            negated: true,
        }
    }

    /// Creates an IN predicate over literal values.
    #[must_use]
    pub fn in_list<V: ToSoqlValue>(field: impl Into<FieldRef>, values: Vec<V>) -> Self {
        Self::membership(field, values, false)
    }

    /// Creates a NOT IN predicate over literal values.
    #[must_use]
    pub fn not_in_list<V: ToSoqlValue>(field: impl Into<FieldRef>, values: Vec<V>) -> Self {
        Self::membership(field, values, true)
    }

    /// Creates an IN predicate over an embedded sub-selection.
    #[must_use]
    pub fn in_query(field: impl Into<FieldRef>, query: impl Into<Fragment>) -> Self {
        Self::In {
            field: field.into(),
            operand: Membership::Query(query.into().into_group()),
            negated: false,
        }
    }

    /// Creates a NOT IN predicate over an embedded sub-selection.
    #[must_use]
    pub fn not_in_query(field: impl Into<FieldRef>, query: impl Into<Fragment>) -> Self {
        Self::In {
            field: field.into(),
            operand: Membership::Query(query.into().into_group()),
            negated: true,
        }
    }

    fn membership<V: ToSoqlValue>(field: impl Into<FieldRef>, values: Vec<V>, negated: bool) -> Self {
        Self::In {
            field: field.into(),
            operand: Membership::Values(values.into_iter().map(ToSoqlValue::to_soql_value).collect()),
            negated,
        }
    }
}

impl Render for Condition {
    fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Compare { field, op, value } => {
                ctx.join(&[field.render(ctx), op.to_string(), value.to_soql()])
            }
            Self::Null { field, negated } => {
                let op = if *negated { "!=" } else { "=" };
                ctx.join(&[field.render(ctx).as_str(), op, "null"])
            }
            Self::In {
                field,
                operand,
                negated,
            } => {
                let operand = match operand {
                    Membership::Values(values) => values
                        .iter()
                        .map(Value::to_soql)
                        .collect::<Vec<_>>()
                        .join(","),
                    Membership::Query(query) => query.render(ctx),
                };
                let field = field.render(ctx);
                let operand = format!("({operand})");
                if *negated {
                    ctx.join(&[field.as_str(), "NOT", "IN", operand.as_str()])
                } else {
                    ctx.join(&[field.as_str(), "IN", operand.as_str()])
                }
            }
        }
    }
}

/// Renders the members of a combinator, parenthesizing members of the
/// opposite combinator when there is more than one member.
fn combine(group: &Group, ctx: &RenderContext, keyword: &str, wrapped: Combinator) -> String {
    let members = group.members();
    let wrap = members.len() > 1;
    let separator = ctx.join(&["", keyword, ""]);
    members
        .iter()
        .map(|member| {
            let text = member.render(ctx);
            if wrap && member.kind() == FragmentKind::Combinator(wrapped) {
                format!("({text})")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Conjunction of the fragments in its body.
#[derive(Debug, Clone, PartialEq)]
pub struct And {
    group: Group,
}

impl And {
    /// Creates a conjunction over the fragments of `body`.
    #[must_use]
    pub fn new(body: impl Into<Fragment>) -> Self {
        Self {
            group: body.into().into_group(),
        }
    }

    /// Returns the operands.
    #[must_use]
    pub const fn group(&self) -> &Group {
        &self.group
    }
}

impl Render for And {
    fn render(&self, ctx: &RenderContext) -> String {
        combine(&self.group, ctx, "AND", Combinator::Or)
    }
}

/// Disjunction of the fragments in its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Or {
    group: Group,
}

impl Or {
    /// Creates a disjunction over the fragments of `body`.
    #[must_use]
    pub fn new(body: impl Into<Fragment>) -> Self {
        Self {
            group: body.into().into_group(),
        }
    }

    /// Returns the operands.
    #[must_use]
    pub const fn group(&self) -> &Group {
        &self.group
    }
}

impl Render for Or {
    fn render(&self, ctx: &RenderContext) -> String {
        combine(&self.group, ctx, "OR", Combinator::And)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{empty, FieldGroup, Relation, Select};
    use crate::group;

    fn space(fragment: &impl Render) -> String {
        fragment.render(&RenderContext::space())
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(space(&Condition::eq("Name", "Acme")), "Name = 'Acme'");
        assert_eq!(space(&Condition::not_eq("Id", true)), "Id != true");
        assert_eq!(space(&Condition::lt("Amount", 10)), "Amount < 10");
        assert_eq!(space(&Condition::lt_eq("Amount", 1.5)), "Amount <= 1.5");
        assert_eq!(space(&Condition::gt("Amount", 0)), "Amount > 0");
        assert_eq!(space(&Condition::gt_eq("Amount", 2.0)), "Amount >= 2.0");
        assert_eq!(space(&Condition::like("Name", "a%")), "Name LIKE 'a%'");
    }

    #[test]
    fn test_null_checks() {
        assert_eq!(space(&Condition::is_null("Email")), "Email = null");
        assert_eq!(Condition::is_not_null("Email").build(), "Email+!=+null");
    }

    #[test]
    fn test_in_list() {
        let condition = Condition::in_list("Stage", vec!["AAA", "BBB"]);
        assert_eq!(condition.build(), "Stage+IN+('AAA','BBB')");
        let condition = Condition::not_in_list("Count", vec![1, 2]);
        assert_eq!(space(&condition), "Count NOT IN (1,2)");
    }

    #[test]
    fn test_in_query_embeds_sub_selection() {
        let condition = Condition::in_query("Id", Select::new("Contact", "AccountId"));
        assert_eq!(space(&condition), "Id IN (SELECT AccountId FROM Contact)");
        let condition = Condition::not_in_query("Id", Select::new("Contact", "AccountId"));
        assert_eq!(
            condition.build(),
            "Id+NOT+IN+(SELECT+AccountId+FROM+Contact)"
        );
    }

    #[test]
    fn test_single_child_has_no_parentheses() {
        let x = Condition::eq("A", 1);
        assert_eq!(space(&And::new(x.clone())), space(&x));
        assert_eq!(space(&Or::new(x.clone())), space(&x));
    }

    #[test]
    fn test_and_wraps_or_children() {
        let and = And::new(group![
            Or::new(group![Condition::eq("P", 1), Condition::eq("Q", 2)]),
            Condition::eq("R", 3),
        ]);
        assert_eq!(space(&and), "(P = 1 OR Q = 2) AND R = 3");
    }

    #[test]
    fn test_or_wraps_and_children() {
        let or = Or::new(group![
            And::new(group![Condition::eq("P", 1), Condition::eq("Q", 2)]),
            Condition::eq("R", 3),
        ]);
        assert_eq!(space(&or), "(P = 1 AND Q = 2) OR R = 3");
    }

    #[test]
    fn test_same_combinator_is_not_wrapped() {
        let and = And::new(group![
            And::new(group![Condition::eq("P", 1), Condition::eq("Q", 2)]),
            Condition::eq("R", 3),
        ]);
        assert_eq!(space(&and), "P = 1 AND Q = 2 AND R = 3");
    }

    #[test]
    fn test_single_opposite_child_is_not_wrapped() {
        let and = And::new(Or::new(group![Condition::eq("P", 1), Condition::eq("Q", 2)]));
        assert_eq!(space(&and), "P = 1 OR Q = 2");
    }

    #[test]
    fn test_noop_siblings_do_not_force_wrapping() {
        let and = And::new(group![
            empty(),
            Or::new(group![Condition::eq("P", 1), Condition::eq("Q", 2)]),
            empty(),
        ]);
        assert_eq!(space(&and), "P = 1 OR Q = 2");
    }

    #[test]
    fn test_relationship_path_operand() {
        let condition = Condition::eq(Relation::new("Account", "Name"), "Acme");
        assert_eq!(space(&condition), "Account__r.Name = 'Acme'");

        let nested = Condition::is_not_null(Relation::new(
            "Invoice__c",
            Relation::new("Owner", "Email"),
        ));
        assert_eq!(nested.build(), "Invoice__r.Owner__r.Email+!=+null");
    }

    #[test]
    fn test_field_group_operand() {
        let condition = Condition::in_list(FieldGroup::new(["Status"]), vec!["Open"]);
        assert_eq!(space(&condition), "Status IN ('Open')");
    }
}
