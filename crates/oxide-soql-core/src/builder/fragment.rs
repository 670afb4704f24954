//! The fragment node algebra.
//!
//! Every piece of a query is a [`Fragment`]. Fragments render to text and
//! can be viewed as a flat [`Group`]; everything else in the builder is
//! layered on those two operations.

use super::clause::{GroupBy, Limit, Offset, OrderBy, Where};
use super::condition::{And, Condition, Or};
use super::field::{Field, FieldGroup};
use super::function::Function;
use super::group::Group;
use super::relation::Relation;
use super::select::Select;
use crate::render::{Render, RenderContext};

/// A node in a query tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Fragment {
    /// Renders nothing and is dropped from every group.
    #[default]
    Empty,
    /// Ordered, flattening container.
    Group(Group),
    /// Plain field name.
    Field(Field),
    /// Set of field names.
    FieldGroup(FieldGroup),
    /// Aggregate or date function.
    Function(Function),
    /// Parent lookup expanded into dot-qualified paths.
    Relation(Relation),
    /// `SELECT ... FROM ...`, top-level or nested.
    Select(Select),
    /// `WHERE` clause.
    Where(Where),
    /// Conjunction of conditions.
    And(And),
    /// Disjunction of conditions.
    Or(Or),
    /// Single predicate.
    Condition(Condition),
    /// `ORDER BY` clause.
    OrderBy(OrderBy),
    /// `GROUP BY` clause.
    GroupBy(GroupBy),
    /// `LIMIT` clause.
    Limit(Limit),
    /// `OFFSET` clause.
    Offset(Offset),
}

/// Boolean combinator tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `AND`
    And,
    /// `OR`
    Or,
}

/// What a fragment is, as far as composition rules care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// The empty fragment.
    NoOp,
    /// A group of fragments.
    Group,
    /// A field, field group or function: something with a field name.
    Field,
    /// A relationship expanding to field paths.
    Relation,
    /// `AND` or `OR`.
    Combinator(Combinator),
    /// Anything else: selections, clauses, predicates.
    Other,
}

impl Fragment {
    /// Returns the composition tag of this fragment.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        match self {
            Self::Empty => FragmentKind::NoOp,
            Self::Group(_) => FragmentKind::Group,
            Self::Field(_) | Self::FieldGroup(_) | Self::Function(_) => FragmentKind::Field,
            Self::Relation(_) => FragmentKind::Relation,
            Self::And(_) => FragmentKind::Combinator(Combinator::And),
            Self::Or(_) => FragmentKind::Combinator(Combinator::Or),
            Self::Select(_)
            | Self::Where(_)
            | Self::Condition(_)
            | Self::OrderBy(_)
            | Self::GroupBy(_)
            | Self::Limit(_)
            | Self::Offset(_) => FragmentKind::Other,
        }
    }

    /// Returns true for the empty fragment.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if the fragment contributes to a select list as a field.
    #[must_use]
    pub const fn is_field_like(&self) -> bool {
        matches!(self.kind(), FragmentKind::Field | FragmentKind::Relation)
    }

    /// Returns the field name this fragment stands for, if it names one.
    #[must_use]
    pub fn field_name(&self, ctx: &RenderContext) -> Option<String> {
        if self.is_field_like() {
            Some(self.render(ctx))
        } else {
            None
        }
    }

    /// Views the fragment as a group.
    ///
    /// A group yields its own flattened members; anything else yields a
    /// singleton group.
    #[must_use]
    pub fn as_group(&self) -> Group {
        match self {
            Self::Group(group) => Group::new(group.members().into_iter().cloned().collect()),
            other => Group::new(vec![other.clone()]),
        }
    }

    /// Converts the fragment into a group without copying.
    #[must_use]
    pub fn into_group(self) -> Group {
        match self {
            Self::Group(group) => group,
            other => Group::new(vec![other]),
        }
    }
}

impl Render for Fragment {
    fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Group(group) => group.render(ctx),
            Self::Field(field) => field.render(ctx),
            Self::FieldGroup(fields) => fields.render(ctx),
            Self::Function(function) => function.render(ctx),
            Self::Relation(relation) => relation.render(ctx),
            Self::Select(select) => select.render(ctx),
            Self::Where(clause) => clause.render(ctx),
            Self::And(and) => and.render(ctx),
            Self::Or(or) => or.render(ctx),
            Self::Condition(condition) => condition.render(ctx),
            Self::OrderBy(order_by) => order_by.render(ctx),
            Self::GroupBy(group_by) => group_by.render(ctx),
            Self::Limit(limit) => limit.render(ctx),
            Self::Offset(offset) => offset.render(ctx),
        }
    }
}

macro_rules! impl_from_node {
    ($($node:ident),+ $(,)?) => {
        $(
            impl From<$node> for Fragment {
                fn from(node: $node) -> Self {
                    Self::$node(node)
                }
            }
        )+
    };
}

impl_from_node!(
    Group, Field, FieldGroup, Function, Relation, Select, Where, And, Or, Condition, OrderBy,
    GroupBy, Limit, Offset,
);

impl From<&str> for Fragment {
    fn from(name: &str) -> Self {
        Self::Field(Field::from(name))
    }
}

impl From<String> for Fragment {
    fn from(name: String) -> Self {
        Self::Field(Field::from(name))
    }
}

impl From<Vec<Self>> for Fragment {
    fn from(fragments: Vec<Self>) -> Self {
        Self::Group(Group::new(fragments))
    }
}

/// An absent fragment becomes the empty fragment.
impl<F: Into<Self>> From<Option<F>> for Fragment {
    fn from(fragment: Option<F>) -> Self {
        fragment.map_or(Self::Empty, Into::into)
    }
}
