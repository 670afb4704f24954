//! Fragment groups and composition helpers.
//!
//! A [`Group`] keeps its fragments exactly as given. Reading it through
//! [`Group::members`] drops empty fragments and splices nested groups in
//! place, so conditional pieces compose the same way as unconditional ones.

use super::fragment::Fragment;
use crate::render::{Render, RenderContext};

/// An ordered list of fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    fragments: Vec<Fragment>,
}

impl Group {
    /// Creates a group from fragments as given.
    #[must_use]
    pub const fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Starts a fluent group builder.
    #[must_use]
    pub fn builder() -> GroupBuilder {
        GroupBuilder::default()
    }

    /// Returns the fragments as stored, before flattening.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns the flattened view: empty fragments removed and nested
    /// groups replaced by their own members, in pre-order.
    #[must_use]
    pub fn members(&self) -> Vec<&Fragment> {
        self.fragments
            .iter()
            .filter(|fragment| !fragment.is_noop())
            .flat_map(|fragment| match fragment {
                Fragment::Group(inner) => inner.members(),
                other => vec![other],
            })
            .collect()
    }

    /// Returns the number of flattened members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members().len()
    }

    /// Returns true if the flattened view is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members().is_empty()
    }
}

impl Render for Group {
    fn render(&self, ctx: &RenderContext) -> String {
        self.members()
            .into_iter()
            .map(|fragment| fragment.render(ctx))
            .collect()
    }
}

impl From<Vec<Fragment>> for Group {
    fn from(fragments: Vec<Fragment>) -> Self {
        Self::new(fragments)
    }
}

impl<F: Into<Fragment>> FromIterator<F> for Group {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Fluent builder for groups with conditionally included fragments.
///
/// Skipped branches are recorded as empty fragments, which the flattened
/// view drops.
#[derive(Debug, Default)]
pub struct GroupBuilder {
    fragments: Vec<Fragment>,
}

impl GroupBuilder {
    /// Appends a fragment.
    #[must_use]
    pub fn push(mut self, fragment: impl Into<Fragment>) -> Self {
        self.fragments.push(fragment.into());
        self
    }

    /// Appends the fragment produced by `make` when `condition` holds.
    #[must_use]
    pub fn push_if<F, M>(self, condition: bool, make: M) -> Self
    where
        F: Into<Fragment>,
        M: FnOnce() -> F,
    {
        self.push(when(condition, make))
    }

    /// Appends the fragment if present.
    #[must_use]
    pub fn push_opt<F: Into<Fragment>>(self, fragment: Option<F>) -> Self {
        self.push(optional(fragment))
    }

    /// Appends `first()` when `condition` holds, `second()` otherwise.
    #[must_use]
    pub fn push_either<A, B, MA, MB>(self, condition: bool, first: MA, second: MB) -> Self
    where
        A: Into<Fragment>,
        B: Into<Fragment>,
        MA: FnOnce() -> A,
        MB: FnOnce() -> B,
    {
        let fragment = if condition {
            first().into()
        } else {
            second().into()
        };
        self.push(fragment)
    }

    /// Finishes the group.
    #[must_use]
    pub fn build(self) -> Group {
        Group::new(self.fragments)
    }
}

impl From<GroupBuilder> for Fragment {
    fn from(builder: GroupBuilder) -> Self {
        Self::Group(builder.build())
    }
}

/// Returns the empty fragment.
#[must_use]
pub const fn empty() -> Fragment {
    Fragment::Empty
}

/// Substitutes the empty fragment for an absent one.
#[must_use]
pub fn optional<F: Into<Fragment>>(fragment: Option<F>) -> Fragment {
    fragment.map_or(Fragment::Empty, Into::into)
}

/// Returns `make()` when `condition` holds, the empty fragment otherwise.
#[must_use]
pub fn when<F, M>(condition: bool, make: M) -> Fragment
where
    F: Into<Fragment>,
    M: FnOnce() -> F,
{
    if condition {
        make().into()
    } else {
        Fragment::Empty
    }
}

/// Passes through whichever fragment the caller's branch selected.
#[must_use]
pub fn either(condition: bool, first: impl Into<Fragment>, second: impl Into<Fragment>) -> Fragment {
    if condition {
        first.into()
    } else {
        second.into()
    }
}

/// Builds a [`Group`] from a list of fragment expressions.
///
/// Each expression is converted with `Fragment::from`, so fields, clauses,
/// nested groups and `Option`s can be mixed freely.
///
/// ```rust
/// use oxide_soql_core::builder::{Condition, Limit, Where};
/// use oxide_soql_core::{group, Render, RenderContext};
///
/// let filter: Option<Where> = None;
/// let query = group![
///     "Id",
///     filter,
///     Where::new(Condition::eq("Name", "Acme")),
///     Limit::new(1),
/// ];
/// assert_eq!(
///     query.render(&RenderContext::space()),
///     "Id WHERE Name = 'Acme' LIMIT 1"
/// );
/// ```
#[macro_export]
macro_rules! group {
    () => {
        $crate::builder::Group::default()
    };
    ($($fragment:expr),+ $(,)?) => {
        $crate::builder::Group::new(vec![$($crate::builder::Fragment::from($fragment)),+])
    };
}
