//! Composable SOQL builder.
//!
//! Queries are trees of [`Fragment`]s. Leaf fragments are fields,
//! predicates and clauses; [`Group`]s collect them in order and flatten
//! nested groups when read, so optional pieces can be spliced in without
//! special cases.
//!
//! # Example
//!
//! ```rust
//! use oxide_soql_core::builder::{Condition, Limit, OrderBy, Select, Where};
//! use oxide_soql_core::{group, Render, RenderContext};
//!
//! let only_active = true;
//! let query = group![
//!     Select::new("Account", group!["Id", "Name"]),
//!     only_active.then(|| Where::new(Condition::eq("Active__c", true))),
//!     OrderBy::field("Name"),
//!     Limit::new(10),
//! ];
//!
//! assert_eq!(
//!     query.render(&RenderContext::space()),
//!     "SELECT Id,Name FROM Account WHERE Active__c = true ORDER BY Name LIMIT 10"
//! );
//! assert_eq!(
//!     query.build(),
//!     "SELECT+Id,Name+FROM+Account+WHERE+Active__c+=+true+ORDER+BY+Name+LIMIT+10"
//! );
//! ```

mod clause;
mod condition;
mod field;
mod fragment;
mod function;
mod group;
mod relation;
mod select;
pub mod value;

pub use clause::{
    GroupBy, Grouping, Limit, NullsOrder, Offset, OrderBy, OrderDirection, OrderEntry, Where,
};
pub use condition::{And, CompareOp, Condition, Membership, Or};
pub use field::{Field, FieldGroup, FieldRef};
pub use fragment::{Combinator, Fragment, FragmentKind};
pub use function::{
    avg, count, count_all, count_distinct, max, min, sum, Function, FunctionName,
};
pub use group::{either, empty, optional, when, Group, GroupBuilder};
pub use relation::{
    relationship_name, Relation, CUSTOM_OBJECT_SUFFIX, CUSTOM_RELATIONSHIP_SUFFIX,
};
pub use select::Select;
pub use value::{DateLiteral, ToSoqlValue, Value};
