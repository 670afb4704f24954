//! # oxide-soql-core
//!
//! A composable builder for SOQL, the query language of Salesforce.
//!
//! This crate provides:
//! - A fragment algebra where every node renders to text and can be viewed
//!   as a flat group, with optional pieces spliced in as empty fragments
//! - Boolean combinators that parenthesize only where precedence needs it
//! - Parent relationship paths (`Owner__r.Name`) and child sub-queries
//! - Schema traits, implemented by `#[derive(Table)]` from
//!   `oxide-soql-derive`
//!
//! The builder only produces text. It never talks to Salesforce and never
//! checks field names against a live schema.
//!
//! ## Building a query
//!
//! ```rust
//! use oxide_soql_core::builder::{And, Condition, Or, Select, Where};
//! use oxide_soql_core::{group, Render, RenderContext};
//!
//! let query = group![
//!     Select::new("Contact", group!["Id", "Email"]),
//!     Where::new(Or::new(group![
//!         And::new(group![
//!             Condition::is_not_null("Email"),
//!             Condition::like("Email", "%@acme.com"),
//!         ]),
//!         Condition::eq("VIP__c", true),
//!     ])),
//! ];
//!
//! assert_eq!(
//!     query.render(&RenderContext::space()),
//!     "SELECT Id,Email FROM Contact WHERE (Email != null AND Email LIKE '%@acme.com') OR VIP__c = true"
//! );
//! ```
//!
//! ## Whitespace
//!
//! Tokens are joined by `+` by default so that the output can be placed
//! directly in a REST query string. Render with [`RenderContext::space`]
//! for human-readable output.

pub mod builder;
pub mod error;
pub mod render;
pub mod schema;

pub use builder::{Fragment, Group, Select};
pub use error::{Error, Result};
pub use render::{Render, RenderContext, Whitespace};
pub use schema::{Column, Table};
