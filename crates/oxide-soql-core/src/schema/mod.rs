//! Schema traits for SOQL objects and their fields.
//!
//! These traits are implemented by the `#[derive(Table)]` macro from
//! `oxide-soql-derive`, or by hand for objects without a Rust model.

use crate::builder::{Field, FieldGroup};

/// Trait for object metadata.
///
/// ```rust
/// use oxide_soql_core::schema::Table;
/// use oxide_soql_core::Render;
///
/// struct Account;
///
/// impl Table for Account {
///     const NAME: &'static str = "Account";
///     const FIELDS: &'static [&'static str] = &["Id", "Name"];
/// }
///
/// assert_eq!(Account::all_fields().build(), "Id,Name");
/// ```
pub trait Table {
    /// The object API name, e.g. `Account` or `Invoice__c`.
    const NAME: &'static str;

    /// API names of all fields, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Returns every field of the object as a field group.
    #[must_use]
    fn all_fields() -> FieldGroup {
        FieldGroup::new(Self::FIELDS.iter().copied().map(Field::from_static))
    }
}

/// Trait for field metadata.
///
/// Implemented by the field types generated from `#[derive(Table)]`.
pub trait Column {
    /// The object this field belongs to.
    type Table: Table;

    /// The field API name.
    const NAME: &'static str;

    /// Returns the field reference.
    #[must_use]
    fn field() -> Field {
        Field::from_static(Self::NAME)
    }
}
