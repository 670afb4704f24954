//! Tests for the `#[derive(Table)]` macro output.
//!
//! These tests verify that the derive macro generates:
//! - `{Struct}Table` implementing the `Table` trait
//! - `{Struct}Fields` module with one type per field
//! - Field types implementing `Column` and converting into fragments
//! - Accessor methods on both the table and the model type

use oxide_soql_core::builder::{Condition, Field, FieldRef, Fragment, Relation, Select};
use oxide_soql_core::schema::{Column, Table};
use oxide_soql_core::{group, Render, RenderContext};
use oxide_soql_derive::Table;

// =============================================================================
// Test: Standard object with default names
// =============================================================================

#[allow(dead_code)]
#[derive(Debug, Clone, Table)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub annual_revenue: f64,
}

#[test]
fn test_default_table_name_is_struct_name() {
    assert_eq!(AccountTable::NAME, "Account");
    assert_eq!(AccountTable::table_name(), "Account");
}

#[test]
fn test_default_field_names_are_pascal_case() {
    assert_eq!(AccountTable::FIELDS, &["Id", "Name", "AnnualRevenue"]);
    assert_eq!(AccountFields::Id::NAME, "Id");
    assert_eq!(AccountFields::AnnualRevenue::NAME, "AnnualRevenue");
}

#[test]
fn test_all_fields_keeps_declaration_order() {
    assert_eq!(AccountTable::all_fields().build(), "Id,Name,AnnualRevenue");
    assert_eq!(
        <AccountTable as Table>::all_fields(),
        AccountTable::all_fields()
    );
}

// =============================================================================
// Test: Custom object with explicit names
// =============================================================================

#[allow(dead_code)]
#[derive(Debug, Clone, Table)]
#[table(name = "Invoice__c")]
pub struct Invoice {
    pub id: String,
    #[field(name = "Amount__c")]
    pub amount: f64,
    #[field(name = "Due_Date__c")]
    pub due_date: String,
}

#[test]
fn test_explicit_table_name() {
    assert_eq!(InvoiceTable::NAME, "Invoice__c");
    let _table: InvoiceTable = Invoice::table();
    assert_eq!(InvoiceTable::table_name(), "Invoice__c");
}

#[test]
fn test_explicit_field_names() {
    assert_eq!(InvoiceTable::FIELDS, &["Id", "Amount__c", "Due_Date__c"]);
    assert_eq!(InvoiceFields::Amount::NAME, "Amount__c");
    assert_eq!(InvoiceFields::DueDate::NAME, "Due_Date__c");
}

#[test]
fn test_column_field_reference() {
    assert_eq!(InvoiceFields::Amount::field(), Field::new("Amount__c"));
}

#[test]
fn test_accessors_on_table_and_model() {
    assert_eq!(
        Fragment::from(InvoiceTable::amount()),
        Fragment::from(Invoice::amount())
    );
    assert_eq!(Fragment::from(Invoice::due_date()).build(), "Due_Date__c");
}

#[test]
fn test_field_types_convert_to_field_refs() {
    assert_eq!(
        FieldRef::from(Invoice::amount()),
        FieldRef::Field(Field::new("Amount__c"))
    );
}

// =============================================================================
// Test: Generated types in queries
// =============================================================================

#[allow(dead_code)]
#[derive(Debug, Clone, Table)]
#[table(name = "Payment__c")]
pub struct Payment {
    pub id: String,
    #[field(name = "Invoice__c")]
    pub invoice: String,
}

#[test]
fn test_select_of_derived_table() {
    let query = Select::of::<InvoiceTable>(InvoiceTable::all_fields());
    assert_eq!(
        query.render(&RenderContext::space()),
        "SELECT Id,Amount__c,Due_Date__c FROM Invoice__c"
    );
}

#[test]
fn test_relation_of_derived_table() {
    let query = Select::of::<PaymentTable>(group![
        Payment::id(),
        Relation::of::<InvoiceTable>(group![Invoice::amount(), Invoice::due_date()]),
    ]);
    assert_eq!(
        query.render(&RenderContext::space()),
        "SELECT Id,Invoice__r.Amount__c,Invoice__r.Due_Date__c FROM Payment__c"
    );
}

#[test]
fn test_conditions_on_derived_fields() {
    let condition = Condition::gt(Invoice::amount(), 100);
    assert_eq!(
        condition.render(&RenderContext::space()),
        "Amount__c > 100"
    );
}

#[test]
fn test_column_table_association() {
    fn table_of<C: Column>() -> &'static str {
        <C::Table as Table>::NAME
    }
    assert_eq!(table_of::<PaymentFields::Invoice>(), "Payment__c");
    assert_eq!(table_of::<AccountFields::Name>(), "Account");
}

// =============================================================================
// Test: Raw identifier fields
// =============================================================================

#[allow(dead_code)]
#[derive(Debug, Clone, Table)]
pub struct Opportunity {
    pub id: String,
    pub r#type: String,
    pub stage_name: String,
}

#[test]
fn test_raw_identifier_field_names() {
    assert_eq!(OpportunityTable::FIELDS, &["Id", "Type", "StageName"]);
    assert_eq!(OpportunityFields::Type::NAME, "Type");
}

#[test]
fn test_raw_identifier_accessors() {
    assert_eq!(Fragment::from(Opportunity::r#type()).build(), "Type");
    assert_eq!(
        Condition::eq(OpportunityTable::r#type(), "New Customer").render(&RenderContext::space()),
        "Type = 'New Customer'"
    );
}
