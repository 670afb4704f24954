//! Invoicing System - Salesforce Query Example
//!
//! This example builds the queries behind a small invoicing dashboard:
//! - Clients with their account owner
//! - Invoices with line items as a child sub-query
//! - Revenue totals grouped by month
//! - Optional filters toggled at run time
//!
//! Run with: cargo run --example invoicing

use oxide_soql_core::builder::{
    count_all, sum, value::DateLiteral, when, And, Condition, Function, GroupBy, Limit, Or,
    OrderBy, OrderEntry, Relation, Select, Where,
};
use oxide_soql_core::{group, Group, Render, RenderContext};
use oxide_soql_derive::Table;

// =============================================================================
// SCHEMA DEFINITIONS
// =============================================================================

/// Client - customers who receive invoices.
#[allow(dead_code)]
#[derive(Debug, Clone, Table)]
#[table(name = "Client__c")]
pub struct Client {
    pub id: String,
    pub name: String,
    #[field(name = "Email__c")]
    pub email: String,
    #[field(name = "Preferred_Currency__c")]
    pub preferred_currency: String,
}

/// Invoice - a bill sent to a client.
#[allow(dead_code)]
#[derive(Debug, Clone, Table)]
#[table(name = "Invoice__c")]
pub struct Invoice {
    pub id: String,
    pub name: String,
    #[field(name = "Status__c")]
    pub status: String,
    #[field(name = "Total__c")]
    pub total: f64,
    #[field(name = "Due_Date__c")]
    pub due_date: String,
}

/// Line item - one billed product on an invoice.
#[allow(dead_code)]
#[derive(Debug, Clone, Table)]
#[table(name = "Line_Item__c")]
pub struct LineItem {
    pub id: String,
    #[field(name = "Quantity__c")]
    pub quantity: f64,
    #[field(name = "Unit_Price__c")]
    pub unit_price: f64,
}

/// The standard `User` object, reached through the record owner.
#[allow(dead_code)]
#[derive(Debug, Clone, Table)]
pub struct User {
    pub name: String,
    pub email: String,
}

// =============================================================================
// QUERIES
// =============================================================================

/// Clients with the name and email of their owner.
fn clients_with_owner() -> Group {
    group![
        Select::of::<ClientTable>(group![
            ClientTable::all_fields(),
            Relation::of::<UserTable>(UserTable::all_fields()).named("Owner"),
        ]),
        OrderBy::field(Client::name()),
    ]
}

/// Open invoices, optionally restricted to overdue ones, with line items.
fn open_invoices(only_overdue: bool, include_lines: bool) -> Group {
    group![
        Select::of::<InvoiceTable>(group![
            InvoiceTable::all_fields(),
            Relation::of::<ClientTable>(Client::name()),
            when(include_lines, || {
                Select::of::<LineItemTable>(LineItemTable::all_fields()).named("Line_Items__r")
            }),
        ]),
        Where::new(And::new(group![
            Or::new(group![
                Condition::eq(Invoice::status(), "Sent"),
                Condition::eq(Invoice::status(), "Partially Paid"),
            ]),
            when(only_overdue, || {
                Condition::lt(Invoice::due_date(), DateLiteral::Today)
            }),
        ])),
        OrderBy::new(OrderEntry::new(Invoice::due_date()).asc().nulls_last()),
        Limit::new(50),
    ]
}

/// Monthly revenue over the last twelve months.
fn monthly_revenue() -> Group {
    group![
        Select::of::<InvoiceTable>(group![
            Function::calendar_month(Invoice::due_date()),
            sum(Invoice::total()).alias("Revenue"),
            count_all(),
        ]),
        Where::new(And::new(group![
            Condition::eq(Invoice::status(), "Paid"),
            Condition::gt_eq(Invoice::due_date(), DateLiteral::LastNMonths(12)),
        ])),
        GroupBy::new(Function::calendar_month(Invoice::due_date())),
    ]
}

fn main() {
    let display = RenderContext::space();

    println!("=== Clients ===");
    println!("{}\n", clients_with_owner().render(&display));

    println!("=== Open invoices ===");
    println!("{}", open_invoices(false, false).render(&display));
    println!("{}\n", open_invoices(true, true).render(&display));

    println!("=== Monthly revenue ===");
    println!("{}\n", monthly_revenue().render(&display));

    println!("=== URL-ready ===");
    println!("/services/data/v59.0/query?q={}", open_invoices(true, false).build());
}
