//! Nested object and list-of-object schemas in the header.
//!
//! Run with: cargo run --example nested_schemas

use minemizer::{to_string, to_string_with_options, EncodeOptions};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct LineItem {
    sku: String,
    qty: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

#[derive(Debug, Serialize)]
struct Customer {
    name: String,
    tier: String,
}

#[derive(Debug, Serialize)]
struct Order {
    id: u32,
    customer: Customer,
    items: Vec<LineItem>,
    labels: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let orders = vec![
        Order {
            id: 1001,
            customer: Customer {
                name: "Ann".into(),
                tier: "gold".into(),
            },
            items: vec![
                LineItem {
                    sku: "KB-2847".into(),
                    qty: 1,
                    note: None,
                },
                LineItem {
                    sku: "MS-1122".into(),
                    qty: 2,
                    note: None,
                },
            ],
            labels: vec!["priority".into()],
        },
        Order {
            id: 1002,
            customer: Customer {
                name: "Ben".into(),
                tier: "basic".into(),
            },
            items: vec![LineItem {
                sku: "CB-0001".into(),
                qty: 3,
                note: Some("gift wrap".into()),
            }],
            labels: vec![],
        },
    ];

    println!("{}\n", to_string(&orders)?);

    let collapsed = EncodeOptions::new().with_collapse_spaces(true);
    println!("collapsed:\n{}", to_string_with_options(&orders, collapsed)?);

    Ok(())
}
