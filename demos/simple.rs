//! Encoding a batch of typed records.
//!
//! Run with: cargo run --example simple

use minemizer::to_string;
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    let encoded = to_string(&users)?;
    println!("Encoded:\n{}\n", encoded);

    // a single record is a batch of one
    let single = to_string(&users[0])?;
    println!("Single record:\n{}", single);

    Ok(())
}
