//! Output size compared with JSON.
//!
//! Run with: cargo run --example token_efficiency

use minemizer::{to_string, to_string_with_options, EncodeOptions, Preset};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    team: Option<String>,
}

fn savings(baseline: usize, encoded: usize) -> f64 {
    (baseline as f64 - encoded as f64) / baseline as f64 * 100.0
}

fn main() -> Result<(), Box<dyn Error>> {
    let users: Vec<User> = (1..=20)
        .map(|i| User {
            id: i,
            name: format!("User {}", i),
            email: format!("user{}@example.com", i),
            active: i % 3 != 0,
            team: (i % 7 == 0).then(|| "platform".to_string()),
        })
        .collect();

    let json = serde_json::to_string_pretty(&users)?;
    let compact_json = serde_json::to_string(&users)?;
    let encoded = to_string(&users)?;
    let compact = to_string_with_options(&users, EncodeOptions::from(Preset::Compact))?;

    println!("{}\n", encoded);
    println!("JSON (pretty):   {} chars", json.len());
    println!("JSON (compact):  {} chars", compact_json.len());
    println!(
        "default preset:  {} chars ({:.1}% smaller than pretty JSON)",
        encoded.len(),
        savings(json.len(), encoded.len())
    );
    println!(
        "compact preset:  {} chars ({:.1}% smaller than compact JSON)",
        compact.len(),
        savings(compact_json.len(), compact.len())
    );

    Ok(())
}
