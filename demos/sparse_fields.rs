//! How rare keys are kept out of the header and written inline.
//!
//! Run with: cargo run --example sparse_fields

use minemizer::{analyze, to_string, to_string_with_options, to_value, EncodeOptions, Value};
use serde_json::json;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let people = json!([
        {"name": "Alice", "role": "admin"},
        {"name": "Bob"},
        {"name": "Charlie", "city": "NYC", "tags": ["new", "remote"]},
        {"name": "Dana", "role": "dev"}
    ]);

    let value = to_value(&people)?;
    let records: Vec<_> = value
        .as_array()
        .map(|items| items.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default();
    let analysis = analyze(records, 0.5);
    println!("common keys: {:?}", analysis.common);
    println!("sparse keys: {:?}\n", analysis.sparse);

    println!("threshold 0.5:\n{}\n", to_string(&people)?);

    let strict = EncodeOptions::new().with_sparsity_threshold(1.0);
    println!("threshold 1.0:\n{}\n", to_string_with_options(&people, strict)?);

    let loose = EncodeOptions::new().with_sparsity_threshold(0.0);
    println!("threshold 0.0:\n{}", to_string_with_options(&people, loose)?);

    Ok(())
}
