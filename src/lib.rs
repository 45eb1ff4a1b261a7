//! # minemizer
//!
//! A schema-inferring, delimiter-based serializer that turns batches of records
//! into compact text for humans and LLMs.
//!
//! ## How It Works
//!
//! Keys shared by most records are factored into a single header line, with
//! nested object schemas written inline. Each record then becomes one row of
//! positional values, and keys too rare for the header are written inline as
//! `key:value`. The result is usually much smaller than JSON or YAML (and cheaper
//! to tokenize) while keeping every field recoverable.
//!
//! ## Quick Start
//!
//! ```rust
//! use minemizer::to_string;
//! use serde_json::json;
//!
//! let data = json!([
//!     {"name": "Alice", "age": 30},
//!     {"name": "Bob", "age": 25}
//! ]);
//! assert_eq!(to_string(&data).unwrap(), "name; age\nAlice; 30\nBob; 25");
//! ```
//!
//! ### Typed Records
//!
//! ```rust
//! use minemizer::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Address { city: String }
//!
//! #[derive(Serialize)]
//! struct User { name: String, address: Address }
//!
//! let users = vec![
//!     User { name: "Alice".into(), address: Address { city: "Boston".into() } },
//!     User { name: "Bob".into(), address: Address { city: "NYC".into() } },
//! ];
//! assert_eq!(
//!     to_string(&users).unwrap(),
//!     "name; address{ city}\nAlice; { Boston}\nBob; { NYC}"
//! );
//! ```
//!
//! ### Presets and Overrides
//!
//! ```rust
//! use minemizer::{to_string_with_options, EncodeOptions, Preset};
//! use serde_json::json;
//!
//! let data = json!({"name": "Alice", "age": 30});
//! let options = EncodeOptions::new().with_preset(Preset::Compact);
//! assert_eq!(to_string_with_options(&data, options).unwrap(), "name;age\nAlice;30");
//! ```
//!
//! ## Determinism
//!
//! Keys are ordered by first appearance everywhere (records, nested objects and
//! the header), so the same batch and configuration always produce the same
//! bytes.
//!
//! ## Concurrency
//!
//! Encoding is a pure, synchronous computation over data already in memory.
//! There is no global configuration: each call resolves its own [`Config`] up
//! front and uses that snapshot throughout, so concurrent calls are independent.
//!
//! See the [`format`] module for a description of the output.

pub mod analyze;
pub mod config;
pub mod encode;
pub mod error;
pub mod format;
pub mod header;
mod layout;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use analyze::{analyze, KeyAnalysis};
pub use config::{Config, Preset};
pub use encode::{format_row, minemize, row_segments, Encoder};
pub use error::{Error, Result};
pub use header::{build_header, FieldKind, HeaderElement};
pub use map::Map;
pub use options::EncodeOptions;
pub use ser::{to_value, ValueSerializer};
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// A single input record: string keys mapped to values, in insertion order.
pub type Record = Map;

/// Encode a record or a sequence of records with the default configuration.
///
/// # Examples
///
/// ```rust
/// use minemizer::to_string;
/// use serde_json::json;
///
/// let single = json!({"name": "Alice", "age": 30});
/// assert_eq!(to_string(&single).unwrap(), "name; age\nAlice; 30");
///
/// let empty: Vec<serde_json::Value> = vec![];
/// assert_eq!(to_string(&empty).unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns an error if the data is not record-shaped or contains a type the
/// value model cannot represent.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_config(value, &Config::default())
}

/// Encode data using a preset and/or individual overrides.
///
/// # Examples
///
/// ```rust
/// use minemizer::{to_string_with_options, EncodeOptions};
/// use serde_json::json;
///
/// let data = json!([{"name": "Alice", "age": 30}]);
/// let options = EncodeOptions::new().with_use_spaces(false);
/// assert_eq!(to_string_with_options(&data, options).unwrap(), "name;age\nAlice;30");
/// ```
///
/// # Errors
///
/// Returns an error if the options resolve to an invalid configuration, or if
/// the data cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let config = options.resolve()?;
    to_string_with_config(value, &config)
}

/// Encode data with an explicit configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the data cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_config<T>(value: &T, config: &Config) -> Result<String>
where
    T: ?Sized + Serialize,
{
    config.validate()?;
    let value = to_value(value)?;
    Encoder::new(config.clone()).encode_value(&value)
}

/// Encode data with the default configuration and write it to `writer`.
///
/// # Examples
///
/// ```rust
/// use minemizer::to_writer;
/// use serde_json::json;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &json!([{"id": 1}])).unwrap();
/// assert_eq!(buffer, b"id\n1");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EncodeOptions::default())
}

/// Encode data with custom options and write it to `writer`.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let encoded = to_string_with_options(value, options)?;
    writer
        .write_all(encoded.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    struct Item {
        sku: String,
        price: f64,
        tags: Vec<String>,
        note: Option<String>,
    }

    #[test]
    fn test_struct_batch() {
        let points = vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }];
        assert_eq!(to_string(&points).unwrap(), "x; y\n1; 2\n3; 4");
    }

    #[test]
    fn test_single_struct() {
        assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x; y\n1; 2");
    }

    #[test]
    fn test_options_and_lists() {
        let items = vec![
            Item {
                sku: "KB-2847".to_string(),
                price: 149.99,
                tags: vec!["usb".to_string()],
                note: None,
            },
            Item {
                sku: "MS-1122".to_string(),
                price: 79.5,
                tags: vec![],
                note: Some("sale".to_string()),
            },
        ];
        let out = to_string(&items).unwrap();
        assert_eq!(
            out,
            "sku; price; tags[]; note\nKB-2847; 149.99; [ usb]; \nMS-1122; 79.5; []; sale"
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(to_string(&"text"), Err(Error::InvalidInput(_))));
        assert!(matches!(to_string(&vec![1, 2]), Err(Error::InvalidInput(_))));
        assert_eq!(to_string(&()).unwrap(), "");
    }

    #[test]
    fn test_invalid_config_rejected_before_encoding() {
        let config = Config::default().with_sparsity_threshold(-1.0);
        let err = to_string_with_config(&Point { x: 1, y: 2 }, &config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_writer() {
        let mut buffer = Vec::new();
        to_writer_with_options(
            &mut buffer,
            &vec![Point { x: 1, y: 2 }],
            EncodeOptions::from(Preset::Csv),
        )
        .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "x,y\n1,2");
    }
}
