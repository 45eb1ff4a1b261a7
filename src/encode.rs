//! Row encoding and output assembly.
//!
//! Every row has one positional segment per header element, in header order,
//! followed by one `key:value` segment per field the header does not cover, in
//! the record's own key order. Missing and null fields leave an empty segment so
//! columns stay aligned with the header.
//!
//! ## Rendering Rules
//!
//! | Value | Under a header column | As a sparse field `key` |
//! |-------|----------------------|-------------------------|
//! | scalar | `v` | `key:v` |
//! | object | `{ <schema values>; extra:v}` | `key{ a:v; b:v}` |
//! | list of objects | `[ { ...}; { ...}]` | `key[ { a:v}; { b:v}]` |
//! | list of scalars | `[ a; b]` | `key[ a; b]` |
//! | empty object / list | `{}` / `[]` | `key{}` / `key[]` |
//!
//! ```rust
//! use minemizer::{Encoder, Config};
//! use serde_json::json;
//!
//! let data = json!([
//!     {"name": "Alice"},
//!     {"name": "Bob"},
//!     {"name": "Charlie", "city": "NYC"}
//! ]);
//! let value = minemizer::to_value(&data).unwrap();
//! let out = Encoder::new(Config::default()).encode_value(&value).unwrap();
//! assert_eq!(out, "name\nAlice\nBob\nCharlie; city:NYC");
//! ```

use crate::header::{build_header, FieldKind, HeaderElement};
use crate::layout::{enclose, join, Bracket, Part};
use crate::{Config, Error, Map, Result, Value};
use log::debug;

/// Encodes record batches against a fixed configuration.
///
/// The configuration is owned by the encoder and never re-read from anywhere
/// else while a batch is encoded, so one encoder can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    config: Config,
}

impl Encoder {
    pub fn new(config: Config) -> Self {
        Encoder { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encodes a single record or a sequence of records.
    ///
    /// An object is treated as a one-record batch. An empty array or null
    /// encodes to an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for any other scalar, or for an array
    /// holding something other than objects.
    pub fn encode_value(&self, value: &Value) -> Result<String> {
        match value {
            Value::Object(record) => Ok(self.encode_records(std::slice::from_ref(record))),
            Value::Array(items) => {
                let records = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| match item {
                        Value::Object(record) => Ok(record.clone()),
                        other => Err(Error::invalid_input(format!(
                            "expected a record at index {}, found {}",
                            index,
                            other.kind_name()
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(self.encode_records(&records))
            }
            Value::Null => Ok(String::new()),
            other => Err(Error::invalid_input(format!(
                "expected a record or a sequence of records, found {}",
                other.kind_name()
            ))),
        }
    }

    /// Encodes an already materialized batch. Never fails.
    #[must_use]
    pub fn encode_records(&self, records: &[Map]) -> String {
        minemize(records, &self.config)
    }
}

/// Encodes a batch of records into header and row lines.
///
/// Returns an empty string for an empty batch.
///
/// # Examples
///
/// ```rust
/// use minemizer::{minemize, value, Config, Value};
///
/// let records: Vec<_> = [value!({"name": "Alice", "age": 30})]
///     .iter()
///     .filter_map(Value::as_object)
///     .cloned()
///     .collect();
///
/// let compact = Config::default().with_use_spaces(false);
/// assert_eq!(minemize(&records, &compact), "name;age\nAlice;30");
/// ```
#[must_use]
pub fn minemize(records: &[Map], config: &Config) -> String {
    if records.is_empty() {
        return String::new();
    }

    let header = build_header(records, config);
    debug!(
        "encoding {} records against {} header fields",
        records.len(),
        header.len()
    );

    let header_parts: Vec<Part> = header
        .iter()
        .map(|element| Part::text(element.render(config)))
        .collect();
    let header_line = join(&header_parts, config);
    let separator_line = config.header_separator.as_ref().map(|token| {
        let tokens = vec![Part::text(token.as_str()); header.len()];
        join(&tokens, config)
    });

    let mut lines = Vec::with_capacity(records.len() + 2);
    let push_header = |lines: &mut Vec<String>| {
        lines.push(header_line.clone());
        if let Some(separator) = &separator_line {
            lines.push(separator.clone());
        }
    };

    push_header(&mut lines);
    for (index, record) in records.iter().enumerate() {
        if let Some(interval) = config.header_repeat_interval {
            if index > 0 && interval > 0 && index % interval == 0 {
                push_header(&mut lines);
            }
        }
        lines.push(format_row(record, &header, config));
    }

    match &config.wrap_lines {
        Some(wrap) => lines
            .iter()
            .map(|line| format!("{wrap}{line}{wrap}"))
            .collect::<Vec<_>>()
            .join("\n"),
        None => lines.join("\n"),
    }
}

/// Formats one record as a row line.
#[must_use]
pub fn format_row(record: &Map, header: &[HeaderElement], config: &Config) -> String {
    join(&row_parts(record, header, config), config)
}

/// Returns the segments of a row before they are joined: one per header
/// element, then one per field outside the header.
///
/// # Examples
///
/// ```rust
/// use minemizer::{row_segments, value, Config, HeaderElement};
///
/// let record = value!({"name": "Ann", "role": "dev"});
/// let header = vec![HeaderElement::scalar("name"), HeaderElement::scalar("age")];
/// let segments = row_segments(record.as_object().unwrap(), &header, &Config::default());
/// assert_eq!(segments, ["Ann", "", "role:dev"]);
/// ```
#[must_use]
pub fn row_segments(record: &Map, header: &[HeaderElement], config: &Config) -> Vec<String> {
    row_parts(record, header, config)
        .into_iter()
        .map(Part::into_string)
        .collect()
}

fn row_parts(record: &Map, header: &[HeaderElement], config: &Config) -> Vec<Part> {
    let mut parts: Vec<Part> = header
        .iter()
        .map(|element| match record.get(&element.name) {
            None | Some(Value::Null) => Part::default(),
            Some(value) => render_cell(value, element, config),
        })
        .collect();

    parts.extend(
        record
            .iter()
            .filter(|(key, _)| !header.iter().any(|element| &element.name == *key))
            .map(|(key, value)| render_field(key, value, config)),
    );
    parts
}

fn render_cell(value: &Value, element: &HeaderElement, config: &Config) -> Part {
    match (element.kind, value) {
        (FieldKind::Object, Value::Object(object)) => {
            render_schema_object(object, &element.subschema, config)
        }
        (FieldKind::ListOfObject, Value::Array(items)) => {
            render_list(items, config, |item| match item {
                Value::Object(object) => render_schema_object(object, &element.subschema, config),
                other => render_item(other, config),
            })
        }
        (FieldKind::ListOfScalar, Value::Array(items)) => {
            render_list(items, config, |item| render_item(item, config))
        }
        (_, other) => render_item(other, config),
    }
}

/// Renders an object against a nested schema: schema values in schema order
/// (empty when absent), then every key outside the schema as a field.
fn render_schema_object(object: &Map, schema: &[String], config: &Config) -> Part {
    if object.is_empty() {
        return Part::bracketed("{}");
    }

    let mut parts: Vec<Part> = schema
        .iter()
        .map(|key| {
            object
                .get(key)
                .map(|value| render_item(value, config))
                .unwrap_or_default()
        })
        .collect();
    parts.extend(
        object
            .iter()
            .filter(|(key, _)| !schema.contains(*key))
            .map(|(key, value)| render_field(key, value, config)),
    );
    enclose(Bracket::Object, &parts, config)
}

fn render_list<F>(items: &[Value], config: &Config, render: F) -> Part
where
    F: Fn(&Value) -> Part,
{
    if items.is_empty() {
        return Part::bracketed("[]");
    }
    let parts: Vec<Part> = items.iter().map(render).collect();
    enclose(Bracket::List, &parts, config)
}

/// Renders a keyed field without any schema: `key:v`, `key{ ...}` or `key[ ...]`.
fn render_field(key: &str, value: &Value, config: &Config) -> Part {
    match value {
        Value::Object(_) | Value::Array(_) => {
            Part::text(format!("{}{}", key, render_item(value, config).as_str()))
        }
        scalar => Part::text(format!("{}:{}", key, scalar)),
    }
}

/// Renders a value without any schema: scalars as text, objects as their fields,
/// lists as their items.
pub(crate) fn render_item(value: &Value, config: &Config) -> Part {
    match value {
        Value::Object(object) if object.is_empty() => Part::bracketed("{}"),
        Value::Object(object) => {
            let parts: Vec<Part> = object
                .iter()
                .map(|(key, value)| render_field(key, value, config))
                .collect();
            enclose(Bracket::Object, &parts, config)
        }
        Value::Array(items) => render_list(items, config, |item| render_item(item, config)),
        scalar => Part::text(scalar.to_string()),
    }
}
