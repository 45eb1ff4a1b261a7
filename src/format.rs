//! Output Format Reference
//!
//! This module documents the text produced by this crate. It contains no code.
//!
//! # Overview
//!
//! A batch of records becomes one header line followed by one line per record.
//! Keys shared by enough records are listed once in the header; each row then
//! gives those fields positionally, followed by any remaining fields written out
//! as `key:value`.
//!
//! ```text
//! name; age
//! Alice; 30
//! Bob; 25
//! ```
//!
//! # Header
//!
//! The header lists the *common* keys of the batch: keys whose presence ratio
//! (records containing the key divided by all records) is at least the sparsity
//! threshold (default `0.5`). Keys appear in first-seen order, never sorted.
//!
//! Fields whose non-null values are all objects, or all lists of objects, carry
//! their nested schema, inferred the same way one level down:
//!
//! ```text
//! id; owner{ name; team}; items[{ sku; qty; ...}]; tags[]
//! ```
//!
//! - `owner{ name; team}`: every `owner` is an object; `name` and `team` are common
//! - `items[{ sku; qty; ...}]`: lists of objects; `...` marks nested keys below
//!   the threshold
//! - `tags[]`: lists of anything else
//!
//! # Rows
//!
//! Each row has exactly one segment per header field, in header order, even when
//! the record lacks the field or holds null (the segment is then empty):
//!
//! ```text
//! a; b; c
//! 1; ; 3
//! ```
//!
//! Nested values follow their schema. Schema keys missing from a value leave an
//! empty slot, and keys outside the schema follow as `key:value`:
//!
//! ```text
//! loc{ city; ...}
//! { Oslo; zip:0150}
//! { ; country:PE}
//! ```
//!
//! # Sparse Fields
//!
//! Keys below the threshold never enter the header. Rows that have them append
//! them after the positional segments, in the record's own key order:
//!
//! ```text
//! name
//! Alice
//! Charlie; city:NYC; meta{ k1:v1; k2:v2}; tags[ x; y]
//! ```
//!
//! # Scalars
//!
//! | Value | Text |
//! |-------|------|
//! | Boolean | `true` / `false` |
//! | Integer | `42`, `-7`, big integers in full |
//! | Float | `2.5`; whole floats keep `.0` (`30.0`) |
//! | String | verbatim, never quoted |
//! | Null (nested) | `null` |
//!
//! # Presets
//!
//! ```rust
//! use minemizer::{to_string_with_options, EncodeOptions, Preset};
//! use serde_json::json;
//!
//! let data = json!([{"project": "Phoenix", "status": "Active"}]);
//! let md = to_string_with_options(&data, Preset::Markdown.into()).unwrap();
//! assert_eq!(md, "|project| status|\n|---| ---|\n|Phoenix| Active|");
//!
//! let tsv = to_string_with_options(&data, EncodeOptions::from(Preset::Tsv)).unwrap();
//! assert_eq!(tsv, "project\tstatus\nPhoenix\tActive");
//! ```
//!
//! # Whitespace Collapsing
//!
//! With `collapse_spaces` enabled (and `use_spaces` on), spaces left between a
//! delimiter and an empty segment or an opening bracket are removed:
//!
//! ```rust
//! use minemizer::{to_string_with_options, EncodeOptions};
//! use serde_json::json;
//!
//! let data = json!([{"a": 1, "b": {"c": 2}}, {"b": {"c": 3}}]);
//! let out = to_string_with_options(&data, EncodeOptions::new().with_collapse_spaces(true)).unwrap();
//! assert_eq!(out, "a; b{ c}\n1;{ 2}\n;{ 3}");
//! ```
