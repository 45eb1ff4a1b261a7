//! Header inference.
//!
//! The header is the ordered list of fields shared by the batch. Each
//! [`HeaderElement`] records a field's name and shape, and for object-valued
//! fields (or lists of objects) the nested schema inferred one level down.
//!
//! ## Header String Form
//!
//! | Kind | Rendering |
//! |------|-----------|
//! | Scalar | `name` |
//! | Object | `name{ a; b}`, or `name{ a; b; ...}` when values carry extra keys |
//! | List of objects | `name[{ a; b}]` |
//! | List of scalars | `name[]` |
//!
//! ```rust
//! use minemizer::{build_header, value, Config, Value};
//!
//! let records: Vec<_> = [
//!     value!({"id": 1, "tags": ["a"], "owner": {"name": "Ann"}}),
//!     value!({"id": 2, "tags": [], "owner": {"name": "Ben", "team": "ops"}}),
//! ]
//! .iter()
//! .filter_map(Value::as_object)
//! .cloned()
//! .collect();
//!
//! let config = Config::default();
//! let header = build_header(&records, &config);
//! let rendered: Vec<_> = header.iter().map(|h| h.render(&config)).collect();
//! assert_eq!(rendered, ["id", "tags[]", "owner{ name; team}"]);
//! ```

use crate::analyze::{analyze, KeyAnalysis};
use crate::{Config, Map, Value};
use log::trace;

/// Encoding shape of a header field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Object,
    ListOfScalar,
    ListOfObject,
}

/// One field of the shared header.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderElement {
    pub name: String,
    pub kind: FieldKind,
    /// Common nested keys in first-seen order; empty unless the kind is
    /// [`FieldKind::Object`] or [`FieldKind::ListOfObject`].
    pub subschema: Vec<String>,
    /// Whether the nested analysis found keys below the threshold.
    pub has_sparse_subfields: bool,
}

impl HeaderElement {
    /// A plain scalar column.
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        HeaderElement {
            name: name.into(),
            kind: FieldKind::Scalar,
            subschema: Vec::new(),
            has_sparse_subfields: false,
        }
    }

    fn nested(name: &str, kind: FieldKind, analysis: KeyAnalysis) -> Self {
        HeaderElement {
            name: name.to_string(),
            kind,
            has_sparse_subfields: analysis.has_sparse(),
            subschema: analysis.common,
        }
    }

    /// Renders this element as it appears in the header line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minemizer::{Config, FieldKind, HeaderElement};
    ///
    /// let element = HeaderElement {
    ///     name: "meta".to_string(),
    ///     kind: FieldKind::Object,
    ///     subschema: vec![],
    ///     has_sparse_subfields: true,
    /// };
    /// assert_eq!(element.render(&Config::default()), "meta{ ...}");
    /// ```
    #[must_use]
    pub fn render(&self, config: &Config) -> String {
        match self.kind {
            FieldKind::Scalar => self.name.clone(),
            FieldKind::ListOfScalar => format!("{}[]", self.name),
            FieldKind::Object => format!("{}{}", self.name, self.render_schema(config)),
            FieldKind::ListOfObject => format!("{}[{}]", self.name, self.render_schema(config)),
        }
    }

    fn render_schema(&self, config: &Config) -> String {
        let delimiter = config.spaced_delimiter();
        let mut schema = self.subschema.join(delimiter.as_str());
        if self.has_sparse_subfields {
            if !schema.is_empty() {
                schema.push_str(&delimiter);
            }
            schema.push_str(&config.sparse_indicator);
        }
        format!("{}{}{}", config.dict_open(), schema, config.dict_close())
    }
}

/// Infers the header for a batch of records.
///
/// Candidate fields are the keys common to the batch at `config.sparsity_threshold`,
/// in first-seen order. Each candidate is classified from its non-null values:
/// all objects gives an object schema, all arrays whose elements are all objects
/// gives a list-of-object schema, any other all-array field is a list of scalars,
/// and everything else (mixed shapes, or only nulls) is a scalar column.
#[must_use]
pub fn build_header(records: &[Map], config: &Config) -> Vec<HeaderElement> {
    let threshold = config.sparsity_threshold;
    let top = analyze(records, threshold);

    top.common
        .iter()
        .map(|key| {
            let element = classify(key, records, threshold);
            trace!(
                "header field '{}': {:?}, {} nested keys, sparse={}",
                element.name,
                element.kind,
                element.subschema.len(),
                element.has_sparse_subfields
            );
            element
        })
        .collect()
}

fn classify(key: &str, records: &[Map], threshold: f64) -> HeaderElement {
    let values: Vec<&Value> = records
        .iter()
        .filter_map(|record| record.get(key))
        .filter(|value| !value.is_null())
        .collect();

    if values.is_empty() {
        return HeaderElement::scalar(key);
    }

    if let Some(objects) = all_objects(values.iter().copied()) {
        return HeaderElement::nested(key, FieldKind::Object, analyze(objects, threshold));
    }

    if values.iter().all(|value| value.is_array()) {
        let items: Vec<&Value> = values
            .iter()
            .filter_map(|value| value.as_array())
            .flatten()
            .collect();

        if !items.is_empty() {
            if let Some(objects) = all_objects(items.iter().copied()) {
                return HeaderElement::nested(
                    key,
                    FieldKind::ListOfObject,
                    analyze(objects, threshold),
                );
            }
        }

        return HeaderElement {
            kind: FieldKind::ListOfScalar,
            ..HeaderElement::scalar(key)
        };
    }

    HeaderElement::scalar(key)
}

/// Returns the objects if every value is one.
fn all_objects<'a, I>(values: I) -> Option<Vec<&'a Map>>
where
    I: IntoIterator<Item = &'a Value>,
{
    values.into_iter().map(Value::as_object).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    fn records(values: Vec<Value>) -> Vec<Map> {
        values
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect()
    }

    fn rendered(records: &[Map], config: &Config) -> Vec<String> {
        build_header(records, config)
            .iter()
            .map(|h| h.render(config))
            .collect()
    }

    #[test]
    fn test_scalar_fields() {
        let batch = records(vec![
            value!({"name": "Alice", "age": 30}),
            value!({"name": "Bob", "age": 25}),
        ]);
        let header = build_header(&batch, &Config::default());
        assert_eq!(header.len(), 2);
        assert!(header.iter().all(|h| h.kind == FieldKind::Scalar));
    }

    #[test]
    fn test_object_field_with_sparse_subkeys() {
        let batch = records(vec![
            value!({"loc": {"city": "Oslo", "zip": "0150"}}),
            value!({"loc": {"city": "Rome"}}),
            value!({"loc": {"city": "Lima"}}),
        ]);
        let header = build_header(&batch, &Config::default());
        assert_eq!(header[0].kind, FieldKind::Object);
        assert_eq!(header[0].subschema, ["city"]);
        assert!(header[0].has_sparse_subfields);
        assert_eq!(rendered(&batch, &Config::default()), ["loc{ city; ...}"]);
    }

    #[test]
    fn test_list_of_objects() {
        let batch = records(vec![
            value!({"items": [{"sku": "A", "qty": 1}, {"sku": "B", "qty": 2}]}),
            value!({"items": []}),
        ]);
        let header = build_header(&batch, &Config::default());
        assert_eq!(header[0].kind, FieldKind::ListOfObject);
        assert_eq!(header[0].subschema, ["sku", "qty"]);
        assert_eq!(rendered(&batch, &Config::default()), ["items[{ sku; qty}]"]);
    }

    #[test]
    fn test_lists_degrade_to_scalar_lists() {
        let batch = records(vec![
            value!({"empty": [], "mixed": [{"a": 1}, 2]}),
            value!({"empty": [], "mixed": []}),
        ]);
        let header = build_header(&batch, &Config::default());
        assert_eq!(header[0].kind, FieldKind::ListOfScalar);
        assert_eq!(header[1].kind, FieldKind::ListOfScalar);
        assert!(header[1].subschema.is_empty());
    }

    #[test]
    fn test_mixed_and_null_fields_are_scalar() {
        let batch = records(vec![
            value!({"v": {"a": 1}, "n": null}),
            value!({"v": 3, "n": null}),
        ]);
        let header = build_header(&batch, &Config::default());
        assert_eq!(header[0].kind, FieldKind::Scalar);
        assert_eq!(header[1].kind, FieldKind::Scalar);
    }

    #[test]
    fn test_nulls_do_not_break_object_detection() {
        let batch = records(vec![
            value!({"owner": {"name": "Ann"}}),
            value!({"owner": null}),
        ]);
        let header = build_header(&batch, &Config::default());
        assert_eq!(header[0].kind, FieldKind::Object);
        assert_eq!(header[0].subschema, ["name"]);
        assert!(!header[0].has_sparse_subfields);
    }

    #[test]
    fn test_sparse_top_level_keys_excluded() {
        let batch = records(vec![
            value!({"name": "Alice"}),
            value!({"name": "Bob"}),
            value!({"name": "Charlie", "city": "NYC"}),
        ]);
        assert_eq!(rendered(&batch, &Config::default()), ["name"]);
    }

    #[test]
    fn test_render_without_spaces() {
        let config = Config::default().with_use_spaces(false).with_delimiter(",");
        let batch = records(vec![
            value!({"p": {"x": 1, "y": 2}, "l": [{"k": 1}]}),
            value!({"p": {"x": 3}, "l": [{"k": 2}]}),
        ]);
        assert_eq!(rendered(&batch, &config), ["p{x,y}", "l[{k}]"]);
    }

    #[test]
    fn test_custom_sparse_indicator() {
        let config = Config::default()
            .with_sparse_indicator("+")
            .with_sparsity_threshold(1.0);
        let batch = records(vec![
            value!({"o": {"a": 1, "b": 2}}),
            value!({"o": {"a": 1}}),
        ]);
        assert_eq!(rendered(&batch, &config), ["o{ a; +}"]);
    }

    #[test]
    fn test_empty_objects_render_empty_schema() {
        let batch = records(vec![value!({"o": {}}), value!({"o": {}})]);
        assert_eq!(rendered(&batch, &Config::default()), ["o{ }"]);
    }
}
