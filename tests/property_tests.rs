//! Property-based tests over generated record batches.
//!
//! Keys come from a small pool so that batches mix common and sparse keys, and
//! scalar strings avoid the delimiter so segments can be counted by splitting.

use minemizer::{analyze, build_header, minemize, row_segments, Config, Map, Value};
use proptest::prelude::*;

const KEYS: [&str; 6] = ["id", "name", "city", "score", "tag", "note"];

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{1,8}".prop_map(Value::from),
    ]
}

fn nested() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => scalar(),
        1 => prop::collection::vec(scalar(), 0..3).prop_map(Value::from),
        1 => prop::collection::vec((prop::sample::select(KEYS.to_vec()), scalar()), 0..3)
            .prop_map(|pairs| {
                Value::Object(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
            }),
    ]
}

fn record() -> impl Strategy<Value = Map> {
    prop::collection::vec((prop::sample::select(KEYS.to_vec()), nested()), 0..6)
        .prop_map(|pairs| pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn batch() -> impl Strategy<Value = Vec<Map>> {
    prop::collection::vec(record(), 1..12)
}

proptest! {
    #[test]
    fn prop_row_segment_counts(records in batch(), threshold in 0.0f64..=1.0) {
        let config = Config::default().with_sparsity_threshold(threshold);
        let header = build_header(&records, &config);
        for record in &records {
            let segments = row_segments(record, &header, &config);
            let extra = record
                .keys()
                .filter(|key| !header.iter().any(|element| &element.name == *key))
                .count();
            prop_assert_eq!(segments.len(), header.len() + extra);
        }
    }

    #[test]
    fn prop_output_line_count(records in batch()) {
        let output = minemize(&records, &Config::default());
        prop_assert_eq!(output.split('\n').count(), records.len() + 1);
    }

    #[test]
    fn prop_deterministic(records in batch()) {
        let config = Config::default();
        prop_assert_eq!(minemize(&records, &config), minemize(&records, &config));
    }

    #[test]
    fn prop_collapse_only_drops_spaces(records in batch()) {
        let plain = minemize(&records, &Config::default());
        let tight = minemize(&records, &Config::default().with_collapse_spaces(true));
        prop_assert!(tight.len() <= plain.len());
        prop_assert_eq!(tight.replace(' ', ""), plain.replace(' ', ""));
    }

    #[test]
    fn prop_collapse_keeps_scalar_text(
        rows in prop::collection::vec(
            prop::collection::vec("[a-z ;:{\\[]{1,8}", 3),
            1..6,
        )
    ) {
        let records: Vec<Map> = rows
            .into_iter()
            .map(|values| {
                KEYS.iter()
                    .zip(values)
                    .map(|(key, text)| (key.to_string(), Value::from(text)))
                    .collect()
            })
            .collect();
        let plain = minemize(&records, &Config::default());
        let tight = minemize(&records, &Config::default().with_collapse_spaces(true));
        prop_assert_eq!(tight, plain);
    }

    #[test]
    fn prop_threshold_boundary_is_inclusive(total in 1usize..20, present in 0usize..20) {
        let present = present.min(total);
        let records: Vec<Map> = (0..total)
            .map(|i| {
                let mut record = Map::new();
                record.insert("id".to_string(), Value::from(i as i64));
                if i < present {
                    record.insert("opt".to_string(), Value::from(true));
                }
                record
            })
            .collect();
        let threshold = present as f64 / total as f64;
        let analysis = analyze(&records, threshold);
        prop_assert_eq!(analysis.is_common("opt"), present > 0);
        prop_assert!(analysis.is_common("id"));
    }

    #[test]
    fn prop_header_fields_are_common(records in batch(), threshold in 0.0f64..=1.0) {
        let analysis = analyze(&records, threshold);
        let config = Config::default().with_sparsity_threshold(threshold);
        let names: Vec<String> = build_header(&records, &config)
            .into_iter()
            .map(|element| element.name)
            .collect();
        prop_assert_eq!(names, analysis.common);
    }
}
