//! Key frequency analysis.
//!
//! Partitions the keys of a set of objects into *common* keys (present in at
//! least `threshold` of the objects) and *sparse* keys (everything else). Both
//! lists keep first-seen order: objects are scanned in sequence and each key is
//! recorded the first time it appears.

use crate::Map;
use indexmap::IndexMap;
use log::trace;

/// The common/sparse partition of a set of objects' keys.
///
/// Every key present in at least one analyzed object appears in exactly one of
/// the two lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyAnalysis {
    pub common: Vec<String>,
    pub sparse: Vec<String>,
}

impl KeyAnalysis {
    /// Returns `true` if any key fell below the threshold.
    #[inline]
    #[must_use]
    pub fn has_sparse(&self) -> bool {
        !self.sparse.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_common(&self, key: &str) -> bool {
        self.common.iter().any(|k| k == key)
    }
}

/// Analyzes which keys occur often enough to be shared in a header.
///
/// A key is common when `count / objects.len() >= threshold`, so a key present
/// in exactly `threshold * N` of `N` objects is common.
///
/// # Examples
///
/// ```rust
/// use minemizer::{analyze, value, Value};
///
/// let objects: Vec<_> = [
///     value!({"name": "Alice", "city": "Oslo"}),
///     value!({"name": "Bob"}),
///     value!({"name": "Carol"}),
/// ]
/// .iter()
/// .filter_map(Value::as_object)
/// .cloned()
/// .collect();
///
/// let analysis = analyze(objects.iter(), 0.5);
/// assert_eq!(analysis.common, ["name"]);
/// assert_eq!(analysis.sparse, ["city"]);
/// ```
pub fn analyze<'a, I>(objects: I, threshold: f64) -> KeyAnalysis
where
    I: IntoIterator<Item = &'a Map>,
{
    let mut counts: IndexMap<&'a str, usize> = IndexMap::new();
    let mut total = 0usize;

    for object in objects {
        total += 1;
        for key in object.keys() {
            *counts.entry(key.as_str()).or_insert(0) += 1;
        }
    }

    if total == 0 {
        return KeyAnalysis::default();
    }

    let mut analysis = KeyAnalysis::default();
    for (key, count) in counts {
        if count as f64 / total as f64 >= threshold {
            analysis.common.push(key.to_string());
        } else {
            analysis.sparse.push(key.to_string());
        }
    }

    trace!(
        "analyzed {} objects: {} common keys, {} sparse keys",
        total,
        analysis.common.len(),
        analysis.sparse.len()
    );
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn object(keys: &[&str]) -> Map {
        keys.iter()
            .map(|k| (k.to_string(), Value::from(1)))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze(std::iter::empty::<&Map>(), 0.5);
        assert_eq!(analysis, KeyAnalysis::default());
        assert!(!analysis.has_sparse());
    }

    #[test]
    fn test_first_seen_order_not_alphabetical() {
        let objects = vec![object(&["zeta", "alpha"]), object(&["mid", "alpha", "zeta"])];
        let analysis = analyze(&objects, 0.5);
        assert_eq!(analysis.common, ["zeta", "alpha", "mid"]);
        assert!(analysis.sparse.is_empty());
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let objects = vec![
            object(&["a", "b"]),
            object(&["a", "b"]),
            object(&["a"]),
            object(&["a"]),
        ];
        let analysis = analyze(&objects, 0.5);
        assert_eq!(analysis.common, ["a", "b"]);

        let analysis = analyze(&objects, 0.51);
        assert_eq!(analysis.common, ["a"]);
        assert_eq!(analysis.sparse, ["b"]);
        assert!(analysis.is_common("a"));
        assert!(!analysis.is_common("b"));
    }

    #[test]
    fn test_zero_and_one_thresholds() {
        let objects = vec![object(&["a"]), object(&["b"])];
        assert_eq!(analyze(&objects, 0.0).common, ["a", "b"]);

        let analysis = analyze(&objects, 1.0);
        assert!(analysis.common.is_empty());
        assert_eq!(analysis.sparse, ["a", "b"]);
    }

    #[test]
    fn test_empty_objects_count_toward_total() {
        let objects = vec![object(&["a"]), object(&[]), object(&[])];
        let analysis = analyze(&objects, 0.5);
        assert_eq!(analysis.sparse, ["a"]);
    }
}
