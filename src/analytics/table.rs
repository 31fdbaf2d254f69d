//! Ranked result tables.
//!
//! Every aggregation produces an ordered `key -> value` mapping suitable for
//! tabular rendering. Sorting is stable, so entries with equal metrics keep
//! their first-appearance order.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

/// An ordered `key -> value` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedTable<V> {
    rows: Vec<(String, V)>,
}

/// Per-sender counts (messages, words, conversation boundaries).
pub type CountTable = RankedTable<u64>;

/// Per-sender floating-point metrics (averages, percentages).
pub type MetricTable = RankedTable<f64>;

impl<V: PartialOrd + Copy> RankedTable<V> {
    /// Builds a table from rows already in insertion order.
    pub fn new(rows: Vec<(String, V)>) -> Self {
        Self { rows }
    }

    /// Sorts descending by value (stable).
    #[must_use]
    pub fn sorted_desc(mut self) -> Self {
        self.rows
            .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        self
    }

    /// Sorts ascending by value (stable).
    #[must_use]
    pub fn sorted_asc(mut self) -> Self {
        self.rows
            .sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        self
    }

    /// Keeps only the first `n` rows.
    #[must_use]
    pub fn truncated(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    /// The ordered rows.
    pub fn rows(&self) -> &[(String, V)] {
        &self.rows
    }

    /// Looks a key up by exact name.
    pub fn get(&self, key: &str) -> Option<V> {
        self.rows.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over `(key, value)` rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, V)> {
        self.rows.iter()
    }
}

/// Accumulates per-key values preserving first-appearance order.
pub(crate) struct Accumulator<V> {
    index: HashMap<String, usize>,
    rows: Vec<(String, V)>,
}

impl<V: Default + PartialOrd + Copy> Accumulator<V> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            rows: Vec::new(),
        }
    }

    /// Returns a mutable slot for `key`, inserting a default on first sight.
    pub fn entry(&mut self, key: &str) -> &mut V {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                let idx = self.rows.len();
                self.index.insert(key.to_string(), idx);
                self.rows.push((key.to_string(), V::default()));
                idx
            }
        };
        &mut self.rows[idx].1
    }

    pub fn into_table(self) -> RankedTable<V> {
        RankedTable::new(self.rows)
    }
}

/// Rounds to 2 decimal places for display-ready metric values.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_desc_stable() {
        let table =
            RankedTable::new(vec![("a".into(), 1u64), ("b".into(), 3), ("c".into(), 3)])
                .sorted_desc();
        assert_eq!(
            table.rows(),
            &[("b".into(), 3), ("c".into(), 3), ("a".into(), 1)]
        );
    }

    #[test]
    fn test_sorted_asc() {
        let table =
            RankedTable::new(vec![("a".into(), 2.5f64), ("b".into(), 0.5)]).sorted_asc();
        assert_eq!(table.rows()[0].0, "b");
    }

    #[test]
    fn test_truncated() {
        let table = RankedTable::new(vec![("a".into(), 1u64), ("b".into(), 2)]).truncated(1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_get() {
        let table = RankedTable::new(vec![("Alice".into(), 4u64)]);
        assert_eq!(table.get("Alice"), Some(4));
        assert_eq!(table.get("alice"), None);
    }

    #[test]
    fn test_accumulator_first_appearance_order() {
        let mut acc: Accumulator<u64> = Accumulator::new();
        *acc.entry("Bob") += 1;
        *acc.entry("Alice") += 1;
        *acc.entry("Bob") += 1;
        let table = acc.into_table();
        assert_eq!(table.rows(), &[("Bob".into(), 2), ("Alice".into(), 1)]);
    }

    #[test]
    fn test_round2() {
        assert!((round2(1.005 + 0.0001) - 1.01).abs() < 1e-9);
        assert!((round2(5.0) - 5.0).abs() < f64::EPSILON);
        assert!((round2(1.0 / 3.0) - 0.33).abs() < 1e-9);
    }

    #[test]
    fn test_serialize_transparent() {
        let table = RankedTable::new(vec![("Alice".into(), 2u64)]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[["Alice",2]]"#);
    }
}
