//! Flat record and batch table models.
//!
//! A [`Record`] is the result of extracting one document: an
//! insertion-ordered mapping from output key to an optional typed value.
//! Absent fields keep their key in the record so every document in a batch
//! exposes the same schema to the tabular writer.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single extracted field value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Textual field (patient name, visit date).
    Text(String),
    /// Integer field (age, height, gender code).
    Int(i64),
    /// Floating-point field (everything measured or derived).
    Float(f64),
}

impl Value {
    /// The value as a float, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            Value::Text(_) => None,
        }
    }
}

/// Identity columns placed first in the derived table column order.
pub const IDENTITY_COLUMNS: &[&str] = &[
    "Patient_Name",
    "Visit_Date",
    "Gender",
    "Age_years",
    "Height_cm",
    "Weight_kg",
    "BMI",
];

/// One flat record per document.
///
/// Keys are unique across the whole field universe; each category extractor
/// contributes its own disjoint set. Entries preserve insertion order, which
/// drives the first-seen column ordering of the batch table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(&'static str, Option<Value>)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. An existing key is overwritten in place, keeping its
    /// original position; a new key is appended.
    pub fn insert(&mut self, key: &'static str, value: Option<Value>) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up a field value. Returns `None` for absent fields and for keys
    /// the record does not carry at all.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Whether the record carries the key, present or absent.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    /// Numeric field value, if present and numeric.
    pub fn float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Append all fields of another partial record.
    pub fn merge(&mut self, other: Record) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&Value>)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_ref()))
    }

    /// Number of fields, absent included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Ordered collection of records across one batch.
#[derive(Debug, Clone, Default)]
pub struct BatchTable {
    records: Vec<Record>,
}

impl BatchTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Insertion order is input document order.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// The records in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derived column ordering: identity columns first (those any record
    /// carries), then every other key in first-seen order across records.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut seen: Vec<&'static str> = Vec::new();
        for record in &self.records {
            for key in record.keys() {
                if !seen.contains(&key) {
                    seen.push(key);
                }
            }
        }

        let mut columns: Vec<&'static str> = IDENTITY_COLUMNS
            .iter()
            .filter_map(|id| seen.iter().find(|k| *k == id).copied())
            .collect();
        columns.extend(seen.into_iter().filter(|k| !IDENTITY_COLUMNS.contains(k)));
        columns
    }
}
