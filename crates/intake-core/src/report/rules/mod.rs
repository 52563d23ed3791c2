//! Rule-based field extractors for nutrition reports.
//!
//! Each submodule is a pure function of normalized text to a partial
//! [`Record`](crate::models::record::Record); the parser merges them. The
//! large per-category vocabularies live in static tables (see [`tables`]);
//! adding a tracked nutrient is a data change, not a code change.

pub mod general;
pub mod macronutrients;
pub mod patterns;
pub mod statistics;
pub mod tables;

use regex::Regex;

use crate::models::record::Value;

/// Default policy for a field group when its pattern does not match.
///
/// The macronutrient energy grams default to zero and still enter the
/// derived total/percent math; every other group leaves unmatched fields
/// absent. Each field table names its policy explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Unmatched fields stay absent from the output.
    Absent,
    /// Unmatched fields resolve to `0.0`.
    Zero,
}

impl MissingPolicy {
    /// The record entry an unmatched field of this group starts from.
    pub(crate) fn default_value(self) -> Option<Value> {
        match self {
            MissingPolicy::Absent => None,
            MissingPolicy::Zero => Some(Value::Float(0.0)),
        }
    }
}

/// First numeric capture of `re` in `text`, parsed as f64.
///
/// A capture that fails to parse (a pathological `[\d.]+` match such as
/// `".."`) degrades to `None`; there is no parse-failure error kind.
pub(crate) fn capture_f64(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text).and_then(|caps| caps[1].parse().ok())
}

/// First numeric capture of `re` in `text`, parsed as i64.
pub(crate) fn capture_i64(re: &Regex, text: &str) -> Option<i64> {
    re.captures(text).and_then(|caps| caps[1].parse().ok())
}
