//! Statistics section extraction.
//!
//! Two deviation pairs (vs TDEE and vs BMR) are matched as single patterns
//! capturing kcal and percent together, so a missing phrase leaves both
//! members of its pair absent. The four per-body-weight ratios are
//! independent optional matches.

use crate::models::record::{Record, Value};

use super::capture_f64;
use super::patterns::{
    DIFF_BMR, DIFF_TDEE, KCAL_PER_KG_ACTUAL, KCAL_PER_KG_IDEAL, PROTEIN_PER_KG_ACTUAL,
    PROTEIN_PER_KG_IDEAL,
};

/// Extract the statistics fields from numeric text into a partial record.
pub fn extract(numeric: &str) -> Record {
    let mut record = Record::new();

    let tdee = DIFF_TDEE.captures(numeric).and_then(|caps| {
        let kcal: f64 = caps[1].parse().ok()?;
        let pct: f64 = caps[2].parse().ok()?;
        Some((kcal, pct))
    });
    record.insert("Diff_TDEE_kcal", tdee.map(|(kcal, _)| Value::Float(kcal)));
    record.insert("Diff_TDEE_pct", tdee.map(|(_, pct)| Value::Float(pct)));

    let bmr = DIFF_BMR.captures(numeric).and_then(|caps| {
        let kcal: f64 = caps[1].parse().ok()?;
        let pct: f64 = caps[2].parse().ok()?;
        Some((kcal, pct))
    });
    record.insert("Diff_BMR_kcal", bmr.map(|(kcal, _)| Value::Float(kcal)));
    record.insert("Diff_BMR_pct", bmr.map(|(_, pct)| Value::Float(pct)));

    record.insert(
        "Protein_per_kg_actual_g",
        capture_f64(&PROTEIN_PER_KG_ACTUAL, numeric).map(Value::Float),
    );
    record.insert(
        "Kcal_per_kg_actual_kcal",
        capture_f64(&KCAL_PER_KG_ACTUAL, numeric).map(Value::Float),
    );
    record.insert(
        "Protein_per_kg_ideal_g",
        capture_f64(&PROTEIN_PER_KG_IDEAL, numeric).map(Value::Float),
    );
    record.insert(
        "Kcal_per_kg_ideal_kcal",
        capture_f64(&KCAL_PER_KG_IDEAL, numeric).map(Value::Float),
    );

    record
}
