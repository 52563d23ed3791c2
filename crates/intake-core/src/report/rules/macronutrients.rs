//! Macronutrient extraction and derived energy values.
//!
//! The pattern search is confined to the subsection between the
//! macronutrient heading and the next known heading. When that subsection is
//! missing, every field below keeps its default and no derivation runs.
//!
//! Default policies differ within this extractor: the four energy grams and
//! everything derived from them default to zero, and an unmatched gram
//! contributes zero to the derived total; the component fields and the
//! per-kg ratio stay absent like the rest of the pipeline.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::record::{Record, Value};

use super::patterns::MACRONUTRIENT_SECTION;
use super::MissingPolicy;

/// One energy-bearing macronutrient: gram field, derived fields, and the
/// fixed physiological energy density used to derive them.
struct EnergyMacro {
    gram_key: &'static str,
    kcal_key: &'static str,
    pct_key: &'static str,
    label: &'static str,
    kcal_per_gram: f64,
}

/// Energy macros, zero-default group.
const ENERGY_MACROS: [EnergyMacro; 4] = [
    EnergyMacro {
        gram_key: "Protein_g",
        kcal_key: "Protein_kcal",
        pct_key: "Protein_pct",
        label: "Protidi",
        kcal_per_gram: 4.0,
    },
    EnergyMacro {
        gram_key: "Carbs_g",
        kcal_key: "Carbs_kcal",
        pct_key: "Carbs_pct",
        label: "Glucidi",
        kcal_per_gram: 4.0,
    },
    EnergyMacro {
        gram_key: "Fats_g",
        kcal_key: "Fats_kcal",
        pct_key: "Fats_pct",
        label: "Lipidi",
        kcal_per_gram: 9.0,
    },
    EnergyMacro {
        gram_key: "Alcohol_g",
        kcal_key: "Alcohol_kcal",
        pct_key: "Alcohol_pct",
        label: "Alcool",
        kcal_per_gram: 7.0,
    },
];

const ENERGY_POLICY: MissingPolicy = MissingPolicy::Zero;

/// Non-energy component fields, absent-default group: (key, label, unit).
const COMPONENT_FIELDS: [(&str, &str, &str); 7] = [
    ("Protein_animal_g", "Proteine animali", "g"),
    ("Protein_veg_g", "Proteine vegetali", "g"),
    ("Cholesterol_mg", "Colesterolo", "mg"),
    ("Sugar_simple_g", "Zuccheri semplici", "g"),
    ("Sugar_complex_g", "Zuccheri complessi", "g"),
    ("Fiber_g", "Fibra", "g"),
    ("Water_g", "Acqua", "g"),
];

const COMPONENT_POLICY: MissingPolicy = MissingPolicy::Absent;

lazy_static! {
    static ref ENERGY_PATTERNS: Vec<Regex> = ENERGY_MACROS
        .iter()
        .map(|m| Regex::new(&format!(r"{} g ([\d.]+)", m.label)).unwrap())
        .collect();
    static ref COMPONENT_PATTERNS: Vec<Regex> = COMPONENT_FIELDS
        .iter()
        .map(|(_, label, unit)| Regex::new(&format!(r"{} {} ([\d.]+)", label, unit)).unwrap())
        .collect();
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Extract macronutrient grams and derived energy values into a partial
/// record. `weight_kg` is the externally supplied body weight used for the
/// per-kg ratio.
pub fn extract(numeric: &str, weight_kg: Option<f64>) -> Record {
    let mut record = Record::new();

    for m in &ENERGY_MACROS {
        record.insert(m.gram_key, ENERGY_POLICY.default_value());
        record.insert(m.kcal_key, ENERGY_POLICY.default_value());
        record.insert(m.pct_key, ENERGY_POLICY.default_value());
    }
    record.insert("Total_kcal", ENERGY_POLICY.default_value());
    record.insert("kcal_per_kg", None);
    for &(key, _, _) in &COMPONENT_FIELDS {
        record.insert(key, COMPONENT_POLICY.default_value());
    }

    let section = match MACRONUTRIENT_SECTION.captures(numeric) {
        Some(caps) => match caps.get(1) {
            Some(m) => m.as_str().to_string(),
            None => return record,
        },
        None => {
            debug!("macronutrient section not found, keeping defaults");
            return record;
        }
    };

    let mut grams = [0.0f64; 4];
    for (i, (m, re)) in ENERGY_MACROS.iter().zip(ENERGY_PATTERNS.iter()).enumerate() {
        if let Some(value) = re.captures(&section).and_then(|c| c[1].parse::<f64>().ok()) {
            grams[i] = value;
            record.insert(m.gram_key, Some(Value::Float(value)));
        }
    }

    for (&(key, _, _), re) in COMPONENT_FIELDS.iter().zip(COMPONENT_PATTERNS.iter()) {
        if let Some(value) = re.captures(&section).and_then(|c| c[1].parse::<f64>().ok()) {
            record.insert(key, Some(Value::Float(value)));
        }
    }

    let mut kcal = [0.0f64; 4];
    let mut total_kcal = 0.0;
    for (i, m) in ENERGY_MACROS.iter().enumerate() {
        kcal[i] = grams[i] * m.kcal_per_gram;
        record.insert(m.kcal_key, Some(Value::Float(kcal[i])));
        total_kcal += kcal[i];
    }
    record.insert("Total_kcal", Some(Value::Float(total_kcal)));

    if total_kcal > 0.0 {
        for (i, m) in ENERGY_MACROS.iter().enumerate() {
            record.insert(m.pct_key, Some(Value::Float(kcal[i] / total_kcal * 100.0)));
        }
    }

    if let Some(weight) = weight_kg {
        if total_kcal > 0.0 && weight > 0.0 {
            record.insert(
                "kcal_per_kg",
                Some(Value::Float(round2(total_kcal / weight))),
            );
        }
    }

    debug!("derived total of {:.1} kcal from macronutrient grams", total_kcal);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value should be present");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    const SECTION: &str = "MACRONUTRIENTI \
        Protidi g 50.0 \
        Glucidi g 200.0 \
        Lipidi g 70.0 \
        Alcool g 0.0 \
        Fibra g 28.9 \
        Acqua g 1850.2 \
        VITAMINE";

    #[test]
    fn test_derived_energy_values() {
        let record = extract(SECTION, Some(65.0));

        assert_close(record.float("Protein_kcal"), 200.0);
        assert_close(record.float("Carbs_kcal"), 800.0);
        assert_close(record.float("Fats_kcal"), 630.0);
        assert_close(record.float("Alcohol_kcal"), 0.0);
        assert_close(record.float("Total_kcal"), 1630.0);

        let protein_pct = record.float("Protein_pct").unwrap();
        let fats_pct = record.float("Fats_pct").unwrap();
        assert!((protein_pct - 12.27).abs() < 0.01);
        assert!((fats_pct - 38.65).abs() < 0.01);

        let pct_sum = record.float("Protein_pct").unwrap()
            + record.float("Carbs_pct").unwrap()
            + record.float("Fats_pct").unwrap()
            + record.float("Alcohol_pct").unwrap();
        assert!((pct_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_kcal_per_kg_rounded() {
        let record = extract(SECTION, Some(65.0));
        assert_eq!(record.float("kcal_per_kg"), Some(25.08));
    }

    #[test]
    fn test_kcal_per_kg_needs_positive_weight() {
        assert_eq!(extract(SECTION, None).get("kcal_per_kg"), None);
        assert_eq!(extract(SECTION, Some(0.0)).get("kcal_per_kg"), None);
    }

    #[test]
    fn test_section_miss_keeps_defaults() {
        let record = extract("Protidi g 50.0 Glucidi g 200.0", Some(65.0));

        assert_eq!(record.float("Protein_g"), Some(0.0));
        assert_eq!(record.float("Total_kcal"), Some(0.0));
        assert_eq!(record.float("Protein_pct"), Some(0.0));
        assert_eq!(record.get("kcal_per_kg"), None);
        assert_eq!(record.get("Fiber_g"), None);
    }

    #[test]
    fn test_unmatched_grams_default_to_zero_inside_section() {
        let record = extract("MACRONUTRIENTI Protidi g 50.0 VITAMINE", None);

        assert_eq!(record.float("Protein_g"), Some(50.0));
        assert_eq!(record.float("Carbs_g"), Some(0.0));
        assert_eq!(record.float("Fats_g"), Some(0.0));
        assert_close(record.float("Total_kcal"), 200.0);
        // percent shares still derive: protein carries all the energy
        assert_close(record.float("Protein_pct"), 100.0);
        // component fields keep the absent default, not zero
        assert_eq!(record.get("Water_g"), None);
        assert_eq!(record.get("Cholesterol_mg"), None);
    }

    #[test]
    fn test_component_fields_extracted() {
        let record = extract(SECTION, None);
        assert_eq!(record.float("Fiber_g"), Some(28.9));
        assert_eq!(record.float("Water_g"), Some(1850.2));
        assert_eq!(record.get("Protein_animal_g"), None);
    }

    #[test]
    fn test_pattern_outside_section_is_ignored() {
        let record = extract(
            "Protidi g 99.0 MACRONUTRIENTI Glucidi g 10.0 VITAMINE Protidi g 88.0",
            None,
        );
        assert_eq!(record.float("Protein_g"), Some(0.0));
        assert_eq!(record.float("Carbs_g"), Some(10.0));
    }

    #[test]
    fn test_record_key_order_matches_category_layout() {
        let keys: Vec<_> = extract("", None).keys().collect();
        assert_eq!(
            keys,
            vec![
                "Protein_g",
                "Protein_kcal",
                "Protein_pct",
                "Carbs_g",
                "Carbs_kcal",
                "Carbs_pct",
                "Fats_g",
                "Fats_kcal",
                "Fats_pct",
                "Alcohol_g",
                "Alcohol_kcal",
                "Alcohol_pct",
                "Total_kcal",
                "kcal_per_kg",
                "Protein_animal_g",
                "Protein_veg_g",
                "Cholesterol_mg",
                "Sugar_simple_g",
                "Sugar_complex_g",
                "Fiber_g",
                "Water_g",
            ]
        );
    }
}
