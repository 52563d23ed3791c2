//! General patient information extraction.
//!
//! Name, date and gender come from the display text; the pattern anchors on
//! the report's fixed phrasing. All physiological numbers come from the
//! numeric text. Every field is independently optional.

use crate::models::record::{Record, Value};
use crate::report::normalize::NormalizedText;

use super::patterns::{AGE, BMI, BMR, BSA, GENDER, HEIGHT, PATIENT_NAME, TDEE, VISIT_DATE, WEIGHT};
use super::{capture_f64, capture_i64};

/// Gender code for "Femmina".
const GENDER_FEMALE: i64 = 0;
/// Gender code for "Maschio".
const GENDER_MALE: i64 = 1;

/// Extract general patient information into a partial record.
pub fn extract(text: &NormalizedText) -> Record {
    let mut record = Record::new();

    let name = PATIENT_NAME
        .captures(&text.display)
        .map(|caps| caps[1].trim().to_string());
    record.insert("Patient_Name", name.map(Value::Text));

    let date = VISIT_DATE
        .captures(&text.display)
        .map(|caps| caps[1].trim().to_string());
    record.insert("Visit_Date", date.map(Value::Text));

    let gender = GENDER.captures(&text.display).and_then(|caps| {
        let label = &caps[1];
        if label.eq_ignore_ascii_case("Femmina") {
            Some(GENDER_FEMALE)
        } else if label.eq_ignore_ascii_case("Maschio") {
            Some(GENDER_MALE)
        } else {
            None
        }
    });
    record.insert("Gender", gender.map(Value::Int));

    record.insert("Age_years", capture_i64(&AGE, &text.numeric).map(Value::Int));
    record.insert(
        "Height_cm",
        capture_i64(&HEIGHT, &text.numeric).map(Value::Int),
    );
    record.insert(
        "Weight_kg",
        capture_f64(&WEIGHT, &text.numeric).map(Value::Float),
    );
    record.insert("BMI", capture_f64(&BMI, &text.numeric).map(Value::Float));
    record.insert("BSA_m2", capture_f64(&BSA, &text.numeric).map(Value::Float));
    record.insert(
        "BMR_kcal",
        capture_f64(&BMR, &text.numeric).map(Value::Float),
    );
    record.insert(
        "TDEE_kcal",
        capture_f64(&TDEE, &text.numeric).map(Value::Float),
    );

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::normalize::normalize;
    use pretty_assertions::assert_eq;

    const REPORT_HEADER: &str = "Report del Calcolo intake alimentare\n\
        Mario Rossi\n\
        Visita del: 12/03/2024\n\
        Sesso: Maschio\n\
        Età: 45\n\
        Altezza: cm 178\n\
        Peso: kg 82,5\n\
        BMI (Body Mass Index) 26,1\n\
        BSA (Body Surface Area) m² 2,01\n\
        BMR (Basal Metabolic Rate) kcal 1.720,5\n\
        TDEE (Total Daily Energy Expenditure): kcal 2.666,8";

    #[test]
    fn test_extract_full_header() {
        let record = extract(&normalize(REPORT_HEADER));

        assert_eq!(
            record.get("Patient_Name"),
            Some(&Value::Text("Mario Rossi".into()))
        );
        assert_eq!(
            record.get("Visit_Date"),
            Some(&Value::Text("12/03/2024".into()))
        );
        assert_eq!(record.get("Gender"), Some(&Value::Int(1)));
        assert_eq!(record.get("Age_years"), Some(&Value::Int(45)));
        assert_eq!(record.get("Height_cm"), Some(&Value::Int(178)));
        assert_eq!(record.float("Weight_kg"), Some(82.5));
        assert_eq!(record.float("BMI"), Some(26.1));
        assert_eq!(record.float("BSA_m2"), Some(2.01));
        assert_eq!(record.float("BMR_kcal"), Some(1720.5));
        assert_eq!(record.float("TDEE_kcal"), Some(2666.8));
    }

    #[test]
    fn test_gender_case_insensitive() {
        let record = extract(&normalize("Sesso: femmina"));
        assert_eq!(record.get("Gender"), Some(&Value::Int(0)));

        let record = extract(&normalize("Sesso: MASCHIO"));
        assert_eq!(record.get("Gender"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let record = extract(&normalize("Peso: kg 65,0"));

        assert_eq!(record.float("Weight_kg"), Some(65.0));
        assert_eq!(record.get("Patient_Name"), None);
        assert_eq!(record.get("Gender"), None);
        assert_eq!(record.get("TDEE_kcal"), None);
        // the keys are still carried, for a stable schema
        assert!(record.contains_key("Patient_Name"));
        assert_eq!(record.len(), 10);
    }
}
