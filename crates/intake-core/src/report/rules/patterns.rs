//! Compiled patterns for the fixed report phrasing.
//!
//! All numeric patterns expect normalized numbers (thousands separators
//! stripped, `.` decimal), so the capture shape is always `[\d.]+`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // General information (name/date/gender from display text)
    pub static ref PATIENT_NAME: Regex = Regex::new(
        r"Report del Calcolo intake alimentare\s+([A-Za-z\s]+?)\s+Visita del"
    ).unwrap();

    pub static ref VISIT_DATE: Regex = Regex::new(
        r"Visita del:\s*(\d{1,2}/\d{1,2}/\d{4})"
    ).unwrap();

    pub static ref GENDER: Regex = Regex::new(
        r"(?i)Sesso:\s*(Femmina|Maschio)"
    ).unwrap();

    // General information (physiological numbers from numeric text)
    pub static ref AGE: Regex = Regex::new(
        r"Età:\s*(\d+)"
    ).unwrap();

    pub static ref HEIGHT: Regex = Regex::new(
        r"Altezza:\s*cm\s*(\d+)"
    ).unwrap();

    pub static ref WEIGHT: Regex = Regex::new(
        r"Peso:\s*kg\s*([\d.]+)"
    ).unwrap();

    pub static ref BMI: Regex = Regex::new(
        r"BMI \(Body Mass Index\)\s*([\d.]+)"
    ).unwrap();

    pub static ref BSA: Regex = Regex::new(
        r"BSA \(Body Surface Area\)\s*m²\s*([\d.]+)"
    ).unwrap();

    pub static ref BMR: Regex = Regex::new(
        r"BMR \(Basal Metabolic Rate\)\s*kcal\s*([\d.]+)"
    ).unwrap();

    pub static ref TDEE: Regex = Regex::new(
        r"TDEE \(Total Daily Energy Expenditure\):\s*kcal\s*([\d.]+)"
    ).unwrap();

    // Statistics: paired kcal/percent deviations, matched as one pattern so
    // a missing phrase leaves both members of the pair absent
    pub static ref DIFF_TDEE: Regex = Regex::new(
        r"Differenza dal TDEE:\s*([\d.]+)\s*kcal\s*\(([\d.]+)\s*%\)"
    ).unwrap();

    pub static ref DIFF_BMR: Regex = Regex::new(
        r"Differenza dal BMR:\s*([\d.]+)\s*kcal\s*\(([\d.]+)\s*%\)"
    ).unwrap();

    // Statistics: per-body-weight ratios
    pub static ref PROTEIN_PER_KG_ACTUAL: Regex = Regex::new(
        r"Proteine per kg di peso attuale:\s*([\d.]+)\s*g"
    ).unwrap();

    pub static ref KCAL_PER_KG_ACTUAL: Regex = Regex::new(
        r"kcal per kg di peso attuale:\s*([\d.]+)\s*kcal"
    ).unwrap();

    pub static ref PROTEIN_PER_KG_IDEAL: Regex = Regex::new(
        r"Proteine per kg di peso ideale BMI:\s*([\d.]+)\s*g"
    ).unwrap();

    pub static ref KCAL_PER_KG_IDEAL: Regex = Regex::new(
        r"kcal per kg di peso ideale BMI:\s*([\d.]+)\s*kcal"
    ).unwrap();

    // Macronutrient section bounds: everything between the macronutrient
    // heading and the next known heading
    pub static ref MACRONUTRIENT_SECTION: Regex = Regex::new(
        r"(?s)MACRONUTRIENTI(.*?)VITAMINE"
    ).unwrap();
}
