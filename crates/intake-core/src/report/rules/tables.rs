//! Table-driven category extractors: minerals, vitamins, amino acids,
//! fatty acids, ratios/indices, and INQ scores.
//!
//! All six categories share one algorithm: walk a static field table, build
//! a label-then-unit-then-number pattern, search the numeric text, and store
//! the first match or the group's missing-data default. Only the literal
//! tables and the pattern shape differ, so tracking a new nutrient is a pure
//! data change.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::record::{Record, Value};

use super::MissingPolicy;

/// One extractable field: output key, report label, optional unit text.
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Option<&'static str>,
}

/// How a category's label/unit pair is assembled into a search pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternShape {
    /// `label <ws> unit <ws> number` with mandatory whitespace.
    SpacedUnit,
    /// `label unit number` with optional whitespace.
    TightUnit,
    /// Escaped literal label directly followed by the number.
    Literal,
    /// Word-boundary anchored label, no unit. Labels are raw pattern
    /// fragments; entries whose label prefixes another in the same category
    /// carry their own trailing `\b`.
    Anchored,
}

/// A category of fields sharing one pattern shape and one missing policy.
pub struct CategorySpec {
    pub name: &'static str,
    pub shape: PatternShape,
    pub missing: MissingPolicy,
    pub fields: &'static [FieldSpec],
}

const fn field(key: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        label,
        unit: Some(unit),
    }
}

const fn bare(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        label,
        unit: None,
    }
}

const MINERAL_FIELDS: &[FieldSpec] = &[
    field("Calcio_mg", "Calcio", "mg"),
    field("Cromo_µg", "Cromo", "µg"),
    field("Ferro_mg", "Ferro", "mg"),
    field("Fluoruri_µg", "Fluoruri", "µg"),
    field("Fosforo_mg", "Fosforo", "mg"),
    field("Iodio_µg", "Iodio", "µg"),
    field("Magnesio_mg", "Magnesio", "mg"),
    field("Manganese_mg", "Manganese", "mg"),
    field("Molibdeno_µg", "Molibdeno", "µg"),
    field("Potassio_mg", "Potassio", "mg"),
    field("Rame_mg", "Rame", "mg"),
    field("Selenio_µg", "Selenio", "µg"),
    field("Sodio_mg", "Sodio", "mg"),
    field("Zinco_mg", "Zinco", "mg"),
];

const VITAMIN_FIELDS: &[FieldSpec] = &[
    field("Acido pantotenico_mg", "Acido pantotenico", "mg"),
    field("β-Carotene_µg", "β-Carotene", "µg"),
    field("Biotina_µg", "Biotina", "µg"),
    field("Folati_µg", "Folati", "µg"),
    field("Niacina_mg", "Niacina", "mg"),
    field("α-Tocoferolo_mg", "α-Tocoferolo", "mg"),
    field("Vitamina A_µg_RE", "Vitamina A", "µg RE"),
    field("Vitamina B1_mg", "Vitamina B1", "mg"),
    field("Vitamina B2_mg", "Vitamina B2", "mg"),
    field("Vitamina B6_mg", "Vitamina B6", "mg"),
    field("Vitamina B12_µg", "Vitamina B12", "µg"),
    field("Vitamina C_mg", "Vitamina C", "mg"),
    field("Vitamina D_µg", "Vitamina D", "µg"),
    field("Vitamina E_mg_TE", "Vitamina E", "mg TE"),
    field("Vitamina K_µg", "Vitamina K", "µg"),
];

const AMINO_ACID_FIELDS: &[FieldSpec] = &[
    field("Aspartic_mg", "Acido aspartico", "mg"),
    field("Glutamic_mg", "Acido glutamico", "mg"),
    field("Alanine_mg", "Alanina", "mg"),
    field("Arginine_mg", "Arginina", "mg"),
    field("Cysteine_mg", "Cisteina", "mg"),
    field("Phenylalanine_mg", "Fenilalanina", "mg"),
    field("Glycine_mg", "Glicina", "mg"),
    field("Isoleucine_mg", "Isoleucina", "mg"),
    field("Histidine_mg", "Istidina", "mg"),
    field("Leucine_mg", "Leucina", "mg"),
    field("Lysine_mg", "Lisina", "mg"),
    field("Methionine_mg", "Metionina", "mg"),
    field("Proline_mg", "Prolina", "mg"),
    field("Serine_mg", "Serina", "mg"),
    field("Threonine_mg", "Treonina", "mg"),
    field("Tyrosine_mg", "Tirosina", "mg"),
    field("Tryptophan_mg", "Triptofano", "mg"),
    field("Valine_mg", "Valina", "mg"),
];

const FATTY_ACID_FIELDS: &[FieldSpec] = &[
    field("Saturated", "Acidi grassi saturi", "g"),
    field("Unsaturated", "Acidi grassi insaturi", "g"),
    field("MonoUnsaturated", "Acidi grassi monoinsaturi", "g"),
    field("PolyUnsaturated", "Acidi grassi polinsaturi", "g"),
    field("Lauric", "Acido laurico", "g"),
    field("Myristic", "Acido miristico", "g"),
    field("Palmitic", "Acido palmitico", "g"),
    field("OtherSaturated", "Altri acidi grassi saturi", "g"),
    field("Oleic", "Acido oleico", "g"),
    field("OtherMonounsaturated", "Altri acidi grassi monoinsaturi", "g"),
    field("Linoleic", "Acido linoleico", "g"),
    field("Linolenic", "Acido linolenico", "g"),
    field("EPA", "Acido eicosapentaenoico", "g"),
    field("DHA", "Acido docosaesaenoico", "g"),
    field("Omega6", "AGPn-6", "g"),
    field("Omega3", "AGPn-3", "g"),
];

const RATIO_FIELDS: &[FieldSpec] = &[
    bare("Saturated_Unsaturated", "Acidi grassi saturi / insaturi"),
    bare("Mono_Poli_Unsaturated", "Acidi grassi monoinsaturi / polinsaturi"),
    bare("Animal_Vegetable", "Proteine animali / vegetali"),
    bare("MAI", "MAI - Adeguatezza mediterranea"),
    bare("IA", "IA - Aterogenicità"),
    bare("IT", "IT - Trombogenicità"),
    bare("CSI", "CSI - Colesterolo-acidi grassi saturi"),
];

const INQ_FIELDS: &[FieldSpec] = &[
    bare("INQ_Ca", "Calcio"),
    bare("INQ_Fe", "Ferro"),
    bare("INQ_Folati", "Folati"),
    bare("INQ_P", "Fosforo"),
    bare("INQ_Mg", "Magnesio"),
    bare("INQ_Mo", "Molibdeno"),
    bare("INQ_Niacina", "Niacina"),
    bare("INQ_Prot", "Protidi"),
    bare("INQ_Cu", "Rame"),
    bare("INQ_Se", "Selenio"),
    bare("INQ_VitA", "Vitamina A"),
    bare("INQ_VitB1", r"Vitamina B1\b"),
    bare("INQ_VitB12", r"Vitamina B12\b"),
    bare("INQ_VitB2", "Vitamina B2"),
    bare("INQ_VitB6", "Vitamina B6"),
    bare("INQ_VitC", "Vitamina C"),
    bare("INQ_VitD", "Vitamina D"),
    bare("INQ_Zn", "Zinco"),
];

/// All table-driven categories, in record layout order.
pub const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "minerals",
        shape: PatternShape::SpacedUnit,
        missing: MissingPolicy::Absent,
        fields: MINERAL_FIELDS,
    },
    CategorySpec {
        name: "vitamins",
        shape: PatternShape::SpacedUnit,
        missing: MissingPolicy::Absent,
        fields: VITAMIN_FIELDS,
    },
    CategorySpec {
        name: "amino_acids",
        shape: PatternShape::TightUnit,
        missing: MissingPolicy::Absent,
        fields: AMINO_ACID_FIELDS,
    },
    CategorySpec {
        name: "fatty_acids",
        shape: PatternShape::TightUnit,
        missing: MissingPolicy::Absent,
        fields: FATTY_ACID_FIELDS,
    },
    CategorySpec {
        name: "ratios",
        shape: PatternShape::Literal,
        missing: MissingPolicy::Absent,
        fields: RATIO_FIELDS,
    },
    CategorySpec {
        name: "inq",
        shape: PatternShape::Anchored,
        missing: MissingPolicy::Absent,
        fields: INQ_FIELDS,
    },
];

fn build_pattern(shape: PatternShape, field: &FieldSpec) -> String {
    match shape {
        PatternShape::SpacedUnit => format!(
            r"{}\s+{}\s+([\d.]+)",
            field.label,
            field.unit.unwrap_or_default()
        ),
        PatternShape::TightUnit => format!(
            r"{}\s*{}\s*([\d.]+)",
            field.label,
            field.unit.unwrap_or_default()
        ),
        PatternShape::Literal => format!(r"{}\s*([\d.]+)", regex::escape(field.label)),
        PatternShape::Anchored => format!(r"\b{}\s*([\d.]+)", field.label),
    }
}

struct CompiledCategory {
    spec: &'static CategorySpec,
    patterns: Vec<Regex>,
}

lazy_static! {
    static ref COMPILED: Vec<CompiledCategory> = CATEGORIES
        .iter()
        .map(|spec| CompiledCategory {
            spec,
            patterns: spec
                .fields
                .iter()
                .map(|field| Regex::new(&build_pattern(spec.shape, field)).unwrap())
                .collect(),
        })
        .collect();
}

/// Run all table-driven categories over the numeric text.
pub fn extract(numeric: &str) -> Record {
    let mut record = Record::new();

    for category in COMPILED.iter() {
        for (field, re) in category.spec.fields.iter().zip(category.patterns.iter()) {
            let value = re
                .captures(numeric)
                .and_then(|caps| caps[1].parse::<f64>().ok());
            match value {
                Some(v) => record.insert(field.key, Some(Value::Float(v))),
                None => record.insert(field.key, category.spec.missing.default_value()),
            }
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_minerals_label_unit_number() {
        let record = extract("MINERALI Calcio mg 980.4 Ferro mg 14.2 Selenio µg 55.0");

        assert_eq!(record.float("Calcio_mg"), Some(980.4));
        assert_eq!(record.float("Ferro_mg"), Some(14.2));
        assert_eq!(record.float("Selenio_µg"), Some(55.0));
        assert_eq!(record.get("Sodio_mg"), None);
    }

    #[test]
    fn test_vitamin_b12_does_not_populate_b1() {
        let record = extract("Vitamina B12 µg 2.5");

        assert_eq!(record.float("Vitamina B12_µg"), Some(2.5));
        assert_eq!(record.get("Vitamina B1_mg"), None);
        assert_eq!(record.get("INQ_VitB1"), None);
    }

    #[test]
    fn test_inq_anchor_skips_unit_bearing_occurrences() {
        // the mineral line carries a unit, so the INQ pattern must walk past
        // it to the bare label-number occurrence
        let record = extract("Calcio mg 980.4 INQ Calcio 0.8 Vitamina B12 2.1");

        assert_eq!(record.float("Calcio_mg"), Some(980.4));
        assert_eq!(record.float("INQ_Ca"), Some(0.8));
        assert_eq!(record.float("INQ_VitB12"), Some(2.1));
    }

    #[test]
    fn test_amino_and_fatty_acids() {
        let record = extract(
            "Acido aspartico mg 8900.1 Leucina mg 7200.4 \
             Acidi grassi saturi g 25.3 Acido oleico g 30.9 AGPn-3 g 1.8",
        );

        assert_eq!(record.float("Aspartic_mg"), Some(8900.1));
        assert_eq!(record.float("Leucine_mg"), Some(7200.4));
        assert_eq!(record.float("Saturated"), Some(25.3));
        assert_eq!(record.float("Oleic"), Some(30.9));
        assert_eq!(record.float("Omega3"), Some(1.8));
        assert_eq!(record.get("EPA"), None);
    }

    #[test]
    fn test_ratio_labels_match_literally() {
        let record = extract(
            "Acidi grassi saturi / insaturi 0.51 \
             MAI - Adeguatezza mediterranea 3.2 \
             IA - Aterogenicità 0.42",
        );

        assert_eq!(record.float("Saturated_Unsaturated"), Some(0.51));
        assert_eq!(record.float("MAI"), Some(3.2));
        assert_eq!(record.float("IA"), Some(0.42));
        assert_eq!(record.get("CSI"), None);
    }

    #[test]
    fn test_category_keys_are_unique() {
        let keys: Vec<&str> = CATEGORIES
            .iter()
            .flat_map(|c| c.fields.iter().map(|f| f.key))
            .collect();
        let unique: HashSet<&str> = keys.iter().copied().collect();
        assert_eq!(keys.len(), 88);
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn test_all_fields_carried_when_absent() {
        let record = extract("");
        assert_eq!(record.len(), 88);
        assert!(record.keys().all(|k| record.get(k).is_none()));
    }
}
