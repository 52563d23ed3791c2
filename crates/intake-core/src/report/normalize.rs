//! Text normalization for rendered report documents.

/// The two derived text variants of one document.
///
/// `display` keeps the report's original number formatting and is the only
/// variant safe for name/date fields; `numeric` has the report's locale
/// separators rewritten (`.` thousands removed, `,` decimal mapped to `.`)
/// and is the only variant safe for numeric parsing. Mixing them up corrupts
/// either alphabetic content or number values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Whitespace-flattened document text, original number formatting.
    pub display: String,
    /// Display text with numbers canonicalized to `.` decimals.
    pub numeric: String,
}

/// Normalize raw rendered document text.
///
/// Line breaks collapse to single spaces and the result is trimmed. The
/// numeric variant assumes the report's fixed locale convention
/// (`.` = thousands, `,` = decimal); a document using any other convention
/// mis-parses silently.
pub fn normalize(raw: &str) -> NormalizedText {
    let display = raw
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string();
    let numeric = display.replace('.', "").replace(',', ".");

    NormalizedText { display, numeric }
}
