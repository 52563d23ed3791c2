//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the intake pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// PDF rendering configuration.
    pub pdf: PdfConfig,

    /// Tabular output configuration.
    pub output: OutputConfig,
}

/// PDF rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum rendered text length to consider a document usable.
    /// Anything shorter is treated as a rendering failure by the
    /// orchestrator, not by the core.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
        }
    }
}

/// Tabular output configuration. The writer owns display policy; the core
/// only guarantees unique keys and consistent typing per key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places for floating-point cells.
    pub float_precision: usize,

    /// Cell text for absent values.
    pub absent: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            float_precision: 2,
            absent: String::new(),
        }
    }
}

impl IntakeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_roundtrip() {
        let config = IntakeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: IntakeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.output.float_precision, 2);
        assert_eq!(back.pdf.min_text_length, 50);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: IntakeConfig =
            serde_json::from_str(r#"{"output":{"absent":"N/A"}}"#).unwrap();
        assert_eq!(config.output.absent, "N/A");
        assert_eq!(config.output.float_precision, 2);
    }
}
