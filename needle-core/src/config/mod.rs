//! Configuration types for Needle

use crate::types::{check_gap_penalty, OutputFormat};
use crate::NeedleError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub alignment: AlignmentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentConfig {
    #[serde(default = "default_gap_open")]
    pub gap_open: f64,
    #[serde(default = "default_gap_extend")]
    pub gap_extend: f64,
    /// Builtin matrix name or path to a substitution table file
    #[serde(default = "default_matrix")]
    pub matrix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Wrap width for text and FASTA output (0 = no wrap)
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

// Default value functions
fn default_gap_open() -> f64 { -10.0 }
fn default_gap_extend() -> f64 { -1.0 }
fn default_matrix() -> String { "BLOSUM62".to_string() }
fn default_line_width() -> usize { 60 }

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            gap_open: default_gap_open(),
            gap_extend: default_gap_extend(),
            matrix: default_matrix(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            line_width: default_line_width(),
        }
    }
}

impl Config {
    /// Reject penalties the aligner would refuse, before any file is read
    pub fn validate(&self) -> Result<(), NeedleError> {
        for (name, value) in [
            ("gap_open", self.alignment.gap_open),
            ("gap_extend", self.alignment.gap_extend),
        ] {
            check_gap_penalty(name, value).map_err(|e| match e {
                NeedleError::InvalidPenalty(msg) => {
                    NeedleError::Configuration(format!("alignment.{}", msg))
                }
                other => other,
            })?;
        }

        if self.alignment.matrix.trim().is_empty() {
            return Err(NeedleError::Configuration(
                "alignment.matrix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, NeedleError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| NeedleError::Configuration(format!("Failed to parse config: {}", e)))?;
    tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), NeedleError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| NeedleError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.alignment.gap_open, -10.0);
        assert_eq!(config.alignment.gap_extend, -1.0);
        assert_eq!(config.alignment.matrix, "BLOSUM62");

        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.line_width, 60);

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_valid_config() {
        let toml_content = r#"
[alignment]
gap_open = -11.0
gap_extend = -0.5
matrix = "data/BLOSUM62.mat"

[output]
format = "json"
line_width = 0
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.alignment.gap_open, -11.0);
        assert_eq!(config.alignment.gap_extend, -0.5);
        assert_eq!(config.alignment.matrix, "data/BLOSUM62.mat");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.line_width, 0);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[alignment]\ngap_open = -5.0\n").unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.alignment.gap_open, -5.0);
        assert_eq!(config.alignment.gap_extend, -1.0);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[alignment\ngap_open = ").unwrap();

        match load_config(temp_file.path()) {
            Err(NeedleError::Configuration(msg)) => assert!(msg.contains("Failed to parse config")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/needle.toml");
        assert!(matches!(result, Err(NeedleError::Io(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.alignment.gap_open = -12.0;
        config.output.format = OutputFormat::Fasta;

        save_config(temp_file.path(), &config).unwrap();
        let loaded = load_config(temp_file.path()).unwrap();

        assert_eq!(loaded.alignment.gap_open, -12.0);
        assert_eq!(loaded.output.format, OutputFormat::Fasta);
    }

    #[test]
    fn test_validate_rejects_positive_penalty() {
        let mut config = Config::default();
        config.alignment.gap_extend = 1.0;
        match config.validate() {
            Err(NeedleError::Configuration(msg)) => {
                assert_eq!(msg, "alignment.gap_extend must be <= 0, got 1")
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }

        let mut config = Config::default();
        config.alignment.gap_open = f64::NAN;
        match config.validate() {
            Err(NeedleError::Configuration(msg)) => {
                assert_eq!(msg, "alignment.gap_open must be finite, got NaN")
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_matrix() {
        let mut config = Config::default();
        config.alignment.matrix = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
