//! Config loading, validation and serialization.

use super::model::BuildConfiguration;
use super::schema;
use super::types::{DocumentFormat, LoadMode, LoadOptions};
use crate::error::{ConfigError, Result};
use crate::validate::{self, ValidationResult};
use std::path::Path;
use tracing::{debug, warn};

/// Source name used in errors for documents parsed from memory.
const INLINE_SOURCE: &str = "<inline>";

impl BuildConfiguration {
    /// Load and validate a document in strict mode.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the document; `.json` files are read as JSON,
    ///   anything else as YAML
    ///
    /// # Returns
    ///
    /// * `Ok(BuildConfiguration)` - Parsed and validated record
    /// * `Err(ConfigError::Io)` - The file could not be read
    /// * `Err(ConfigError::MalformedDocument)` - The structure does not match the schema
    /// * `Err(ConfigError::UnknownOption)` - Keys outside the schema are present
    /// * `Err(ConfigError::InvalidEnumValue)` - Validation found violations
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with(path, LoadOptions::default())
    }

    /// Load and validate a document with explicit options.
    pub fn load_with<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), mode = ?options.mode, "loading configuration");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&content, DocumentFormat::from_path(path), path, options)
    }

    /// Parse and validate a YAML document held in memory.
    pub fn from_yaml(yaml: &str, options: LoadOptions) -> Result<Self> {
        Self::parse(yaml, DocumentFormat::Yaml, Path::new(INLINE_SOURCE), options)
    }

    /// Parse and validate a JSON document held in memory.
    pub fn from_json(json: &str, options: LoadOptions) -> Result<Self> {
        Self::parse(json, DocumentFormat::Json, Path::new(INLINE_SOURCE), options)
    }

    /// Serialize the record to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::MalformedDocument {
            path: INLINE_SOURCE.into(),
            message: format!("failed to serialize to YAML: {}", e),
        })
    }

    /// Serialize the record to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::MalformedDocument {
            path: INLINE_SOURCE.into(),
            message: format!("failed to serialize to JSON: {}", e),
        })
    }

    /// Check enumerated values against their vocabularies.
    ///
    /// Never stops at the first problem; see [`validate::validate`].
    pub fn validate(&self) -> ValidationResult {
        validate::validate(self)
    }

    fn parse(text: &str, format: DocumentFormat, source: &Path, options: LoadOptions) -> Result<Self> {
        let malformed = |message: String| ConfigError::MalformedDocument {
            path: source.to_path_buf(),
            message,
        };

        // Untyped pass: syntax errors and the schema walk.
        let raw: serde_yaml::Value = match format {
            DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| malformed(e.to_string()))?,
            DocumentFormat::Json => serde_json::from_str(text).map_err(|e| malformed(e.to_string()))?,
        };

        let unknown = schema::unknown_keys(&raw);
        if !unknown.is_empty() {
            match options.mode {
                LoadMode::Strict => return Err(ConfigError::UnknownOption { paths: unknown }),
                LoadMode::Lenient => {
                    for field in &unknown {
                        warn!(path = %source.display(), field = %field, "ignoring unknown option");
                    }
                }
            }
        }

        // Typed pass. Unknown keys are skipped by serde, so a lenient load
        // leaves them out of the record.
        let config: Self = match format {
            DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| malformed(e.to_string()))?,
            DocumentFormat::Json => serde_json::from_str(text).map_err(|e| malformed(e.to_string()))?,
        };

        let result = config.validate();
        for warning in &result.warnings {
            warn!(path = %source.display(), field = %warning.field_path, "{}", warning.message);
        }
        result.into_result()?;

        debug!(
            path = %source.display(),
            globs = config.content_globs().len(),
            plugins = config.plugins.len(),
            "configuration loaded"
        );
        Ok(config)
    }
}
