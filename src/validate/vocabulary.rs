//! Vocabulary and hygiene checks over a `BuildConfiguration`.

use crate::config::{BuildConfiguration, DarkModeStrategy, KNOWN_FUTURE_FLAGS, VariantState};
use crate::error::{ConfigError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// A value outside its field's fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path of the offending value (e.g. `variants.border[3]`).
    pub field_path: String,
    /// The value as written.
    pub value: String,
    /// The accepted spellings.
    pub allowed: Vec<String>,
}

impl Violation {
    pub fn invalid_enum_value(
        field_path: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self {
            field_path: field_path.into(),
            value: value.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' is not one of: {}",
            self.field_path,
            self.value,
            self.allowed.join(", ")
        )
    }
}

/// A non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub field_path: String,
    pub message: String,
}

impl ValidationWarning {
    fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)
    }
}

/// Result of validating a record.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Whether validation passed (warnings do not count).
    pub passed: bool,
    /// Every violation found: `darkMode` first, then variant categories
    /// sorted by name, then `extend` categories sorted by name. States keep
    /// their document order within a category.
    pub violations: Vec<Violation>,
    /// Non-fatal findings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Convert into `Err(InvalidEnumValue)` when any violation was found.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>> {
        if self.passed {
            Ok(self.warnings)
        } else {
            Err(ConfigError::InvalidEnumValue {
                violations: self.violations,
            })
        }
    }

    /// Format the result as a user-friendly report.
    pub fn format_report(&self) -> String {
        let mut msg = String::new();

        if !self.violations.is_empty() {
            msg.push_str("Invalid values:\n");
            for violation in &self.violations {
                msg.push_str(&format!("  x {}\n", violation));
            }
        }

        if !self.warnings.is_empty() {
            msg.push_str("Warnings:\n");
            for warning in &self.warnings {
                msg.push_str(&format!("  ! {}\n", warning));
            }
        }

        if !self.passed {
            msg.push_str("\nFix: correct the listed fields in the configuration document.");
        }

        msg
    }
}

/// Validate a record, reporting every violation rather than the first.
///
/// # Examples
///
/// ```
/// use windcfg::config::{BuildConfiguration, LoadOptions};
///
/// let config = BuildConfiguration::from_yaml("purge: ['./*.fs']", LoadOptions::strict()).unwrap();
/// let result = windcfg::validate::validate(&config);
/// assert!(result.passed);
/// ```
pub fn validate(config: &BuildConfiguration) -> ValidationResult {
    let mut violations = Vec::new();
    let mut warnings = Vec::new();

    if let Some(setting) = &config.dark_mode
        && setting.strategy().is_none()
    {
        violations.push(Violation::invalid_enum_value(
            "darkMode",
            setting.to_string(),
            DarkModeStrategy::VOCABULARY,
        ));
    }

    check_state_sets(
        "variants",
        &config.variants.categories,
        &mut violations,
        &mut warnings,
    );
    check_state_sets(
        "variants.extend",
        &config.variants.extend,
        &mut violations,
        &mut warnings,
    );

    if config.content_globs().is_empty() {
        warnings.push(ValidationWarning::new(
            "content",
            "no content globs; the scan will not find any class names",
        ));
    }

    for (index, plugin) in config.plugins.iter().enumerate() {
        if let Some(first) = config.plugins[..index].iter().position(|p| p == plugin) {
            warnings.push(ValidationWarning::new(
                format!("plugins[{}]", index),
                format!("'{}' is already loaded at plugins[{}]", plugin, first),
            ));
        }
    }

    for flag in config.future.keys() {
        if !KNOWN_FUTURE_FLAGS.contains(&flag.as_str()) {
            warnings.push(ValidationWarning::new(
                format!("future.{}", flag),
                "unknown future flag is ignored",
            ));
        }
    }

    ValidationResult {
        passed: violations.is_empty(),
        violations,
        warnings,
    }
}

fn check_state_sets(
    prefix: &str,
    sets: &BTreeMap<String, Vec<String>>,
    violations: &mut Vec<Violation>,
    warnings: &mut Vec<ValidationWarning>,
) {
    let vocabulary = VariantState::vocabulary();

    for (category, states) in sets {
        for (index, state) in states.iter().enumerate() {
            let path = format!("{}.{}[{}]", prefix, category, index);

            if VariantState::from_str(state).is_none() {
                violations.push(Violation::invalid_enum_value(&path, state, &vocabulary));
            } else if states[..index].contains(state) {
                warnings.push(ValidationWarning::new(
                    path,
                    format!("duplicate state '{}'", state),
                ));
            }
        }
    }
}
