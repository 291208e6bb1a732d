//! Configuration types and fixed vocabularies for windcfg.
//!
//! This module defines the enums, vocabularies and small value types used
//! by the `BuildConfiguration` record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How conditional dark styling is triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DarkModeStrategy {
    /// No dark variants are generated (`darkMode: false`).
    #[default]
    Disabled,
    /// Dark variants follow `prefers-color-scheme` (`darkMode: media`).
    MediaQuery,
    /// Dark variants apply under an explicit `.dark` ancestor (`darkMode: class`).
    ExplicitClass,
}

impl DarkModeStrategy {
    /// Spellings accepted for `darkMode`, as shown to the author.
    pub const VOCABULARY: &'static [&'static str] = &["false (boolean)", "media", "class"];
}

/// The `darkMode` value exactly as written in the document.
///
/// Kept raw so that `validate` can report values outside the vocabulary
/// with their field path instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DarkModeSetting {
    Flag(bool),
    Name(String),
}

impl DarkModeSetting {
    /// Resolve to a strategy, or `None` if the value is outside the vocabulary.
    pub fn strategy(&self) -> Option<DarkModeStrategy> {
        match self {
            DarkModeSetting::Flag(false) => Some(DarkModeStrategy::Disabled),
            DarkModeSetting::Flag(true) => None,
            DarkModeSetting::Name(name) => match name.as_str() {
                "media" => Some(DarkModeStrategy::MediaQuery),
                "class" => Some(DarkModeStrategy::ExplicitClass),
                _ => None,
            },
        }
    }
}

impl From<DarkModeStrategy> for DarkModeSetting {
    fn from(strategy: DarkModeStrategy) -> Self {
        match strategy {
            DarkModeStrategy::Disabled => DarkModeSetting::Flag(false),
            DarkModeStrategy::MediaQuery => DarkModeSetting::Name("media".to_string()),
            DarkModeStrategy::ExplicitClass => DarkModeSetting::Name("class".to_string()),
        }
    }
}

impl fmt::Display for DarkModeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DarkModeSetting::Flag(flag) => write!(f, "{} (boolean)", flag),
            // A quoted "false" reads like the boolean unless tagged.
            DarkModeSetting::Name(name) if name == "true" || name == "false" => {
                write!(f, "{} (string)", name)
            }
            DarkModeSetting::Name(name) => f.write_str(name),
        }
    }
}

/// A conditional state a variant rule can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariantState {
    Responsive,
    Dark,
    GroupHover,
    GroupFocus,
    FocusWithin,
    FocusVisible,
    First,
    Last,
    Odd,
    Even,
    Hover,
    Focus,
    Active,
    Visited,
    Checked,
    Disabled,
    MotionSafe,
    MotionReduce,
}

impl VariantState {
    /// Every supported state, in canonical order.
    pub const ALL: &'static [VariantState] = &[
        VariantState::Responsive,
        VariantState::Dark,
        VariantState::GroupHover,
        VariantState::GroupFocus,
        VariantState::FocusWithin,
        VariantState::FocusVisible,
        VariantState::First,
        VariantState::Last,
        VariantState::Odd,
        VariantState::Even,
        VariantState::Hover,
        VariantState::Focus,
        VariantState::Active,
        VariantState::Visited,
        VariantState::Checked,
        VariantState::Disabled,
        VariantState::MotionSafe,
        VariantState::MotionReduce,
    ];

    /// The name used in documents and class prefixes.
    pub fn as_str(self) -> &'static str {
        match self {
            VariantState::Responsive => "responsive",
            VariantState::Dark => "dark",
            VariantState::GroupHover => "group-hover",
            VariantState::GroupFocus => "group-focus",
            VariantState::FocusWithin => "focus-within",
            VariantState::FocusVisible => "focus-visible",
            VariantState::First => "first",
            VariantState::Last => "last",
            VariantState::Odd => "odd",
            VariantState::Even => "even",
            VariantState::Hover => "hover",
            VariantState::Focus => "focus",
            VariantState::Active => "active",
            VariantState::Visited => "visited",
            VariantState::Checked => "checked",
            VariantState::Disabled => "disabled",
            VariantState::MotionSafe => "motion-safe",
            VariantState::MotionReduce => "motion-reduce",
        }
    }

    /// Parse a state name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|state| state.as_str() == s)
    }

    /// All state names, for error messages.
    pub fn vocabulary() -> Vec<&'static str> {
        Self::ALL.iter().map(|state| state.as_str()).collect()
    }
}

impl fmt::Display for VariantState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature flags the build tool recognizes under `future`.
pub const KNOWN_FUTURE_FLAGS: &[&str] = &[
    "removeDeprecatedGapUtilities",
    "purgeLayersByDefault",
    "defaultLineHeights",
    "standardFontWeights",
];

/// How keys outside the recognized schema are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Unknown keys fail the load with `UnknownOption`.
    #[default]
    Strict,
    /// Unknown keys are logged and dropped.
    Lenient,
}

impl FromStr for LoadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(LoadMode::Strict),
            "lenient" => Ok(LoadMode::Lenient),
            other => Err(format!(
                "unknown load mode '{}' (expected 'strict' or 'lenient')",
                other
            )),
        }
    }
}

/// Options for loading a configuration document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub mode: LoadMode,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self {
            mode: LoadMode::Strict,
        }
    }

    pub fn lenient() -> Self {
        Self {
            mode: LoadMode::Lenient,
        }
    }
}

/// On-disk encoding of a document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Token values under one theme category (e.g. `colors`).
///
/// Values are opaque to windcfg: strings, numbers or nested scales.
pub type TokenScale = BTreeMap<String, serde_yaml::Value>;

/// Default name of the configuration document.
pub const DEFAULT_DOCUMENT: &str = "windcfg.yaml";
