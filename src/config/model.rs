//! BuildConfiguration record and its sections.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The configuration consumed by the build tool.
///
/// This struct represents the contents of `windcfg.yaml` (or a `.json`
/// equivalent). Field names follow the document's camelCase keys. Once
/// loaded the record is never mutated; [`BuildConfiguration::merged_with`]
/// builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildConfiguration {
    /// Source files to scan for class names (`content`, formerly `purge`).
    #[serde(alias = "purge")]
    pub content: ContentConfig,

    /// Dark-mode strategy as written; absent means disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<DarkModeSetting>,

    /// Theme overrides and extensions.
    pub theme: ThemeConfig,

    /// Variant states to generate per property category.
    pub variants: VariantSelection,

    /// Plugin references, in load order.
    pub plugins: Vec<String>,

    /// Early opt-in flags for pending breaking changes.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub future: BTreeMap<String, bool>,
}

impl BuildConfiguration {
    /// Content globs, in document order.
    pub fn content_globs(&self) -> &[String] {
        &self.content.files
    }

    /// Resolved dark-mode strategy, or `None` if the written value is invalid.
    pub fn dark_mode_strategy(&self) -> Option<DarkModeStrategy> {
        match &self.dark_mode {
            None => Some(DarkModeStrategy::Disabled),
            Some(setting) => setting.strategy(),
        }
    }

    /// Whether a `future` flag is switched on.
    pub fn future_enabled(&self, flag: &str) -> bool {
        self.future.get(flag).copied().unwrap_or(false)
    }
}

/// Content scanning section.
///
/// Written either as a plain list of globs or as an object:
///
/// ```yaml
/// purge:
///   enabled: true
///   content: ["src/**/*.fs"]
///   safelist: ["bg-red-500"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContentRepr", into = "ContentRepr")]
pub struct ContentConfig {
    /// Glob patterns, relative to the source root.
    pub files: Vec<String>,
    /// Explicit on/off switch for purging; `None` defers to the build tool.
    pub enabled: Option<bool>,
    /// Class names retained even when no scanned file mentions them.
    pub safelist: Vec<String>,
}

impl ContentConfig {
    pub fn from_globs<I, S>(globs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: globs.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ContentRepr {
    Globs(Vec<String>),
    Detailed(DetailedContent),
}

#[derive(Serialize, Deserialize)]
struct DetailedContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(default)]
    content: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    safelist: Vec<String>,
}

impl From<ContentRepr> for ContentConfig {
    fn from(repr: ContentRepr) -> Self {
        match repr {
            ContentRepr::Globs(files) => ContentConfig {
                files,
                ..Default::default()
            },
            ContentRepr::Detailed(detailed) => ContentConfig {
                files: detailed.content,
                enabled: detailed.enabled,
                safelist: detailed.safelist,
            },
        }
    }
}

impl From<ContentConfig> for ContentRepr {
    fn from(config: ContentConfig) -> Self {
        if config.enabled.is_none() && config.safelist.is_empty() {
            ContentRepr::Globs(config.files)
        } else {
            ContentRepr::Detailed(DetailedContent {
                enabled: config.enabled,
                content: config.files,
                safelist: config.safelist,
            })
        }
    }
}

/// Theme section.
///
/// `extend` adds tokens on top of the built-in defaults; any other key is a
/// category whose defaults are replaced outright.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub extend: BTreeMap<String, TokenScale>,

    #[serde(flatten)]
    pub overrides: BTreeMap<String, TokenScale>,
}

impl ThemeConfig {
    pub fn is_empty(&self) -> bool {
        self.extend.is_empty() && self.overrides.is_empty()
    }
}

/// Variant section.
///
/// Maps a property category to the ordered states generated for it. A
/// nested `extend` mapping adds states on top of the tool's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantSelection {
    pub extend: BTreeMap<String, Vec<String>>,

    #[serde(flatten)]
    pub categories: BTreeMap<String, Vec<String>>,
}

impl VariantSelection {
    pub fn is_empty(&self) -> bool {
        self.extend.is_empty() && self.categories.is_empty()
    }
}
