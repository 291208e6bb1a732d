//! Explicit merging of two independently loaded records.
//!
//! Nothing in windcfg merges documents implicitly; a caller that wants the
//! combined behavior of two sub-projects asks for it here.

use super::model::{BuildConfiguration, ContentConfig, ThemeConfig, VariantSelection};
use std::collections::BTreeMap;

impl BuildConfiguration {
    /// Combine `self` with `other` into a new record.
    ///
    /// - content globs and safelists: union, first-seen order
    /// - variant states: union per category, first-seen order
    /// - plugins: concatenation, order preserved, no dedup
    /// - theme tokens, future flags, `darkMode`: `other` wins per key
    ///
    /// Purging is enabled unless either side switches it off explicitly.
    pub fn merged_with(&self, other: &BuildConfiguration) -> BuildConfiguration {
        BuildConfiguration {
            content: merge_content(&self.content, &other.content),
            dark_mode: other.dark_mode.clone().or_else(|| self.dark_mode.clone()),
            theme: merge_theme(&self.theme, &other.theme),
            variants: merge_variants(&self.variants, &other.variants),
            plugins: self.plugins.iter().chain(&other.plugins).cloned().collect(),
            future: self
                .future
                .iter()
                .chain(&other.future)
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
        }
    }
}

fn merge_content(a: &ContentConfig, b: &ContentConfig) -> ContentConfig {
    let enabled = match (a.enabled, b.enabled) {
        (Some(false), _) | (_, Some(false)) => Some(false),
        (Some(true), _) | (_, Some(true)) => Some(true),
        (None, None) => None,
    };

    ContentConfig {
        files: union(&a.files, &b.files),
        enabled,
        safelist: union(&a.safelist, &b.safelist),
    }
}

fn merge_theme(a: &ThemeConfig, b: &ThemeConfig) -> ThemeConfig {
    ThemeConfig {
        extend: merge_scales(&a.extend, &b.extend),
        overrides: merge_scales(&a.overrides, &b.overrides),
    }
}

fn merge_scales<V: Clone>(
    a: &BTreeMap<String, BTreeMap<String, V>>,
    b: &BTreeMap<String, BTreeMap<String, V>>,
) -> BTreeMap<String, BTreeMap<String, V>> {
    let mut merged = a.clone();
    for (category, tokens) in b {
        let entry = merged.entry(category.clone()).or_default();
        for (name, value) in tokens {
            entry.insert(name.clone(), value.clone());
        }
    }
    merged
}

fn merge_variants(a: &VariantSelection, b: &VariantSelection) -> VariantSelection {
    VariantSelection {
        extend: merge_state_sets(&a.extend, &b.extend),
        categories: merge_state_sets(&a.categories, &b.categories),
    }
}

fn merge_state_sets(
    a: &BTreeMap<String, Vec<String>>,
    b: &BTreeMap<String, Vec<String>>,
) -> BTreeMap<String, Vec<String>> {
    let mut merged = a.clone();
    for (category, states) in b {
        let entry = merged.entry(category.clone()).or_default();
        *entry = union(entry, states);
    }
    merged
}

/// Ordered union: items of `a`, then items of `b` not seen yet.
fn union(a: &[String], b: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(a.len() + b.len());
    for item in a.iter().chain(b) {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}
