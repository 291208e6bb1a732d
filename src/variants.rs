//! Variant plan: which states the build tool generates per category.

use crate::config::{BuildConfiguration, DarkModeStrategy, VariantState};
use crate::error::Result;
use std::collections::BTreeMap;

/// Ordered variant states per property category, ready for a consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantPlan {
    dark_mode: DarkModeStrategy,
    categories: BTreeMap<String, Vec<VariantState>>,
}

impl VariantPlan {
    /// Resolve the plan for a record.
    ///
    /// Explicit states come first, then `extend` states not already listed.
    /// With dark mode disabled, `dark` is dropped from every category.
    ///
    /// # Returns
    ///
    /// * `Err(ConfigError::InvalidEnumValue)` - The record does not validate
    pub fn resolve(config: &BuildConfiguration) -> Result<Self> {
        config.validate().into_result()?;

        let dark_mode = config.dark_mode_strategy().unwrap_or_default();
        let mut categories: BTreeMap<String, Vec<VariantState>> = BTreeMap::new();

        let explicit = config.variants.categories.iter();
        let extended = config.variants.extend.iter();
        for (category, names) in explicit.chain(extended) {
            let states = categories.entry(category.clone()).or_default();
            for state in names.iter().filter_map(|name| VariantState::from_str(name)) {
                if state == VariantState::Dark && dark_mode == DarkModeStrategy::Disabled {
                    continue;
                }
                if !states.contains(&state) {
                    states.push(state);
                }
            }
        }

        Ok(Self {
            dark_mode,
            categories,
        })
    }

    /// States generated for a category, in generation order.
    pub fn states_for(&self, category: &str) -> &[VariantState] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether a state is generated for a category.
    pub fn generates(&self, category: &str, state: VariantState) -> bool {
        self.states_for(category).contains(&state)
    }

    /// Categories with at least one configured state.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Selector or at-rule that guards dark rules; `None` when disabled.
    pub fn dark_selector(&self) -> Option<&'static str> {
        match self.dark_mode {
            DarkModeStrategy::Disabled => None,
            DarkModeStrategy::MediaQuery => Some("@media (prefers-color-scheme: dark)"),
            DarkModeStrategy::ExplicitClass => Some(".dark"),
        }
    }

    pub fn dark_mode(&self) -> DarkModeStrategy {
        self.dark_mode
    }
}
