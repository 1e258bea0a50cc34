//! Default-selection builders for the two selection modes.

use crate::assessment::SelectionSet;
use crate::catalog::{Catalog, Category, RiskTier};
use crate::directory::RiskProfile;
use std::collections::HashMap;

impl SelectionSet {
    /// Simple mode: fan one tier choice per category out to every criterion
    /// in that category.
    ///
    /// Categories absent from `levels` get `Critical`, the same default the
    /// per-criterion dropdowns start from.
    #[must_use]
    pub fn simple(catalog: &Catalog, levels: &HashMap<Category, RiskTier>) -> Self {
        let mut selections = Self::new();
        for (category, criterion) in catalog.criteria() {
            let tier = levels.get(&category).copied().unwrap_or(RiskTier::Critical);
            selections.set(category, criterion.name.clone(), criterion.option_for(tier));
        }

        selections
    }

    /// Advanced mode: per-criterion selection where an explicit override
    /// wins, then the supplier profile, then the most severe option.
    ///
    /// Profile and override values are taken as-is; anything that is not one
    /// of the criterion's options is caught by the aggregator.
    #[must_use]
    pub fn advanced(catalog: &Catalog, profile: Option<&RiskProfile>, overrides: &Self) -> Self {
        let mut selections = Self::new();
        for (category, criterion) in catalog.criteria() {
            let option = overrides
                .get(category, &criterion.name)
                .or_else(|| profile.and_then(|p| p.get(category, &criterion.name)))
                .unwrap_or_else(|| criterion.option_for(RiskTier::Critical))
                .to_string();
            selections.set(category, criterion.name.clone(), option);
        }

        selections
    }
}
