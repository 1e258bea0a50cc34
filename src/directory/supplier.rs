use crate::catalog::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classification metadata for a known supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupplierMetadata {
    pub sector: String,
    pub geography: String,
    pub size: String,
}

/// A pre-filled, possibly partial risk profile for a known supplier.
///
/// Criteria the profile does not cover fall back to the most severe option
/// when a selection set is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskProfile {
    entries: HashMap<Category, HashMap<String, String>>,
}

impl RiskProfile {
    /// The profiled option for a criterion, if any.
    #[must_use]
    pub fn get(&self, category: Category, criterion: &str) -> Option<&str> {
        self.entries.get(&category)?.get(criterion).map(String::as_str)
    }

    /// All (category, criterion, option) entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str, &str)> {
        self.entries
            .iter()
            .flat_map(|(category, by_criterion)| by_criterion.iter().map(|(c, o)| (*category, c.as_str(), o.as_str())))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}

/// A directory entry for a known supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Supplier {
    /// Canonical name, as displayed and as matched against queries.
    pub name: String,

    /// A supplier without metadata never shows up in the distinct sector and
    /// geography lists, but still appears in unfiltered listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SupplierMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<RiskProfile>,
}
