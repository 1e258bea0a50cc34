use crate::catalog::{Category, Criterion};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

/// The default criteria catalog, embedded from `data/catalog.yaml`.
pub const DEFAULT_CATALOG_YAML: &str = include_str!("../../data/catalog.yaml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("parsing catalog")]
    Parse(#[from] serde_yaml::Error),

    #[error("category '{0}' appears more than once")]
    DuplicateCategory(Category),

    #[error("category '{0}' is missing")]
    MissingCategory(Category),

    #[error("category '{0}' has no criteria")]
    EmptyCategory(Category),

    #[error("criterion '{criterion}' appears more than once in category '{category}'")]
    DuplicateCriterion { category: Category, criterion: String },
}

/// One category's slice of the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriteriaGroup {
    pub category: Category,
    pub criteria: Vec<Criterion>,
}

/// The full criteria catalog, in presentation order.
///
/// Immutable once constructed; safe to share across threads.
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<CriteriaGroup>,
}

impl Catalog {
    /// The catalog embedded in the binary, parsed once per process.
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalog is invalid, which is a packaging defect
    /// caught by the test suite.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Self::from_yaml(DEFAULT_CATALOG_YAML).expect("catalog.yaml should be a valid catalog"))
    }

    /// Parse and validate a catalog from YAML.
    pub fn from_yaml(text: &str) -> Result<Self, CatalogError> {
        let groups: Vec<CriteriaGroup> = serde_yaml::from_str(text)?;
        let catalog = Self { groups };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that every category appears exactly once, is non-empty, and has
    /// no duplicate criterion names.
    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for group in &self.groups {
            if !seen.insert(group.category) {
                return Err(CatalogError::DuplicateCategory(group.category));
            }

            if group.criteria.is_empty() {
                return Err(CatalogError::EmptyCategory(group.category));
            }

            let mut names = HashSet::new();
            for criterion in &group.criteria {
                if !names.insert(criterion.name.as_str()) {
                    return Err(CatalogError::DuplicateCriterion {
                        category: group.category,
                        criterion: criterion.name.clone(),
                    });
                }
            }
        }

        for category in Category::ordered() {
            if !seen.contains(&category) {
                return Err(CatalogError::MissingCategory(category));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn groups(&self) -> &[CriteriaGroup] {
        &self.groups
    }

    /// Flat iteration over all criteria, in catalog order.
    pub fn criteria(&self) -> impl Iterator<Item = (Category, &Criterion)> {
        self.groups.iter().flat_map(|group| group.criteria.iter().map(move |c| (group.category, c)))
    }

    /// Look up a criterion by category and name.
    #[must_use]
    pub fn criterion(&self, category: Category, name: &str) -> Option<&Criterion> {
        self.groups
            .iter()
            .find(|group| group.category == category)?
            .criteria
            .iter()
            .find(|c| c.name == name)
    }

    /// Total number of criteria across all categories.
    #[must_use]
    pub fn criterion_count(&self) -> usize {
        self.groups.iter().map(|group| group.criteria.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_yaml(mutate: impl Fn(&mut String)) -> String {
        let mut text = String::new();
        for category in Category::ordered() {
            text.push_str(&format!(
                "- category: {category}\n  criteria:\n    - name: Probe\n      options: [\"A\", \"B\", \"C\", \"D\"]\n"
            ));
        }
        mutate(&mut text);
        text
    }

    // --- Builtin data ---

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.groups().len(), Category::COUNT);
        assert_eq!(catalog.criterion_count(), 28);
    }

    #[test]
    fn test_builtin_groups_follow_category_order() {
        let categories: Vec<_> = Catalog::builtin().groups().iter().map(|g| g.category).collect();
        assert_eq!(categories, Category::ordered().to_vec());
    }

    #[test]
    fn test_builtin_criterion_lookup() {
        let catalog = Catalog::builtin();
        let criterion = catalog.criterion(Category::GeographicalRisk, "Country risk").unwrap();
        assert_eq!(criterion.options[3], "Stable country");
        assert!(catalog.criterion(Category::GeographicalRisk, "No such thing").is_none());
    }

    // --- Validation ---

    #[test]
    fn test_minimal_catalog_is_valid() {
        let catalog = Catalog::from_yaml(&minimal_yaml(|_| {})).unwrap();
        assert_eq!(catalog.criterion_count(), Category::COUNT);
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let text = minimal_yaml(|t| {
            t.push_str("- category: esg_ethics\n  criteria:\n    - name: Extra\n      options: [\"A\", \"B\", \"C\", \"D\"]\n");
        });
        assert!(matches!(
            Catalog::from_yaml(&text),
            Err(CatalogError::DuplicateCategory(Category::EsgEthics))
        ));
    }

    #[test]
    fn test_missing_category_rejected() {
        let full = minimal_yaml(|_| {});
        let text = full.lines().take(full.lines().count() - 4).collect::<Vec<_>>().join("\n");
        assert!(matches!(
            Catalog::from_yaml(&text),
            Err(CatalogError::MissingCategory(Category::EsgEthics))
        ));
    }

    #[test]
    fn test_duplicate_criterion_rejected() {
        let text = minimal_yaml(|t| {
            t.push_str("    - name: Probe\n      options: [\"A\", \"B\", \"C\", \"D\"]\n");
        });
        assert!(matches!(Catalog::from_yaml(&text), Err(CatalogError::DuplicateCriterion { .. })));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(Catalog::from_yaml(": not a catalog"), Err(CatalogError::Parse(_))));
    }
}
