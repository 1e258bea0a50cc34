use crate::catalog::Category;
use std::collections::HashMap;

/// The complete set of per-criterion choices for one assessment.
///
/// Built fresh per request and handed to the aggregator by reference; there
/// is no shared mutable form state anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    choices: HashMap<Category, HashMap<String, String>>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the chosen option for a criterion, replacing any earlier choice.
    pub fn set(&mut self, category: Category, criterion: impl Into<String>, option: impl Into<String>) {
        _ = self.choices.entry(category).or_default().insert(criterion.into(), option.into());
    }

    /// The chosen option for a criterion, if one was recorded.
    #[must_use]
    pub fn get(&self, category: Category, criterion: &str) -> Option<&str> {
        self.choices.get(&category)?.get(criterion).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.values().all(HashMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut selections = SelectionSet::new();
        assert!(selections.is_empty());

        selections.set(Category::FinancialLegal, "Insurance", "Adequate");
        assert_eq!(selections.get(Category::FinancialLegal, "Insurance"), Some("Adequate"));
        assert_eq!(selections.get(Category::FinancialLegal, "Litigation history"), None);
        assert_eq!(selections.get(Category::EsgEthics, "Insurance"), None);
        assert_eq!(selections.len(), 1);
    }

    #[test]
    fn test_set_replaces_earlier_choice() {
        let mut selections = SelectionSet::new();
        selections.set(Category::FinancialLegal, "Insurance", "None");
        selections.set(Category::FinancialLegal, "Insurance", "Full coverage");
        assert_eq!(selections.get(Category::FinancialLegal, "Insurance"), Some("Full coverage"));
        assert_eq!(selections.len(), 1);
    }
}
