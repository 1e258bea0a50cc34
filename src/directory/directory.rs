use crate::directory::Supplier;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

/// The default supplier directory, embedded from `data/suppliers.yaml`.
pub const DEFAULT_DIRECTORY_YAML: &str = include_str!("../../data/suppliers.yaml");

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("parsing supplier directory")]
    Parse(#[from] serde_yaml::Error),

    #[error("supplier '{0}' appears more than once")]
    DuplicateSupplier(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDirectory {
    suppliers: Vec<Supplier>,
}

/// Known suppliers keyed by canonical name, in directory order.
///
/// Directory order is the order entries appear in the source document; the
/// resolver reports substring candidates in that order.
#[derive(Debug, Clone, Default)]
pub struct SupplierDirectory {
    suppliers: IndexMap<String, Supplier>,
}

impl SupplierDirectory {
    /// The directory embedded in the binary, parsed once per process.
    ///
    /// # Panics
    ///
    /// Panics if the embedded directory is invalid, which is a packaging
    /// defect caught by the test suite.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<SupplierDirectory> = OnceLock::new();
        BUILTIN.get_or_init(|| Self::from_yaml(DEFAULT_DIRECTORY_YAML).expect("suppliers.yaml should be a valid supplier directory"))
    }

    /// Parse a directory from YAML.
    pub fn from_yaml(text: &str) -> Result<Self, DirectoryError> {
        let raw: RawDirectory = serde_yaml::from_str(text)?;
        Self::from_suppliers(raw.suppliers)
    }

    /// Build a directory from suppliers, preserving their order. Names must
    /// be unique ignoring case.
    pub fn from_suppliers(suppliers: impl IntoIterator<Item = Supplier>) -> Result<Self, DirectoryError> {
        let mut map = IndexMap::new();
        let mut folded = HashSet::new();
        for supplier in suppliers {
            if !folded.insert(supplier.name.to_lowercase()) {
                return Err(DirectoryError::DuplicateSupplier(supplier.name));
            }

            _ = map.insert(supplier.name.clone(), supplier);
        }

        Ok(Self { suppliers: map })
    }

    /// Look up a supplier by its canonical name (case-sensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Supplier> {
        self.suppliers.get(name)
    }

    /// Suppliers in directory order.
    pub fn iter(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.values()
    }

    /// Canonical names in directory order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.suppliers.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> Supplier {
        Supplier {
            name: name.to_string(),
            metadata: None,
            profile: None,
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        let directory = SupplierDirectory::builtin();
        assert!(!directory.is_empty());
        assert!(directory.get("Microsoft").is_some());
        assert!(directory.get("microsoft").is_none());
    }

    #[test]
    fn test_builtin_preserves_document_order() {
        let names: Vec<_> = SupplierDirectory::builtin().names().take(3).collect();
        assert_eq!(names, ["Microsoft", "Google", "Apple"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = SupplierDirectory::from_suppliers([entry("Acme"), entry("acme")]);
        assert!(matches!(result, Err(DirectoryError::DuplicateSupplier(name)) if name == "acme"));
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let directory = SupplierDirectory::from_suppliers([entry("Zeta"), entry("Alpha"), entry("Mu")]).unwrap();
        let names: Vec<_> = directory.names().collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mu"]);
    }
}
