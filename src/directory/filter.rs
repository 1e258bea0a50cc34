//! Sector and geography filtering over the directory.

use crate::directory::SupplierDirectory;
use std::collections::HashSet;

impl SupplierDirectory {
    /// Suppliers passing the sector and geography constraints, in directory
    /// order. `None` means no constraint on that dimension.
    ///
    /// A supplier without metadata fails any constrained dimension, so it
    /// shows up only when both constraints are `None`. That asymmetry is
    /// long-standing observed behavior; keep it.
    #[must_use]
    pub fn filter(&self, sector: Option<&str>, geography: Option<&str>) -> Vec<&str> {
        self.iter()
            .filter(|supplier| {
                let metadata = supplier.metadata.as_ref();
                dimension_matches(sector, metadata.map(|m| m.sector.as_str()))
                    && dimension_matches(geography, metadata.map(|m| m.geography.as_str()))
            })
            .map(|supplier| supplier.name.as_str())
            .collect()
    }

    /// Distinct sectors in first-seen order, from suppliers with metadata.
    #[must_use]
    pub fn sectors(&self) -> Vec<&str> {
        distinct(self.iter().filter_map(|s| s.metadata.as_ref()).map(|m| m.sector.as_str()))
    }

    /// Distinct geographies in first-seen order, from suppliers with metadata.
    #[must_use]
    pub fn geographies(&self) -> Vec<&str> {
        distinct(self.iter().filter_map(|s| s.metadata.as_ref()).map(|m| m.geography.as_str()))
    }
}

fn dimension_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    wanted.is_none_or(|w| actual == Some(w))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
