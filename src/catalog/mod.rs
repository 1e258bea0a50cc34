#[expect(clippy::module_inception, reason = "I like it this way")]
mod catalog;
mod category;
mod criterion;
mod risk_tier;

pub use catalog::{Catalog, CatalogError, CriteriaGroup, DEFAULT_CATALOG_YAML};
pub use category::Category;
pub use criterion::Criterion;
pub use risk_tier::RiskTier;
