use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The seven fixed criteria categories.
///
/// Categories are keyed by plain identifier; any decorative numbering is a
/// rendering concern, not part of the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Category {
    GeneralCharacteristics,
    GeographicalRisk,
    SectorActivity,
    InformationSecurity,
    BusinessContinuity,
    FinancialLegal,
    EsgEthics,
}

impl Category {
    /// Number of categories in the catalog.
    pub const COUNT: usize = 7;

    /// All categories, in catalog presentation order.
    #[must_use]
    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::GeneralCharacteristics,
            Self::GeographicalRisk,
            Self::SectorActivity,
            Self::InformationSecurity,
            Self::BusinessContinuity,
            Self::FinancialLegal,
            Self::EsgEthics,
        ]
    }

    /// Human-readable category label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GeneralCharacteristics => "Supplier General Characteristics",
            Self::GeographicalRisk => "Geographical Risk Criteria",
            Self::SectorActivity => "Sector & Activity Criteria",
            Self::InformationSecurity => "Information Security & Cyber Risk",
            Self::BusinessContinuity => "Business Continuity & Operational Risk",
            Self::FinancialLegal => "Financial & Legal Risk",
            Self::EsgEthics => "ESG & Ethical Criteria",
        }
    }
}
