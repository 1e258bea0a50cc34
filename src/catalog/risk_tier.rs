use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One of the four severity tiers, ordered from most to least severe.
///
/// Tier position is aligned with criterion option position: a criterion's
/// option at index N carries tier N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RiskTier {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskTier {
    /// Number of tiers, which is also the number of options per criterion.
    pub const COUNT: usize = 4;

    /// All tiers, most severe first.
    #[must_use]
    pub const fn ordered() -> [Self; Self::COUNT] {
        [Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    /// Position of this tier in severity order (0 = most severe).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// The tier at the given severity position, if in range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Critical),
            1 => Some(Self::High),
            2 => Some(Self::Medium),
            3 => Some(Self::Low),
            _ => None,
        }
    }

    /// Human-readable tier label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}
