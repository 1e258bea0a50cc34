use crate::catalog::{Category, RiskTier};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One criterion's assessed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionAssessment {
    pub category: Category,
    pub criterion: String,
    pub option: String,
    pub tier: RiskTier,
}

/// Criterion counts per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierHistogram {
    counts: [usize; RiskTier::COUNT],
}

impl TierHistogram {
    pub(crate) const fn record(&mut self, tier: RiskTier) {
        self.counts[tier.index()] += 1;
    }

    #[must_use]
    pub const fn count(&self, tier: RiskTier) -> usize {
        self.counts[tier.index()]
    }

    /// Total criteria counted; equals the catalog's criterion count for any
    /// complete selection set.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// (tier, count) pairs, most severe first.
    pub fn iter(&self) -> impl Iterator<Item = (RiskTier, usize)> {
        RiskTier::ordered().into_iter().map(|tier| (tier, self.count(tier)))
    }
}

impl Serialize for TierHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RiskTier::COUNT))?;
        for (tier, count) in self.iter() {
            map.serialize_entry(&tier, &count)?;
        }

        map.end()
    }
}

/// The outcome of assessing one supplier.
///
/// Derived from a selection set and the catalog, never stored; rows follow
/// catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub rows: Vec<CriterionAssessment>,
    pub histogram: TierHistogram,
    pub overall: RiskTier,
}
