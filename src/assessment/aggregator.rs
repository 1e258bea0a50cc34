//! Aggregation of a selection set into per-criterion tiers and an overall tier.

use crate::assessment::{Assessment, AssessmentError, CriterionAssessment, SelectionSet, TierHistogram};
use crate::catalog::{Catalog, RiskTier};
use log::debug;

/// Assess a complete selection set against the catalog.
///
/// Walks the catalog in order, maps every chosen option back to its tier by
/// position, accumulates the tier histogram, and derives the overall tier
/// from the arithmetic mean of the tier indices.
pub fn aggregate(catalog: &Catalog, selections: &SelectionSet) -> Result<Assessment, AssessmentError> {
    let mut rows = Vec::with_capacity(catalog.criterion_count());
    let mut histogram = TierHistogram::default();
    let mut index_sum = 0_usize;

    for (category, criterion) in catalog.criteria() {
        let option = selections
            .get(category, &criterion.name)
            .ok_or_else(|| AssessmentError::MissingSelection {
                category,
                criterion: criterion.name.clone(),
            })?;

        let tier = criterion.tier_of(option).ok_or_else(|| AssessmentError::InvalidOption {
            category,
            criterion: criterion.name.clone(),
            option: option.to_string(),
        })?;

        index_sum += tier.index();
        histogram.record(tier);
        rows.push(CriterionAssessment {
            category,
            criterion: criterion.name.clone(),
            option: option.to_string(),
            tier,
        });
    }

    let overall = overall_tier(index_sum, rows.len());
    debug!("assessed {} criteria, overall tier {overall}", rows.len());

    Ok(Assessment { rows, histogram, overall })
}

/// Mean tier index truncated toward zero, mapped back to a tier.
///
/// Truncation, not rounding: a mean of 1.99 still reports the more severe
/// tier. An empty row set degenerates to the most severe tier.
fn overall_tier(index_sum: usize, count: usize) -> RiskTier {
    if count == 0 {
        return RiskTier::Critical;
    }

    #[expect(clippy::cast_precision_loss, reason = "tier index sums are tiny")]
    let mean = index_sum as f64 / count as f64;

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "a mean of indices 0..=3 stays in range"
    )]
    let index = mean as usize;

    RiskTier::from_index(index).unwrap_or(RiskTier::Low)
}
