mod aggregator;
mod builder;
mod error;
mod outcome;
mod selection_set;

pub use aggregator::aggregate;
pub use error::AssessmentError;
pub use outcome::{Assessment, CriterionAssessment, TierHistogram};
pub use selection_set::SelectionSet;
