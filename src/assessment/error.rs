use crate::catalog::Category;
use thiserror::Error;

/// Failures surfaced while aggregating a selection set.
///
/// Both variants mean the caller handed over bad input; nothing here is
/// retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// A criterion had no chosen option. Selection builders prevent this by
    /// construction; the aggregator still guards it.
    #[error("no option selected for criterion '{criterion}' in category '{category}'")]
    MissingSelection { category: Category, criterion: String },

    /// The chosen value is not one of the criterion's options, which means
    /// the selection came from a different catalog revision.
    #[error("'{option}' is not an option of criterion '{criterion}' in category '{category}'")]
    InvalidOption {
        category: Category,
        criterion: String,
        option: String,
    },
}
