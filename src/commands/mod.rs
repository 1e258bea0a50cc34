mod assess;
mod criteria;
mod suppliers;

pub use assess::{AssessArgs, run_assessment};
pub use criteria::{CriteriaArgs, show_criteria};
pub use suppliers::{SuppliersArgs, list_suppliers};
