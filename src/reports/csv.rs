//! CSV export of assessment rows.

use crate::assessment::Assessment;
use std::io::Write;

/// Write one `category,criterion,selection,risk` record per criterion, in
/// catalog order.
pub fn generate(out: impl Write, assessment: &Assessment) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["category", "criterion", "selection", "risk"])?;
    for row in &assessment.rows {
        writer.write_record([row.category.label(), &row.criterion, &row.option, row.tier.label()])?;
    }

    writer.flush()?;
    Ok(())
}
