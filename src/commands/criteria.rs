use crate::catalog::{Catalog, Category, RiskTier};
use clap::Args;
use std::io::{Write, stdout};

/// Arguments for the `criteria` command.
#[derive(Debug, Args)]
pub struct CriteriaArgs {
    /// Only this category (by identifier, e.g. geographical_risk)
    #[arg(long)]
    pub category: Option<Category>,
}

/// Print the criteria catalog, options ordered from most to least severe.
pub fn show_criteria(args: &CriteriaArgs) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let mut out = stdout();

    for group in catalog.groups() {
        if args.category.is_some_and(|category| category != group.category) {
            continue;
        }

        writeln!(out, "{}", group.category.label())?;
        for criterion in &group.criteria {
            writeln!(out, "  {}", criterion.name)?;
            for tier in RiskTier::ordered() {
                writeln!(out, "    {:>8}  {}", tier.label(), criterion.option_for(tier))?;
            }
        }

        writeln!(out)?;
    }

    Ok(())
}
