use crate::directory::{Resolution, SupplierDirectory};
use clap::Args;
use std::io::{Write, stdout};

const SUGGESTION_LIMIT: usize = 5;

/// Arguments for the `suppliers` command.
#[derive(Debug, Args)]
pub struct SuppliersArgs {
    /// Only suppliers in this sector
    #[arg(long)]
    pub sector: Option<String>,

    /// Only suppliers in this geography
    #[arg(long)]
    pub geography: Option<String>,

    /// Resolve a name fragment instead of listing the directory
    #[arg(long)]
    pub query: Option<String>,
}

/// List, filter, or look up directory suppliers.
pub fn list_suppliers(args: &SuppliersArgs) -> anyhow::Result<()> {
    let directory = SupplierDirectory::builtin();
    let mut out = stdout();

    if let Some(query) = args.query.as_deref() {
        lookup(&mut out, directory, query)?;
        return Ok(());
    }

    for name in directory.filter(args.sector.as_deref(), args.geography.as_deref()) {
        let Some(supplier) = directory.get(name) else {
            continue;
        };

        match &supplier.metadata {
            Some(m) => writeln!(out, "{name:<32} {} | {} | {}", m.sector, m.geography, m.size)?,
            None => writeln!(out, "{name}")?,
        }
    }

    Ok(())
}

fn lookup(out: &mut impl Write, directory: &SupplierDirectory, query: &str) -> anyhow::Result<()> {
    match directory.resolve(query) {
        Resolution::Resolved(name) => writeln!(out, "{name}")?,
        Resolution::Candidates(candidates) => {
            for name in candidates {
                writeln!(out, "{name}")?;
            }
        }
        Resolution::NotFound => {
            let suggestions = directory.suggest(query, SUGGESTION_LIMIT);
            if suggestions.is_empty() {
                writeln!(out, "no match for '{query}'")?;
            } else {
                writeln!(out, "no match for '{query}'; closest names:")?;
                for suggestion in suggestions {
                    writeln!(out, "  {} ({:.2})", suggestion.name, suggestion.score)?;
                }
            }
        }
    }

    Ok(())
}
