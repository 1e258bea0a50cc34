//! A tool to classify the risk of your third-party suppliers.

use clap::{Parser, Subcommand};
use supplier_rank::commands::{AssessArgs, CriteriaArgs, SuppliersArgs, list_suppliers, run_assessment, show_criteria};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assess a supplier against the criteria catalog
    Assess(AssessArgs),

    /// List, filter, or look up directory suppliers
    Suppliers(SuppliersArgs),

    /// Show the criteria catalog
    Criteria(CriteriaArgs),
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Command::Assess(args) => run_assessment(args),
        Command::Suppliers(args) => list_suppliers(args),
        Command::Criteria(args) => show_criteria(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
