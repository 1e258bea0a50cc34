use crate::assessment::{SelectionSet, aggregate};
use crate::catalog::{Catalog, Category, RiskTier};
use crate::directory::{Resolution, RiskProfile, SupplierDirectory};
use crate::misc::ColorMode;
use crate::reports;
use anyhow::{Context, bail};
use clap::Args;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};

/// Arguments for the `assess` command.
#[derive(Debug, Args)]
pub struct AssessArgs {
    /// Supplier to assess; resolved against the directory, otherwise used as a custom name
    #[arg(long)]
    pub supplier: Option<String>,

    /// YAML selection document; omit to assess with profile defaults
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Write the per-criterion rows to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print the assessment as JSON instead of a console report
    #[arg(long)]
    pub json: bool,

    /// When to color console output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

/// A selection document, as read from `--input`.
#[derive(Debug, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum SelectionDoc {
    /// One overall tier per category, fanned out to all its criteria.
    Simple {
        #[serde(default)]
        levels: HashMap<Category, RiskTier>,
    },

    /// Explicit per-criterion option labels.
    Advanced {
        #[serde(default)]
        selections: HashMap<Category, HashMap<String, String>>,
    },
}

/// Run a full assessment and render it.
pub fn run_assessment(args: &AssessArgs) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let directory = SupplierDirectory::builtin();

    let (label, profile) = resolve_supplier(directory, args.supplier.as_deref())?;
    let selections = build_selections(catalog, profile, args.input.as_deref())?;
    let assessment = aggregate(catalog, &selections)?;

    if let Some(path) = &args.csv {
        let file = fs::File::create(path).with_context(|| format!("creating '{}'", path.display()))?;
        reports::generate_csv(file, &assessment)?;
        info!("wrote CSV rows to '{}'", path.display());
    }

    let mut out = stdout();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &assessment)?;
        writeln!(out)?;
    } else {
        reports::generate_console(&mut out, &label, &assessment, args.color.enabled())?;
    }

    Ok(())
}

/// Turn the `--supplier` argument into a display label and an optional
/// directory profile.
fn resolve_supplier<'a>(
    directory: &'a SupplierDirectory,
    query: Option<&str>,
) -> anyhow::Result<(String, Option<&'a RiskProfile>)> {
    let Some(query) = query else {
        return Ok(("Unnamed supplier".to_string(), None));
    };

    match directory.resolve(query) {
        Resolution::Resolved(name) => {
            let profile = directory.get(&name).and_then(|s| s.profile.as_ref());
            Ok((name, profile))
        }
        Resolution::Candidates(candidates) => {
            bail!("'{query}' is ambiguous; did you mean one of: {}?", candidates.join(", "))
        }
        // Unknown suppliers are assessed under the name given.
        Resolution::NotFound => Ok((query.to_string(), None)),
    }
}

/// Build the selection set from the optional `--input` document.
fn build_selections(catalog: &Catalog, profile: Option<&RiskProfile>, input: Option<&Path>) -> anyhow::Result<SelectionSet> {
    let Some(path) = input else {
        return Ok(SelectionSet::advanced(catalog, profile, &SelectionSet::new()));
    };

    let text = fs::read_to_string(path).with_context(|| format!("reading selection document '{}'", path.display()))?;
    let doc: SelectionDoc = serde_yaml::from_str(&text).with_context(|| format!("parsing selection document '{}'", path.display()))?;

    Ok(match doc {
        SelectionDoc::Simple { levels } => SelectionSet::simple(catalog, &levels),
        SelectionDoc::Advanced { selections } => {
            let mut overrides = SelectionSet::new();
            for (category, by_criterion) in selections {
                for (criterion, option) in by_criterion {
                    overrides.set(category, criterion, option);
                }
            }

            SelectionSet::advanced(catalog, profile, &overrides)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_doc_simple() {
        let doc: SelectionDoc = serde_yaml::from_str("mode: simple\nlevels:\n  esg_ethics: medium\n").unwrap();
        let SelectionDoc::Simple { levels } = doc else {
            panic!("expected simple mode");
        };
        assert_eq!(levels.get(&Category::EsgEthics), Some(&RiskTier::Medium));
    }

    #[test]
    fn test_selection_doc_advanced() {
        let text = "mode: advanced\nselections:\n  financial_legal:\n    Insurance: Adequate\n";
        let doc: SelectionDoc = serde_yaml::from_str(text).unwrap();
        let SelectionDoc::Advanced { selections } = doc else {
            panic!("expected advanced mode");
        };
        assert_eq!(
            selections.get(&Category::FinancialLegal).and_then(|m| m.get("Insurance")),
            Some(&"Adequate".to_string())
        );
    }

    #[test]
    fn test_selection_doc_requires_mode() {
        let result: Result<SelectionDoc, _> = serde_yaml::from_str("levels: {}");
        let _ = result.unwrap_err();
    }

    #[test]
    fn test_resolve_supplier_ambiguous() {
        let err = resolve_supplier(SupplierDirectory::builtin(), Some("cloud")).unwrap_err();
        assert!(err.to_string().contains("IBM Cloud"));
    }

    #[test]
    fn test_resolve_supplier_custom_name() {
        let (label, profile) = resolve_supplier(SupplierDirectory::builtin(), Some("ABC Corp")).unwrap();
        assert_eq!(label, "ABC Corp");
        assert!(profile.is_none());
    }

    #[test]
    fn test_resolve_supplier_canonical_casing() {
        let (label, profile) = resolve_supplier(SupplierDirectory::builtin(), Some("microsoft")).unwrap();
        assert_eq!(label, "Microsoft");
        assert!(profile.is_some());
    }
}
