//! Console report rendering.

use crate::assessment::Assessment;
use crate::catalog::{Category, RiskTier};
use chrono::Utc;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use terminal_size::{Width, terminal_size};

const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;

/// Render the full console report: per-category rows, the overall tier, and
/// a tier distribution bar chart.
pub fn generate(out: &mut impl Write, supplier: &str, assessment: &Assessment, color: bool) -> io::Result<()> {
    writeln!(out, "Risk classification for {supplier}")?;
    writeln!(out, "Generated {}", Utc::now().format("%Y-%m-%d %H:%M UTC"))?;

    let mut current: Option<Category> = None;
    for row in &assessment.rows {
        if current != Some(row.category) {
            writeln!(out)?;
            writeln!(out, "{}", row.category.label())?;
            current = Some(row.category);
        }

        writeln!(out, "  {}: {} ({} risk)", row.criterion, row.option, paint(row.tier, color))?;
    }

    writeln!(out)?;
    writeln!(out, "Overall risk: {}", paint(assessment.overall, color))?;
    writeln!(out)?;
    writeln!(out, "Tier distribution")?;

    let width = bar_width();
    let max = assessment.histogram.iter().map(|(_, count)| count).max().unwrap_or(0);
    for (tier, count) in assessment.histogram.iter() {
        let len = if max == 0 { 0 } else { count * width / max };
        let bar = "#".repeat(len);
        writeln!(out, "  {:>8}  {}  {count}", tier.label(), paint_str(&bar, tier, color))?;
    }

    Ok(())
}

/// Widest bar that still leaves room for the label and count columns.
fn bar_width() -> usize {
    terminal_size().map_or(MAX_BAR_WIDTH, |(Width(w), _)| {
        usize::from(w).saturating_sub(16).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
    })
}

fn paint(tier: RiskTier, color: bool) -> String {
    paint_str(tier.label(), tier, color)
}

fn paint_str(text: &str, tier: RiskTier, color: bool) -> String {
    if !color {
        return text.to_string();
    }

    match tier {
        RiskTier::Critical => text.red().bold().to_string(),
        RiskTier::High => text.yellow().bold().to_string(),
        RiskTier::Medium => text.blue().to_string(),
        RiskTier::Low => text.green().to_string(),
    }
}
