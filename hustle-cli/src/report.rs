//! Plain-text and JSON rendering of one estimate.

use std::fmt::Write;

use hustle_core::content::{
    COPYRIGHT, DISCLAIMER, EXPENSES_HINT, FOOTER_NOTES, HUSTLE_TIPS, SUBTITLE, TITLE,
};
use hustle_core::{
    DerivedIncome, HustleInput, HustleType, HustleTypeInfo, IncomeCalculator, format_usd,
};
use serde::Serialize;

/// Display strings for every figure, rounded to whole dollars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedIncome {
    pub weekly_income: String,
    pub monthly_gross: String,
    pub annual_gross: String,
    pub monthly_net: String,
    pub annual_net: String,
    /// Expense cells carry a leading minus on top of the formatted amount.
    pub monthly_expenses: String,
    pub annual_expenses: String,
}

impl FormattedIncome {
    pub fn from_derived(d: &DerivedIncome) -> Self {
        Self {
            weekly_income: format_usd(d.weekly_income),
            monthly_gross: format_usd(d.monthly_gross),
            annual_gross: format_usd(d.annual_gross),
            monthly_net: format_usd(d.monthly_net),
            annual_net: format_usd(d.annual_net),
            monthly_expenses: format!("-{}", format_usd(d.monthly_expenses)),
            annual_expenses: format!("-{}", format_usd(d.annual_expenses)),
        }
    }
}

/// A snapshot of one estimate, ready to render or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub input: HustleInput,
    pub hustle: Option<HustleTypeInfo>,
    pub derived: DerivedIncome,
    pub formatted: FormattedIncome,
}

impl Estimate {
    pub fn from_calculator(calc: &IncomeCalculator) -> Self {
        let derived = calc.derived();
        Self {
            input: calc.input().clone(),
            hustle: calc.hustle_info(),
            formatted: FormattedIncome::from_derived(&derived),
            derived,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const RULE: &str = "------------------------------------------------------------";

fn write_inputs(
    out: &mut String,
    e: &Estimate,
) -> std::fmt::Result {
    match &e.hustle {
        Some(info) => {
            writeln!(out, "Type of Side Hustle: {}", info.label)?;
            writeln!(out, "  Typical rate range: {}", info.rate_range)?;
        }
        None => writeln!(out, "Type of Side Hustle: {}", e.input.hustle_type)?,
    }
    writeln!(out, "Hours Per Week:      {}", e.input.hours_per_week)?;
    writeln!(out, "Hourly Rate ($):     {}", e.input.hourly_rate)?;
    writeln!(out, "Monthly Expenses ($): {}", e.input.monthly_expenses)?;
    writeln!(out, "  {EXPENSES_HINT}")
}

fn write_summary(
    out: &mut String,
    e: &Estimate,
) -> std::fmt::Result {
    let f = &e.formatted;
    writeln!(out, "Estimated Monthly Income: {}", f.monthly_gross)?;
    writeln!(out, "  Before expenses")?;
    writeln!(
        out,
        "Weekly: {}  |  Annual: {}  |  Net/Month: {}",
        f.weekly_income, f.annual_gross, f.monthly_net
    )
}

fn write_tips(out: &mut String) -> std::fmt::Result {
    writeln!(out, "Side Hustle Tips")?;
    for tip in HUSTLE_TIPS {
        writeln!(out, "  • {tip}")?;
    }
    Ok(())
}

fn write_breakdown(
    out: &mut String,
    e: &Estimate,
) -> std::fmt::Result {
    let f = &e.formatted;
    let rows = [
        ("Gross Income", &f.monthly_gross, &f.annual_gross),
        ("Expenses", &f.monthly_expenses, &f.annual_expenses),
        ("Net Income", &f.monthly_net, &f.annual_net),
    ];

    writeln!(out, "Income Breakdown")?;
    writeln!(out, "{:<14}{:>14}{:>16}", "Category", "Monthly", "Annual")?;
    for (category, monthly, annual) in rows {
        writeln!(out, "{category:<14}{monthly:>14}{annual:>16}")?;
    }
    Ok(())
}

fn write_footer(out: &mut String) -> std::fmt::Result {
    writeln!(out, "{DISCLAIMER}")?;
    writeln!(out)?;
    let notes: Vec<String> = FOOTER_NOTES.iter().map(|n| format!("• {n}")).collect();
    writeln!(out, "{}", notes.join("  "))?;
    writeln!(out, "{COPYRIGHT}")
}

fn build(
    e: &Estimate,
    full: bool,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    if full {
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{SUBTITLE}")?;
        writeln!(out, "{RULE}")?;
        write_inputs(&mut out, e)?;
        writeln!(out, "{RULE}")?;
    }
    write_summary(&mut out, e)?;
    writeln!(out, "{RULE}")?;
    if full {
        write_tips(&mut out)?;
        writeln!(out, "{RULE}")?;
    }
    write_breakdown(&mut out, e)?;
    if full {
        writeln!(out, "{RULE}")?;
        write_footer(&mut out)?;
    }
    Ok(out)
}

/// Renders the whole page: inputs, summary, tips, breakdown and footer.
pub fn render_full(e: &Estimate) -> String {
    // Writing into a String cannot fail
    build(e, true).unwrap_or_default()
}

/// Renders only the summary line block and the breakdown table.
pub fn render_compact(e: &Estimate) -> String {
    build(e, false).unwrap_or_default()
}

/// One line per estimate, used for batch output.
pub fn render_line(
    index: usize,
    e: &Estimate,
) -> String {
    let f = &e.formatted;
    format!(
        "#{index} {} {}h @ ${}/h: weekly {} | monthly {} (net {}) | annual {} (net {})",
        e.input.hustle_type,
        e.input.hours_per_week,
        e.input.hourly_rate,
        f.weekly_income,
        f.monthly_gross,
        f.monthly_net,
        f.annual_gross,
        f.annual_net
    )
}

/// One row per hustle type: tag, label and typical rate range.
pub fn render_types() -> String {
    HustleType::all()
        .iter()
        .map(|t| format!("{:<10} {:<32} {}\n", t.as_str(), t.label(), t.rate_range()))
        .collect()
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
