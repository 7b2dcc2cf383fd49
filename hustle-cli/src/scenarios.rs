//! CSV loader for batches of estimate scenarios.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so their order does not matter. All
//! four are required.
//!
//! | Column             | Notes |
//! |--------------------|-------|
//! | `hours_per_week`   | whole number; unparseable cells become `0` |
//! | `hustle_type`      | one of `rideshare`, `freelance`, `tutoring`, `taskbased`, `creative`, `other` |
//! | `hourly_rate`      | whole number; unparseable cells become `0` |
//! | `monthly_expenses` | whole number; unparseable cells become `0` |
//!
//! ```csv
//! hours_per_week,hustle_type,hourly_rate,monthly_expenses
//! 10,rideshare,20,50
//! 40,freelance,25,0
//! ```
//!
//! Cells are applied like form edits, so a cell such as `abc` is not an
//! error. Only structural problems (missing column, wrong cell count) are.

use std::path::Path;

use hustle_core::{HustleInput, IncomeCalculator, InputField};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

// Cells stay as text so that bad numbers reach the zero fallback instead of
// failing deserialisation.
#[derive(Debug, Deserialize)]
struct CsvRow {
    hours_per_week: String,
    hustle_type: String,
    hourly_rate: String,
    monthly_expenses: String,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read scenario file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn apply_row(
    row: CsvRow,
    base: &HustleInput,
) -> IncomeCalculator {
    let mut calc = IncomeCalculator::new(base.clone());
    calc.update(InputField::HoursPerWeek, &row.hours_per_week);
    calc.update(InputField::HustleType, &row.hustle_type);
    calc.update(InputField::HourlyRate, &row.hourly_rate);
    calc.update(InputField::MonthlyExpenses, &row.monthly_expenses);
    calc
}

/// Parses CSV text into one calculator per row, in file order.
///
/// `base` is the record each row's edits start from.
pub fn load_from_str(
    input: &str,
    base: &HustleInput,
) -> Result<Vec<IncomeCalculator>, ScenarioError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let calcs = reader
        .deserialize::<CsvRow>()
        .map(|result| Ok(apply_row(result?, base)))
        .collect::<Result<Vec<_>, ScenarioError>>()?;

    debug!(rows = calcs.len(), "loaded scenarios");
    Ok(calcs)
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(
    path: &Path,
    base: &HustleInput,
) -> Result<Vec<IncomeCalculator>, ScenarioError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents, base)
}
