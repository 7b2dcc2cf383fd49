//! Glue between the command line and the estimator.

use std::fmt::Write;

use anyhow::{Context, Result};
use hustle_core::{HustleInput, IncomeCalculator, InputField};
use tracing::{debug, info};

use crate::report::{self, Estimate, OutputFormat};

/// Raw field values taken from the command line.
///
/// Values stay as text and go through [`IncomeCalculator::update`], so they
/// get the same zero fallback as any other edit.
#[derive(Debug, Clone, Default)]
pub struct FieldOverrides {
    pub hours_per_week: Option<String>,
    pub hustle_type: Option<String>,
    pub hourly_rate: Option<String>,
    pub monthly_expenses: Option<String>,
}

impl FieldOverrides {
    fn iter(&self) -> impl Iterator<Item = (InputField, &str)> {
        [
            (InputField::HoursPerWeek, &self.hours_per_week),
            (InputField::HustleType, &self.hustle_type),
            (InputField::HourlyRate, &self.hourly_rate),
            (InputField::MonthlyExpenses, &self.monthly_expenses),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}

/// Builds a calculator from the starting record plus any overrides.
pub fn build_calculator(
    start: HustleInput,
    overrides: &FieldOverrides,
) -> IncomeCalculator {
    let mut calc = IncomeCalculator::new(start);
    for (field, value) in overrides.iter() {
        debug!(%field, value, "applying command-line value");
        calc.update(field, value);
    }
    calc
}

pub fn estimate_output(
    calc: &IncomeCalculator,
    compact: bool,
    format: OutputFormat,
) -> Result<String> {
    let estimate = Estimate::from_calculator(calc);
    info!(
        monthly_gross = %estimate.derived.monthly_gross,
        monthly_net = %estimate.derived.monthly_net,
        "estimate computed"
    );
    match format {
        OutputFormat::Json => report::render_json(&estimate)
            .map(|json| json + "\n")
            .context("failed to serialize estimate"),
        OutputFormat::Text if compact => Ok(report::render_compact(&estimate)),
        OutputFormat::Text => Ok(report::render_full(&estimate)),
    }
}

pub fn batch_output(
    calcs: &[IncomeCalculator],
    format: OutputFormat,
) -> Result<String> {
    let estimates: Vec<Estimate> = calcs.iter().map(Estimate::from_calculator).collect();
    info!(count = estimates.len(), "batch computed");
    match format {
        OutputFormat::Json => {
            report::render_json(&estimates)
                .map(|json| json + "\n")
                .context("failed to serialize estimates")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, e) in estimates.iter().enumerate() {
                writeln!(out, "{}", report::render_line(i + 1, e))?;
            }
            Ok(out)
        }
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn overrides_apply_on_top_of_start() {
        let overrides = FieldOverrides {
            hours_per_week: Some("40".to_string()),
            hourly_rate: Some("25".to_string()),
            ..Default::default()
        };

        let calc = build_calculator(HustleInput::default(), &overrides);

        assert_eq!(calc.input().hours_per_week, dec!(40));
        assert_eq!(calc.input().monthly_expenses, dec!(50));
        assert_eq!(calc.derived().monthly_gross, dec!(4330));
    }

    #[test]
    fn unparseable_override_becomes_zero() {
        let overrides = FieldOverrides {
            hourly_rate: Some("twenty".to_string()),
            ..Default::default()
        };

        let calc = build_calculator(HustleInput::default(), &overrides);

        assert_eq!(calc.input().hourly_rate, dec!(0));
    }

    #[test]
    fn no_overrides_keeps_start() {
        let calc = build_calculator(HustleInput::default(), &FieldOverrides::default());

        assert_eq!(calc.input(), &HustleInput::default());
    }

    #[test]
    fn compact_text_output() {
        let out =
            estimate_output(&IncomeCalculator::default(), true, OutputFormat::Text).unwrap();

        assert!(out.starts_with("Estimated Monthly Income: $866"));
    }

    #[test]
    fn batch_text_numbers_rows_from_one() {
        let calcs = vec![IncomeCalculator::default(), IncomeCalculator::default()];

        let out = batch_output(&calcs, OutputFormat::Text).unwrap();

        assert!(out.starts_with("#1 "));
        assert!(out.contains("\n#2 "));
    }

    #[test]
    fn batch_json_is_an_array() {
        let calcs = vec![IncomeCalculator::default()];

        let out = batch_output(&calcs, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(1));
    }
}
