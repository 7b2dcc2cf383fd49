//! The estimating session: one mutable input record plus derivation.

use tracing::debug;

use crate::{
    DerivedIncome, HustleInput, HustleTypeInfo, InputField, derive, lookup_hustle_label,
    parse_whole_number,
};

/// Holds the current input record and derives figures from it on demand.
///
/// Nothing derived is cached; [`IncomeCalculator::derived`] recomputes from
/// the record every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomeCalculator {
    input: HustleInput,
}

impl IncomeCalculator {
    pub fn new(input: HustleInput) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &HustleInput {
        &self.input
    }

    pub fn derived(&self) -> DerivedIncome {
        derive(&self.input)
    }

    /// Rate-range hint for the selected hustle type, if the tag is known.
    pub fn hustle_info(&self) -> Option<HustleTypeInfo> {
        lookup_hustle_label(&self.input.hustle_type)
    }

    /// Replaces one field with a raw form value and returns the new figures.
    ///
    /// Numeric fields use [`parse_whole_number`], so unparseable text stores
    /// `0`. The hustle type is stored trimmed but otherwise as given. All
    /// other fields are left untouched and no range checks are applied.
    ///
    /// ```
    /// use hustle_core::{IncomeCalculator, InputField};
    /// use rust_decimal::Decimal;
    ///
    /// let mut calc = IncomeCalculator::default();
    /// calc.update(InputField::HourlyRate, "oops");
    ///
    /// assert_eq!(calc.input().hourly_rate, Decimal::ZERO);
    /// assert_eq!(calc.input().hours_per_week, Decimal::from(10));
    /// ```
    pub fn update(
        &mut self,
        field: InputField,
        value: &str,
    ) -> DerivedIncome {
        match field {
            InputField::HoursPerWeek => self.input.hours_per_week = parse_whole_number(value),
            InputField::HourlyRate => self.input.hourly_rate = parse_whole_number(value),
            InputField::MonthlyExpenses => self.input.monthly_expenses = parse_whole_number(value),
            InputField::HustleType => self.input.hustle_type = value.trim().to_string(),
        }
        debug!(%field, value, "input updated");
        self.derived()
    }

    /// Restores the given record, discarding all edits.
    pub fn reset(
        &mut self,
        input: HustleInput,
    ) {
        self.input = input;
    }
}
