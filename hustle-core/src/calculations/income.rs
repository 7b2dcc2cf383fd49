//! Derivation of weekly, monthly and annual income figures.
//!
//! # Formulas
//!
//! | Figure          | Formula |
//! |-----------------|---------|
//! | weekly income   | hours per week × hourly rate |
//! | monthly gross   | weekly income × 4.33 |
//! | annual gross    | monthly gross × 12 |
//! | monthly net     | monthly gross − monthly expenses |
//! | annual net      | monthly net × 12 |
//!
//! Figures are computed in that order and left unrounded. Net income is not
//! clamped: expenses above gross give a negative net. Inputs are not range
//! checked either. Products that would exceed [`Decimal::MAX`] saturate
//! instead of failing.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use hustle_core::{HustleInput, derive};
//!
//! let input = HustleInput {
//!     hours_per_week: dec!(40),
//!     hustle_type: "freelance".to_string(),
//!     hourly_rate: dec!(25),
//!     monthly_expenses: dec!(0),
//! };
//!
//! let income = derive(&input);
//!
//! assert_eq!(income.weekly_income, dec!(1000));
//! assert_eq!(income.monthly_gross, dec!(4330));
//! assert_eq!(income.annual_gross, dec!(51960));
//! ```

use rust_decimal::Decimal;

use crate::{DerivedIncome, HustleInput};

/// Average number of weeks in a month used for monthly figures.
// 4.33, encoded as 433 × 10^-2
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

fn weekly_income(
    hours_per_week: Decimal,
    hourly_rate: Decimal,
) -> Decimal {
    hours_per_week.saturating_mul(hourly_rate)
}

fn monthly_gross(weekly_income: Decimal) -> Decimal {
    weekly_income.saturating_mul(WEEKS_PER_MONTH)
}

fn annualize(monthly: Decimal) -> Decimal {
    monthly.saturating_mul(MONTHS_PER_YEAR)
}

fn monthly_net(
    monthly_gross: Decimal,
    monthly_expenses: Decimal,
) -> Decimal {
    monthly_gross.saturating_sub(monthly_expenses)
}

/// Derives every income figure from the input record.
///
/// Pure and total: the same input always yields the same figures, and no
/// input causes an error.
pub fn derive(input: &HustleInput) -> DerivedIncome {
    let weekly_income = weekly_income(input.hours_per_week, input.hourly_rate);
    let monthly_gross = monthly_gross(weekly_income);
    let annual_gross = annualize(monthly_gross);
    let monthly_net = monthly_net(monthly_gross, input.monthly_expenses);
    let annual_net = annualize(monthly_net);

    DerivedIncome {
        weekly_income,
        monthly_gross,
        annual_gross,
        monthly_net,
        annual_net,
        monthly_expenses: input.monthly_expenses,
        annual_expenses: annualize(input.monthly_expenses),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_to_whole;

    fn input(
        hours: Decimal,
        rate: Decimal,
        expenses: Decimal,
    ) -> HustleInput {
        HustleInput {
            hours_per_week: hours,
            hustle_type: "rideshare".to_string(),
            hourly_rate: rate,
            monthly_expenses: expenses,
        }
    }

    // =========================================================================
    // Worked examples
    // =========================================================================

    #[test]
    fn ten_hours_at_twenty_with_fifty_expenses() {
        let income = derive(&input(dec!(10), dec!(20), dec!(50)));

        assert_eq!(income.weekly_income, dec!(200));
        assert_eq!(income.monthly_gross, dec!(866.00));
        assert_eq!(income.annual_gross, dec!(10392.00));
        assert_eq!(income.monthly_net, dec!(816.00));
        assert_eq!(income.annual_net, dec!(9792.00));
    }

    #[test]
    fn full_time_at_twenty_five_without_expenses() {
        let income = derive(&input(dec!(40), dec!(25), dec!(0)));

        assert_eq!(income.weekly_income, dec!(1000));
        assert_eq!(income.monthly_gross, dec!(4330));
        assert_eq!(income.annual_gross, dec!(51960));
        assert_eq!(income.monthly_net, income.monthly_gross);
    }

    #[test]
    fn default_input_matches_first_example() {
        let income = derive(&HustleInput::default());

        assert_eq!(round_to_whole(income.monthly_gross), dec!(866));
        assert_eq!(round_to_whole(income.monthly_net), dec!(816));
    }

    #[test]
    fn fractional_monthly_gross_is_not_rounded() {
        let income = derive(&input(dec!(7), dec!(13), dec!(0)));

        // 91 × 4.33
        assert_eq!(income.monthly_gross, dec!(394.03));
    }

    // =========================================================================
    // Relationships between figures
    // =========================================================================

    #[test]
    fn monthly_gross_is_hours_times_rate_times_weeks_per_month() {
        let i = input(dec!(17), dec!(33), dec!(120));
        let income = derive(&i);

        assert_eq!(
            income.monthly_gross,
            i.hours_per_week * i.hourly_rate * WEEKS_PER_MONTH
        );
    }

    #[test]
    fn annual_figures_are_twelve_months() {
        let income = derive(&input(dec!(22), dec!(48), dec!(310)));

        assert_eq!(income.annual_gross, income.monthly_gross * dec!(12));
        assert_eq!(income.annual_net, income.monthly_net * dec!(12));
        assert_eq!(income.annual_expenses, dec!(3720));
    }

    #[test]
    fn expenses_above_gross_give_negative_net() {
        let income = derive(&input(dec!(1), dec!(10), dec!(500)));

        // 43.30 - 500
        assert_eq!(income.monthly_net, dec!(-456.70));
        assert_eq!(income.annual_net, dec!(-5480.40));
    }

    #[test]
    fn negative_expenses_increase_net() {
        let income = derive(&input(dec!(10), dec!(20), dec!(-50)));

        assert_eq!(income.monthly_net, dec!(916.00));
    }

    #[test]
    fn zero_hours_gives_zero_gross() {
        let income = derive(&input(dec!(0), dec!(75), dec!(25)));

        assert_eq!(income.weekly_income, dec!(0));
        assert_eq!(income.monthly_gross, dec!(0));
        assert_eq!(income.monthly_net, dec!(-25));
    }

    #[test]
    fn hustle_type_does_not_affect_figures() {
        let mut a = input(dec!(12), dec!(30), dec!(40));
        let b = a.clone();
        a.hustle_type = "creative".to_string();

        assert_eq!(derive(&a), derive(&b));
    }

    #[test]
    fn derive_is_repeatable() {
        let i = input(dec!(33), dec!(41), dec!(77));

        assert_eq!(derive(&i), derive(&i));
    }

    #[test]
    fn enormous_inputs_saturate_instead_of_panicking() {
        let income = derive(&input(Decimal::MAX, Decimal::MAX, dec!(0)));

        assert_eq!(income.weekly_income, Decimal::MAX);
        assert_eq!(income.annual_gross, Decimal::MAX);
    }
}
