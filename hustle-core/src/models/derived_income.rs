use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income figures derived from a [`crate::HustleInput`].
///
/// Never stored on its own; always recomputed with [`crate::derive`].
/// Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedIncome {
    pub weekly_income: Decimal,
    pub monthly_gross: Decimal,
    pub annual_gross: Decimal,
    pub monthly_net: Decimal,
    pub annual_net: Decimal,

    // Breakdown table expense row
    pub monthly_expenses: Decimal,
    pub annual_expenses: Decimal,
}
