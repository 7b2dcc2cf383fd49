use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::HustleType;

/// The editable input record of one estimating session.
///
/// Ranges are hints for the front end only (hours 1-80, rate 1-500,
/// expenses 0-10000); nothing here enforces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HustleInput {
    pub hours_per_week: Decimal,
    /// Raw tag as entered. Unrecognized tags are kept and simply have no
    /// rate-range hint.
    pub hustle_type: String,
    pub hourly_rate: Decimal,
    pub monthly_expenses: Decimal,
}

impl Default for HustleInput {
    fn default() -> Self {
        Self {
            hours_per_week: Decimal::from(10),
            hustle_type: HustleType::Rideshare.as_str().to_string(),
            hourly_rate: Decimal::from(20),
            monthly_expenses: Decimal::from(50),
        }
    }
}
