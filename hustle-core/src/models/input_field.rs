use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a field name does not name one of the four input fields.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown input field '{0}' (expected hoursPerWeek, hustleType, hourlyRate or monthlyExpenses)")]
pub struct UnknownField(pub String);

/// One editable field of [`crate::HustleInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    HoursPerWeek,
    HustleType,
    HourlyRate,
    MonthlyExpenses,
}

impl InputField {
    pub fn all() -> &'static [InputField] {
        &[
            InputField::HoursPerWeek,
            InputField::HustleType,
            InputField::HourlyRate,
            InputField::MonthlyExpenses,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HoursPerWeek => "hoursPerWeek",
            Self::HustleType => "hustleType",
            Self::HourlyRate => "hourlyRate",
            Self::MonthlyExpenses => "monthlyExpenses",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputField {
    type Err = UnknownField;

    /// Accepts the camelCase form names and their snake_case equivalents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hoursPerWeek" | "hours_per_week" => Ok(Self::HoursPerWeek),
            "hustleType" | "hustle_type" => Ok(Self::HustleType),
            "hourlyRate" | "hourly_rate" => Ok(Self::HourlyRate),
            "monthlyExpenses" | "monthly_expenses" => Ok(Self::MonthlyExpenses),
            other => Err(UnknownField(other.to_string())),
        }
    }
}
