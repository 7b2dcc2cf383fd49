mod derived_income;
mod hustle_input;
mod hustle_type;
mod input_field;

pub use derived_income::DerivedIncome;
pub use hustle_input::HustleInput;
pub use hustle_type::{HustleType, HustleTypeInfo, lookup_hustle_label};
pub use input_field::{InputField, UnknownField};
