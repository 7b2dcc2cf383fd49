pub mod calculations;
pub mod calculator;
pub mod content;
pub mod format;
pub mod models;
pub mod parse;

pub use calculations::derive;
pub use calculator::IncomeCalculator;
pub use format::format_usd;
pub use models::*;
pub use parse::parse_whole_number;
