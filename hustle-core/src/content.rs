//! Fixed copy shown alongside every estimate.

pub const TITLE: &str = "Side Hustle Income Estimator (2026)";

pub const SUBTITLE: &str = "Estimate your potential gig economy earnings";

pub const HUSTLE_TIPS: [&str; 4] = [
    "Consistency is key — regular hours build reliable income",
    "Track all expenses to maximize your net earnings",
    "Consider taxes — set aside 25-30% for self-employment tax",
    "Diversify hustles to reduce income volatility",
];

/// Hint shown under the monthly expenses field.
pub const EXPENSES_HINT: &str = "Gas, supplies, platform fees, etc.";

pub const DISCLAIMER: &str = "This calculator provides estimates for potential side hustle income \
based on hours worked and hourly rates. Actual earnings vary by location, demand, platform fees, \
and individual circumstances. These figures are estimates only and do not account for taxes, \
vehicle depreciation, or variable income fluctuations common in gig work. Consult a financial \
advisor for personalized guidance on managing self-employment income.";

pub const FOOTER_NOTES: [&str; 3] = ["Estimates only", "Not financial advice", "Free to use"];

pub const COPYRIGHT: &str = "© 2026 Side Hustle Income Estimator";
