pub mod amortization;
pub mod query;

pub use amortization::{generate_schedule, monthly_payment};
pub use query::{full_schedule, month_summary};
