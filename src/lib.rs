pub mod decimal;
pub mod errors;
pub mod events;
pub mod schedule;
pub mod service;
pub mod store;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{Result, ScheduleError};
pub use events::{Event, EventLog};
pub use schedule::{full_schedule, generate_schedule, month_summary, monthly_payment};
pub use service::LoanService;
pub use store::{LoanStore, MemoryStore};
pub use types::{
    Loan, LoanId, LoanTerms, MonthSummary, PaymentLine, ScheduleItem, User, UserId,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
