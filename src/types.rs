use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};

/// unique identifier for a loan
pub type LoanId = Uuid;

/// unique identifier for a user
pub type UserId = Uuid;

/// Immutable terms a loan is written at.
///
/// `new` is the validating path: a zero term, a non-positive principal,
/// or a negative rate never reaches the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// annual rate
    pub interest_rate: Rate,
    pub term_months: u32,
    pub principal: Money,
}

impl LoanTerms {
    pub fn new(interest_rate: Rate, term_months: u32, principal: Money) -> Result<Self> {
        let terms = LoanTerms {
            interest_rate,
            term_months,
            principal,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// check the terms; fields are public, so the service re-checks at
    /// loan creation
    pub fn validate(&self) -> Result<()> {
        if self.interest_rate.is_negative() {
            return Err(ScheduleError::InvalidInterestRate {
                rate: self.interest_rate,
            });
        }
        if self.term_months == 0 {
            return Err(ScheduleError::InvalidTerm {
                months: self.term_months,
            });
        }
        if !self.principal.is_positive() {
            return Err(ScheduleError::InvalidPrincipal {
                amount: self.principal,
            });
        }
        Ok(())
    }
}

/// One month's split of the fixed payment, rounded to cents when the
/// schedule was generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLine {
    /// 1-based month number
    pub month: u32,
    pub principal_portion: Money,
    pub interest_portion: Money,
}

impl PaymentLine {
    pub fn monthly_payment(&self) -> Money {
        self.principal_portion + self.interest_portion
    }
}

/// schedule row with the balance outstanding after that month's payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub month: u32,
    pub remaining_balance: Money,
    pub monthly_payment: Money,
}

/// Cumulative position at a requested month.
///
/// `principal_balance` is `None` when the requested month lies past the
/// end of the schedule; the paid totals then cover every line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub principal_balance: Option<Money>,
    pub principal_paid: Money,
    pub interest_paid: Money,
}

/// Stored loan: terms plus the lines materialized once at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub terms: LoanTerms,
    pub lines: Vec<PaymentLine>,
    /// every user the loan is held by, creator first
    pub holders: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Loan {
    pub fn has_holder(&self, user_id: UserId) -> bool {
        self.holders.contains(&user_id)
    }
}

/// registered user; email is unique within a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
