use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::{LoanId, UserId};

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid principal: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid term: {months} months")]
    InvalidTerm {
        months: u32,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("email already registered: {email}")]
    DuplicateEmail {
        email: String,
    },

    #[error("loan not found: {id}")]
    LoanNotFound {
        id: LoanId,
    },

    #[error("user not found: {id}")]
    UserNotFound {
        id: UserId,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
