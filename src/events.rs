use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{LoanId, UserId};

/// all events emitted by the loan service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    UserRegistered {
        user_id: UserId,
        email: String,
        timestamp: DateTime<Utc>,
    },
    LoanCreated {
        loan_id: LoanId,
        holder_id: UserId,
        principal: Money,
        interest_rate: Rate,
        term_months: u32,
        timestamp: DateTime<Utc>,
    },
    ScheduleMaterialized {
        loan_id: LoanId,
        line_count: u32,
        monthly_payment: Money,
        timestamp: DateTime<Utc>,
    },
    LoanShared {
        loan_id: LoanId,
        user_id: UserId,
        timestamp: DateTime<Utc>,
    },
}

/// event log for collecting events during operations
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
