use hourglass_rs::SafeTimeProvider;
use uuid::Uuid;

use crate::errors::{Result, ScheduleError};
use crate::events::{Event, EventLog};
use crate::schedule;
use crate::store::LoanStore;
use crate::types::{Loan, LoanId, LoanTerms, MonthSummary, ScheduleItem, User, UserId};

/// Loan service over an injected store.
///
/// Drives the calculator exactly once per loan at creation, resolves loan
/// and user identity for every read, and keeps an audit trail of mutating
/// operations.
pub struct LoanService<S: LoanStore> {
    pub store: S,
    pub events: EventLog,
}

impl<S: LoanStore> LoanService<S> {
    /// create over an injected store
    pub fn new(store: S) -> Self {
        Self {
            store,
            events: EventLog::new(),
        }
    }

    /// register a user; the email must be unused
    pub fn register_user(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        time_provider: &SafeTimeProvider,
    ) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        };
        self.store.insert_user(user.clone())?;

        self.events.emit(Event::UserRegistered {
            user_id: user.id,
            email: user.email.clone(),
            timestamp: time_provider.now(),
        });

        Ok(user)
    }

    /// create a loan held by `holder_id`, materializing its schedule
    pub fn create_loan(
        &mut self,
        terms: LoanTerms,
        holder_id: UserId,
        time_provider: &SafeTimeProvider,
    ) -> Result<Loan> {
        terms.validate()?;
        self.store
            .user(holder_id)
            .ok_or(ScheduleError::UserNotFound { id: holder_id })?;

        let lines = schedule::generate_schedule(
            terms.interest_rate,
            terms.term_months,
            terms.principal,
        );
        let now = time_provider.now();

        let loan = Loan {
            id: Uuid::new_v4(),
            terms,
            lines,
            holders: vec![holder_id],
            created_at: now,
        };
        self.store.insert_loan(loan.clone())?;

        self.events.emit(Event::LoanCreated {
            loan_id: loan.id,
            holder_id,
            principal: terms.principal,
            interest_rate: terms.interest_rate,
            term_months: terms.term_months,
            timestamp: now,
        });
        self.events.emit(Event::ScheduleMaterialized {
            loan_id: loan.id,
            line_count: loan.lines.len() as u32,
            monthly_payment: schedule::monthly_payment(
                terms.interest_rate,
                terms.term_months,
                terms.principal,
            )
            .round_dp(2),
            timestamp: now,
        });

        Ok(loan)
    }

    /// running-balance schedule of a stored loan
    pub fn full_schedule(&self, loan_id: LoanId) -> Result<Vec<ScheduleItem>> {
        let loan = self.resolve(loan_id)?;
        Ok(schedule::full_schedule(loan.terms.principal, &loan.lines))
    }

    /// cumulative position of a stored loan at a month
    pub fn month_summary(&self, loan_id: LoanId, month: u32) -> Result<MonthSummary> {
        let loan = self.resolve(loan_id)?;
        Ok(schedule::month_summary(loan.terms.principal, &loan.lines, month))
    }

    /// share an existing loan with another registered user
    pub fn share_loan(
        &mut self,
        loan_id: LoanId,
        user_id: UserId,
        time_provider: &SafeTimeProvider,
    ) -> Result<()> {
        self.store
            .user(user_id)
            .ok_or(ScheduleError::UserNotFound { id: user_id })?;
        self.store.attach_holder(loan_id, user_id)?;

        self.events.emit(Event::LoanShared {
            loan_id,
            user_id,
            timestamp: time_provider.now(),
        });

        Ok(())
    }

    /// all loans held by a registered user
    pub fn user_loans(&self, user_id: UserId) -> Result<Vec<Loan>> {
        self.store
            .user(user_id)
            .ok_or(ScheduleError::UserNotFound { id: user_id })?;
        Ok(self.store.loans_for_user(user_id))
    }

    /// drain the audit trail
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    fn resolve(&self, loan_id: LoanId) -> Result<Loan> {
        self.store
            .loan(loan_id)
            .ok_or(ScheduleError::LoanNotFound { id: loan_id })
    }
}
