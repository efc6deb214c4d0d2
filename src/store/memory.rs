use std::collections::HashMap;

use super::LoanStore;
use crate::errors::{Result, ScheduleError};
use crate::types::{Loan, LoanId, User, UserId};

/// In-memory reference store: hash maps plus an email index.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: HashMap<UserId, User>,
    loans: HashMap<LoanId, Loan>,
    email_index: HashMap<String, UserId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }
}

impl LoanStore for MemoryStore {
    fn insert_user(&mut self, user: User) -> Result<()> {
        if self.email_index.contains_key(&user.email) {
            return Err(ScheduleError::DuplicateEmail { email: user.email });
        }
        self.email_index.insert(user.email.clone(), user.id);
        self.users.insert(user.id, user);
        Ok(())
    }

    fn user(&self, user_id: UserId) -> Option<User> {
        self.users.get(&user_id).cloned()
    }

    fn user_by_email(&self, email: &str) -> Option<User> {
        self.email_index.get(email).and_then(|id| self.user(*id))
    }

    fn insert_loan(&mut self, loan: Loan) -> Result<()> {
        // the loan arrives with its lines already materialized, so the
        // single map insert is the whole unit
        self.loans.insert(loan.id, loan);
        Ok(())
    }

    fn loan(&self, loan_id: LoanId) -> Option<Loan> {
        self.loans.get(&loan_id).cloned()
    }

    fn attach_holder(&mut self, loan_id: LoanId, user_id: UserId) -> Result<()> {
        let loan = self
            .loans
            .get_mut(&loan_id)
            .ok_or(ScheduleError::LoanNotFound { id: loan_id })?;
        if !loan.has_holder(user_id) {
            loan.holders.push(user_id);
        }
        Ok(())
    }

    fn loans_for_user(&self, user_id: UserId) -> Vec<Loan> {
        let mut loans: Vec<Loan> = self
            .loans
            .values()
            .filter(|l| l.has_holder(user_id))
            .cloned()
            .collect();
        loans.sort_by_key(|l| (l.created_at, l.id));
        loans
    }
}
