pub mod memory;

pub use memory::MemoryStore;

use crate::errors::Result;
use crate::types::{Loan, LoanId, User, UserId};

/// Storage seam for loans and users.
///
/// Lookups answer presence with `Option`; the service layer turns absence
/// into typed not-found errors. `insert_loan` must persist the loan and
/// all of its lines as one unit or not at all.
pub trait LoanStore {
    /// store a new user; a duplicate email is rejected
    fn insert_user(&mut self, user: User) -> Result<()>;

    /// look up a user by id
    fn user(&self, user_id: UserId) -> Option<User>;

    /// look up a user by email (exact match)
    fn user_by_email(&self, email: &str) -> Option<User>;

    /// store a new loan together with its materialized lines
    fn insert_loan(&mut self, loan: Loan) -> Result<()>;

    /// look up a loan by id
    fn loan(&self, loan_id: LoanId) -> Option<Loan>;

    /// associate a user with a loan; attaching an existing holder is a
    /// no-op, the caller is expected to have resolved the user
    fn attach_holder(&mut self, loan_id: LoanId, user_id: UserId) -> Result<()>;

    /// all loans held by a user, in creation-time order
    fn loans_for_user(&self, user_id: UserId) -> Vec<Loan>;
}
