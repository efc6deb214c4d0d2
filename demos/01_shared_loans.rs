/// shared loans - register users, create a loan, share it
use chrono::{TimeZone, Utc};
use loan_schedule_rs::{
    LoanService, LoanTerms, MemoryStore, Money, Rate, SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== shared loans example ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));

    let mut service = LoanService::new(MemoryStore::new());

    // register two users
    let ada = service.register_user("Ada", "Lovelace", "ada@example.com", &time)?;
    let grace = service.register_user("Grace", "Hopper", "grace@example.com", &time)?;
    println!("registered {} and {}", ada.full_name(), grace.full_name());

    // ada takes out a 4-year loan
    let terms = LoanTerms::new(
        Rate::from_percentage(dec!(3.0)),
        48,
        Money::from_major(30_000),
    )?;
    let loan = service.create_loan(terms, ada.id, &time)?;
    println!(
        "loan {} created with {} scheduled months",
        loan.id,
        loan.lines.len()
    );

    // position after ten months
    let summary = service.month_summary(loan.id, 10)?;
    if let Some(balance) = summary.principal_balance {
        println!("\nbalance after month 10: ${}", balance);
    }
    println!("principal paid so far: ${}", summary.principal_paid);
    println!("interest paid so far: ${}", summary.interest_paid);

    // share the loan with grace
    service.share_loan(loan.id, grace.id, &time)?;
    println!("\nshared with {}", grace.full_name());
    for held in service.user_loans(grace.id)? {
        println!(
            "{} holds loan {} for ${}",
            grace.full_name(),
            held.id,
            held.terms.principal
        );
    }

    // audit trail
    println!("\nevents:");
    for event in service.take_events() {
        println!("  {:?}", event);
    }

    Ok(())
}
