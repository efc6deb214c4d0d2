/// json state - export schedules and loans for debugging
use chrono::{TimeZone, Utc};
use loan_schedule_rs::{
    full_schedule, generate_schedule, LoanService, LoanTerms, MemoryStore, Money, Rate,
    SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json state export ===\n");

    // schedule lines serialize straight to json
    let lines = generate_schedule(Rate::from_percentage(dec!(3.5)), 6, Money::from_major(2_000));
    println!("payment lines:");
    println!("{}\n", serde_json::to_string_pretty(&lines)?);

    // the running-balance view serializes the same way
    let items = full_schedule(Money::from_major(2_000), &lines);
    println!("running balances:");
    println!("{}\n", serde_json::to_string_pretty(&items)?);

    // a whole stored loan, terms and lines included
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let mut service = LoanService::new(MemoryStore::new());
    let user = service.register_user("Ada", "Lovelace", "ada@example.com", &time)?;
    let terms = LoanTerms::new(
        Rate::from_percentage(dec!(3.5)),
        6,
        Money::from_major(2_000),
    )?;
    let loan = service.create_loan(terms, user.id, &time)?;

    println!("stored loan:");
    println!("{}", serde_json::to_string_pretty(&loan)?);

    Ok(())
}
