/// quick start - minimal example to get started
use loan_schedule_rs::{generate_schedule, monthly_payment, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // quote the fixed payment for a $30,000 loan at 3% over 4 years
    let rate = Rate::from_percentage(dec!(3.0));
    let payment = monthly_payment(rate, 48, Money::from_major(30_000));
    println!("monthly payment: ${}", payment.round_dp(2));

    // materialize the full schedule
    let lines = generate_schedule(rate, 48, Money::from_major(30_000));
    println!("scheduled months: {}", lines.len());

    for line in &lines[..3] {
        println!(
            "month {:>2}: principal ${} / interest ${}",
            line.month, line.principal_portion, line.interest_portion
        );
    }

    Ok(())
}
