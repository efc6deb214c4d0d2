use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::types::PaymentLine;

/// Fixed monthly payment for a loan at the given terms.
///
/// Annuity formula; a zero-rate loan divides the principal evenly over
/// the term.
pub fn monthly_payment(interest_rate: Rate, term_months: u32, principal: Money) -> Money {
    if term_months == 0 {
        return principal;
    }

    let monthly_rate = interest_rate.monthly_rate().as_decimal();

    if monthly_rate.is_zero() {
        return principal / Decimal::from(term_months);
    }

    // payment = P * r * (1 + r)^n / ((1 + r)^n - 1)
    let r = monthly_rate;

    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + r;
    for _ in 0..term_months {
        compound *= base;
    }

    let numerator = principal.as_decimal() * r * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

/// Amortization schedule for the given terms, one line per month.
///
/// The running balance keeps full precision; only the stored portions are
/// rounded to cents. Termination is balance-driven rather than counted, so
/// rounding residue can leave an epsilon balance and produce one line past
/// the nominal term. The loop is capped at twice the term.
///
/// Preconditions (positive principal and term, non-negative rate) are the
/// caller's concern; `LoanTerms::new` enforces them upstream.
pub fn generate_schedule(
    interest_rate: Rate,
    term_months: u32,
    principal: Money,
) -> Vec<PaymentLine> {
    let monthly_rate = interest_rate.monthly_rate().as_decimal();
    let payment = monthly_payment(interest_rate, term_months, principal);
    let max_lines = term_months.saturating_mul(2);

    let mut lines = Vec::with_capacity(term_months as usize);
    let mut balance = principal;
    let mut month = 0u32;

    while balance.is_positive() && month < max_lines {
        month += 1;

        let principal_portion = payment - balance * monthly_rate;
        let interest_portion = payment - principal_portion;

        // the balance stays unrounded; only the stored line rounds
        balance -= principal_portion;

        lines.push(PaymentLine {
            month,
            principal_portion: principal_portion.round_dp(2),
            interest_portion: interest_portion.round_dp(2),
        });
    }

    lines
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn schedule_length_tracks_term(
            rate_bps in 0u32..=3000,
            term in 1u32..=120,
            principal in 100i64..=1_000_000,
        ) {
            let lines = generate_schedule(Rate::from_bps(rate_bps), term, Money::from_major(principal));
            let n = lines.len() as u32;
            prop_assert!(n == term || n == term + 1);
        }

        #[test]
        fn months_number_sequentially(
            rate_bps in 0u32..=3000,
            term in 1u32..=120,
            principal in 100i64..=1_000_000,
        ) {
            let lines = generate_schedule(Rate::from_bps(rate_bps), term, Money::from_major(principal));
            for (i, l) in lines.iter().enumerate() {
                prop_assert_eq!(l.month, i as u32 + 1);
            }
        }

        #[test]
        fn every_line_is_a_split_of_the_fixed_payment(
            rate_bps in 0u32..=3000,
            term in 1u32..=120,
            principal in 100i64..=1_000_000,
        ) {
            let rate = Rate::from_bps(rate_bps);
            let amount = Money::from_major(principal);
            let payment = monthly_payment(rate, term, amount);

            let lines = generate_schedule(rate, term, amount);
            for l in &lines {
                prop_assert!((l.monthly_payment() - payment).abs() <= Money::CENT);
                prop_assert!(!l.principal_portion.is_negative());
                prop_assert!(!l.interest_portion.is_negative());
            }
        }

        #[test]
        fn principal_repaid_matches_on_term(
            rate_bps in 0u32..=3000,
            term in 1u32..=120,
            principal in 100i64..=1_000_000,
        ) {
            let amount = Money::from_major(principal);
            let lines = generate_schedule(Rate::from_bps(rate_bps), term, amount);
            if lines.len() as u32 == term {
                let repaid = lines
                    .iter()
                    .map(|l| l.principal_portion)
                    .fold(Money::ZERO, |acc, x| acc + x);
                prop_assert!((repaid - amount).abs() <= Money::from_cents(term as i64));
            }
        }
    }
}
