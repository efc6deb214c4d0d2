use crate::decimal::Money;
use crate::types::{MonthSummary, PaymentLine, ScheduleItem};

/// Running-balance view of a materialized schedule.
///
/// The balance starts at the loan principal and drops by each line's
/// principal portion. Lines are expected in month order, the order they
/// were materialized in. An empty slice yields an empty schedule.
pub fn full_schedule(loan_principal: Money, lines: &[PaymentLine]) -> Vec<ScheduleItem> {
    let mut balance = loan_principal;
    let mut items = Vec::with_capacity(lines.len());

    for line in lines {
        balance -= line.principal_portion;
        items.push(ScheduleItem {
            month: line.month,
            remaining_balance: balance,
            monthly_payment: line.monthly_payment(),
        });
    }

    items
}

/// Cumulative position at `target_month`.
///
/// Walks the lines in month order, accumulating paid totals and the
/// declining balance; stops once the target month's line is processed.
/// When the target lies past the last line, `principal_balance` is `None`
/// and the totals cover the whole schedule.
pub fn month_summary(
    loan_principal: Money,
    lines: &[PaymentLine],
    target_month: u32,
) -> MonthSummary {
    let mut balance = loan_principal;
    let mut principal_paid = Money::ZERO;
    let mut interest_paid = Money::ZERO;

    for line in lines {
        principal_paid += line.principal_portion;
        interest_paid += line.interest_portion;
        balance -= line.principal_portion;

        if line.month == target_month {
            return MonthSummary {
                principal_balance: Some(balance),
                principal_paid,
                interest_paid,
            };
        }
    }

    MonthSummary {
        principal_balance: None,
        principal_paid,
        interest_paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::schedule::generate_schedule;
    use rust_decimal_macros::dec;

    fn money(s: &str) -> Money {
        Money::from_str_exact(s).unwrap()
    }

    fn two_month_loan() -> (Money, Vec<PaymentLine>) {
        let lines = vec![
            PaymentLine {
                month: 1,
                principal_portion: Money::from_major(100),
                interest_portion: Money::from_major(200),
            },
            PaymentLine {
                month: 2,
                principal_portion: Money::from_major(200),
                interest_portion: Money::from_major(100),
            },
        ];
        (Money::from_major(300), lines)
    }

    #[test]
    fn test_full_schedule_running_balance() {
        let (principal, lines) = two_month_loan();
        let items = full_schedule(principal, &lines);

        assert_eq!(
            items,
            vec![
                ScheduleItem {
                    month: 1,
                    remaining_balance: Money::from_major(200),
                    monthly_payment: Money::from_major(300),
                },
                ScheduleItem {
                    month: 2,
                    remaining_balance: Money::ZERO,
                    monthly_payment: Money::from_major(300),
                },
            ]
        );
    }

    #[test]
    fn test_full_schedule_empty_lines() {
        assert!(full_schedule(Money::from_major(300), &[]).is_empty());
    }

    #[test]
    fn test_month_summary_mid_loan() {
        let (principal, lines) = two_month_loan();
        let summary = month_summary(principal, &lines, 1);

        assert_eq!(summary.principal_balance, Some(Money::from_major(200)));
        assert_eq!(summary.principal_paid, Money::from_major(100));
        assert_eq!(summary.interest_paid, Money::from_major(200));
    }

    #[test]
    fn test_month_summary_past_the_end() {
        let (principal, lines) = two_month_loan();
        let summary = month_summary(principal, &lines, 3);

        assert_eq!(summary.principal_balance, None);
        assert_eq!(summary.principal_paid, Money::from_major(300));
        assert_eq!(summary.interest_paid, Money::from_major(300));
    }

    #[test]
    fn test_month_summary_no_lines() {
        let summary = month_summary(Money::from_major(300), &[], 1);

        assert_eq!(summary.principal_balance, None);
        assert_eq!(summary.principal_paid, Money::ZERO);
        assert_eq!(summary.interest_paid, Money::ZERO);
    }

    #[test]
    fn test_flat_loan_pays_down_to_zero() {
        let principal = Money::from_major(1_200);
        let lines = generate_schedule(Rate::ZERO, 12, principal);
        let items = full_schedule(principal, &lines);

        assert_eq!(items.len(), 12);
        assert_eq!(items[11].remaining_balance, Money::ZERO);
        assert_eq!(items[0].remaining_balance, Money::from_major(1_100));
    }

    #[test]
    fn test_generated_schedule_balance_declines() {
        let principal = Money::from_major(30_000);
        let lines = generate_schedule(Rate::from_percentage(dec!(3.0)), 48, principal);
        let items = full_schedule(principal, &lines);

        for pair in items.windows(2) {
            assert!(pair[1].remaining_balance < pair[0].remaining_balance);
        }
        assert_eq!(items[0].remaining_balance, money("29410.97"));
    }

    #[test]
    fn test_paid_totals_grow_month_over_month() {
        let principal = Money::from_major(30_000);
        let lines = generate_schedule(Rate::from_percentage(dec!(3.0)), 48, principal);

        let mut last_principal = Money::ZERO;
        let mut last_interest = Money::ZERO;
        for month in [1, 10, 24, 48] {
            let summary = month_summary(principal, &lines, month);
            assert!(summary.principal_balance.is_some());
            assert!(summary.principal_paid >= last_principal);
            assert!(summary.interest_paid >= last_interest);
            last_principal = summary.principal_paid;
            last_interest = summary.interest_paid;
        }
    }
}
