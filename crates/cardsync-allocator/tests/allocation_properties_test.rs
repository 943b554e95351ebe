//! Property tests for the allocation invariants. Amounts are in cents
//! throughout, so every property is exact rather than epsilon-bounded.

use cardsync_allocator::Allocator;
use cardsync_types::{Account, Money};
use chrono::NaiveDate;
use proptest::prelude::*;

fn arb_accounts() -> impl Strategy<Value = Vec<Account>> {
    prop::collection::vec((0i64..=2_000_000, 0.0f64..=1.0, 0u64..=60), 0..8).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(index, (total, min_ratio, day_offset))| {
                let total = Money::from_cents(total);
                let minimum = Money::from_cents((total.cents() as f64 * min_ratio) as i64);
                Account {
                    id: format!("card-{index}"),
                    name: format!("Card {index}"),
                    issuer: "Prop Bank".to_string(),
                    total_due: total,
                    minimum_due: minimum,
                    due_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
                        + chrono::Days::new(day_offset),
                }
            })
            .collect()
    })
}

fn strategies() -> [&'static str; 2] {
    ["due_date_proportional", "largest_balance_first"]
}

proptest! {
    #[test]
    fn no_account_is_allocated_more_than_its_total_due(
        accounts in arb_accounts(),
        amount in 0i64..=10_000_000,
    ) {
        let allocator = Allocator::new();
        for strategy in strategies() {
            let allocation = allocator
                .allocate(strategy, Money::from_cents(amount), &accounts)
                .unwrap();
            for account in &accounts {
                prop_assert!(allocation.amount_for(&account.id) <= account.total_due);
            }
        }
    }

    #[test]
    fn the_sum_of_allocations_never_exceeds_the_amount(
        accounts in arb_accounts(),
        amount in 0i64..=10_000_000,
    ) {
        let allocator = Allocator::new();
        for strategy in strategies() {
            let allocation = allocator
                .allocate(strategy, Money::from_cents(amount), &accounts)
                .unwrap();
            prop_assert!(allocation.total() <= Money::from_cents(amount));
        }
    }

    #[test]
    fn an_affordable_amount_settles_every_account(
        accounts in arb_accounts(),
        surplus in 0i64..=1_000_000,
    ) {
        let total_owed: Money = accounts.iter().map(|a| a.total_due).sum();
        let amount = total_owed + Money::from_cents(surplus);
        let allocator = Allocator::new();
        for strategy in strategies() {
            let allocation = allocator.allocate(strategy, amount, &accounts).unwrap();
            for account in &accounts {
                prop_assert_eq!(allocation.amount_for(&account.id), account.total_due);
            }
        }
    }

    #[test]
    fn a_sufficient_amount_is_spent_in_full(
        accounts in arb_accounts(),
        amount in 0i64..=10_000_000,
    ) {
        // When the amount fits inside the total owed, nothing is left on
        // the table.
        let total_owed: Money = accounts.iter().map(|a| a.total_due).sum();
        let amount = Money::from_cents(amount).min(total_owed);
        let allocator = Allocator::new();
        for strategy in strategies() {
            let allocation = allocator.allocate(strategy, amount, &accounts).unwrap();
            prop_assert_eq!(allocation.total(), amount);
        }
    }

    #[test]
    fn zero_amount_allocates_nothing(accounts in arb_accounts()) {
        let allocator = Allocator::new();
        for strategy in strategies() {
            let allocation = allocator.allocate(strategy, Money::ZERO, &accounts).unwrap();
            prop_assert!(allocation.is_empty());
        }
    }

    #[test]
    fn allocation_is_deterministic(
        accounts in arb_accounts(),
        amount in 0i64..=10_000_000,
    ) {
        let allocator = Allocator::new();
        for strategy in strategies() {
            let first = allocator
                .allocate(strategy, Money::from_cents(amount), &accounts)
                .unwrap();
            let second = allocator
                .allocate(strategy, Money::from_cents(amount), &accounts)
                .unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn scarce_funds_cover_minimums_in_due_date_order(
        accounts in arb_accounts(),
        ratio in 0.0f64..=1.0,
    ) {
        // With less than the total of all minimums, the primary strategy
        // must fully fund earlier-due accounts before later ones see a
        // cent beyond zero.
        let capped_minimums: Money = accounts
            .iter()
            .map(|a| a.minimum_due.min(a.total_due))
            .sum();
        let amount = Money::from_cents((capped_minimums.cents() as f64 * ratio) as i64);
        let allocation = Allocator::new()
            .allocate("due_date_proportional", amount, &accounts)
            .unwrap();

        let mut order: Vec<usize> = (0..accounts.len()).collect();
        order.sort_by_key(|&i| accounts[i].due_date);

        let mut seen_partially_funded = false;
        for &i in &order {
            let account = &accounts[i];
            let expected_full = account.minimum_due.min(account.total_due);
            let got = allocation.amount_for(&account.id);
            if seen_partially_funded {
                prop_assert_eq!(got, Money::ZERO);
            } else if got < expected_full {
                seen_partially_funded = true;
            }
        }
    }
}
