//! Two-phase allocation: minimum dues earliest due date first, then a
//! proportional spread of the leftover across remaining balances.

use super::proportional_share;
use crate::{Allocation, AllocationStrategy};
use cardsync_types::{Account, Money};

/// The primary CardSync allocation policy.
///
/// Phase 1 walks accounts in ascending due-date order (stable, so equal
/// dates keep their input order) and covers each minimum due until the
/// amount runs out. Phase 2 splits whatever is left across accounts that
/// still carry a balance, proportionally to each account's remaining due,
/// with every share capped at that remaining due.
///
/// Shares are floor-divided in cents; the cents lost to flooring are then
/// handed out one each by largest division remainder, which reproduces
/// round-to-nearest results without ever overshooting the input amount.
#[derive(Debug, Default)]
pub struct DueDateProportional;

impl AllocationStrategy for DueDateProportional {
    fn name(&self) -> &'static str {
        "due_date_proportional"
    }

    fn allocate(&self, amount: Money, accounts: &[Account]) -> Allocation {
        let mut result = Allocation::default();
        if !amount.is_positive() || accounts.is_empty() {
            return result;
        }

        let mut order: Vec<usize> = (0..accounts.len()).collect();
        order.sort_by_key(|&i| accounts[i].due_date);

        let mut allocated = vec![Money::ZERO; accounts.len()];
        let mut remaining = amount;

        // Phase 1: cover minimum dues, earliest due date first. The
        // total_due cap keeps malformed accounts (minimum above total)
        // from being overpaid.
        for &i in &order {
            if remaining.is_zero() {
                break;
            }
            let take = accounts[i]
                .minimum_due
                .min(accounts[i].total_due)
                .min(remaining);
            if take.is_positive() {
                allocated[i] = take;
                remaining -= take;
            }
        }

        // Phase 2: spread the leftover across accounts that still owe
        // something, proportionally to their remaining dues.
        if remaining.is_positive() {
            let open: Vec<usize> = order
                .iter()
                .copied()
                .filter(|&i| accounts[i].total_due > allocated[i])
                .collect();
            let total_remaining_due: Money = open
                .iter()
                .map(|&i| accounts[i].total_due - allocated[i])
                .sum();

            if total_remaining_due.is_positive() {
                let mut remainders: Vec<(usize, i128)> = Vec::with_capacity(open.len());
                let mut leftover = remaining;
                for &i in &open {
                    let remaining_due = accounts[i].total_due - allocated[i];
                    let (share, rem) =
                        proportional_share(remaining, remaining_due, total_remaining_due);
                    let share = share.min(remaining_due);
                    allocated[i] += share;
                    leftover -= share;
                    remainders.push((i, rem));
                }

                // Hand the floored cents out by largest remainder; ties
                // keep due-date order. Every account with a nonzero
                // remainder still has headroom, so these never overshoot.
                remainders.sort_by_key(|&(_, rem)| -rem);
                for (i, _) in remainders {
                    if !leftover.is_positive() {
                        break;
                    }
                    if accounts[i].total_due > allocated[i] {
                        allocated[i] += Money::from_cents(1);
                        leftover -= Money::from_cents(1);
                    }
                }
            }
        }

        for (i, account) in accounts.iter().enumerate() {
            result.record(&account.id, allocated[i]);
        }
        result
    }
}
