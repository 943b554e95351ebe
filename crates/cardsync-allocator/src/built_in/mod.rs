//! Built-in allocation strategies.

pub mod due_date_proportional;
pub mod largest_balance_first;

use cardsync_types::Money;

/// Floor division share of `pool` for one part of a whole, in 128-bit
/// intermediate precision. Returns the share and the division remainder
/// (used to hand out the cents lost to flooring).
pub(crate) fn proportional_share(pool: Money, part: Money, whole: Money) -> (Money, i128) {
    let numerator = i128::from(pool.cents()) * i128::from(part.cents());
    let divisor = i128::from(whole.cents());
    let share = numerator / divisor;
    (Money::from_cents(share as i64), numerator % divisor)
}
