//! Sample data for tests and demos.

use cardsync_types::{Account, Money};
use chrono::{Days, NaiveDate, Utc};

/// The demo card set: four cards with dues and due dates offset from
/// `today`.
pub fn sample_accounts() -> Vec<Account> {
    let today = Utc::now().date_naive();
    vec![
        account("card-1", "Sapphire Reserve", "Chase", 4_500_000, 225_000, today, 5),
        account("card-2", "Gold Card", "American Express", 3_250_000, 162_500, today, 12),
        account("card-3", "Platinum Card", "American Express", 1_875_000, 93_750, today, 3),
        account("card-4", "Venture X", "Capital One", 2_760_000, 138_000, today, 18),
    ]
}

fn account(
    id: &str,
    name: &str,
    issuer: &str,
    total_cents: i64,
    minimum_cents: i64,
    today: NaiveDate,
    due_in_days: u64,
) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        issuer: issuer.to_string(),
        total_due: Money::from_cents(total_cents),
        minimum_due: Money::from_cents(minimum_cents),
        due_date: today + Days::new(due_in_days),
    }
}
