use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as an integer count of minor units (cents).
///
/// Currency arithmetic in CardSync is fixed-point throughout so that the
/// allocation invariants (never pay an account more than it owes, never
/// allocate more than the input amount) hold exactly instead of within a
/// floating-point epsilon. Serializes transparently as the underlying
/// cent count.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero cents.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from a count of minor units.
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates an amount from whole major units (e.g. dollars).
    pub const fn from_major(units: i64) -> Self {
        Money(units * 100)
    }

    /// Creates an amount from a float of major units, rounded half away
    /// from zero to the nearest cent.
    pub fn from_f64(major: f64) -> Self {
        Money((major * 100.0).round() as i64)
    }

    /// The underlying count of minor units.
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// The amount as a float of major units. Lossy for amounts beyond
    /// 2^53 cents; intended for display and interop only.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whether the amount is exactly zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whether the amount is strictly greater than zero.
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Subtraction clamped at zero.
    pub fn saturating_sub_at_zero(self, other: Money) -> Money {
        Money((self.0 - other.0).max(0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}
