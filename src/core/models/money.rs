use crate::core::errors::LedgerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

const CENTS_PER_UNIT: i64 = 100;

// f64 scaling noise, e.g. 0.29 * 100 = 28.999999999999996
const SCALING_NOISE: f64 = 1e-6;

/// Signed amount held as whole cents.
///
/// Arithmetic is exact; decimal values only appear at the edges, when parsing
/// caller input and when rendering for display or JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Tolerance below which a balance or transfer counts as settled.
    pub const EPSILON: Money = Money(1);

    /// Largest amount a single expense may carry (one billion major units).
    pub const MAX_AMOUNT: Money = Money(100_000_000_000);

    /// Largest magnitude accepted for a balance or a ledger entry.
    pub const MAX_BALANCE: Money = Money(1_000_000_000_000_000);

    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts major units to cents.
    ///
    /// Fractions of a cent are dropped toward zero, so `0.005` is zero cents
    /// and sub-cent dust never turns into a payable cent. Values beyond
    /// [`Money::MAX_BALANCE`] and non-finite values are rejected.
    pub fn from_major(value: f64) -> Result<Self, LedgerError> {
        if !value.is_finite() {
            return Err(LedgerError::InvalidAmount(format!("{} is not a finite number", value)));
        }
        let scaled = value * CENTS_PER_UNIT as f64;
        let nearest = scaled.round();
        let cents = if (scaled - nearest).abs() < SCALING_NOISE {
            nearest
        } else {
            scaled.trunc()
        };
        if cents.abs() > Self::MAX_BALANCE.0 as f64 {
            return Err(LedgerError::InvalidAmount(format!("{} is out of range", value)));
        }
        Ok(Money(cents as i64))
    }

    /// `self + rhs`, or `None` when the result leaves `±MAX_BALANCE`.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0
            .checked_add(rhs.0)
            .map(Money)
            .filter(|sum| sum.abs() <= Self::MAX_BALANCE)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn to_major(self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    pub fn abs(self) -> Self {
        Money(self.0.saturating_abs())
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `|self| < EPSILON`
    pub fn is_negligible(self) -> bool {
        self.abs() < Self::EPSILON
    }

    /// `|self| <= EPSILON`
    pub fn is_within_epsilon(self) -> bool {
        self.abs() <= Self::EPSILON
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            cents / CENTS_PER_UNIT as u64,
            cents % CENTS_PER_UNIT as u64
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// JSON carries major units, e.g. `12.5`
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_major(value).map_err(serde::de::Error::custom)
    }
}
