//! A fixed-point currency amount.
//!
//! Amounts are held as a whole number of minor units (paise) so that totals
//! over many expenses do not accumulate floating-point error. On the wire an
//! amount is a JSON number in major units, e.g. `1234.5`.

use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// The number of minor units in one major unit.
const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// The largest amount accepted from a client, in major units.
pub const MAX_MAJOR_UNITS: f64 = 1e12;

/// A non-negative amount of money, stored in minor units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from a count of minor units, e.g. `150` for 1.50.
    pub const fn from_minor_units(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Create an amount from whole major units, e.g. `75_000` for 75,000.00.
    pub const fn from_major_units(major_units: i64) -> Self {
        Self(major_units * MINOR_UNITS_PER_MAJOR)
    }

    /// The amount as a count of minor units.
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// The amount in major units as a float, for serialization only.
    pub fn as_major_f64(self) -> f64 {
        self.0 as f64 / MINOR_UNITS_PER_MAJOR as f64
    }
}

impl TryFrom<f64> for Amount {
    type Error = Error;

    /// Convert an amount in major units, rounding to the nearest minor unit.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `value` is NaN, infinite, negative,
    /// or greater than [MAX_MAJOR_UNITS].
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || !(0.0..=MAX_MAJOR_UNITS).contains(&value) {
            return Err(Error::InvalidAmount(value.to_string()));
        }

        let minor_units = (value * MINOR_UNITS_PER_MAJOR as f64).round();

        Ok(Self(minor_units as i64))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_UNITS_PER_MAJOR,
            self.0 % MINOR_UNITS_PER_MAJOR
        )
    }
}

// Totals saturate at `i64::MAX` instead of wrapping.
impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major_f64())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;

        Amount::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Amount)
    }
}
