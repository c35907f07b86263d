// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::Serialize;

/// Identifies a single ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RideId(u32);

impl RideId {
    /// Creates a new `RideId`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a driver or a rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ParticipantId(u32);

impl ParticipantId {
    /// Creates a new `ParticipantId`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pickup or dropoff location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Location {
    /// The location name, never empty.
    name: String,
}

impl Location {
    /// Creates a new `Location`. The name is stored as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidLocation(String::from(
                "Location cannot be empty",
            )));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// Returns the location name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The name of a driver or rider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    /// The name, never blank.
    value: String,
}

impl Name {
    /// Creates a new `Name`. The value is stored as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty or only whitespace.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidName(String::from(
                "Name cannot be empty",
            )));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Trip length in miles.
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    /// Creates a new `Distance`.
    ///
    /// # Errors
    ///
    /// Returns an error if `miles` is not finite or not greater than zero.
    pub fn from_miles(miles: f64) -> Result<Self, DomainError> {
        if !miles.is_finite() || miles <= 0.0 {
            return Err(DomainError::InvalidDistance { miles });
        }
        Ok(Self(miles))
    }

    /// Returns the distance in miles.
    #[must_use]
    pub const fn miles(&self) -> f64 {
        self.0
    }
}

/// Flat surcharge added to a premium fare.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LuxuryFee(f64);

impl LuxuryFee {
    /// The fee applied when none is given.
    pub const DEFAULT: Self = Self(5.00);

    /// Creates a new `LuxuryFee`.
    ///
    /// # Errors
    ///
    /// Returns an error if `fee` is negative or not finite.
    pub fn new(fee: f64) -> Result<Self, DomainError> {
        if !fee.is_finite() || fee < 0.0 {
            return Err(DomainError::InvalidLuxuryFee { fee });
        }
        Ok(Self(fee))
    }

    /// Returns the fee amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.0
    }
}

impl Default for LuxuryFee {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fraction taken off an economy fare, in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Discount(f64);

impl Discount {
    /// The discount applied when none is given.
    pub const DEFAULT: Self = Self(0.15);

    /// Creates a new `Discount`.
    ///
    /// # Errors
    ///
    /// Returns an error if `fraction` is not finite or lies outside `[0, 1)`.
    pub fn new(fraction: f64) -> Result<Self, DomainError> {
        if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
            return Err(DomainError::InvalidDiscount { fraction });
        }
        Ok(Self(fraction))
    }

    /// Returns the discount as a fraction.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Returns the discount as a whole percentage, truncated.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn whole_percent(&self) -> u32 {
        // fraction < 1, so the product always fits
        (self.0 * 100.0) as u32
    }
}

impl Default for Discount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A driver's rating on the 0 to 5 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// The best possible rating, given to new drivers.
    pub const MAX: Self = Self(5.0);

    /// Creates a new `Rating`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite or lies outside `[0, 5]`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(DomainError::InvalidRating { rating: value });
        }
        Ok(Self(value))
    }

    /// Returns the rating value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MAX
    }
}
