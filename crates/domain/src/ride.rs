// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::fare::{
    BASE_RATE_PER_MILE, ECONOMY_RATE_PER_MILE, PREMIUM_RATE_PER_MILE, STANDARD_RATE_PER_MILE,
    base_fare, economy_fare, premium_fare, standard_fare,
};
use crate::types::{Discount, Distance, LuxuryFee, Location, RideId};

/// The kind of ride, carrying any variant-specific pricing inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RideKind {
    /// A plain ride at the base rate.
    Base,
    /// A standard ride.
    Standard,
    /// A premium ride with a flat luxury surcharge.
    Premium {
        /// Flat surcharge added on top of the per-mile charge.
        luxury_fee: LuxuryFee,
    },
    /// An economy ride with a fractional discount.
    Economy {
        /// Fraction taken off the per-mile charge.
        discount: Discount,
    },
}

impl RideKind {
    /// Returns the display label for this kind.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Standard => "Standard",
            Self::Premium { .. } => "Premium",
            Self::Economy { .. } => "Economy",
        }
    }

    /// Returns the per-mile rate for this kind.
    #[must_use]
    pub const fn rate_per_mile(&self) -> f64 {
        match self {
            Self::Base => BASE_RATE_PER_MILE,
            Self::Standard => STANDARD_RATE_PER_MILE,
            Self::Premium { .. } => PREMIUM_RATE_PER_MILE,
            Self::Economy { .. } => ECONOMY_RATE_PER_MILE,
        }
    }

    /// Computes the fare for a trip of the given distance.
    #[must_use]
    pub fn fare(&self, distance: Distance) -> f64 {
        match *self {
            Self::Base => base_fare(distance),
            Self::Standard => standard_fare(distance),
            Self::Premium { luxury_fee } => premium_fare(distance, luxury_fee),
            Self::Economy { discount } => economy_fare(distance, discount),
        }
    }
}

impl std::fmt::Display for RideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single trip between two locations.
///
/// Attributes are fixed at construction. The fare is computed on every call
/// and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    id: RideId,
    pickup: Location,
    dropoff: Location,
    distance: Distance,
    kind: RideKind,
}

impl Ride {
    /// Creates a ride of any kind.
    ///
    /// # Arguments
    ///
    /// * `id` - The ride identifier
    /// * `pickup` - Where the trip starts
    /// * `dropoff` - Where the trip ends
    /// * `miles` - Trip length in miles
    /// * `kind` - The ride kind and its pricing inputs
    ///
    /// # Errors
    ///
    /// Returns an error if either location is empty or the distance is not positive.
    pub fn new(
        id: RideId,
        pickup: &str,
        dropoff: &str,
        miles: f64,
        kind: RideKind,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            pickup: Location::new(pickup)?,
            dropoff: Location::new(dropoff)?,
            distance: Distance::from_miles(miles)?,
            kind,
        })
    }

    /// Creates a base ride.
    ///
    /// # Errors
    ///
    /// See [`Ride::new`].
    pub fn base(id: RideId, pickup: &str, dropoff: &str, miles: f64) -> Result<Self, DomainError> {
        Self::new(id, pickup, dropoff, miles, RideKind::Base)
    }

    /// Creates a standard ride.
    ///
    /// # Errors
    ///
    /// See [`Ride::new`].
    pub fn standard(
        id: RideId,
        pickup: &str,
        dropoff: &str,
        miles: f64,
    ) -> Result<Self, DomainError> {
        Self::new(id, pickup, dropoff, miles, RideKind::Standard)
    }

    /// Creates a premium ride with the default luxury fee.
    ///
    /// # Errors
    ///
    /// See [`Ride::new`].
    pub fn premium(
        id: RideId,
        pickup: &str,
        dropoff: &str,
        miles: f64,
    ) -> Result<Self, DomainError> {
        Self::new(
            id,
            pickup,
            dropoff,
            miles,
            RideKind::Premium {
                luxury_fee: LuxuryFee::DEFAULT,
            },
        )
    }

    /// Creates a premium ride with an explicit luxury fee.
    ///
    /// # Errors
    ///
    /// Returns an error if the fee is negative, or for any reason listed on [`Ride::new`].
    pub fn premium_with_fee(
        id: RideId,
        pickup: &str,
        dropoff: &str,
        miles: f64,
        fee: f64,
    ) -> Result<Self, DomainError> {
        let luxury_fee: LuxuryFee = LuxuryFee::new(fee)?;
        Self::new(id, pickup, dropoff, miles, RideKind::Premium { luxury_fee })
    }

    /// Creates an economy ride with the default discount.
    ///
    /// # Errors
    ///
    /// See [`Ride::new`].
    pub fn economy(
        id: RideId,
        pickup: &str,
        dropoff: &str,
        miles: f64,
    ) -> Result<Self, DomainError> {
        Self::new(
            id,
            pickup,
            dropoff,
            miles,
            RideKind::Economy {
                discount: Discount::DEFAULT,
            },
        )
    }

    /// Creates an economy ride with an explicit discount fraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the discount lies outside `[0, 1)`, or for any reason
    /// listed on [`Ride::new`].
    pub fn economy_with_discount(
        id: RideId,
        pickup: &str,
        dropoff: &str,
        miles: f64,
        fraction: f64,
    ) -> Result<Self, DomainError> {
        let discount: Discount = Discount::new(fraction)?;
        Self::new(id, pickup, dropoff, miles, RideKind::Economy { discount })
    }

    #[must_use]
    pub const fn id(&self) -> RideId {
        self.id
    }

    #[must_use]
    pub const fn pickup(&self) -> &Location {
        &self.pickup
    }

    #[must_use]
    pub const fn dropoff(&self) -> &Location {
        &self.dropoff
    }

    #[must_use]
    pub const fn distance(&self) -> Distance {
        self.distance
    }

    #[must_use]
    pub const fn kind(&self) -> &RideKind {
        &self.kind
    }

    /// Returns the label of this ride's kind.
    #[must_use]
    pub const fn ride_type(&self) -> &'static str {
        self.kind.label()
    }

    /// Computes the fare owed for this ride.
    #[must_use]
    pub fn fare(&self) -> f64 {
        self.kind.fare(self.distance)
    }
}
