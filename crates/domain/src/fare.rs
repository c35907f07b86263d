// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fare rules for every ride variant.
//!
//! | Variant  | Formula                                    |
//! |----------|--------------------------------------------|
//! | Base     | distance × 2.00                            |
//! | Standard | distance × 2.50                            |
//! | Premium  | distance × 4.00 + luxury fee               |
//! | Economy  | (distance × 1.75) × (1 − discount)         |
//!
//! No rounding happens here. Rounding to cents is a display concern.

use crate::types::{Discount, Distance, LuxuryFee};

/// Rate per mile for a base ride.
pub const BASE_RATE_PER_MILE: f64 = 2.00;
/// Rate per mile for a standard ride.
pub const STANDARD_RATE_PER_MILE: f64 = 2.50;
/// Rate per mile for a premium ride.
pub const PREMIUM_RATE_PER_MILE: f64 = 4.00;
/// Rate per mile for an economy ride, before the discount.
pub const ECONOMY_RATE_PER_MILE: f64 = 1.75;

/// Computes the fare of a base ride.
#[must_use]
pub fn base_fare(distance: Distance) -> f64 {
    distance.miles() * BASE_RATE_PER_MILE
}

/// Computes the fare of a standard ride.
#[must_use]
pub fn standard_fare(distance: Distance) -> f64 {
    distance.miles() * STANDARD_RATE_PER_MILE
}

/// Computes the fare of a premium ride: the per-mile charge plus the flat luxury fee.
#[must_use]
pub fn premium_fare(distance: Distance, luxury_fee: LuxuryFee) -> f64 {
    distance.miles().mul_add(PREMIUM_RATE_PER_MILE, luxury_fee.amount())
}

/// Computes the fare of an economy ride.
///
/// Never exceeds the undiscounted `distance × 1.75`.
#[must_use]
pub fn economy_fare(distance: Distance, discount: Discount) -> f64 {
    let undiscounted: f64 = distance.miles() * ECONOMY_RATE_PER_MILE;
    undiscounted * (1.0 - discount.fraction())
}
