// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing domain values.
///
/// Fare computation itself never fails; every failure is raised when a
/// value is built.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Distance is zero, negative, or not a finite number.
    InvalidDistance {
        /// The rejected distance in miles.
        miles: f64,
    },
    /// Luxury fee is negative or not a finite number.
    InvalidLuxuryFee {
        /// The rejected fee.
        fee: f64,
    },
    /// Discount fraction lies outside `[0, 1)`.
    InvalidDiscount {
        /// The rejected fraction.
        fraction: f64,
    },
    /// Rating lies outside `[0, 5]`.
    InvalidRating {
        /// The rejected rating.
        rating: f64,
    },
    /// A pickup or dropoff location is empty.
    InvalidLocation(String),
    /// A participant name is empty.
    InvalidName(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDistance { miles } => {
                write!(f, "Invalid distance: {miles} miles. Must be greater than 0")
            }
            Self::InvalidLuxuryFee { fee } => {
                write!(f, "Invalid luxury fee: {fee}. Must not be negative")
            }
            Self::InvalidDiscount { fraction } => {
                write!(
                    f,
                    "Invalid discount: {fraction}. Must be at least 0 and less than 1"
                )
            }
            Self::InvalidRating { rating } => {
                write!(f, "Invalid rating: {rating}. Must be between 0 and 5")
            }
            Self::InvalidLocation(msg) => write!(f, "Invalid location: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
