// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
pub mod fare;
mod ride;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use fare::{base_fare, economy_fare, premium_fare, standard_fare};
pub use ride::{Ride, RideKind};
pub use types::{Discount, Distance, Location, LuxuryFee, Name, ParticipantId, Rating, RideId};
