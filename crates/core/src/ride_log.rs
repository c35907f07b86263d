// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ride_share_domain::Ride;
use std::rc::Rc;

/// A ride handle that can be held by a driver and a rider at the same time.
pub type SharedRide = Rc<Ride>;

/// Sums the fares of the given rides.
///
/// Fares are recomputed on every call. An empty list totals `+0.0`.
#[must_use]
pub fn total_fares(rides: &[SharedRide]) -> f64 {
    // `Sum for f64` starts from -0.0
    rides.iter().fold(0.0, |total, ride| total + ride.fare())
}

/// Append-only sequence of rides held by one participant.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RideLog {
    rides: Vec<SharedRide>,
}

impl RideLog {
    pub(crate) const fn new() -> Self {
        Self { rides: Vec::new() }
    }

    pub(crate) fn push(&mut self, ride: SharedRide) {
        self.rides.push(ride);
    }

    pub(crate) fn as_slice(&self) -> &[SharedRide] {
        &self.rides
    }

    pub(crate) fn len(&self) -> usize {
        self.rides.len()
    }

    pub(crate) fn total_fare(&self) -> f64 {
        total_fares(&self.rides)
    }
}
