// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ride_log::{RideLog, SharedRide};
use ride_share_domain::{DomainError, Name, ParticipantId};
use tracing::debug;

/// A rider and the rides they have requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    id: ParticipantId,
    name: Name,
    requested: RideLog,
}

impl Rider {
    /// Creates a new rider with no rides.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn new(id: ParticipantId, name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            requested: RideLog::new(),
        })
    }

    #[must_use]
    pub const fn id(&self) -> ParticipantId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.value()
    }

    /// Returns the requested rides in the order they were requested.
    #[must_use]
    pub fn rides(&self) -> &[SharedRide] {
        self.requested.as_slice()
    }

    /// Records a requested ride.
    pub fn request_ride(&mut self, ride: SharedRide) {
        debug!(
            ride_id = ride.id().value(),
            rider = %self.name,
            "Ride requested by rider"
        );
        self.requested.push(ride);
    }

    #[must_use]
    pub fn total_rides(&self) -> usize {
        self.requested.len()
    }

    /// Sums the fares of every requested ride.
    #[must_use]
    pub fn total_spent(&self) -> f64 {
        self.requested.total_fare()
    }
}
