// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ride_log::{RideLog, SharedRide};
use ride_share_domain::{DomainError, Name, ParticipantId, Rating};
use tracing::debug;

/// A driver and the rides they have completed.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    id: ParticipantId,
    name: Name,
    rating: Rating,
    completed: RideLog,
}

impl Driver {
    /// Creates a new driver with no rides.
    ///
    /// # Arguments
    ///
    /// * `id` - The driver identifier
    /// * `name` - The driver's name
    /// * `rating` - The driver's rating on the 0 to 5 scale
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the rating is out of range.
    pub fn new(id: ParticipantId, name: &str, rating: f64) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            rating: Rating::new(rating)?,
            completed: RideLog::new(),
        })
    }

    /// Creates a new driver with the maximum rating.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn with_default_rating(id: ParticipantId, name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            rating: Rating::default(),
            completed: RideLog::new(),
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

    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the completed rides in the order they were added.
    #[must_use]
    pub fn rides(&self) -> &[SharedRide] {
        self.completed.as_slice()
    }

    /// Records a completed ride.
    ///
    /// The same ride may be added more than once; each entry counts.
    pub fn add_ride(&mut self, ride: SharedRide) {
        debug!(
            ride_id = ride.id().value(),
            driver = %self.name,
            "Ride assigned to driver"
        );
        self.completed.push(ride);
    }

    #[must_use]
    pub fn total_rides(&self) -> usize {
        self.completed.len()
    }

    /// Sums the fares of every completed ride.
    #[must_use]
    pub fn total_earnings(&self) -> f64 {
        self.completed.total_fare()
    }
}
