// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed cast of rides, drivers and riders that the program reports on.
//!
//! ## Cast
//!
//! | Ride | Kind     | Pickup        | Dropoff             | Miles | Extra       |
//! |------|----------|---------------|---------------------|-------|-------------|
//! | 101  | Standard | Downtown      | Airport             | 15.5  |             |
//! | 102  | Premium  | Hotel Plaza   | Convention Center   | 8.2   | fee 10.00   |
//! | 103  | Economy  | Main St       | Oak Ave             | 5.0   | 20% off     |
//! | 104  | Standard | University    | Shopping Mall       | 12.3  |             |
//! | 105  | Premium  | Luxury Resort | Restaurant District | 18.7  | fee 15.00   |
//!
//! Drivers 501 (John Smith, 4.8) and 502 (Sarah Johnson, 4.9) complete
//! rides 101-103 and 104-105 respectively. Riders 701 (Alice Brown) and
//! 702 (Bob Wilson) request rides 101, 103 and 102, 104, 105.

use crate::driver::Driver;
use crate::error::CoreError;
use crate::ride_log::{SharedRide, total_fares};
use crate::rider::Rider;
use ride_share_domain::{ParticipantId, Ride, RideId};
use std::rc::Rc;
use tracing::info;

/// A set of rides and the participants that reference them.
///
/// The scenario owns one handle to every ride; drivers and riders hold
/// additional handles to the same rides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    rides: Vec<SharedRide>,
    drivers: Vec<Driver>,
    riders: Vec<Rider>,
}

impl Scenario {
    /// Creates an empty scenario.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rides: Vec::new(),
            drivers: Vec::new(),
            riders: Vec::new(),
        }
    }

    /// Builds the hardcoded cast.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the cast fails domain validation.
    pub fn fixed() -> Result<Self, CoreError> {
        let mut scenario: Self = Self::new();

        scenario.add_ride(Ride::standard(
            RideId::new(101),
            "Downtown",
            "Airport",
            15.5,
        )?);
        scenario.add_ride(Ride::premium_with_fee(
            RideId::new(102),
            "Hotel Plaza",
            "Convention Center",
            8.2,
            10.0,
        )?);
        scenario.add_ride(Ride::economy_with_discount(
            RideId::new(103),
            "Main St",
            "Oak Ave",
            5.0,
            0.20,
        )?);
        scenario.add_ride(Ride::standard(
            RideId::new(104),
            "University",
            "Shopping Mall",
            12.3,
        )?);
        scenario.add_ride(Ride::premium_with_fee(
            RideId::new(105),
            "Luxury Resort",
            "Restaurant District",
            18.7,
            15.0,
        )?);

        let mut john: Driver = Driver::new(ParticipantId::new(501), "John Smith", 4.8)?;
        let mut sarah: Driver = Driver::new(ParticipantId::new(502), "Sarah Johnson", 4.9)?;
        for id in [101, 102, 103] {
            john.add_ride(scenario.ride(RideId::new(id))?);
        }
        for id in [104, 105] {
            sarah.add_ride(scenario.ride(RideId::new(id))?);
        }
        scenario.add_driver(john);
        scenario.add_driver(sarah);

        let mut alice: Rider = Rider::new(ParticipantId::new(701), "Alice Brown")?;
        let mut bob: Rider = Rider::new(ParticipantId::new(702), "Bob Wilson")?;
        for id in [101, 103] {
            alice.request_ride(scenario.ride(RideId::new(id))?);
        }
        for id in [102, 104, 105] {
            bob.request_ride(scenario.ride(RideId::new(id))?);
        }
        scenario.add_rider(alice);
        scenario.add_rider(bob);

        info!(
            rides = scenario.rides.len(),
            drivers = scenario.drivers.len(),
            riders = scenario.riders.len(),
            "Built fixed scenario"
        );

        Ok(scenario)
    }

    /// Adds a ride and returns a shared handle to it.
    pub fn add_ride(&mut self, ride: Ride) -> SharedRide {
        let shared: SharedRide = Rc::new(ride);
        self.rides.push(Rc::clone(&shared));
        shared
    }

    /// Looks up a ride by identifier.
    ///
    /// If several rides share the identifier the first one added wins.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RideNotFound` if no ride has the identifier.
    pub fn ride(&self, id: RideId) -> Result<SharedRide, CoreError> {
        self.rides
            .iter()
            .find(|ride| ride.id() == id)
            .map(Rc::clone)
            .ok_or(CoreError::RideNotFound(id))
    }

    pub fn add_driver(&mut self, driver: Driver) {
        self.drivers.push(driver);
    }

    pub fn add_rider(&mut self, rider: Rider) {
        self.riders.push(rider);
    }

    /// Returns every ride in creation order.
    #[must_use]
    pub fn rides(&self) -> &[SharedRide] {
        &self.rides
    }

    #[must_use]
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    #[must_use]
    pub fn riders(&self) -> &[Rider] {
        &self.riders
    }

    /// Sums the fares of every ride in the scenario.
    #[must_use]
    pub fn total_fares(&self) -> f64 {
        total_fares(&self.rides)
    }
}
