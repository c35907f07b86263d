// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Machine-readable view of a scenario.

use ride_share::{Driver, Rider, Scenario, SharedRide};
use ride_share_domain::{Distance, Location, ParticipantId, Rating, RideId};
use serde::Serialize;

/// Summary of a whole scenario, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub rides: Vec<RideSummary>,
    pub drivers: Vec<DriverSummary>,
    pub riders: Vec<RiderSummary>,
    /// Combined fare of every ride, rounded to cents.
    pub total_fares: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideSummary {
    pub id: RideId,
    #[serde(rename = "type")]
    pub ride_type: String,
    pub pickup: Location,
    pub dropoff: Location,
    pub distance_miles: Distance,
    pub fare: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverSummary {
    pub id: ParticipantId,
    pub name: String,
    pub rating: Rating,
    pub total_rides: usize,
    pub total_earnings: f64,
    pub ride_ids: Vec<RideId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiderSummary {
    pub id: ParticipantId,
    pub name: String,
    pub total_rides: usize,
    pub total_spent: f64,
    pub ride_ids: Vec<RideId>,
}

impl ScenarioSummary {
    /// Builds the summary. Amounts are rounded to cents here and nowhere else.
    #[must_use]
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            rides: scenario.rides().iter().map(RideSummary::from_ride).collect(),
            drivers: scenario
                .drivers()
                .iter()
                .map(DriverSummary::from_driver)
                .collect(),
            riders: scenario
                .riders()
                .iter()
                .map(RiderSummary::from_rider)
                .collect(),
            total_fares: round_cents(scenario.total_fares()),
        }
    }

    /// Serializes the summary as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl RideSummary {
    fn from_ride(ride: &SharedRide) -> Self {
        Self {
            id: ride.id(),
            ride_type: ride.ride_type().to_string(),
            pickup: ride.pickup().clone(),
            dropoff: ride.dropoff().clone(),
            distance_miles: ride.distance(),
            fare: round_cents(ride.fare()),
        }
    }
}

impl DriverSummary {
    fn from_driver(driver: &Driver) -> Self {
        Self {
            id: driver.id(),
            name: driver.name().to_string(),
            rating: driver.rating(),
            total_rides: driver.total_rides(),
            total_earnings: round_cents(driver.total_earnings()),
            ride_ids: ride_ids(driver.rides()),
        }
    }
}

impl RiderSummary {
    fn from_rider(rider: &Rider) -> Self {
        Self {
            id: rider.id(),
            name: rider.name().to_string(),
            total_rides: rider.total_rides(),
            total_spent: round_cents(rider.total_spent()),
            ride_ids: ride_ids(rider.rides()),
        }
    }
}

fn ride_ids(rides: &[SharedRide]) -> Vec<RideId> {
    rides.iter().map(|ride| ride.id()).collect()
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
