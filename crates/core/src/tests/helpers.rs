// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SharedRide;
use ride_share_domain::{ParticipantId, Ride, RideId};
use std::rc::Rc;

pub fn create_standard_ride(id: u32, miles: f64) -> SharedRide {
    Rc::new(Ride::standard(RideId::new(id), "Downtown", "Airport", miles).unwrap())
}

pub fn create_premium_ride(id: u32, miles: f64, fee: f64) -> SharedRide {
    Rc::new(
        Ride::premium_with_fee(RideId::new(id), "Hotel Plaza", "Convention Center", miles, fee)
            .unwrap(),
    )
}

pub fn create_economy_ride(id: u32, miles: f64, discount: f64) -> SharedRide {
    Rc::new(
        Ride::economy_with_discount(RideId::new(id), "Main St", "Oak Ave", miles, discount)
            .unwrap(),
    )
}

pub fn participant(id: u32) -> ParticipantId {
    ParticipantId::new(id)
}

pub fn assert_money_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
