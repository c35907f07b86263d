// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ride_share::{Scenario, SharedRide};
use ride_share_domain::RideId;

pub fn fixed_scenario() -> Scenario {
    Scenario::fixed().unwrap()
}

pub fn fixed_ride(id: u32) -> SharedRide {
    fixed_scenario().ride(RideId::new(id)).unwrap()
}

pub fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}
