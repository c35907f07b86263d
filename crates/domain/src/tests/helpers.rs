// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Distance, RideId};

pub fn miles(value: f64) -> Distance {
    Distance::from_miles(value).unwrap()
}

pub fn ride_id(value: u32) -> RideId {
    RideId::new(value)
}

pub fn assert_money_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
