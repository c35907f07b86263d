// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{assert_money_eq, ride_id};
use crate::{Discount, DomainError, LuxuryFee, Ride, RideKind};

fn create_test_rides() -> Vec<Ride> {
    vec![
        Ride::base(ride_id(100), "Depot", "Park", 10.0).unwrap(),
        Ride::standard(ride_id(101), "Downtown", "Airport", 15.5).unwrap(),
        Ride::premium_with_fee(ride_id(102), "Hotel Plaza", "Convention Center", 8.2, 10.0)
            .unwrap(),
        Ride::economy_with_discount(ride_id(103), "Main St", "Oak Ave", 5.0, 0.20).unwrap(),
    ]
}

#[test]
fn test_ride_accessors() {
    let ride: Ride = Ride::standard(ride_id(101), "Downtown", "Airport", 15.5).unwrap();
    assert_eq!(ride.id(), ride_id(101));
    assert_eq!(ride.pickup().name(), "Downtown");
    assert_eq!(ride.dropoff().name(), "Airport");
    assert!((ride.distance().miles() - 15.5).abs() < f64::EPSILON);
    assert_eq!(ride.kind(), &RideKind::Standard);
}

#[test]
fn test_ride_type_labels() {
    let labels: Vec<&str> = create_test_rides().iter().map(Ride::ride_type).collect();
    assert_eq!(labels, vec!["Base", "Standard", "Premium", "Economy"]);
}

#[test]
fn test_fare_dispatches_by_kind() {
    let fares: Vec<f64> = create_test_rides().iter().map(Ride::fare).collect();
    assert_money_eq(fares[0], 20.00);
    assert_money_eq(fares[1], 38.75);
    assert_money_eq(fares[2], 42.80);
    assert_money_eq(fares[3], 7.00);
}

#[test]
fn test_fare_is_idempotent() {
    for ride in create_test_rides() {
        let first: f64 = ride.fare();
        let second: f64 = ride.fare();
        assert!((first - second).abs() < f64::EPSILON);
    }
}

#[test]
fn test_premium_uses_default_fee() {
    let ride: Ride = Ride::premium(ride_id(1), "A", "B", 1.0).unwrap();
    assert_eq!(
        ride.kind(),
        &RideKind::Premium {
            luxury_fee: LuxuryFee::DEFAULT
        }
    );
    assert_money_eq(ride.fare(), 9.00);
}

#[test]
fn test_economy_uses_default_discount() {
    let ride: Ride = Ride::economy(ride_id(1), "A", "B", 4.0).unwrap();
    assert_eq!(
        ride.kind(),
        &RideKind::Economy {
            discount: Discount::DEFAULT
        }
    );
    assert_money_eq(ride.fare(), 5.95);
}

#[test]
fn test_ride_rejects_invalid_distance() {
    let result: Result<Ride, DomainError> = Ride::standard(ride_id(1), "A", "B", 0.0);
    assert!(matches!(result, Err(DomainError::InvalidDistance { .. })));
}

#[test]
fn test_ride_keeps_locations_as_given() {
    let ride: Ride = Ride::standard(ride_id(1), " Main St ", "Oak Ave", 1.0).unwrap();
    assert_eq!(ride.pickup().name(), " Main St ");
    assert_eq!(ride.dropoff().name(), "Oak Ave");
}

#[test]
fn test_ride_rejects_empty_location() {
    let result: Result<Ride, DomainError> = Ride::standard(ride_id(1), "", "B", 1.0);
    assert!(matches!(result, Err(DomainError::InvalidLocation(_))));
    let result: Result<Ride, DomainError> = Ride::standard(ride_id(1), "A", " ", 1.0);
    assert!(matches!(result, Err(DomainError::InvalidLocation(_))));
}

#[test]
fn test_ride_rejects_invalid_variant_inputs() {
    let result: Result<Ride, DomainError> =
        Ride::premium_with_fee(ride_id(1), "A", "B", 1.0, -5.0);
    assert!(matches!(result, Err(DomainError::InvalidLuxuryFee { .. })));

    let result: Result<Ride, DomainError> =
        Ride::economy_with_discount(ride_id(1), "A", "B", 1.0, 1.0);
    assert!(matches!(result, Err(DomainError::InvalidDiscount { .. })));
}

#[test]
fn test_rate_per_mile_by_kind() {
    let rates: Vec<f64> = create_test_rides()
        .iter()
        .map(|ride| ride.kind().rate_per_mile())
        .collect();
    assert_money_eq(rates[0], 2.00);
    assert_money_eq(rates[1], 2.50);
    assert_money_eq(rates[2], 4.00);
    assert_money_eq(rates[3], 1.75);
}

#[test]
fn test_ride_kind_display_matches_label() {
    for ride in create_test_rides() {
        assert_eq!(ride.kind().to_string(), ride.ride_type());
    }
}
