// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::fixed_scenario;
use crate::ScenarioSummary;
use ride_share::Scenario;
use ride_share_domain::RideId;
use serde_json::Value;

#[test]
fn test_summary_from_fixed_scenario() {
    let summary: ScenarioSummary = ScenarioSummary::from_scenario(&fixed_scenario());
    assert_eq!(summary.rides.len(), 5);
    assert_eq!(summary.drivers.len(), 2);
    assert_eq!(summary.riders.len(), 2);
    assert!((summary.total_fares - 209.10).abs() < 1e-9);

    assert_eq!(summary.rides[2].ride_type, "Economy");
    assert_eq!(summary.rides[0].pickup.name(), "Downtown");
    assert!((summary.rides[0].distance_miles.miles() - 15.5).abs() < 1e-9);
    assert!((summary.drivers[0].rating.value() - 4.8).abs() < 1e-9);
    assert!((summary.rides[2].fare - 7.00).abs() < 1e-9);

    assert_eq!(summary.drivers[1].name, "Sarah Johnson");
    assert_eq!(
        summary.drivers[1].ride_ids,
        vec![RideId::new(104), RideId::new(105)]
    );
    assert!((summary.drivers[1].total_earnings - 120.55).abs() < 1e-9);

    assert_eq!(summary.riders[0].total_rides, 2);
    assert!((summary.riders[0].total_spent - 45.75).abs() < 1e-9);
}

#[test]
fn test_summary_json_shape() {
    let json: String = ScenarioSummary::from_scenario(&fixed_scenario())
        .to_json()
        .unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["rides"][0]["id"], 101);
    assert_eq!(value["rides"][0]["type"], "Standard");
    assert_eq!(value["rides"][1]["pickup"], "Hotel Plaza");
    assert_eq!(value["rides"][0]["distance_miles"], 15.5);
    assert_eq!(value["drivers"][0]["id"], 501);
    assert_eq!(value["drivers"][0]["rating"], 4.8);
    assert_eq!(value["drivers"][0]["ride_ids"], serde_json::json!([101, 102, 103]));
    assert_eq!(value["riders"][1]["name"], "Bob Wilson");
    assert_eq!(value["riders"][1]["total_spent"], 163.35);
}

#[test]
fn test_empty_scenario_totals_positive_zero() {
    let summary: ScenarioSummary = ScenarioSummary::from_scenario(&Scenario::new());
    assert!(summary.rides.is_empty());
    assert_eq!(summary.total_fares.to_bits(), 0.0_f64.to_bits());

    let json: String = summary.to_json().unwrap();
    assert!(json.contains("\"total_fares\": 0.0"));
    assert!(!json.contains("-0.0"));
}
