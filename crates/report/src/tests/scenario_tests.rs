// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{fixed_scenario, lines};
use crate::{render_banner, render_header, render_polymorphism, render_scenario, render_summary};
use ride_share::Scenario;

#[test]
fn test_header() {
    let rule: String = "=".repeat(50);
    assert_eq!(render_header("TITLE"), format!("\n{rule}\n  TITLE\n{rule}\n"));
}

#[test]
fn test_banner() {
    let banner: String = render_banner();
    assert!(banner.starts_with('\n'));
    assert!(banner.contains("RIDE SHARING SYSTEM - Rust"));
    assert_eq!(lines(&banner).len(), 7);
}

#[test]
fn test_polymorphism_section() {
    let scenario: Scenario = fixed_scenario();
    let rendered: String = render_polymorphism(scenario.rides());
    for index in 1..=5 {
        assert!(rendered.contains(&format!("Ride {index}:\n")));
    }
    assert!(rendered.contains("║ Total Fares from All Rides: $209.10    ║"));
    assert_eq!(rendered.matches("STANDARD RIDE").count(), 2);
    assert_eq!(rendered.matches("PREMIUM RIDE").count(), 2);
    assert_eq!(rendered.matches("ECONOMY RIDE").count(), 1);
}

#[test]
fn test_summary_footer() {
    let summary: String = render_summary();
    assert!(summary.contains("1. ENCAPSULATION:"));
    assert!(summary.contains("2. INHERITANCE:"));
    assert!(summary.contains("3. POLYMORPHISM:"));
    assert!(summary.ends_with("Program completed successfully!\n==================================================\n\n"));
}

#[test]
fn test_scenario_sections_in_order() {
    let report: String = render_scenario(&fixed_scenario());
    let sections: [&str; 8] = [
        "CREATING DIFFERENT RIDE TYPES",
        "ENCAPSULATION - DRIVER CLASS",
        "ENCAPSULATION - RIDER CLASS",
        "POLYMORPHISM DEMONSTRATION",
        "DRIVER COMPLETE INFORMATION",
        "RIDER COMPLETE INFORMATION",
        "OOP PRINCIPLES DEMONSTRATED",
        "Program completed successfully!",
    ];
    let positions: Vec<usize> = sections
        .iter()
        .map(|section| report.find(section).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_scenario_acknowledgements() {
    let report: String = render_scenario(&fixed_scenario());
    assert!(report.contains("✓ Created 5 rides of different types\n"));
    assert!(report.contains(
        "\nAdding rides to Driver: John Smith\n\
         ✓ Ride #101 assigned to driver John Smith\n\
         ✓ Ride #102 assigned to driver John Smith\n\
         ✓ Ride #103 assigned to driver John Smith\n"
    ));
    assert!(report.contains(
        "\nAlice Brown requesting rides:\n\
         ✓ Ride #101 requested by Alice Brown\n\
         ✓ Ride #103 requested by Alice Brown\n"
    ));
    assert!(report.contains("✓ Ride #105 requested by Bob Wilson\n"));
}

#[test]
fn test_scenario_participant_totals() {
    let report: String = render_scenario(&fixed_scenario());
    assert!(report.contains("║ Total Earnings: $88.55 "));
    assert!(report.contains("║ Total Earnings: $120.55 "));
    assert!(report.contains("║ Total Spent: $45.75 "));
    assert!(report.contains("║ Total Spent: $163.35 "));
}

#[test]
fn test_scenario_separates_participant_boxes() {
    let report: String = render_scenario(&fixed_scenario());
    assert!(report.contains("└─────────────────────────────────────────┘\n\n\n╔"));
}
