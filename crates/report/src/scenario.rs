// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The full text report, section by section.

use crate::cards::render_ride;
use crate::participants::{render_assignment, render_driver, render_request, render_rider};
use crate::text::{TextBlock, money, rule};
use ride_share::{Scenario, SharedRide, total_fares};

/// Renders the program title box.
#[must_use]
pub fn render_banner() -> String {
    let mut out: TextBlock = TextBlock::new();
    out.blank();
    out.line("╔═══════════════════════════════════════════════════╗");
    out.line("║                                                   ║");
    out.line("║        RIDE SHARING SYSTEM - Rust                 ║");
    out.line("║   Demonstrating OOP Principles                    ║");
    out.line("║                                                   ║");
    out.line("╚═══════════════════════════════════════════════════╝");
    out.finish()
}

/// Renders a section title between two rules.
#[must_use]
pub fn render_header(title: &str) -> String {
    let mut out: TextBlock = TextBlock::new();
    out.blank();
    out.line(&rule());
    out.line(&format!("  {title}"));
    out.line(&rule());
    out.finish()
}

/// Renders every ride through the same card entry point, then their combined fare.
#[must_use]
pub fn render_polymorphism(rides: &[SharedRide]) -> String {
    let mut out: TextBlock = TextBlock::new();
    out.append(&render_header("POLYMORPHISM DEMONSTRATION"));
    out.line("Calling fare() and render_ride() on every ride kind through one shared handle type:");
    out.blank();
    for (index, ride) in rides.iter().enumerate() {
        out.line(&format!("Ride {}:", index + 1));
        out.append(&render_ride(ride));
        out.blank();
    }
    out.line("╔═════════════════════════════════════════╗");
    out.padded(
        "║ Total Fares from All Rides: $",
        &money(total_fares(rides)),
        10,
        "║",
    );
    out.line("╚═════════════════════════════════════════╝");
    out.finish()
}

/// Renders the closing list of principles and the completion footer.
#[must_use]
pub fn render_summary() -> String {
    let mut out: TextBlock = TextBlock::new();
    out.append(&render_header("OOP PRINCIPLES DEMONSTRATED"));
    out.blank();
    out.line("1. ENCAPSULATION:");
    out.line("   - Ride, Driver, and Rider fields are private to their modules");
    out.line("   - Accessor methods and validated constructors control access to data");
    out.line("   - Completed and requested rides are private, append-only lists");
    out.blank();
    out.line("2. INHERITANCE:");
    out.line("   - Standard, Premium, and Economy are variants of one RideKind type");
    out.line("   - Every variant shares the common Ride fields");
    out.line("   - Variant-specific inputs travel with the variant that needs them");
    out.blank();
    out.line("3. POLYMORPHISM:");
    out.line("   - fare() dispatches on the ride kind at runtime");
    out.line("   - render_ride() picks a card layout per ride kind");
    out.line("   - Drivers and riders share ride handles without knowing the kind");
    out.line("   - Single interface (SharedRide) for multiple implementations");
    out.blank();
    out.line(&rule());
    out.line("Program completed successfully!");
    out.line(&rule());
    out.blank();
    out.finish()
}

/// Renders the complete report for a scenario.
#[must_use]
pub fn render_scenario(scenario: &Scenario) -> String {
    let mut out: TextBlock = TextBlock::new();
    out.append(&render_banner());

    out.append(&render_header("CREATING DIFFERENT RIDE TYPES"));
    out.line("Demonstrating ride variants: Standard, Premium, and Economy");
    out.blank();
    out.line(&format!(
        "✓ Created {} rides of different types",
        scenario.rides().len()
    ));

    out.append(&render_header("ENCAPSULATION - DRIVER CLASS"));
    out.line("Demonstrating Encapsulation: Private attributes accessed through public methods");
    out.blank();
    for driver in scenario.drivers() {
        out.blank();
        out.line(&format!("Adding rides to Driver: {}", driver.name()));
        for ride in driver.rides() {
            out.append(&render_assignment(ride, driver));
        }
    }

    out.append(&render_header("ENCAPSULATION - RIDER CLASS"));
    out.line("Demonstrating Encapsulation: Private ride history accessed through public methods");
    out.blank();
    for rider in scenario.riders() {
        out.blank();
        out.line(&format!("{} requesting rides:", rider.name()));
        for ride in rider.rides() {
            out.append(&render_request(ride, rider));
        }
    }

    out.append(&render_polymorphism(scenario.rides()));

    out.append(&render_header("DRIVER COMPLETE INFORMATION"));
    for (index, driver) in scenario.drivers().iter().enumerate() {
        if index > 0 {
            out.blank();
        }
        out.append(&render_driver(driver));
    }

    out.append(&render_header("RIDER COMPLETE INFORMATION"));
    for (index, rider) in scenario.riders().iter().enumerate() {
        if index > 0 {
            out.blank();
        }
        out.append(&render_rider(rider));
    }

    out.append(&render_summary());
    out.finish()
}
