// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Information boxes and acknowledgement lines for drivers and riders.

use crate::cards::render_ride;
use crate::text::{TextBlock, fixed6, money};
use ride_share::{Driver, Rider, SharedRide};
use ride_share_domain::Ride;

const BOX_TOP: &str = "╔═════════════════════════════════════════╗";
const BOX_DIVIDER: &str = "╠═════════════════════════════════════════╣";
const BOX_BOTTOM: &str = "╚═════════════════════════════════════════╝";
const EDGE: &str = "║";

/// Renders the line acknowledging that a driver completed a ride.
#[must_use]
pub fn render_assignment(ride: &Ride, driver: &Driver) -> String {
    format!("✓ Ride #{} assigned to driver {}\n", ride.id(), driver.name())
}

/// Renders the line acknowledging that a rider requested a ride.
#[must_use]
pub fn render_request(ride: &Ride, rider: &Rider) -> String {
    format!("✓ Ride #{} requested by {}\n", ride.id(), rider.name())
}

/// Renders a driver's information box followed by their completed rides.
#[must_use]
pub fn render_driver(driver: &Driver) -> String {
    let mut out: TextBlock = TextBlock::new();
    out.blank();
    out.line(BOX_TOP);
    out.line("║          DRIVER INFORMATION             ║");
    out.line(BOX_DIVIDER);
    out.padded("║ Driver ID: ", &driver.id().to_string(), 28, EDGE);
    out.padded("║ Name: ", driver.name(), 33, EDGE);
    out.padded(
        "║ Rating: ",
        &format!("{} / 5.0", fixed6(driver.rating().value())),
        27,
        EDGE,
    );
    out.padded("║ Total Rides: ", &driver.total_rides().to_string(), 26, EDGE);
    out.padded(
        "║ Total Earnings: $",
        &money(driver.total_earnings()),
        22,
        EDGE,
    );
    out.line(BOX_BOTTOM);
    ride_list(&mut out, "Completed Rides:", driver.rides());
    out.finish()
}

/// Renders a rider's information box followed by their ride history.
#[must_use]
pub fn render_rider(rider: &Rider) -> String {
    let mut out: TextBlock = TextBlock::new();
    out.blank();
    out.line(BOX_TOP);
    out.line("║          RIDER INFORMATION              ║");
    out.line(BOX_DIVIDER);
    out.padded("║ Rider ID: ", &rider.id().to_string(), 29, EDGE);
    out.padded("║ Name: ", rider.name(), 33, EDGE);
    out.padded("║ Total Rides: ", &rider.total_rides().to_string(), 26, EDGE);
    out.padded("║ Total Spent: $", &money(rider.total_spent()), 25, EDGE);
    out.line(BOX_BOTTOM);
    ride_list(&mut out, "Ride History:", rider.rides());
    out.finish()
}

fn ride_list(out: &mut TextBlock, heading: &str, rides: &[SharedRide]) {
    if rides.is_empty() {
        return;
    }
    out.blank();
    out.line(heading);
    for (index, ride) in rides.iter().enumerate() {
        out.blank();
        out.line(&format!("--- Ride {} ---", index + 1));
        out.append(&render_ride(ride));
    }
}
