// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Box-drawn cards for single rides.
//!
//! Each ride kind has its own card layout. Column widths are fixed so the
//! cards line up with the participant boxes.

use crate::text::{TextBlock, fixed6, money};
use ride_share_domain::{Ride, RideKind};

const CARD_TOP: &str = "┌─────────────────────────────────────────┐";
const CARD_DIVIDER: &str = "├─────────────────────────────────────────┤";
const CARD_BOTTOM: &str = "└─────────────────────────────────────────┘";
const EDGE: &str = "│";

/// Renders the card for one ride, dispatching on its kind.
#[must_use]
pub fn render_ride(ride: &Ride) -> String {
    let mut out: TextBlock = TextBlock::new();
    match ride.kind() {
        RideKind::Base => base_card(&mut out, ride),
        RideKind::Standard => standard_card(&mut out, ride),
        RideKind::Premium { luxury_fee } => {
            titled_header(&mut out, "│ ★ PREMIUM RIDE ★                        │");
            common_rows(&mut out, ride);
            rate_row(&mut out, "│ Premium Rate: $", ride, 21);
            out.padded("│ Luxury Fee: $", &money(luxury_fee.amount()), 24, EDGE);
            out.padded("│ Total Fare: $", &money(ride.fare()), 24, EDGE);
            out.line(CARD_BOTTOM);
        }
        RideKind::Economy { discount } => {
            titled_header(&mut out, "│ ECONOMY RIDE                            │");
            common_rows(&mut out, ride);
            rate_row(&mut out, "│ Economy Rate: $", ride, 21);
            out.padded(
                "│ Discount: ",
                &format!("{}%", discount.whole_percent()),
                27,
                EDGE,
            );
            out.padded("│ Final Fare: $", &money(ride.fare()), 24, EDGE);
            out.line(CARD_BOTTOM);
        }
    }
    out.finish()
}

fn base_card(out: &mut TextBlock, ride: &Ride) {
    out.line(CARD_TOP);
    out.padded("│ Ride ID: ", &ride.id().to_string(), 30, EDGE);
    out.padded("│ Type: ", ride.ride_type(), 33, EDGE);
    out.padded("│ Pickup: ", ride.pickup().name(), 31, EDGE);
    out.padded("│ Dropoff: ", ride.dropoff().name(), 30, EDGE);
    distance_row(out, ride);
    out.padded("│ Fare: $", &money(ride.fare()), 30, EDGE);
    out.line(CARD_BOTTOM);
}

fn standard_card(out: &mut TextBlock, ride: &Ride) {
    titled_header(out, "│ STANDARD RIDE                           │");
    common_rows(out, ride);
    rate_row(out, "│ Rate: $", ride, 29);
    out.padded("│ Fare: $", &money(ride.fare()), 30, EDGE);
    out.line(CARD_BOTTOM);
}

fn titled_header(out: &mut TextBlock, title: &str) {
    out.line(CARD_TOP);
    out.line(title);
    out.line(CARD_DIVIDER);
}

fn common_rows(out: &mut TextBlock, ride: &Ride) {
    out.padded("│ Ride ID: ", &ride.id().to_string(), 30, EDGE);
    out.padded("│ Pickup: ", ride.pickup().name(), 31, EDGE);
    out.padded("│ Dropoff: ", ride.dropoff().name(), 30, EDGE);
    distance_row(out, ride);
}

fn distance_row(out: &mut TextBlock, ride: &Ride) {
    let miles: String = format!("{} miles", fixed6(ride.distance().miles()));
    out.padded("│ Distance: ", &miles, 24, EDGE);
}

fn rate_row(out: &mut TextBlock, prefix: &str, ride: &Ride, width: usize) {
    let rate: String = format!("{}/mile", fixed6(ride.kind().rate_per_mile()));
    out.padded(prefix, &rate, width, EDGE);
}
