// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentation layer for ride-sharing scenarios.
//!
//! Rendering only reads from rides, drivers and riders. Nothing here
//! changes a computed value; amounts are rounded to cents for display only.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod cards;
mod error;
mod output;
mod participants;
mod scenario;
mod summary;
mod text;

#[cfg(test)]
mod tests;

pub use cards::render_ride;
pub use error::ReportError;
pub use output::{ReportFormat, write_report};
pub use participants::{render_assignment, render_driver, render_request, render_rider};
pub use scenario::{
    render_banner, render_header, render_polymorphism, render_scenario, render_summary,
};
pub use summary::{DriverSummary, RideSummary, RiderSummary, ScenarioSummary};
