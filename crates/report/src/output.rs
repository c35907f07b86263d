// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ReportError;
use crate::scenario::render_scenario;
use crate::summary::ScenarioSummary;
use ride_share::Scenario;
use std::io::Write;
use tracing::debug;

/// The view a report is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// The box-drawn text report.
    #[default]
    Text,
    /// Pretty-printed JSON summary.
    Json,
}

/// Renders a scenario in the given format and writes it out.
///
/// # Arguments
///
/// * `writer` - Destination for the report
/// * `scenario` - The scenario to report on
/// * `format` - Which view to render
///
/// # Errors
///
/// Returns an error if serialization fails or the writer rejects the output.
pub fn write_report<W: Write>(
    writer: &mut W,
    scenario: &Scenario,
    format: ReportFormat,
) -> Result<(), ReportError> {
    let rendered: String = match format {
        ReportFormat::Text => render_scenario(scenario),
        ReportFormat::Json => {
            let mut json: String = ScenarioSummary::from_scenario(scenario).to_json()?;
            json.push('\n');
            json
        }
    };
    debug!(bytes = rendered.len(), ?format, "Writing report");
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}
