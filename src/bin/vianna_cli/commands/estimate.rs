// ABOUTME: VO2max estimation command for vianna-cli
// ABOUTME: Validates a field test record and prints its estimate and classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

use chrono::{Local, NaiveDate};
use serde_json::json;
use tracing::info;
use vianna_coach::errors::{AppError, AppResult, ErrorCode};
use vianna_coach::intelligence::algorithms::FitnessEstimate;
use vianna_coach::models::{FitnessTest, TestProtocol};

use crate::helpers::display::print_json;
use crate::OutputFormat;

/// Estimate `VO2max` for one test
pub fn run(
    protocol: &str,
    value: f64,
    date: Option<&str>,
    format: OutputFormat,
) -> AppResult<()> {
    let protocol: TestProtocol = protocol.parse()?;
    let date = date.map(parse_date).transpose()?;
    let today = Local::now().date_naive();

    let test = FitnessTest::new(protocol, value, date, today)?;
    let vo2max = test.estimated_vo2max();
    let classification = test.classification();
    info!(protocol = %protocol, vo2max, %classification, "Estimated fitness test");

    match format {
        OutputFormat::Json => print_json(&json!({
            "test": test,
            "estimated_vo2max": vo2max,
            "classification": classification,
        }))?,
        OutputFormat::Table => {
            println!("Protocol:       {}", protocol.display_name());
            println!("{:<15} {value}", format!("{}:", protocol.raw_value_label()));
            println!("Date:           {}", test.date);
            println!("VO2max:         {vo2max:.2} ml/kg/min");
            println!("Classification: {classification}");
        }
    }
    Ok(())
}

fn parse_date(text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|error| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("test date '{text}' must be YYYY-MM-DD"),
        )
        .with_field("date")
        .with_source(error)
    })
}
