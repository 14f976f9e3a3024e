//! Run a batch of loan scenarios from a CSV file
//!
//! Usage: cargo run --bin run_scenarios -- <scenarios.csv> <summaries.csv>
//!
//! Scenarios project in parallel; the output CSV has one summary row per
//! input row, in input order, with a per-row error column for scenarios
//! that failed validation.

use std::time::Instant;

use anyhow::{bail, Context, Result};

use fincalc::{LoanInput, Outcome, Scenario, ScenarioRunner};

/// Raw CSV row for one loan scenario
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_pct: f64,
    #[serde(rename = "TenureYears")]
    tenure_years: u32,
}

/// One output row per scenario
#[derive(Debug, Default, serde::Serialize)]
struct SummaryRow {
    principal: f64,
    annual_rate_pct: f64,
    tenure_years: u32,
    emi: f64,
    total_payment: f64,
    total_interest: f64,
    error: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("usage: run_scenarios <scenarios.csv> <summaries.csv>");
    }

    let start = Instant::now();
    let mut reader =
        csv::Reader::from_path(&args[1]).with_context(|| format!("cannot open {}", args[1]))?;
    let rows: Vec<CsvRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .context("malformed scenario row")?;
    println!("Loaded {} scenarios in {:?}", rows.len(), start.elapsed());

    let scenarios: Vec<Scenario> = rows
        .iter()
        .map(|row| {
            Scenario::Loan(LoanInput {
                principal: row.principal,
                annual_rate_pct: row.annual_rate_pct,
                tenure_years: row.tenure_years,
            })
        })
        .collect();

    let run_start = Instant::now();
    let results = ScenarioRunner::new().run_batch(&scenarios);
    println!("Projections complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&args[2])
        .with_context(|| format!("cannot create {}", args[2]))?;
    let mut failed = 0_usize;

    for (row, result) in rows.iter().zip(results) {
        let mut summary = SummaryRow {
            principal: row.principal,
            annual_rate_pct: row.annual_rate_pct,
            tenure_years: row.tenure_years,
            ..Default::default()
        };

        match result {
            Ok(Outcome::Loan(r)) => {
                summary.emi = r.emi;
                summary.total_payment = r.total_payment;
                summary.total_interest = r.total_interest;
            }
            // Only loan scenarios are built above.
            Ok(_) => continue,
            Err(e) => {
                failed += 1;
                summary.error = e.to_string();
            }
        }
        writer.serialize(summary)?;
    }
    writer.flush()?;

    println!(
        "Wrote {} summaries ({} failed validation) to: {}",
        rows.len(),
        failed,
        args[2]
    );
    Ok(())
}
