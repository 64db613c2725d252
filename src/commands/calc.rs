//! Batch aggregation of a record file.
//!
//! Reads a CSV or JSON record file, validates every row, and prints the
//! active and leave totals. `--details` adds the record table and the
//! counted span of each record after overlap clipping. `--format json`
//! prints the same data as JSON for scripting.

use crate::{
    libs::{
        aggregator::{Aggregate, AggregateResult, Contribution},
        config::Config,
        import::load_records,
        messages::Message,
        record::{IdGenerator, IntervalRecord},
        view::View,
    },
    msg_debug, msg_error_anyhow,
};
use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// CSV (`key,start,end,category`) or JSON record file
    #[arg(required = true)]
    file: PathBuf,

    #[arg(short, long, value_enum, default_value = "table", help = "Output format")]
    format: OutputFormat,

    #[arg(short, long, help = "Also show the records and what each one counts")]
    details: bool,

    #[arg(long, help = "Override the configured date input format (chrono strftime)")]
    input_format: Option<String>,
}

#[derive(Debug, Serialize)]
struct CalcReport<'a> {
    records: &'a [IntervalRecord],
    contributions: Vec<Contribution>,
    totals: AggregateResult,
}

pub fn cmd(args: CalcArgs) -> Result<()> {
    let config = Config::read()?;
    let input_format = args.input_format.unwrap_or_else(|| config.input_date_format());

    let mut ids = IdGenerator::new();
    let records = load_records(&args.file, &input_format, &mut ids).map_err(|e| msg_error_anyhow!(Message::ImportFailed(e.to_string())))?;
    msg_debug!(Message::RecordsLoaded {
        count: records.len(),
        path: args.file.display().to_string(),
    });

    let totals = records.aggregate();

    match args.format {
        OutputFormat::Json => {
            let report = CalcReport {
                records: &records,
                contributions: records.contributions(),
                totals,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            if args.details {
                let date_format = config.date_format();
                View::records(&records, &date_format)?;
                View::contributions(&records, &records.contributions(), &date_format)?;
            }
            View::totals(&totals)?;
        }
    }

    Ok(())
}
