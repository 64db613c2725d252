//! # Tenure - Service and Leave Time Record Keeper
//!
//! A command-line utility for logging active and leave periods and
//! aggregating them into total elapsed time.
//!
//! ## Features
//!
//! - **Calendar Differences**: year/month/day spans with correct month and leap-year borrowing
//! - **Overlap Clipping**: overlapping or nested periods are never counted twice
//! - **Category Totals**: separate active and leave totals, normalized to 30-day months
//! - **Interactive Sessions**: add, edit, delete and clear records with confirmations
//! - **Batch Mode**: aggregate records from CSV or JSON files
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tenure::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
