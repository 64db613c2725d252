//! Core library modules for the tenure application.
//!
//! ## Features
//!
//! - **Calendar Arithmetic**: leap years, month lengths, year/month/day differences
//! - **Records**: validated interval records and their session store
//! - **Aggregation**: overlap-free totals of active and leave time
//! - **Input/Output**: record file import, table rendering, formatting
//! - **Core Infrastructure**: configuration, data storage, messaging
//!
//! ## Usage
//!
//! ```rust
//! use tenure::libs::record::RecordDraft;
//! use tenure::libs::store::RecordStore;
//!
//! let mut store = RecordStore::new();
//! store.add(&RecordDraft::new("000001", "2021-01-10", "2021-04-10", "active"), "%Y-%m-%d")?;
//! store.add(&RecordDraft::new("000002", "2021-04-10", "2021-04-20", "leave"), "%Y-%m-%d")?;
//!
//! let totals = store.aggregate();
//! assert_eq!(totals.active.to_string(), "0 years, 3 months, 0 days");
//! assert_eq!(totals.leave.to_string(), "0 years, 0 months, 10 days");
//! # Ok::<(), tenure::libs::record::RecordError>(())
//! ```

pub mod aggregator;
pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod date_diff;
pub mod formatter;
pub mod import;
pub mod messages;
pub mod record;
pub mod store;
pub mod view;
