//! # holiday-export
//!
//! Generates holiday data files from a remote calendar API.
//!
//! For every country known to the API, holidays are fetched year by year and
//! split by kind: public holidays and school holidays each go to their own
//! flat file, one `"<country_code> <YYYY-MM-DD>"` line per day. A second mode
//! renders a source file enumerating the same countries from a template.
//!
//! Requests are issued one at a time. A year the API has no data for is
//! skipped and logged; only a missing country catalog or a broken template
//! stops the run.
//!
//! ## Quick Start
//!
//! ```no_run
//! use holiday_export::{Config, Pipeline, RunMode, YearRange};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = Pipeline::new(Config::default())?;
//!
//!     let report = pipeline
//!         .run(RunMode::Dates(YearRange::new(2020, 2025)?))
//!         .await?;
//!     println!("{report:?}");
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Country catalog
pub mod catalog;
/// HTTP session against the holiday API
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Per-country holiday fetching
pub mod fetcher;
/// Pipeline driver
pub mod pipeline;
/// Country enumeration rendering
pub mod render;
/// Core types
pub mod types;
/// Aggregated holiday export
pub mod writer;

// Re-export commonly used types
pub use catalog::CountryCatalog;
pub use client::HolidayApi;
pub use config::{ApiConfig, Config, OutputConfig};
pub use error::{Error, Result};
pub use fetcher::HolidayFetcher;
pub use pipeline::{Pipeline, RunReport};
pub use types::{Country, FetchOutcome, HolidayKind, HolidayRecord, RunMode, YearRange};
pub use writer::WriteSummary;
