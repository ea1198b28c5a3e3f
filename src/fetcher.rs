//! Per-country holiday fetching
//!
//! [`HolidayFetcher`] turns the raw `PublicHolidays` listings into
//! [`HolidayRecord`]s of a single kind. A year that cannot be fetched is
//! skipped with a warning and never aborts the caller.

use futures::stream::{self, Stream, StreamExt};
use tracing::{debug, warn};

use crate::client::{HolidayApi, PublicHoliday};
use crate::types::{Country, FetchOutcome, HolidayKind, HolidayRecord, YearRange};

/// Fetches and filters holiday listings through a borrowed session
#[derive(Clone, Copy, Debug)]
pub struct HolidayFetcher<'a> {
    api: &'a HolidayApi,
}

impl<'a> HolidayFetcher<'a> {
    /// Create a fetcher lending the run's session
    pub fn new(api: &'a HolidayApi) -> Self {
        Self { api }
    }

    /// Fetch one year for one country
    ///
    /// Entries are kept when their `types` contain the kind's label and their
    /// date lies inside `range`. The API occasionally returns days of the
    /// neighbouring years; those are dropped here.
    pub async fn fetch_year(
        &self,
        country: &Country,
        year: i32,
        range: YearRange,
        kind: HolidayKind,
    ) -> FetchOutcome {
        match self.api.public_holidays(year, &country.iso_code).await {
            Ok(entries) => {
                let records = select_records(&country.iso_code, entries, range, kind);
                debug!(
                    country = %country.iso_code,
                    year,
                    kind = %kind,
                    records = records.len(),
                    "fetched holidays"
                );
                FetchOutcome::Success(records)
            }
            Err(e) => {
                warn!(
                    country = %country.iso_code,
                    year,
                    error = %e,
                    "skipping year, no holiday data available"
                );
                FetchOutcome::SkippedUnavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Per-year outcomes for a country, in ascending year order
    ///
    /// The stream is lazy: each year is requested only when polled, one at a
    /// time.
    pub fn outcomes(
        self,
        country: &'a Country,
        range: YearRange,
        kind: HolidayKind,
    ) -> impl Stream<Item = (i32, FetchOutcome)> + 'a {
        stream::iter(range.years()).then(move |year| async move {
            let outcome = self.fetch_year(country, year, range, kind).await;
            (year, outcome)
        })
    }

    /// Matching records for a country across the whole range
    ///
    /// Single-pass; every call issues its own requests.
    pub fn holidays(
        self,
        country: &'a Country,
        range: YearRange,
        kind: HolidayKind,
    ) -> impl Stream<Item = HolidayRecord> + 'a {
        self.outcomes(country, range, kind)
            .flat_map(|(_, outcome)| stream::iter(outcome.into_records()))
    }
}

fn select_records(
    country_code: &str,
    entries: Vec<PublicHoliday>,
    range: YearRange,
    kind: HolidayKind,
) -> Vec<HolidayRecord> {
    entries
        .into_iter()
        .filter(|entry| entry.types.iter().any(|label| kind.matches_label(label)))
        .filter(|entry| range.contains(entry.date))
        .map(|entry| HolidayRecord {
            country_code: country_code.to_string(),
            date: entry.date,
            kind,
        })
        .collect()
}
