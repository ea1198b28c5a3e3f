//! Core types for holiday-export

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// A country known to the remote holiday API
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    /// Display name (e.g. "France")
    pub name: String,
    /// ISO 3166-1 alpha-2 code (e.g. "FR")
    pub iso_code: String,
}

impl Country {
    /// Create a new country entry
    pub fn new(name: impl Into<String>, iso_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iso_code: iso_code.into(),
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.iso_code)
    }
}

/// Holiday classification used to partition the exported records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    /// Public (bank/national) holidays
    Public,
    /// School holidays
    School,
}

impl HolidayKind {
    /// Every kind, in export order
    pub const ALL: [HolidayKind; 2] = [HolidayKind::Public, HolidayKind::School];

    /// Label used by the remote API in a holiday's `types` list
    pub fn label(self) -> &'static str {
        match self {
            HolidayKind::Public => "Public",
            HolidayKind::School => "School",
        }
    }

    /// Check whether an API type label designates this kind
    ///
    /// Labels are compared case-insensitively, so `"public"` and `"PUBLIC"`
    /// both match [`HolidayKind::Public`].
    pub fn matches_label(self, label: &str) -> bool {
        label.trim().eq_ignore_ascii_case(self.label())
    }
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for HolidayKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HolidayKind::ALL
            .into_iter()
            .find(|kind| kind.matches_label(s))
            .ok_or_else(|| Error::Config {
                message: format!("unknown holiday kind {s:?}, expected \"public\" or \"school\""),
                key: Some("kind".to_string()),
            })
    }
}

/// Inclusive range of calendar years
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Create a year range, rejecting `min > max`
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidYearRange { min, max });
        }

        Ok(Self { min, max })
    }

    /// Range covering a single year
    pub fn single(year: i32) -> Self {
        Self {
            min: year,
            max: year,
        }
    }

    /// First year of the range
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Last year of the range
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Years in ascending order
    pub fn years(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Check whether a date falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.years().contains(&date.year())
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One exported holiday
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HolidayRecord {
    /// ISO code of the country observing the holiday
    pub country_code: String,
    /// Day of the holiday
    pub date: NaiveDate,
    /// Kind the record was selected for
    pub kind: HolidayKind,
}

impl HolidayRecord {
    /// Render the record as an output line, without the trailing newline
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use holiday_export::types::{HolidayKind, HolidayRecord};
    ///
    /// let record = HolidayRecord {
    ///     country_code: "FR".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2021, 7, 14).unwrap(),
    ///     kind: HolidayKind::Public,
    /// };
    /// assert_eq!(record.to_line(), "FR 2021-07-14");
    /// ```
    pub fn to_line(&self) -> String {
        format!("{} {}", self.country_code, self.date.format("%Y-%m-%d"))
    }
}

/// Result of fetching one year of holidays for one country
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The API answered; holds the matching records (possibly none)
    Success(Vec<HolidayRecord>),
    /// The API had no data for this year, or could not be reached
    SkippedUnavailable {
        /// Why the year was skipped
        reason: String,
    },
}

impl FetchOutcome {
    /// Records carried by the outcome, empty when skipped
    pub fn into_records(self) -> Vec<HolidayRecord> {
        match self {
            FetchOutcome::Success(records) => records,
            FetchOutcome::SkippedUnavailable { .. } => Vec::new(),
        }
    }

    /// Whether the year was skipped
    pub fn is_skipped(&self) -> bool {
        matches!(self, FetchOutcome::SkippedUnavailable { .. })
    }
}

/// Top-level operation selected for one invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Export public and school holiday dates for a range of years
    Dates(YearRange),
    /// Render the country enumeration source file
    Enum,
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn kind_labels_match_api_spelling() {
        assert_eq!(HolidayKind::Public.label(), "Public");
        assert_eq!(HolidayKind::School.label(), "School");
    }

    #[test]
    fn kind_matching_ignores_case_and_padding() {
        assert!(HolidayKind::Public.matches_label("Public"));
        assert!(HolidayKind::Public.matches_label("public"));
        assert!(HolidayKind::Public.matches_label(" PUBLIC "));
        assert!(!HolidayKind::Public.matches_label("School"));
        assert!(!HolidayKind::School.matches_label("Bank"));
        assert!(!HolidayKind::School.matches_label("Schools"));
    }

    #[test]
    fn kind_parses_from_cli_strings() {
        assert_eq!("school".parse::<HolidayKind>().unwrap(), HolidayKind::School);
        assert_eq!("Public".parse::<HolidayKind>().unwrap(), HolidayKind::Public);

        let err = "observance".parse::<HolidayKind>().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn year_range_rejects_inverted_bounds() {
        let err = YearRange::new(2030, 2020).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidYearRange {
                min: 2030,
                max: 2020
            }
        ));
    }

    #[test]
    fn year_range_is_inclusive_on_both_ends() {
        let range = YearRange::new(2020, 2022).unwrap();

        assert_eq!(range.years().collect::<Vec<_>>(), vec![2020, 2021, 2022]);
        assert!(range.contains(date(2020, 1, 1)));
        assert!(range.contains(date(2022, 12, 31)));
        assert!(!range.contains(date(2019, 12, 31)));
        assert!(!range.contains(date(2023, 1, 1)));
    }

    #[test]
    fn single_year_range_covers_one_year() {
        let range = YearRange::single(2021);
        assert_eq!(range, YearRange::new(2021, 2021).unwrap());
        assert_eq!(range.years().count(), 1);
        assert_eq!(range.to_string(), "2021-2021");
    }

    #[test]
    fn extreme_bounds_are_accepted() {
        let range = YearRange::new(i32::MIN, i32::MAX).unwrap();

        assert_eq!(range.min(), i32::MIN);
        assert_eq!(range.max(), i32::MAX);
        assert!(range.contains(date(2021, 6, 1)));
        assert_eq!(range.to_string(), format!("{}-{}", i32::MIN, i32::MAX));
    }

    #[test]
    fn record_line_uses_iso_date() {
        let record = HolidayRecord {
            country_code: "ES".to_string(),
            date: date(2021, 1, 6),
            kind: HolidayKind::Public,
        };
        assert_eq!(record.to_line(), "ES 2021-01-06");
    }

    #[test]
    fn skipped_outcome_carries_no_records() {
        let outcome = FetchOutcome::SkippedUnavailable {
            reason: "HTTP 404".to_string(),
        };
        assert!(outcome.is_skipped());
        assert!(outcome.into_records().is_empty());
    }
}
