//! # Report Date Range
//!
//! Turns the raw `from`/`to` query values of a report generation request into
//! an ordered [`ReportRange`].
//!
//! Resolution rules:
//! - `to` missing or unparsable: now
//! - `from` missing or unparsable: `to` minus 30 calendar days
//! - `from` later than `to`: the two are swapped
//!
//! Bad input never fails the request; it is treated exactly like absent input.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Calendar days covered by a report when no start date is supplied
pub const DEFAULT_LOOKBACK_DAYS: u64 = 30;

/// Years that format as exactly four digits; only these keep
/// lexicographic order equal to chronological order
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// Layouts carrying an explicit offset (`Z`, `+01`, `+0100` or `+01:00`)
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Naive date-time layouts, interpreted as UTC
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// An inclusive, non-inverted range of instants a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    from_date: DateTime<Utc>,
    to_date: DateTime<Utc>,
}

impl ReportRange {
    /// Resolve raw query values against the current wall-clock time
    pub fn resolve(raw_from: Option<&str>, raw_to: Option<&str>) -> Self {
        Self::resolve_at(raw_from, raw_to, Utc::now())
    }

    /// Resolve raw query values against an explicit `now`
    pub fn resolve_at(raw_from: Option<&str>, raw_to: Option<&str>, now: DateTime<Utc>) -> Self {
        let to_date = parse_report_date(raw_to).unwrap_or(now);
        let from_date = parse_report_date(raw_from).unwrap_or_else(|| lookback_from(to_date));

        Self::ordered(from_date, to_date)
    }

    /// Build a range from two instants in either order
    pub fn ordered(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        if a > b {
            Self { from_date: b, to_date: a }
        } else {
            Self { from_date: a, to_date: b }
        }
    }

    pub fn from_date(&self) -> DateTime<Utc> {
        self.from_date
    }

    pub fn to_date(&self) -> DateTime<Utc> {
        self.to_date
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from_date <= instant && instant <= self.to_date
    }

    /// Label shown in report listings, e.g. "Jan 1, 2024 - Jan 31, 2024"
    pub fn period_label(&self) -> String {
        format!(
            "{} - {}",
            self.from_date.format("%b %-d, %Y"),
            self.to_date.format("%b %-d, %Y")
        )
    }
}

/// Parse a user-supplied date, yielding `None` for anything unusable.
///
/// Accepts RFC 3339 and other ISO 8601 date-times with an offset, naive
/// date-times (taken as UTC), and the date forms `YYYY-MM-DD`, `YYYY-MM` and
/// `YYYY` (start of that day, month or year, midnight UTC). Instants outside
/// years 0000..=9999 are rejected.
pub fn parse_report_date(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;

    DateTime::parse_from_rfc3339(value)
        .ok()
        .or_else(|| {
            OFFSET_DATETIME_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(value, format).ok())
        })
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            parse_calendar_date(value)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
        .filter(is_four_digit_year)
}

/// Canonical storage/wire form of an instant: RFC 3339, UTC, milliseconds.
///
/// Every timestamp the service stores goes through here so that string
/// comparison in SQL matches chronological order.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`, the shorter forms meaning the first day
fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match value.split('-').collect::<Vec<_>>().as_slice() {
        [_, _, _] => NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
        [year, month] if year.len() == 4 && month.len() == 2 && is_digits(year) && is_digits(month) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        [year] if year.len() == 4 && is_digits(year) => NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1),
        _ => None,
    }
}

fn is_four_digit_year(instant: &DateTime<Utc>) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&instant.year())
}

/// Midnight, January 1st of year 0
fn earliest_instant() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn lookback_from(to_date: DateTime<Utc>) -> DateTime<Utc> {
    to_date
        .checked_sub_days(Days::new(DEFAULT_LOOKBACK_DAYS))
        .filter(is_four_digit_year)
        .unwrap_or_else(earliest_instant)
}
