//! Calendar date rendering.
//!
//! [`format_date`] accepts anything convertible into a [`DateInput`] and
//! renders it as `"March 15, 2024"`. Text that cannot be parsed produces the
//! [`INVALID_DATE`] sentinel instead of an error; use [`try_format_date`] when
//! a typed error is preferable.
//!
//! No timezone conversion happens here. Zoned values render the calendar date
//! in their own offset, and epoch timestamps are read as UTC.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::FormatError;
use crate::locale::{default_locale, Locale};

/// Rendering produced for input that is not a date.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A value that can be rendered as a calendar date.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Zoned(DateTime<FixedOffset>),
    /// Milliseconds since the Unix epoch, read as UTC.
    Timestamp(i64),
    Text(String),
}

impl DateInput {
    /// Resolves the input to a calendar date.
    ///
    /// # Errors
    ///
    /// Fails for unparseable text and for timestamps outside chrono's range.
    pub fn to_date(&self) -> Result<NaiveDate, FormatError> {
        match self {
            DateInput::Date(date) => Ok(*date),
            DateInput::DateTime(dt) => Ok(dt.date()),
            DateInput::Zoned(dt) => Ok(dt.date_naive()),
            DateInput::Timestamp(millis) => DateTime::<Utc>::from_timestamp_millis(*millis)
                .map(|dt| dt.date_naive())
                .ok_or(FormatError::TimestampOutOfRange { millis: *millis }),
            DateInput::Text(text) => parse_date(text).ok_or_else(|| FormatError::InvalidDate {
                input: text.clone(),
            }),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::Zoned(dt.fixed_offset())
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::Timestamp(millis)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<&String> for DateInput {
    fn from(text: &String) -> Self {
        DateInput::Text(text.clone())
    }
}

/// Parses date text without consulting any locale.
///
/// Accepts ISO dates and date-times (with or without offset), slash dates
/// (`2024/03/15`, `03/15/2024`), English month-name forms (`March 15, 2024`,
/// `Mar 15 2024`, `15 March 2024`) and RFC 2822.
///
/// ```rust
/// use chrono::NaiveDate;
/// use portal_fmt::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
/// assert_eq!(parse_date("2024-03-15"), expected);
/// assert_eq!(parse_date("Mar 15, 2024"), expected);
/// assert_eq!(parse_date("someday"), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc2822(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Renders a calendar date as `"{month} {day}, {year}"`.
pub fn render_date(date: NaiveDate, locale: &Locale) -> String {
    let month = locale.month_name(date.month()).unwrap_or_default();
    format!("{} {}, {}", month, date.day(), date.year())
}

/// Formats a date with the default locale.
///
/// Unparseable input yields [`INVALID_DATE`].
///
/// ```rust
/// use portal_fmt::format_date;
///
/// assert_eq!(format_date("2024-03-15"), "March 15, 2024");
/// assert_eq!(format_date("garbage"), "Invalid Date");
/// ```
pub fn format_date(input: impl Into<DateInput>) -> String {
    format_date_with(input, &default_locale())
}

/// Formats a date with an explicit locale.
pub fn format_date_with(input: impl Into<DateInput>, locale: &Locale) -> String {
    match try_format_date_with(input, locale) {
        Ok(rendered) => rendered,
        Err(err) => {
            log::debug!("rendering invalid date: {}", err);
            INVALID_DATE.to_string()
        }
    }
}

/// Formats a date with the default locale, reporting bad input as an error.
pub fn try_format_date(input: impl Into<DateInput>) -> Result<String, FormatError> {
    try_format_date_with(input, &default_locale())
}

/// Formats a date with an explicit locale, reporting bad input as an error.
pub fn try_format_date_with(
    input: impl Into<DateInput>,
    locale: &Locale,
) -> Result<String, FormatError> {
    let date = input.into().to_date()?;
    Ok(render_date(date, locale))
}

/// Returns `false` for the sentinel rendering of an invalid date.
pub fn is_valid_rendering(rendered: &str) -> bool {
    rendered != INVALID_DATE
}
