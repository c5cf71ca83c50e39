//! Boundary validation for incoming event fields.
//!
//! Raw request fields arrive as optional strings and are turned into typed
//! values here, before any store or query code sees them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::event::NewEvent;
use crate::query::DateRange;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const EVENT_NAME_HELP: &str = "The event name is required!";
pub const EVENT_DATE_HELP: &str =
    "The event date with the correct format is required! The correct format is YYYY-MM-DD!";

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing field {field}: {message}")]
    MissingField { field: &'static str, message: String },

    #[error("invalid date in {field}: {message}")]
    InvalidDateFormat { field: &'static str, message: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } | Self::InvalidDateFormat { field, .. } => field,
        }
    }

    /// Human-readable help text shown to the client.
    pub fn message(&self) -> &str {
        match self {
            Self::MissingField { message, .. } | Self::InvalidDateFormat { message, .. } => {
                message
            }
        }
    }
}

/// Raw body of a create request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EventFields {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl EventFields {
    /// Checks `event` then `date`, reporting the first failure.
    pub fn validate(self) -> Result<NewEvent, ValidationError> {
        let name = match self.event {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(ValidationError::MissingField {
                    field: "event",
                    message: EVENT_NAME_HELP.to_string(),
                })
            }
        };

        let date = self
            .date
            .as_deref()
            .and_then(parse_date)
            .ok_or_else(|| ValidationError::InvalidDateFormat {
                field: "date",
                message: EVENT_DATE_HELP.to_string(),
            })?;

        Ok(NewEvent { name, date })
    }
}

/// Raw query string of a range listing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RangeParams {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl RangeParams {
    /// Each bound is optional and parsed independently. Empty values count as
    /// absent.
    pub fn validate(&self) -> Result<DateRange, ValidationError> {
        Ok(DateRange {
            start: parse_bound("start_time", self.start_time.as_deref())?,
            end: parse_bound("end_time", self.end_time.as_deref())?,
        })
    }
}

fn parse_bound(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_date_or_timestamp(raw).map(Some).ok_or_else(|| {
            ValidationError::InvalidDateFormat {
                field,
                message: format!("Invalid value {raw:?} for {field}. The correct format is YYYY-MM-DD!"),
            }
        }),
    }
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if !has_plain_year(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// chrono's `%Y` also takes signed, zero and five-digit years; only
/// `0001`..=`9999` followed by `-` is allowed here.
fn has_plain_year(raw: &str) -> bool {
    match raw.as_bytes() {
        [y0, y1, y2, y3, b'-', ..] => {
            let year = [*y0, *y1, *y2, *y3];
            year.iter().all(u8::is_ascii_digit) && &year != b"0000"
        }
        _ => false,
    }
}

/// Parse a date, or a timestamp whose time-of-day is dropped.
pub fn parse_date_or_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if !has_plain_year(raw) {
        return None;
    }
    if let Some(date) = parse_date(raw) {
        return Some(date);
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts.date());
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fields(event: Option<&str>, date: Option<&str>) -> EventFields {
        EventFields {
            event: event.map(String::from),
            date: date.map(String::from),
        }
    }

    #[test]
    fn valid_fields_produce_new_event() {
        let new = fields(Some("Dentist"), Some("2024-01-15")).validate().unwrap();
        assert_eq!(new, NewEvent::new("Dentist", ymd(2024, 1, 15)));
    }

    #[test]
    fn missing_event_name() {
        let err = fields(None, Some("2024-01-15")).validate().unwrap_err();
        assert_eq!(err.field(), "event");
        assert!(matches!(err, ValidationError::MissingField { .. }));
        assert_eq!(err.message(), EVENT_NAME_HELP);
    }

    #[test]
    fn blank_event_name_is_missing() {
        let err = fields(Some("   "), Some("2024-01-15")).validate().unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "event", .. }));
    }

    #[test]
    fn missing_date_mentions_format() {
        let err = fields(Some("Dentist"), None).validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDateFormat { field: "date", .. }));
        assert!(err.message().contains("YYYY-MM-DD"));
    }

    #[test]
    fn malformed_dates_rejected() {
        for bad in [
            "15-01-2024",
            "2024/01/15",
            "2024-13-01",
            "2024-02-30",
            "tomorrow",
            "",
            "+10000-01-01",
            "-0001-01-01",
            "0000-01-01",
            "12024-01-01",
        ] {
            let err = fields(Some("x"), Some(bad)).validate().unwrap_err();
            assert_eq!(err.field(), "date", "accepted {bad:?}");
        }
    }

    #[test]
    fn event_name_checked_before_date() {
        let err = fields(None, None).validate().unwrap_err();
        assert_eq!(err.field(), "event");
    }

    #[test]
    fn create_rejects_timestamps() {
        assert!(fields(Some("x"), Some("2024-01-15T10:00:00")).validate().is_err());
    }

    #[test]
    fn range_params_absent() {
        let range = RangeParams::default().validate().unwrap();
        assert_eq!(range, DateRange::unbounded());
    }

    #[test]
    fn range_params_empty_strings_are_absent() {
        let params = RangeParams {
            start_time: Some(String::new()),
            end_time: Some(" ".into()),
        };
        assert_eq!(params.validate().unwrap(), DateRange::unbounded());
    }

    #[test]
    fn range_params_keep_date_of_timestamps() {
        let params = RangeParams {
            start_time: Some("2024-03-05T23:59:59".into()),
            end_time: Some("2024-03-15 08:30:00".into()),
        };
        let range = params.validate().unwrap();
        assert_eq!(range.start, Some(ymd(2024, 3, 5)));
        assert_eq!(range.end, Some(ymd(2024, 3, 15)));
    }

    #[test]
    fn range_params_accept_rfc3339() {
        assert_eq!(
            parse_date_or_timestamp("2024-03-05T10:00:00+02:00"),
            Some(ymd(2024, 3, 5))
        );
        assert_eq!(
            parse_date_or_timestamp("2024-03-05T10:00:00.250Z"),
            Some(ymd(2024, 3, 5))
        );
    }

    #[test]
    fn range_params_reject_signed_and_zero_years() {
        for bad in ["+10000-01-01", "-0001-01-01T00:00:00", "0000-01-01"] {
            let params = RangeParams {
                start_time: Some(bad.into()),
                end_time: None,
            };
            let err = params.validate().unwrap_err();
            assert_eq!(err.field(), "start_time", "accepted {bad:?}");
        }
    }

    #[test]
    fn range_params_bad_end_names_field() {
        let params = RangeParams {
            start_time: Some("2024-03-05".into()),
            end_time: Some("next week".into()),
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDateFormat { field: "end_time", .. }));
        assert!(err.message().contains("YYYY-MM-DD"));
    }
}
