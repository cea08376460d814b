//! Timestamp and date types
//!
//! Both are stored as UTC instants. Dates are additionally truncated to the
//! start of their day.

use super::number;
use super::NumberKind;
use crate::error::{Error, Result};
use crate::wire::{WireTag, WireValue};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::cmp::Ordering;
use strata_value::Value;

/// Layout of timestamps sent to clients, in `strftime` syntax.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Layout of dates, in `strftime` syntax.
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Unix seconds of the latest valid time, 9999-12-31 23:59:59 UTC.
pub const MAX_TIME: i64 = 253_402_300_799;

/// A textual timestamp layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Date and time of day, `strftime` syntax.
    DateTime(&'static str),
    /// Date only, at midnight, `strftime` syntax.
    Date(&'static str),
    /// RFC 3339 internet date, with offset.
    Rfc3339,
}

impl Layout {
    pub fn parse(&self, s: &str) -> Option<DateTime<Utc>> {
        match self {
            Layout::DateTime(fmt) => NaiveDateTime::parse_from_str(s, fmt)
                .ok()
                .map(|dt| dt.and_utc()),
            Layout::Date(fmt) => NaiveDate::parse_from_str(s, fmt)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
            Layout::Rfc3339 => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

/// The primary timestamp layout. Fractional seconds are accepted when
/// parsing.
const PRIMARY_LAYOUT: Layout = Layout::DateTime("%Y-%m-%d %H:%M:%S%.f");

/// Layouts tried in order when the primary layout does not match. This is
/// not every layout MySQL accepts: two-digit years and uncommon separators
/// are missing.
pub const TIMESTAMP_LAYOUTS: &[Layout] = &[
    Layout::Date("%Y-%m-%d"),
    Layout::Rfc3339,
    Layout::DateTime("%Y%m%d%H%M%S"),
    Layout::Date("%Y%m%d"),
];

/// Returns the time, or `None` if it lies after [`MAX_TIME`].
pub fn validate_time(t: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if (t.timestamp(), t.timestamp_subsec_nanos()) > (MAX_TIME, 0) {
        return None;
    }
    Some(t)
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    std::iter::once(&PRIMARY_LAYOUT)
        .chain(TIMESTAMP_LAYOUTS)
        .find_map(|layout| layout.parse(s))
        .ok_or_else(|| Error::ConvertingToTime(s.to_string()))
}

fn from_unix_seconds(value: &Value) -> Result<DateTime<Utc>> {
    let secs = match number::convert(NumberKind::Int64, value) {
        Ok(Value::I64(secs)) => secs,
        _ => return Err(Error::InvalidType(value.type_name().to_string())),
    };
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| Error::InvalidType(format!("timestamp {} out of range", secs)))
}

fn truncate_day(t: DateTime<Utc>) -> DateTime<Utc> {
    t.date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn as_timestamp(value: &Value) -> Result<DateTime<Utc>> {
    match value {
        Value::Timestamp(ts) => Ok(*ts),
        other => Err(Error::InvalidType(format!(
            "expected a timestamp, got {}",
            other.type_name()
        ))),
    }
}

fn timestamp(value: &Value) -> Result<DateTime<Utc>> {
    match value {
        Value::Timestamp(ts) => Ok(*ts),
        Value::Str(s) => parse_timestamp(s),
        other => from_unix_seconds(other),
    }
}

pub(super) fn convert_timestamp(value: &Value) -> Result<Value> {
    timestamp(value).map(Value::Timestamp)
}

pub(super) fn compare_timestamp(a: &Value, b: &Value) -> Result<Ordering> {
    Ok(as_timestamp(a)?.cmp(&as_timestamp(b)?))
}

pub(super) fn timestamp_to_wire(value: &Value) -> Result<WireValue> {
    let raw = timestamp(value)?.format(TIMESTAMP_LAYOUT).to_string();
    Ok(WireValue::new(WireTag::Timestamp, raw.into_bytes()))
}

fn date(value: &Value) -> Result<DateTime<Utc>> {
    let ts = match value {
        Value::Timestamp(ts) => *ts,
        Value::Str(s) => Layout::Date(DATE_LAYOUT)
            .parse(s)
            .ok_or_else(|| Error::ConvertingToTime(s.to_string()))?,
        other => from_unix_seconds(other)?,
    };
    Ok(truncate_day(ts))
}

pub(super) fn convert_date(value: &Value) -> Result<Value> {
    date(value).map(Value::Timestamp)
}

pub(super) fn compare_date(a: &Value, b: &Value) -> Result<Ordering> {
    let a = truncate_day(as_timestamp(a)?);
    let b = truncate_day(as_timestamp(b)?);
    Ok(a.cmp(&b))
}

/// Dates go out with the timestamp tag.
pub(super) fn date_to_wire(value: &Value) -> Result<WireValue> {
    let raw = date(value)?.format(DATE_LAYOUT).to_string();
    Ok(WireValue::new(WireTag::Timestamp, raw.into_bytes()))
}
