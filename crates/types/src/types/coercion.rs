//! Implicit numeric and textual casts shared by the type implementations
//!
//! Integers, floats, booleans, NULL and numeric strings all coerce to
//! numbers. Narrowing is range checked; floats truncate toward zero.

use crate::error::{Error, Result};
use strata_value::Value;

/// Casts a value to a signed 64-bit integer.
pub(crate) fn to_i64(value: &Value) -> Result<i64> {
    let overflow = || out_of_range(value, "INT64");
    match value {
        Value::Null => Ok(0),
        Value::Bool(b) => Ok(*b as i64),
        Value::I8(v) => Ok(*v as i64),
        Value::I16(v) => Ok(*v as i64),
        Value::I32(v) => Ok(*v as i64),
        Value::I64(v) => Ok(*v),
        Value::U8(v) => Ok(*v as i64),
        Value::U16(v) => Ok(*v as i64),
        Value::U32(v) => Ok(*v as i64),
        Value::U64(v) => i64::try_from(*v).map_err(|_| overflow()),
        Value::F32(v) => float_to_i64(*v as f64).ok_or_else(overflow),
        Value::F64(v) => float_to_i64(*v).ok_or_else(overflow),
        Value::Str(s) => {
            let parsed = parse_integer(s).ok_or_else(|| unable_to_cast(value, "INT64"))?;
            i64::try_from(parsed).map_err(|_| overflow())
        }
        _ => Err(unable_to_cast(value, "INT64")),
    }
}

/// Casts a value to an unsigned 64-bit integer. Negative inputs fail.
pub(crate) fn to_u64(value: &Value) -> Result<u64> {
    let overflow = || out_of_range(value, "UINT64");
    match value {
        Value::Null => Ok(0),
        Value::Bool(b) => Ok(*b as u64),
        Value::I8(v) => u64::try_from(*v).map_err(|_| overflow()),
        Value::I16(v) => u64::try_from(*v).map_err(|_| overflow()),
        Value::I32(v) => u64::try_from(*v).map_err(|_| overflow()),
        Value::I64(v) => u64::try_from(*v).map_err(|_| overflow()),
        Value::U8(v) => Ok(*v as u64),
        Value::U16(v) => Ok(*v as u64),
        Value::U32(v) => Ok(*v as u64),
        Value::U64(v) => Ok(*v),
        Value::F32(v) => float_to_u64(*v as f64).ok_or_else(overflow),
        Value::F64(v) => float_to_u64(*v).ok_or_else(overflow),
        Value::Str(s) => {
            let parsed = parse_integer(s).ok_or_else(|| unable_to_cast(value, "UINT64"))?;
            u64::try_from(parsed).map_err(|_| overflow())
        }
        _ => Err(unable_to_cast(value, "UINT64")),
    }
}

/// Casts a value to a 64-bit float.
pub(crate) fn to_f64(value: &Value) -> Result<f64> {
    match value {
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::I8(v) => Ok(*v as f64),
        Value::I16(v) => Ok(*v as f64),
        Value::I32(v) => Ok(*v as f64),
        Value::I64(v) => Ok(*v as f64),
        Value::U8(v) => Ok(*v as f64),
        Value::U16(v) => Ok(*v as f64),
        Value::U32(v) => Ok(*v as f64),
        Value::U64(v) => Ok(*v as f64),
        Value::F32(v) => Ok(*v as f64),
        Value::F64(v) => Ok(*v),
        Value::Str(s) => parse_float(s).ok_or_else(|| unable_to_cast(value, "FLOAT64")),
        _ => Err(unable_to_cast(value, "FLOAT64")),
    }
}

/// Casts a value to a 32-bit float. Strings parse at 32-bit precision.
pub(crate) fn to_f32(value: &Value) -> Result<f32> {
    match value {
        Value::F32(v) => Ok(*v),
        Value::Str(s) => match s.parse::<f32>() {
            Ok(v) => Ok(v),
            Err(_) => to_f64(value).map(|v| v as f32),
        },
        _ => {
            let v = to_f64(value)?;
            if v.is_finite() && v.abs() > f32::MAX as f64 {
                return Err(out_of_range(value, "FLOAT32"));
            }
            Ok(v as f32)
        }
    }
}

/// Renders a scalar as text. Lists and producers have no textual form.
pub(crate) fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::I8(v) => Some(v.to_string()),
        Value::I16(v) => Some(v.to_string()),
        Value::I32(v) => Some(v.to_string()),
        Value::I64(v) => Some(v.to_string()),
        Value::U8(v) => Some(v.to_string()),
        Value::U16(v) => Some(v.to_string()),
        Value::U32(v) => Some(v.to_string()),
        Value::U64(v) => Some(v.to_string()),
        Value::F32(v) => Some(v.to_string()),
        Value::F64(v) => Some(v.to_string()),
        Value::Str(s) => Some(s.clone()),
        Value::Bytes(b) | Value::Json(b) => Some(String::from_utf8_lossy(b).into_owned()),
        Value::Timestamp(_) | Value::Duration(_) => display_text(value),
        Value::List(_) | Value::Generator(_) => None,
    }
}

/// The display form of values that carry one of their own: timestamps,
/// durations and JSON documents.
pub(crate) fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Timestamp(ts) => Some(ts.to_string()),
        Value::Duration(d) => Some(format!("{:?}", d)),
        Value::Json(b) => Some(String::from_utf8_lossy(b).into_owned()),
        _ => None,
    }
}

fn float_to_i64(v: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v.trunc() as i64)
    } else {
        None
    }
}

fn float_to_u64(v: f64) -> Option<u64> {
    if v.is_finite() && v > -1.0 && v < u64::MAX as f64 {
        Some(v.trunc() as u64)
    } else {
        None
    }
}

/// Parses an integer literal: optional sign, then `0x`, `0o` or `0b` radix
/// prefixes or plain decimal digits. A zero fraction (`"12.00"`) is allowed.
fn parse_integer(s: &str) -> Option<i128> {
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let unsigned = trim_zero_decimal(unsigned);

    let (radix, digits) = if let Some(rest) = strip_prefix_ci(unsigned, "0x") {
        (16, rest)
    } else if let Some(rest) = strip_prefix_ci(unsigned, "0o") {
        (8, rest)
    } else if let Some(rest) = strip_prefix_ci(unsigned, "0b") {
        (2, rest)
    } else {
        (10, unsigned)
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_float(s: &str) -> Option<f64> {
    match s.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => parse_integer(s).map(|v| v as f64),
    }
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&s[prefix.len()..]),
        _ => None,
    }
}

fn trim_zero_decimal(s: &str) -> &str {
    match s.split_once('.') {
        Some((int, frac)) if !int.is_empty() && frac.bytes().all(|b| b == b'0') => int,
        _ => s,
    }
}

fn unable_to_cast(value: &Value, target: &str) -> Error {
    Error::InvalidType(format!(
        "unable to cast {:?} of type {} to {}",
        value,
        value.type_name(),
        target
    ))
}

pub(crate) fn out_of_range(value: &Value, target: &str) -> Error {
    Error::OutOfRange {
        value: value.to_string(),
        target: target.to_string(),
    }
}
