//! Boolean type
//!
//! Conversion never parses text: `'true'` is a string, not a boolean. The
//! wire encoder is lenient instead: it accepts the usual boolean spellings
//! and encodes anything it can't read as false.

use crate::error::{Error, Result};
use crate::wire::{WireTag, WireValue};
use std::cmp::Ordering;
use strata_value::Value;

fn truth(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::I8(v) => Ok(*v != 0),
        Value::I16(v) => Ok(*v != 0),
        Value::I32(v) => Ok(*v != 0),
        Value::I64(v) => Ok(*v != 0),
        Value::U8(v) => Ok(*v != 0),
        Value::U16(v) => Ok(*v != 0),
        Value::U32(v) => Ok(*v != 0),
        Value::U64(v) => Ok(*v != 0),
        Value::F32(v) => Ok((*v as f64).round() != 0.0),
        Value::F64(v) => Ok(v.round() != 0.0),
        Value::Duration(d) => Ok(!d.is_zero()),
        Value::Timestamp(ts) => Ok(ts.timestamp() != 0 || ts.timestamp_subsec_nanos() != 0),
        Value::Str(_) => Err(Error::NotBoolean("string".into())),
        other => Err(Error::NotBoolean(other.type_name().to_string())),
    }
}

pub(super) fn convert(value: &Value) -> Result<Value> {
    truth(value).map(Value::Bool)
}

pub(super) fn compare(a: &Value, b: &Value) -> Result<Ordering> {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
        _ => Err(Error::InvalidType(format!(
            "can't compare {} and {} as BOOLEAN",
            a.type_name(),
            b.type_name()
        ))),
    }
}

pub(super) fn to_wire(value: &Value) -> Result<WireValue> {
    let raw = if wire_truth(value) { b"1" } else { b"0" };
    Ok(WireValue::new(WireTag::Bit, raw.to_vec()))
}

/// Unlike `truth`, floats are not rounded and unparsable text is false.
fn wire_truth(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::I8(v) => *v != 0,
        Value::I16(v) => *v != 0,
        Value::I32(v) => *v != 0,
        Value::I64(v) => *v != 0,
        Value::U8(v) => *v != 0,
        Value::U16(v) => *v != 0,
        Value::U32(v) => *v != 0,
        Value::U64(v) => *v != 0,
        Value::F32(v) => *v != 0.0,
        Value::F64(v) => *v != 0.0,
        Value::Duration(d) => !d.is_zero(),
        Value::Str(s) => parse_bool(s).unwrap_or(false),
        _ => false,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
