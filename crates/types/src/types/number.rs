//! Fixed-width integer and float types

use super::coercion::{out_of_range, to_f32, to_f64, to_i64, to_u64};
use super::{NumberKind, Type};
use crate::error::Result;
use crate::wire::WireValue;
use std::cmp::Ordering;
use strata_value::Value;

pub(super) fn convert(kind: NumberKind, value: &Value) -> Result<Value> {
    // Timestamps convert through their Unix epoch seconds.
    let epoch;
    let value = match value {
        Value::Timestamp(ts) => {
            epoch = Value::I64(ts.timestamp());
            &epoch
        }
        other => other,
    };

    let target = kind.to_string();
    let narrow_signed = |v: i64| -> Result<i64> {
        let (min, max) = match kind {
            NumberKind::Int8 => (i8::MIN as i64, i8::MAX as i64),
            NumberKind::Int16 => (i16::MIN as i64, i16::MAX as i64),
            NumberKind::Int32 => (i32::MIN as i64, i32::MAX as i64),
            _ => (i64::MIN, i64::MAX),
        };
        if v < min || v > max {
            return Err(out_of_range(value, &target));
        }
        Ok(v)
    };
    let narrow_unsigned = |v: u64| -> Result<u64> {
        let max = match kind {
            NumberKind::Uint8 => u8::MAX as u64,
            NumberKind::Uint16 => u16::MAX as u64,
            NumberKind::Uint32 => u32::MAX as u64,
            _ => u64::MAX,
        };
        if v > max {
            return Err(out_of_range(value, &target));
        }
        Ok(v)
    };

    // The narrowing closures guarantee the casts below are lossless.
    Ok(match kind {
        NumberKind::Int8 => Value::I8(narrow_signed(to_i64(value)?)? as i8),
        NumberKind::Int16 => Value::I16(narrow_signed(to_i64(value)?)? as i16),
        NumberKind::Int32 => Value::I32(narrow_signed(to_i64(value)?)? as i32),
        NumberKind::Int64 => Value::I64(to_i64(value)?),
        NumberKind::Uint8 => Value::U8(narrow_unsigned(to_u64(value)?)? as u8),
        NumberKind::Uint16 => Value::U16(narrow_unsigned(to_u64(value)?)? as u16),
        NumberKind::Uint32 => Value::U32(narrow_unsigned(to_u64(value)?)? as u32),
        NumberKind::Uint64 => Value::U64(to_u64(value)?),
        NumberKind::Float32 => Value::F32(to_f32(value)?),
        NumberKind::Float64 => Value::F64(to_f64(value)?),
    })
}

/// Only the 32 and 64-bit unsigned types take the unsigned path. Every other
/// number type, unsigned 8 and 16-bit and both floats included, compares as
/// i64. Floats truncate toward zero first, so 1.5 and 1.25 are equal.
pub(super) fn compare(t: &Type, a: &Value, b: &Value) -> Result<Ordering> {
    if t.is_unsigned() {
        Ok(to_u64(a)?.cmp(&to_u64(b)?))
    } else {
        Ok(to_i64(a)?.cmp(&to_i64(b)?))
    }
}

pub(super) fn to_wire(kind: NumberKind, value: &Value) -> Result<WireValue> {
    let raw = match convert(kind, value)? {
        Value::I8(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U8(v) => v.to_string(),
        Value::U16(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        _ => String::new(),
    };
    Ok(WireValue::new(kind.wire_tag(), raw.into_bytes()))
}
