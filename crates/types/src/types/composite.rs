//! Tuple and array types
//!
//! Both are carried as [`Value::List`]. Their comparisons convert the
//! operands first, so raw input lists compare the same as canonical ones.

use super::text;
use super::Type;
use crate::error::{Error, Result};
use crate::wire::WireValue;
use std::cmp::Ordering;
use strata_value::{GeneratorHandle, Value};

pub(super) fn convert_tuple(types: &[Type], value: &Value) -> Result<Value> {
    let values = match value {
        Value::List(values) => values,
        other => return Err(Error::NotTuple(other.type_name().to_string())),
    };
    if values.len() != types.len() {
        return Err(Error::InvalidColumnNumber {
            expected: types.len(),
            got: values.len(),
        });
    }

    types
        .iter()
        .zip(values)
        .map(|(t, v)| t.convert(v))
        .collect::<Result<Vec<_>>>()
        .map(Value::List)
}

pub(super) fn compare_tuple(types: &[Type], a: &Value, b: &Value) -> Result<Ordering> {
    let a = convert_tuple(types, a)?;
    let b = convert_tuple(types, b)?;
    let (Value::List(left), Value::List(right)) = (&a, &b) else {
        return Err(Error::NotTuple(a.type_name().to_string()));
    };

    for ((t, l), r) in types.iter().zip(left).zip(right) {
        match t.compare(l, r)? {
            Ordering::Equal => continue,
            ordering => return Ok(ordering),
        }
    }
    Ok(Ordering::Equal)
}

fn elements(underlying: &Type, value: &Value) -> Result<Vec<Value>> {
    match value {
        Value::List(values) => values.iter().map(|v| underlying.convert(v)).collect(),
        Value::Generator(handle) => drain(underlying, handle),
        other => Err(Error::NotArray(other.type_name().to_string())),
    }
}

/// Pulls every element out of a producer, converting each one. The producer
/// is closed exactly once whether the drain succeeds or not.
fn drain(underlying: &Type, handle: &GeneratorHandle) -> Result<Vec<Value>> {
    let mut guard = handle.acquire()?;
    let mut values = Vec::new();
    while let Some(value) = guard.next()? {
        values.push(underlying.convert(&value)?);
    }
    guard.release()?;

    tracing::debug!("Drained {} elements into ARRAY({})", values.len(), underlying);
    Ok(values)
}

pub(super) fn convert_array(underlying: &Type, value: &Value) -> Result<Value> {
    elements(underlying, value).map(Value::List)
}

/// Shorter arrays sort first. Arrays of equal length compare element-wise.
pub(super) fn compare_array(underlying: &Type, a: &Value, b: &Value) -> Result<Ordering> {
    let left = elements(underlying, a)?;
    let right = elements(underlying, b)?;
    if left.len() != right.len() {
        return Ok(left.len().cmp(&right.len()));
    }

    for (l, r) in left.iter().zip(&right) {
        match underlying.compare(l, r)? {
            Ordering::Equal => continue,
            ordering => return Ok(ordering),
        }
    }
    Ok(Ordering::Equal)
}

/// Arrays go out as JSON documents.
pub(super) fn array_to_wire(underlying: &Type, value: &Value) -> Result<WireValue> {
    let converted = convert_array(underlying, value)?;
    text::json_to_wire(&converted)
}
