//! Textual types: text, blob and JSON

use super::coercion::{display_text, to_text};
use super::Type;
use crate::error::{Error, Result};
use crate::wire::{WireTag, WireValue};
use std::cmp::Ordering;
use strata_value::json;
use strata_value::Value;

fn text(value: &Value) -> Result<String> {
    to_text(value).ok_or_else(|| Error::ConvertToSql(Type::Text.to_string()))
}

pub(super) fn convert_text(value: &Value) -> Result<Value> {
    text(value).map(Value::Str)
}

pub(super) fn compare_text(a: &Value, b: &Value) -> Result<Ordering> {
    match (a, b) {
        (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
        _ => Err(mismatch(&Type::Text, a, b)),
    }
}

pub(super) fn text_to_wire(value: &Value) -> Result<WireValue> {
    Ok(WireValue::new(WireTag::Text, text(value)?.into_bytes()))
}

fn blob(value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Bytes(b) => Ok(b.clone()),
        Value::Str(s) => Ok(s.clone().into_bytes()),
        other => display_text(other)
            .map(String::into_bytes)
            .ok_or_else(|| Error::InvalidType(other.type_name().to_string())),
    }
}

pub(super) fn convert_blob(value: &Value) -> Result<Value> {
    blob(value).map(Value::Bytes)
}

pub(super) fn blob_to_wire(value: &Value) -> Result<WireValue> {
    Ok(WireValue::new(WireTag::Blob, blob(value)?))
}

/// Text that parses as a JSON document is stored as that document. Text that
/// doesn't is stored as a JSON string.
fn json_document(value: &Value) -> Result<Vec<u8>> {
    Ok(match value {
        Value::Str(s) => match serde_json::from_str::<serde_json::Value>(s) {
            Ok(doc) => serde_json::to_vec(&doc)?,
            Err(_) => serde_json::to_vec(s)?,
        },
        Value::Json(b) => json::canonicalize(b)?,
        other => json::to_json_vec(other)?,
    })
}

pub(super) fn convert_json(value: &Value) -> Result<Value> {
    json_document(value).map(Value::Json)
}

pub(super) fn json_to_wire(value: &Value) -> Result<WireValue> {
    Ok(WireValue::new(WireTag::Json, json_document(value)?))
}

/// Byte-wise ordering, shared by blobs and JSON documents. JSON documents
/// that differ only in formatting the canonical encoding doesn't remove
/// compare unequal.
pub(super) fn compare_bytes(t: &Type, a: &Value, b: &Value) -> Result<Ordering> {
    match (as_bytes(a), as_bytes(b)) {
        (Some(a), Some(b)) => Ok(a.cmp(b)),
        _ => Err(mismatch(t, a, b)),
    }
}

fn as_bytes(value: &Value) -> Option<&[u8]> {
    match value {
        Value::Bytes(b) | Value::Json(b) => Some(b),
        _ => None,
    }
}

fn mismatch(t: &Type, a: &Value, b: &Value) -> Error {
    Error::InvalidType(format!(
        "can't compare {} and {} as {}",
        a.type_name(),
        b.type_name(),
        t
    ))
}
