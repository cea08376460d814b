//! JSON marshalling for Value
//!
//! Values map onto JSON documents the way a client expects to read them back:
//! numbers stay numbers, bytes become base64 strings, timestamps become
//! RFC 3339 strings and durations become nanosecond counts. Encoded JSON
//! values are embedded as-is.

use crate::error::Result;
use crate::types::Value;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::SecondsFormat;
use serde::ser::{Error as _, SerializeSeq};
use serde::{Serialize, Serializer};

/// Serializes a value into canonical JSON bytes.
pub fn to_json_vec(value: &Value) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&JsonValue(value))?)
}

/// Re-encodes a JSON document into its canonical form.
pub fn canonicalize(bytes: &[u8]) -> Result<Vec<u8>> {
    let doc: serde_json::Value = serde_json::from_slice(bytes)?;
    Ok(serde_json::to_vec(&doc)?)
}

/// Borrowed view of a value that serializes as a plain JSON document.
pub struct JsonValue<'a>(pub &'a Value);

impl Serialize for JsonValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::I8(i) => serializer.serialize_i8(*i),
            Value::I16(i) => serializer.serialize_i16(*i),
            Value::I32(i) => serializer.serialize_i32(*i),
            Value::I64(i) => serializer.serialize_i64(*i),
            Value::U8(u) => serializer.serialize_u8(*u),
            Value::U16(u) => serializer.serialize_u16(*u),
            Value::U32(u) => serializer.serialize_u32(*u),
            Value::U64(u) => serializer.serialize_u64(*u),
            Value::F32(f) if f.is_finite() => serializer.serialize_f32(*f),
            Value::F64(f) if f.is_finite() => serializer.serialize_f64(*f),
            Value::F32(f) => Err(S::Error::custom(format!("unsupported float value: {}", f))),
            Value::F64(f) => Err(S::Error::custom(format!("unsupported float value: {}", f))),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Bytes(b) => serializer.serialize_str(&STANDARD.encode(b)),
            Value::Timestamp(ts) => {
                serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Value::Duration(d) => {
                serializer.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
            }
            Value::Json(bytes) => serde_json::from_slice::<serde_json::Value>(bytes)
                .map_err(S::Error::custom)?
                .serialize(serializer),
            Value::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(&JsonValue(value))?;
                }
                seq.end()
            }
            Value::Generator(_) => Err(S::Error::custom("generators can't be marshalled")),
        }
    }
}
