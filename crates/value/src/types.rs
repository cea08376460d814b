//! Value types for the strata type layer
//!
//! `Value` is the dynamic input domain every SQL type converts from, and the
//! canonical representation every conversion produces.

use crate::generator::GeneratorHandle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A row of values, positionally aligned to a schema
pub type Row = Vec<Value>;

/// Dynamic SQL value
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    // Absence of value
    Null,
    // Boolean
    Bool(bool),
    // Integer types
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    // Float types
    F32(f32),
    F64(f64),
    // Text
    Str(String),
    // Raw bytes
    Bytes(Vec<u8>),
    // Point in time, always UTC
    Timestamp(DateTime<Utc>),
    // Elapsed time
    Duration(Duration),
    // Canonical encoded JSON document
    Json(Vec<u8>),
    // Ordered sequence (tuples and arrays)
    List(Vec<Value>),
    // Lazy producer of values, only meaningful to array conversion
    #[serde(skip)]
    Generator(GeneratorHandle),
}

impl Value {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an I64 value (most common integer type)
    pub fn integer(i: i64) -> Self {
        Value::I64(i)
    }

    /// Create a string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        Value::Str(s.into())
    }

    /// Create a boolean value
    pub fn boolean(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create a float value
    pub fn float(f: f64) -> Self {
        Value::F64(f)
    }

    /// Create bytes value
    pub fn bytes<B: Into<Vec<u8>>>(b: B) -> Self {
        Value::Bytes(b.into())
    }

    /// Create a list value
    pub fn list<I: IntoIterator<Item = Value>>(values: I) -> Self {
        Value::List(values.into_iter().collect())
    }

    // ========================================================================
    // Type Checks
    // ========================================================================

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is any integer type
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Value::I8(_)
                | Value::I16(_)
                | Value::I32(_)
                | Value::I64(_)
                | Value::U8(_)
                | Value::U16(_)
                | Value::U32(_)
                | Value::U64(_)
        )
    }

    /// Check if value is a float type
    pub fn is_float(&self) -> bool {
        matches!(self, Value::F32(_) | Value::F64(_))
    }

    /// Check if value is numeric (integer or float)
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Returns the list elements, if this is a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    // ========================================================================
    // Type Name
    // ========================================================================

    /// Get the kind name of this value, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Timestamp(_) => "timestamp",
            Value::Duration(_) => "duration",
            Value::Json(_) => "json",
            Value::List(_) => "list",
            Value::Generator(_) => "generator",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::I8(i) => write!(f, "{}", i),
            Value::I16(i) => write!(f, "{}", i),
            Value::I32(i) => write!(f, "{}", i),
            Value::I64(i) => write!(f, "{}", i),
            Value::U8(i) => write!(f, "{}", i),
            Value::U16(i) => write!(f, "{}", i),
            Value::U32(i) => write!(f, "{}", i),
            Value::U64(i) => write!(f, "{}", i),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Str(s) => write!(f, "'{}'", s),
            Value::Bytes(b) => {
                write!(f, "x'")?;
                for byte in b {
                    write!(f, "{:02x}", byte)?;
                }
                write!(f, "'")
            }
            Value::Timestamp(ts) => write!(f, "{}", ts),
            Value::Duration(d) => write!(f, "{:?}", d),
            Value::Json(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Value::List(l) => {
                write!(f, "(")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, ")")
            }
            Value::Generator(_) => write!(f, "<generator>"),
        }
    }
}

// Implement Debug for Value to have nicer test output
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::I8(i) => write!(f, "I8({})", i),
            Value::I16(i) => write!(f, "I16({})", i),
            Value::I32(i) => write!(f, "I32({})", i),
            Value::I64(i) => write!(f, "I64({})", i),
            Value::U8(i) => write!(f, "U8({})", i),
            Value::U16(i) => write!(f, "U16({})", i),
            Value::U32(i) => write!(f, "U32({})", i),
            Value::U64(i) => write!(f, "U64({})", i),
            Value::F32(v) => write!(f, "F32({})", v),
            Value::F64(v) => write!(f, "F64({})", v),
            Value::Str(s) => write!(f, "Str({})", s),
            Value::Bytes(b) => write!(f, "Bytes({:?})", b),
            Value::Timestamp(ts) => write!(f, "Timestamp({})", ts.to_rfc3339()),
            Value::Duration(d) => write!(f, "Duration({:?})", d),
            Value::Json(b) => write!(f, "Json({})", String::from_utf8_lossy(b)),
            Value::List(l) => {
                write!(f, "List[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", v)?;
                }
                write!(f, "]")
            }
            Value::Generator(g) => write!(f, "{:?}", g),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::I64(i)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::U64(u)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::F64(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

impl From<GeneratorHandle> for Value {
    fn from(handle: GeneratorHandle) -> Self {
        Value::Generator(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_types() {
        assert!(Value::I8(10).is_integer());
        assert!(Value::U64(1000).is_integer());
        assert!(!Value::string("not integer").is_integer());
        assert!(Value::F32(1.5).is_numeric());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::integer(1).type_name(), "i64");
        assert_eq!(Value::list(vec![]).type_name(), "list");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::string("a").to_string(), "'a'");
        assert_eq!(Value::bytes(vec![0xde, 0xad]).to_string(), "x'dead'");
        assert_eq!(
            Value::list(vec![Value::integer(1), Value::Null]).to_string(),
            "(1, NULL)"
        );
    }

    #[test]
    fn test_serde_skips_generator() {
        let value = Value::list(vec![Value::integer(1), Value::string("a")]);
        let encoded = serde_json::to_string(&value).unwrap();
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, value);

        let generator = Value::Generator(GeneratorHandle::from_values(Vec::new()));
        assert!(serde_json::to_string(&generator).is_err());
    }
}
