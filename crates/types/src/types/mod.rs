//! SQL types: the closed set of value kinds and their conversion, ordering
//! and wire encoding rules.
//!
//! Scalar types are constants ([`INT64`], [`TEXT`], ...). Composite types are
//! built with [`Type::tuple`] and [`Type::array`]. Every type implements the
//! same four operations:
//!
//! - [`Type::wire_tag`] gives the protocol type code.
//! - [`Type::convert`] coerces any [`Value`] into the type's canonical
//!   representation.
//! - [`Type::compare`] orders two canonical values.
//! - [`Type::to_wire`] encodes a value for a client.

mod boolean;
mod classify;
mod coercion;
mod composite;
mod number;
mod temporal;
mod text;

pub use temporal::{
    validate_time, Layout, DATE_LAYOUT, MAX_TIME, TIMESTAMP_LAYOUT, TIMESTAMP_LAYOUTS,
};

use crate::error::{Error, Result};
use crate::wire::{WireTag, WireValue};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use strata_value::Value;

/// Width and signedness of a number type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberKind {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
}

impl NumberKind {
    pub fn wire_tag(self) -> WireTag {
        match self {
            NumberKind::Int8 => WireTag::Int8,
            NumberKind::Uint8 => WireTag::Uint8,
            NumberKind::Int16 => WireTag::Int16,
            NumberKind::Uint16 => WireTag::Uint16,
            NumberKind::Int32 => WireTag::Int32,
            NumberKind::Uint32 => WireTag::Uint32,
            NumberKind::Int64 => WireTag::Int64,
            NumberKind::Uint64 => WireTag::Uint64,
            NumberKind::Float32 => WireTag::Float32,
            NumberKind::Float64 => WireTag::Float64,
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_tag())
    }
}

/// A SQL type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// The type of NULL literals
    Null,
    /// Fixed-width integer or float
    Number(NumberKind),
    /// Point in time, normalized to UTC
    Timestamp,
    /// Point in time truncated to the start of its UTC day
    Date,
    /// Character sequence
    Text,
    /// True or false
    Boolean,
    /// Raw bytes
    Blob,
    /// Canonically encoded JSON document
    Json,
    /// Fixed-arity heterogeneous composite, used during evaluation only
    Tuple(Vec<Type>),
    /// Homogeneous sequence
    Array(Box<Type>),
}

pub const NULL: Type = Type::Null;
pub const INT8: Type = Type::Number(NumberKind::Int8);
pub const UINT8: Type = Type::Number(NumberKind::Uint8);
pub const INT16: Type = Type::Number(NumberKind::Int16);
pub const UINT16: Type = Type::Number(NumberKind::Uint16);
pub const INT32: Type = Type::Number(NumberKind::Int32);
pub const UINT32: Type = Type::Number(NumberKind::Uint32);
pub const INT64: Type = Type::Number(NumberKind::Int64);
pub const UINT64: Type = Type::Number(NumberKind::Uint64);
pub const FLOAT32: Type = Type::Number(NumberKind::Float32);
pub const FLOAT64: Type = Type::Number(NumberKind::Float64);
pub const TIMESTAMP: Type = Type::Timestamp;
pub const DATE: Type = Type::Date;
pub const TEXT: Type = Type::Text;
pub const BOOLEAN: Type = Type::Boolean;
pub const BLOB: Type = Type::Blob;
pub const JSON: Type = Type::Json;

impl Type {
    /// Creates a tuple type with the given element types.
    pub fn tuple(types: Vec<Type>) -> Type {
        Type::Tuple(types)
    }

    /// Creates an array type of the given underlying type.
    pub fn array(underlying: Type) -> Type {
        Type::Array(Box::new(underlying))
    }

    /// Maps a wire tag back to a type.
    pub fn from_wire_tag(tag: WireTag) -> Result<Type> {
        match tag {
            WireTag::Null => Ok(NULL),
            WireTag::Int8 => Ok(INT8),
            WireTag::Uint8 => Ok(UINT8),
            WireTag::Int16 => Ok(INT16),
            WireTag::Uint16 => Ok(UINT16),
            WireTag::Int32 => Ok(INT32),
            WireTag::Uint32 => Ok(UINT32),
            WireTag::Int64 => Ok(INT64),
            WireTag::Uint64 => Ok(UINT64),
            WireTag::Float32 => Ok(FLOAT32),
            WireTag::Float64 => Ok(FLOAT64),
            WireTag::Timestamp => Ok(TIMESTAMP),
            WireTag::Date => Ok(DATE),
            WireTag::Text | WireTag::VarChar => Ok(TEXT),
            WireTag::Bit => Ok(BOOLEAN),
            WireTag::Json => Ok(JSON),
            WireTag::Blob => Ok(BLOB),
            other => Err(Error::TypeNotSupported(other.to_string())),
        }
    }

    /// The wire protocol type code of this type.
    pub fn wire_tag(&self) -> WireTag {
        match self {
            Type::Null => WireTag::Null,
            Type::Number(kind) => kind.wire_tag(),
            Type::Timestamp => WireTag::Timestamp,
            Type::Date => WireTag::Date,
            Type::Text => WireTag::Text,
            Type::Boolean => WireTag::Bit,
            Type::Blob => WireTag::Blob,
            Type::Json | Type::Array(_) => WireTag::Json,
            Type::Tuple(_) => WireTag::Expression,
        }
    }

    /// MySQL display name of this type.
    pub fn mysql_type_name(&self) -> &'static str {
        self.wire_tag().display_name()
    }

    /// Converts a value of a compatible type into this type's canonical
    /// representation.
    pub fn convert(&self, value: &Value) -> Result<Value> {
        match self {
            Type::Null => match value {
                Value::Null => Ok(Value::Null),
                other => Err(Error::ValueNotNil(format!("{:?}", other))),
            },
            Type::Number(kind) => number::convert(*kind, value),
            Type::Timestamp => temporal::convert_timestamp(value),
            Type::Date => temporal::convert_date(value),
            Type::Text => text::convert_text(value),
            Type::Boolean => boolean::convert(value),
            Type::Blob => text::convert_blob(value),
            Type::Json => text::convert_json(value),
            Type::Tuple(types) => composite::convert_tuple(types, value),
            Type::Array(underlying) => composite::convert_array(underlying, value),
        }
    }

    /// Compares two values already in this type's canonical representation.
    ///
    /// NULL compares equal to NULL here, which is the ordering used for
    /// sorting. SQL equality, where NULL never equals NULL, is up to the
    /// caller.
    pub fn compare(&self, a: &Value, b: &Value) -> Result<Ordering> {
        match self {
            Type::Null => Ok(Ordering::Equal),
            Type::Number(_) => number::compare(self, a, b),
            Type::Timestamp => temporal::compare_timestamp(a, b),
            Type::Date => temporal::compare_date(a, b),
            Type::Text => text::compare_text(a, b),
            Type::Boolean => boolean::compare(a, b),
            Type::Blob | Type::Json => text::compare_bytes(self, a, b),
            Type::Tuple(types) => composite::compare_tuple(types, a, b),
            Type::Array(underlying) => composite::compare_array(underlying, a, b),
        }
    }

    /// Encodes a value for a client. NULL encodes as the wire NULL for every
    /// type.
    pub fn to_wire(&self, value: &Value) -> Result<WireValue> {
        if value.is_null() {
            return Ok(WireValue::NULL);
        }

        match self {
            Type::Null => Ok(WireValue::NULL),
            Type::Number(kind) => number::to_wire(*kind, value),
            Type::Timestamp => temporal::timestamp_to_wire(value),
            Type::Date => temporal::date_to_wire(value),
            Type::Text => text::text_to_wire(value),
            Type::Boolean => boolean::to_wire(value),
            Type::Blob => text::blob_to_wire(value),
            Type::Json => text::json_to_wire(value),
            Type::Tuple(_) => Err(Error::NotEncodable(self.to_string())),
            Type::Array(underlying) => composite::array_to_wire(underlying, value),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Null => write!(f, "NULL"),
            Type::Number(kind) => write!(f, "{}", kind),
            Type::Timestamp => write!(f, "TIMESTAMP"),
            Type::Date => write!(f, "DATE"),
            Type::Text => write!(f, "TEXT"),
            Type::Boolean => write!(f, "BOOLEAN"),
            Type::Blob => write!(f, "BLOB"),
            Type::Json => write!(f, "JSON"),
            Type::Tuple(types) => {
                write!(f, "TUPLE(")?;
                for (i, t) in types.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", t)?;
                }
                write!(f, ")")
            }
            Type::Array(underlying) => write!(f, "ARRAY({})", underlying),
        }
    }
}
