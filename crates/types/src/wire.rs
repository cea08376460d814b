//! Wire protocol type tags and encoded values
//!
//! Tags use the MySQL protocol type codes, so they can be sent to clients
//! unchanged. Only a subset of them map to a SQL [`Type`](crate::Type).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire protocol type code.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireTag {
    Null = 0,
    Int8 = 257,
    Uint8 = 770,
    Int16 = 259,
    Uint16 = 772,
    Int24 = 261,
    Uint24 = 774,
    Int32 = 263,
    Uint32 = 776,
    Int64 = 265,
    Uint64 = 778,
    Float32 = 1035,
    Float64 = 1036,
    Timestamp = 2061,
    Date = 2062,
    Time = 2063,
    Datetime = 2064,
    Year = 785,
    Decimal = 18,
    Text = 6163,
    Blob = 10260,
    VarChar = 6165,
    VarBinary = 10262,
    Char = 6177,
    Binary = 10274,
    Bit = 2073,
    Enum = 2074,
    Set = 2075,
    Tuple = 28,
    Geometry = 2077,
    Json = 2078,
    Expression = 31,
}

const ALL_TAGS: [WireTag; 32] = [
    WireTag::Null,
    WireTag::Int8,
    WireTag::Uint8,
    WireTag::Int16,
    WireTag::Uint16,
    WireTag::Int24,
    WireTag::Uint24,
    WireTag::Int32,
    WireTag::Uint32,
    WireTag::Int64,
    WireTag::Uint64,
    WireTag::Float32,
    WireTag::Float64,
    WireTag::Timestamp,
    WireTag::Date,
    WireTag::Time,
    WireTag::Datetime,
    WireTag::Year,
    WireTag::Decimal,
    WireTag::Text,
    WireTag::Blob,
    WireTag::VarChar,
    WireTag::VarBinary,
    WireTag::Char,
    WireTag::Binary,
    WireTag::Bit,
    WireTag::Enum,
    WireTag::Set,
    WireTag::Tuple,
    WireTag::Geometry,
    WireTag::Json,
    WireTag::Expression,
];

impl WireTag {
    /// The protocol type code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// MySQL display name used by introspection (`SHOW COLUMNS`, `DESCRIBE`).
    pub fn display_name(self) -> &'static str {
        match self {
            WireTag::Int8 => "TINYINT",
            WireTag::Uint8 => "TINYINT UNSIGNED",
            WireTag::Int16 => "SMALLINT",
            WireTag::Uint16 => "SMALLINT UNSIGNED",
            WireTag::Int32 => "INTEGER",
            WireTag::Uint32 => "INTEGER UNSIGNED",
            WireTag::Int64 => "BIGINT",
            WireTag::Uint64 => "BIGINT UNSIGNED",
            WireTag::Float32 => "FLOAT",
            WireTag::Float64 => "DOUBLE",
            WireTag::Timestamp => "DATETIME",
            WireTag::Date => "DATE",
            WireTag::Text | WireTag::VarChar => "TEXT",
            WireTag::Bit => "BIT",
            WireTag::Json => "JSON",
            WireTag::Blob => "BLOB",
            _ => "UNKNOWN",
        }
    }
}

impl TryFrom<i32> for WireTag {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        ALL_TAGS
            .iter()
            .copied()
            .find(|tag| tag.code() == code)
            .ok_or_else(|| Error::TypeNotSupported(code.to_string()))
    }
}

impl fmt::Display for WireTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WireTag::Null => "NULL_TYPE",
            WireTag::Int8 => "INT8",
            WireTag::Uint8 => "UINT8",
            WireTag::Int16 => "INT16",
            WireTag::Uint16 => "UINT16",
            WireTag::Int24 => "INT24",
            WireTag::Uint24 => "UINT24",
            WireTag::Int32 => "INT32",
            WireTag::Uint32 => "UINT32",
            WireTag::Int64 => "INT64",
            WireTag::Uint64 => "UINT64",
            WireTag::Float32 => "FLOAT32",
            WireTag::Float64 => "FLOAT64",
            WireTag::Timestamp => "TIMESTAMP",
            WireTag::Date => "DATE",
            WireTag::Time => "TIME",
            WireTag::Datetime => "DATETIME",
            WireTag::Year => "YEAR",
            WireTag::Decimal => "DECIMAL",
            WireTag::Text => "TEXT",
            WireTag::Blob => "BLOB",
            WireTag::VarChar => "VARCHAR",
            WireTag::VarBinary => "VARBINARY",
            WireTag::Char => "CHAR",
            WireTag::Binary => "BINARY",
            WireTag::Bit => "BIT",
            WireTag::Enum => "ENUM",
            WireTag::Set => "SET",
            WireTag::Tuple => "TUPLE",
            WireTag::Geometry => "GEOMETRY",
            WireTag::Json => "JSON",
            WireTag::Expression => "EXPRESSION",
        };
        write!(f, "{}", name)
    }
}

/// A value encoded for the client: a type tag plus its textual payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WireValue {
    tag: WireTag,
    raw: Vec<u8>,
}

impl WireValue {
    /// The SQL NULL.
    pub const NULL: WireValue = WireValue {
        tag: WireTag::Null,
        raw: Vec::new(),
    };

    pub fn new(tag: WireTag, raw: Vec<u8>) -> Self {
        Self { tag, raw }
    }

    pub fn tag(&self) -> WireTag {
        self.tag
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }

    pub fn is_null(&self) -> bool {
        self.tag == WireTag::Null
    }
}
