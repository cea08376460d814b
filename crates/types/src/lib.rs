//! Strata Types - the SQL value type layer
//!
//! This crate gives every column, literal and computed value a canonical
//! representation:
//! - [`Type`] converts dynamic [`Value`]s into that representation, orders
//!   them, and encodes them for clients as [`WireValue`]s
//! - [`Schema`] validates rows against typed [`Column`]s
//! - [`WireTag`] lists the client protocol type codes

mod error;
mod schema;
mod types;
mod wire;

pub use error::{Error, Result};
pub use schema::{Column, Schema};
pub use types::{
    validate_time, Layout, NumberKind, Type, BLOB, BOOLEAN, DATE, DATE_LAYOUT, FLOAT32, FLOAT64,
    INT16, INT32, INT64, INT8, JSON, MAX_TIME, NULL, TEXT, TIMESTAMP, TIMESTAMP_LAYOUT,
    TIMESTAMP_LAYOUTS, UINT16, UINT32, UINT64, UINT8,
};
pub use wire::{WireTag, WireValue};

pub use strata_value::{Generator, GeneratorGuard, GeneratorHandle, Row, Value};
