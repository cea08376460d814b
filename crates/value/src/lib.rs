//! Strata Value - dynamic values for the strata SQL type layer
//!
//! This crate provides the Value type that SQL types convert from and into:
//! - Scalars (integers, floats, text, bytes, booleans, timestamps, durations)
//! - Encoded JSON documents
//! - Ordered lists, used for tuples and arrays
//! - Lazy producers of values that must be released after use
//!
//! It also provides JSON marshalling of values.

pub mod error;
pub mod generator;
pub mod json;
pub mod types;

pub use error::{Error, Result};
pub use generator::{Generator, GeneratorGuard, GeneratorHandle};
pub use types::{Row, Value};
