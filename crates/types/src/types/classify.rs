//! Type classification

use super::{NumberKind, Type};

impl Type {
    /// Returns true if this is the type of NULL literals.
    pub fn is_null(&self) -> bool {
        matches!(self, Type::Null)
    }

    /// Returns true for the integers [`Type::is_integer`] accepts and both
    /// float widths.
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_decimal()
    }

    /// Returns true for the signed 32 and 64-bit integers. The 8 and 16-bit
    /// widths are neither signed nor unsigned here.
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Type::Number(NumberKind::Int32) | Type::Number(NumberKind::Int64)
        )
    }

    /// Returns true for the unsigned 32 and 64-bit integers.
    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Type::Number(NumberKind::Uint32) | Type::Number(NumberKind::Uint64)
        )
    }

    pub fn is_integer(&self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    pub fn is_time(&self) -> bool {
        matches!(self, Type::Timestamp | Type::Date)
    }

    pub fn is_decimal(&self) -> bool {
        matches!(
            self,
            Type::Number(NumberKind::Float32) | Type::Number(NumberKind::Float64)
        )
    }

    /// Returns true for the types stored as text or bytes.
    pub fn is_text(&self) -> bool {
        matches!(self, Type::Text | Type::Blob | Type::Json)
    }

    /// Returns true for tuples of more than one element. A single-element
    /// tuple behaves like its element.
    pub fn is_tuple(&self) -> bool {
        matches!(self, Type::Tuple(types) if types.len() > 1)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array(_))
    }

    /// Number of columns a value of this type spans: the arity of a tuple,
    /// one for everything else.
    pub fn num_columns(&self) -> usize {
        match self {
            Type::Tuple(types) => types.len(),
            _ => 1,
        }
    }

    /// The element type of an array, or the type itself.
    pub fn underlying_type(&self) -> &Type {
        match self {
            Type::Array(underlying) => underlying,
            other => other,
        }
    }
}
