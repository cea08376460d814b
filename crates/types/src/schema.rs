//! Table schemas: ordered, positional column definitions
//!
//! Schemas are immutable once built. Methods that "change" a schema consume
//! it and return a new one.

use crate::error::{Error, Result};
use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::Deref;
use strata_value::{Row, Value};

/// A table column: a named component of a table with a type, a default and a
/// nullability characteristic.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Column datatype.
    pub datatype: Type,
    /// The column's default value. If None, the default is NULL.
    pub default: Option<Value>,
    /// Whether the column allows null values.
    pub nullable: bool,
    /// The table this column came from. Empty for computed columns.
    pub source: String,
}

impl Column {
    /// Creates a new nullable column with no default and no source table.
    pub fn new(name: impl Into<String>, datatype: Type) -> Self {
        Column {
            name: name.into(),
            datatype,
            default: None,
            nullable: true,
            source: String::new(),
        }
    }

    /// Sets whether this column is nullable.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the default value for this column.
    pub fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Sets the table this column came from.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Checks that a value can be stored in this column. NULL is accepted
    /// only by nullable columns. Anything else must convert to the column's
    /// type.
    pub fn check(&self, value: &Value) -> bool {
        if value.is_null() {
            return self.nullable;
        }
        self.datatype.convert(value).is_ok()
    }

    fn matches(&self, name: &str, source: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.source.to_lowercase() == source.to_lowercase()
    }
}

/// An ordered list of columns. Rows are matched to columns by position.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Schema { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// Checks that a row has one value per column and that every column
    /// accepts its value.
    pub fn check_row(&self, row: &Row) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::UnexpectedRowLength {
                expected: self.columns.len(),
                got: row.len(),
            });
        }

        for (index, (column, value)) in self.columns.iter().zip(row).enumerate() {
            if column.check(value) {
                continue;
            }
            tracing::debug!(
                "Row rejected at column {} ({} {}): {:?}",
                index,
                column.name,
                column.datatype,
                value
            );
            return Err(Error::UnexpectedType {
                index,
                found: value.type_name().to_string(),
            });
        }

        Ok(())
    }

    /// Returns the position of the column with the given name and source
    /// table. Both are matched case-insensitively.
    pub fn index_of(&self, name: &str, source: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.matches(name, source))
    }

    pub fn contains(&self, name: &str, source: &str) -> bool {
        self.index_of(name, source).is_some()
    }

    /// Returns the column with the given name and source table, if any.
    pub fn column(&self, name: &str, source: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.matches(name, source))
    }

    /// Returns a new schema with the column appended.
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Returns a new schema made of the columns at the given positions, in
    /// that order, or `None` if a position is out of bounds.
    pub fn project(&self, indexes: &[usize]) -> Option<Self> {
        indexes
            .iter()
            .map(|&i| self.columns.get(i).cloned())
            .collect::<Option<Vec<_>>>()
            .map(Schema::new)
    }
}

impl Deref for Schema {
    type Target = [Column];

    fn deref(&self) -> &Self::Target {
        &self.columns
    }
}

impl FromIterator<Column> for Schema {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Schema::new(iter.into_iter().collect())
    }
}

impl From<Vec<Column>> for Schema {
    fn from(columns: Vec<Column>) -> Self {
        Schema::new(columns)
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

// Formats the schema as the column list of a CREATE TABLE statement.
impl Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "(")?;
        for (i, column) in self.columns.iter().enumerate() {
            write!(f, "  ")?;
            if !column.source.is_empty() {
                write!(f, "{}.", column.source)?;
            }
            write!(f, "{} {}", column.name, column.datatype)?;

            if !column.nullable {
                write!(f, " NOT NULL")?;
            }
            if let Some(default) = &column.default {
                write!(f, " DEFAULT {}", default)?;
            }

            if i < self.columns.len() - 1 {
                writeln!(f, ",")?;
            }
        }
        write!(f, "\n)")
    }
}
