use std::sync::Arc;

use bytes::BytesMut;

use super::schema::Schema;
use crate::{common::error::WireError, core::types::Value, wire::Dialect};

/// A row of data containing one value per schema column.
///
/// Rows are ordered collections of values bound to the schema that gives
/// them meaning. The schema handle is shared read-only with the row block
/// the row belongs to, so looking up a column's type never copies the
/// schema. A row always holds exactly as many values as its schema has
/// columns; fresh rows start out all NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub(crate) schema: Arc<Schema>,
    pub(crate) values: Vec<Value>,
}

impl Row {
    /// Creates a row bound to `schema` with every column set to NULL.
    pub fn new(schema: Arc<Schema>) -> Self {
        let values = vec![Value::Null; schema.columns.len()];
        Self { schema, values }
    }

    /// Creates a row from existing values, checking them against the schema.
    ///
    /// Only the value count is checked here. Whether each value agrees with
    /// its column's type is enforced when the row is serialized.
    pub fn with_values(schema: Arc<Schema>, values: Vec<Value>) -> Result<Self, WireError> {
        if values.len() != schema.columns.len() {
            return Err(WireError::RowArity {
                expected: schema.columns.len(),
                actual: values.len(),
            });
        }
        Ok(Self { schema, values })
    }

    /// Returns the schema this row is bound to.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the ordered values in this row.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Gets a reference to the value at the given column index.
    pub fn get_value(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Replaces the value at the given column index.
    ///
    /// Panics if `index` is out of range for the schema.
    pub fn set_value(&mut self, index: usize, value: Value) {
        self.values[index] = value;
    }

    /// Appends this row's wire encoding to `buf`.
    ///
    /// Values are written in schema column order with no separator; the
    /// length prefix of each value is all the framing a row gets.
    pub fn serialize(&self, dialect: Dialect, buf: &mut BytesMut) -> Result<(), WireError> {
        for (value, column) in self.values.iter().zip(self.schema.columns.iter()) {
            value.serialize(column.data_type, dialect, buf)?;
        }
        Ok(())
    }

    /// Fills this row by decoding one value per column from `data`.
    ///
    /// Advances `data` past exactly the bytes this row occupies. On error
    /// the row is left partially filled and should be discarded.
    pub fn deserialize(&mut self, dialect: Dialect, data: &mut &[u8]) -> Result<(), WireError> {
        for (slot, column) in self.values.iter_mut().zip(self.schema.columns.iter()) {
            *slot = Value::deserialize(column.data_type, dialect, data)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, " }}")
    }
}
