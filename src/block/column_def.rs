use crate::core::types::DataType;

/// Identifier of a column within a table schema.
///
/// Column ids are assigned by the catalog and stay stable across schema
/// changes, which is why projections select columns by id rather than by
/// name or position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(i32);

impl ColumnId {
    /// Creates a column id from its raw catalog value.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw catalog value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ColumnId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Definition of a single column in a result-set schema.
///
/// Specifies the column id, name, and the wire type of its values. Any
/// column may carry NULL on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// The catalog-assigned column id.
    pub id: ColumnId,

    /// The column name.
    pub name: String,

    /// The wire type for values in this column.
    pub data_type: DataType,
}

impl ColumnDef {
    /// Creates a new column definition.
    pub fn new(id: impl Into<ColumnId>, name: &str, data_type: DataType) -> Self {
        Self {
            id: id.into(),
            name: name.to_owned(),
            data_type,
        }
    }
}
