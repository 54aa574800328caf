use super::column_def::{ColumnDef, ColumnId};

/// A schema defining the structure of result-set rows.
///
/// A schema is an ordered list of column definitions. Every row in a row
/// block conforms to the block's schema, and the column order here is the
/// order values appear on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// The ordered list of column definitions.
    pub columns: Vec<ColumnDef>,
}

impl Schema {
    /// Creates a new schema from a vector of column definitions.
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self { columns }
    }

    /// Creates a schema with no columns.
    pub fn empty() -> Self {
        Self { columns: vec![] }
    }

    /// Finds the index of a column by name.
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    /// Finds a column by its catalog id.
    pub fn column_by_id(&self, id: ColumnId) -> Option<&ColumnDef> {
        self.columns.iter().find(|col| col.id == id)
    }

    /// Derives the projection of this schema onto the given column ids.
    ///
    /// The result contains the named columns in `column_ids` order. Ids
    /// with no matching column are skipped, so a request that names a
    /// column this schema no longer carries narrows the projection instead
    /// of failing.
    pub fn project(&self, column_ids: &[ColumnId]) -> Schema {
        let columns = column_ids
            .iter()
            .filter_map(|id| self.column_by_id(*id))
            .cloned()
            .collect();
        Schema { columns }
    }

    /// Checks structural compatibility with another schema.
    ///
    /// Two schemas are compatible when they declare the same column ids and
    /// types, pairwise in order. Column names are display metadata and are
    /// not compared.
    pub fn is_compatible_with(&self, other: &Schema) -> bool {
        self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(other.columns.iter())
                .all(|(a, b)| a.id == b.id && a.data_type == b.data_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DataType;

    fn people_schema() -> Schema {
        Schema::new(vec![
            ColumnDef::new(1, "id", DataType::Int32),
            ColumnDef::new(2, "name", DataType::Text),
            ColumnDef::new(3, "active", DataType::Bool),
        ])
    }

    #[test]
    fn test_get_column_index() {
        let schema = people_schema();
        assert_eq!(schema.get_column_index("name"), Some(1));
        assert_eq!(schema.get_column_index("missing"), None);
    }

    #[test]
    fn test_column_by_id() {
        let schema = people_schema();
        assert_eq!(
            schema.column_by_id(ColumnId::new(3)).map(|c| c.name.as_str()),
            Some("active")
        );
        assert!(schema.column_by_id(ColumnId::new(99)).is_none());
    }

    #[test]
    fn test_projection_follows_requested_order() {
        let schema = people_schema();
        let projected = schema.project(&[ColumnId::new(3), ColumnId::new(1)]);

        assert_eq!(projected.columns.len(), 2);
        assert_eq!(projected.columns[0].name, "active");
        assert_eq!(projected.columns[1].name, "id");
    }

    #[test]
    fn test_projection_skips_unknown_ids() {
        let schema = people_schema();
        let projected = schema.project(&[ColumnId::new(2), ColumnId::new(99)]);

        assert_eq!(projected.columns.len(), 1);
        assert_eq!(projected.columns[0].name, "name");

        let none = schema.project(&[ColumnId::new(98), ColumnId::new(99)]);
        assert!(none.columns.is_empty());
    }

    #[test]
    fn test_projection_keeps_duplicate_ids() {
        let schema = people_schema();
        let projected = schema.project(&[ColumnId::new(1), ColumnId::new(1)]);
        assert_eq!(projected.columns.len(), 2);
    }

    #[test]
    fn test_compatibility_ignores_column_names() {
        let schema = people_schema();
        let renamed = Schema::new(vec![
            ColumnDef::new(1, "person_id", DataType::Int32),
            ColumnDef::new(2, "full_name", DataType::Text),
            ColumnDef::new(3, "is_active", DataType::Bool),
        ]);
        assert!(schema.is_compatible_with(&renamed));
    }

    #[test]
    fn test_compatibility_requires_matching_ids_and_types() {
        let schema = people_schema();

        let retyped = Schema::new(vec![
            ColumnDef::new(1, "id", DataType::Int64),
            ColumnDef::new(2, "name", DataType::Text),
            ColumnDef::new(3, "active", DataType::Bool),
        ]);
        assert!(!schema.is_compatible_with(&retyped));

        let reordered = Schema::new(vec![
            ColumnDef::new(2, "name", DataType::Text),
            ColumnDef::new(1, "id", DataType::Int32),
            ColumnDef::new(3, "active", DataType::Bool),
        ]);
        assert!(!schema.is_compatible_with(&reordered));

        let shorter = schema.project(&[ColumnId::new(1)]);
        assert!(!schema.is_compatible_with(&shorter));
    }
}
