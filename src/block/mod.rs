pub mod column_def;
pub mod row;
pub mod row_block;
pub mod schema;
