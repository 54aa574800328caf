pub(crate) mod block;
pub(crate) mod common;
pub(crate) mod core;
pub(crate) mod wire;

pub use block::{
    column_def::{ColumnDef, ColumnId},
    row::Row,
    row_block::RowBlock,
    schema::Schema,
};
pub use common::error::WireError;
pub use crate::core::types::{DataType, Value};
pub use wire::Dialect;
