use std::sync::Arc;

use bytes::{Buf, BufMut, BytesMut};

use super::{column_def::ColumnId, row::Row, schema::Schema};
use crate::{
    common::error::WireError,
    wire::{Dialect, ensure_remaining},
};

/// Width of the row-count header framing an encoded row block, in bytes.
///
/// The header is fixed-width so a merge can rewrite the count in place no
/// matter how many rows the merged block ends up with.
pub(crate) const ROW_COUNT_SIZE: usize = 4;

/// An ordered collection of rows plus the schema defining their layout.
///
/// A row block is the unit a query result travels in: the server fills one
/// block per page of results, encodes it, and the client decodes it back.
/// The block owns a private schema snapshot; rows added to the block share
/// that snapshot through a read-only handle, so the layout cannot drift
/// while rows exist. Rows are only ever appended.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBlock {
    pub(crate) schema: Arc<Schema>,
    pub(crate) rows: Vec<Row>,
}

impl RowBlock {
    /// Creates an empty row block holding its own snapshot of `schema`.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema: Arc::new(schema),
            rows: Vec::new(),
        }
    }

    /// Creates an empty row block over a projection of `base_schema`.
    ///
    /// Convenience for the common case where a query selects a subset of a
    /// table's columns by id. Ids missing from `base_schema` are skipped,
    /// see [`Schema::project`].
    pub fn with_projection(base_schema: &Schema, column_ids: &[ColumnId]) -> Self {
        Self::new(base_schema.project(column_ids))
    }

    /// Returns the schema the block's rows conform to.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the rows in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows currently in the block.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the block holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a fresh all-NULL row and returns a handle for filling it in.
    ///
    /// The new row shares the block's schema snapshot.
    pub fn extend(&mut self) -> &mut Row {
        self.rows.push(Row::new(Arc::clone(&self.schema)));
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Appends an existing row after checking it against the block schema.
    ///
    /// A row built on another schema handle is accepted as long as the two
    /// schemas are structurally compatible, see [`Schema::is_compatible_with`].
    pub fn add_row(&mut self, row: Row) -> Result<(), WireError> {
        if !Arc::ptr_eq(&self.schema, &row.schema)
            && !self.schema.is_compatible_with(&row.schema)
        {
            return Err(WireError::SchemaMismatch);
        }
        self.rows.push(row);
        Ok(())
    }

    /// Appends the wire encoding of this block to `buf`.
    ///
    /// Writes the row count as a big-endian `i32` header followed by every
    /// row's encoding in order. A block with no rows encodes to just the
    /// 4-byte header.
    pub fn serialize(&self, dialect: Dialect, buf: &mut BytesMut) -> Result<(), WireError> {
        dialect.ensure_supported()?;

        let count = i32::try_from(self.rows.len()).map_err(|_| WireError::RowCountOverflow {
            count: self.rows.len() as u64,
        })?;
        buf.put_i32(count);
        for row in &self.rows {
            row.serialize(dialect, buf)?;
        }
        Ok(())
    }

    /// Decodes an encoded page, appending its rows to this block.
    ///
    /// The page must contain exactly the declared number of rows: leftover
    /// bytes after the last row are reported as [`WireError::TrailingBytes`]
    /// and mean the page is corrupt. On any error the block may hold some
    /// already-decoded rows and should be discarded.
    pub fn deserialize(&mut self, dialect: Dialect, data: &[u8]) -> Result<(), WireError> {
        dialect.ensure_supported()?;

        let mut data = data;
        let count = read_row_count(&mut data)?;
        for _ in 0..count {
            self.extend().deserialize(dialect, &mut data)?;
        }
        if !data.is_empty() {
            return Err(WireError::TrailingBytes {
                remaining: data.len(),
            });
        }
        Ok(())
    }

    /// Reads the row count out of an encoded page without decoding rows.
    ///
    /// Only the 4-byte header is examined, so this is cheap no matter how
    /// large the page is.
    pub fn encoded_row_count(dialect: Dialect, data: &[u8]) -> Result<usize, WireError> {
        dialect.ensure_supported()?;

        let mut data = data;
        let count = read_row_count(&mut data)?;
        Ok(count as usize)
    }

    /// Merges the encoded page `src` into the encoded page `dst` without
    /// decoding any rows.
    ///
    /// `src`'s row bytes are appended after `dst`'s and the row-count
    /// header of `dst` is patched to the sum. If `src` holds no rows this
    /// is a no-op; if `dst` holds no rows it is replaced by `src` wholesale.
    /// Only the two headers are validated, the row bytes are trusted as-is,
    /// so both pages must already use the same schema and dialect.
    pub fn append_rows_data(
        dialect: Dialect,
        src: &[u8],
        dst: &mut BytesMut,
    ) -> Result<(), WireError> {
        dialect.ensure_supported()?;

        let mut src_rows = src;
        let src_count = read_row_count(&mut src_rows)?;
        if src_count == 0 {
            return Ok(());
        }

        let dst_count = read_row_count(&mut &dst[..])?;
        if dst_count == 0 {
            dst.clear();
            dst.extend_from_slice(src);
            return Ok(());
        }

        let merged = dst_count
            .checked_add(src_count)
            .ok_or_else(|| WireError::RowCountOverflow {
                count: dst_count as u64 + src_count as u64,
            })?;
        dst.extend_from_slice(src_rows);
        dst[..ROW_COUNT_SIZE].copy_from_slice(&merged.to_be_bytes());
        Ok(())
    }
}

impl std::fmt::Display for RowBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", row)?;
        }
        write!(f, " }}")
    }
}

/// Reads the row-count header off the front of `data`.
fn read_row_count(data: &mut &[u8]) -> Result<i32, WireError> {
    ensure_remaining(data, ROW_COUNT_SIZE, "row count")?;
    let count = data.get_i32();
    if count < 0 {
        return Err(WireError::InvalidRowCount(count));
    }
    Ok(count)
}
