use miette::Diagnostic;
use thiserror::Error;

use crate::{core::types::DataType, wire::Dialect};

/// Errors reported by the row codec.
///
/// Decode errors split into two families: truncation and bad value framing
/// mean the input is malformed, while [`WireError::TrailingBytes`] and
/// [`WireError::InvalidRowCount`] mean a structurally readable page is
/// corrupt and should be discarded.
#[derive(Debug, Error, Diagnostic)]
pub enum WireError {
    #[error("unsupported client dialect: {0}")]
    #[diagnostic(code(scuttle_wire::unsupported_dialect))]
    UnsupportedDialect(Dialect),

    #[error("truncated input while reading {context}: need {needed} byte(s), {remaining} left")]
    #[diagnostic(code(scuttle_wire::truncated))]
    Truncated {
        context: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("invalid length {length} for {data_type} value")]
    #[diagnostic(code(scuttle_wire::invalid_value_length))]
    InvalidValueLength { data_type: DataType, length: i32 },

    #[error("text value is not valid UTF-8")]
    #[diagnostic(code(scuttle_wire::invalid_utf8))]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("extra data at the end of row block: {remaining} byte(s)")]
    #[diagnostic(code(scuttle_wire::trailing_bytes))]
    TrailingBytes { remaining: usize },

    #[error("negative row count {0} in row block header")]
    #[diagnostic(code(scuttle_wire::invalid_row_count))]
    InvalidRowCount(i32),

    #[error("row count {count} does not fit the 4-byte wire header")]
    #[diagnostic(code(scuttle_wire::row_count_overflow))]
    RowCountOverflow { count: u64 },

    #[error("type mismatch: {value} value cannot be encoded as {data_type}")]
    #[diagnostic(code(scuttle_wire::type_mismatch))]
    TypeMismatch {
        data_type: DataType,
        value: &'static str,
    },

    #[error("value of {size} byte(s) exceeds the wire length limit")]
    #[diagnostic(code(scuttle_wire::oversize_value))]
    OversizeValue { size: usize },

    #[error("row has {actual} value(s) but the schema declares {expected} column(s)")]
    #[diagnostic(code(scuttle_wire::row_arity))]
    RowArity { expected: usize, actual: usize },

    #[error("row schema is not compatible with the row block schema")]
    #[diagnostic(code(scuttle_wire::schema_mismatch))]
    SchemaMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failing_piece() {
        let err = WireError::Truncated {
            context: "row count",
            needed: 4,
            remaining: 2,
        };
        assert_eq!(
            err.to_string(),
            "truncated input while reading row count: need 4 byte(s), 2 left"
        );

        let err = WireError::InvalidValueLength {
            data_type: DataType::Int32,
            length: 3,
        };
        assert_eq!(err.to_string(), "invalid length 3 for int32 value");

        let err = WireError::TrailingBytes { remaining: 1 };
        assert_eq!(
            err.to_string(),
            "extra data at the end of row block: 1 byte(s)"
        );
    }
}
