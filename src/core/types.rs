/// Column types carried by the Scuttle client wire protocol.
///
/// These types define the kind of data a result-set column can hold and how
/// its values are encoded on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataType {
    /// 32-bit signed integer.
    ///
    /// Encoded as 4 bytes in big-endian format.
    Int32,

    /// 64-bit signed integer.
    ///
    /// Encoded as 8 bytes in big-endian format.
    Int64,

    /// 64-bit floating point number.
    ///
    /// Encoded as 8 bytes in IEEE 754 big-endian format.
    Float64,

    /// Boolean true/false value.
    ///
    /// Encoded as a single byte, zero meaning false.
    Bool,

    /// Variable-length UTF-8 text with no size limit.
    Text,

    /// A point in time, as milliseconds since the Unix epoch.
    ///
    /// Encoded like [`DataType::Int64`].
    Timestamp,
}

impl DataType {
    /// The exact payload width for fixed-size types, or `None` for
    /// variable-length ones.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            DataType::Int32 => Some(4),
            DataType::Int64 | DataType::Float64 | DataType::Timestamp => Some(8),
            DataType::Bool => Some(1),
            DataType::Text => None,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Int32 => write!(f, "int32"),
            DataType::Int64 => write!(f, "int64"),
            DataType::Float64 => write!(f, "float64"),
            DataType::Bool => write!(f, "bool"),
            DataType::Text => write!(f, "text"),
            DataType::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// A value held by one column of a result-set row.
///
/// Values are strongly typed and correspond to [`DataType`] definitions.
/// Any column may carry [`Value::Null`] regardless of its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 32-bit signed integer value.
    Int32(i32),

    /// A 64-bit signed integer value.
    Int64(i64),

    /// A 64-bit floating point number.
    Float64(f64),

    /// A boolean value (true/false).
    Bool(bool),

    /// A UTF-8 text string.
    Text(String),

    /// Milliseconds since the Unix epoch.
    Timestamp(i64),

    /// Represents a NULL value (absence of data).
    Null,
}

impl Value {
    /// The wire-protocol name of this value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int32(_) => "int32",
            Value::Int64(_) => "int64",
            Value::Float64(_) => "float64",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::Timestamp(_) => "timestamp",
            Value::Null => "null",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int32(i) => write!(f, "{}", i),
            Value::Int64(i) => write!(f, "{}", i),
            Value::Float64(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
            Value::Timestamp(ts) => write!(f, "{}", ts),
            Value::Null => write!(f, "NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sizes_match_wire_widths() {
        assert_eq!(DataType::Int32.fixed_size(), Some(4));
        assert_eq!(DataType::Int64.fixed_size(), Some(8));
        assert_eq!(DataType::Float64.fixed_size(), Some(8));
        assert_eq!(DataType::Timestamp.fixed_size(), Some(8));
        assert_eq!(DataType::Bool.fixed_size(), Some(1));
        assert_eq!(DataType::Text.fixed_size(), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int32(42).to_string(), "42");
        assert_eq!(Value::Text("hello".to_string()).to_string(), "hello");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "NULL");
    }

    #[test]
    fn test_type_names_match_data_type_display() {
        assert_eq!(Value::Int32(1).type_name(), DataType::Int32.to_string());
        assert_eq!(Value::Int64(1).type_name(), DataType::Int64.to_string());
        assert_eq!(
            Value::Timestamp(0).type_name(),
            DataType::Timestamp.to_string()
        );
        assert_eq!(Value::Null.type_name(), "null");
    }
}
