use bytes::{Buf, BufMut, BytesMut};

use crate::{
    common::error::WireError,
    core::types::{DataType, Value},
    wire::{Dialect, ensure_remaining},
};

/// Width of the length prefix carried by every encoded value, in bytes.
pub(crate) const VALUE_LEN_SIZE: usize = 4;

/// Length marker encoding a NULL value. NULLs carry no payload.
const NULL_LENGTH: i32 = -1;

impl Value {
    /// Appends this value's wire encoding for the given column type.
    ///
    /// Every value is framed as a big-endian `i32` length followed by that
    /// many payload bytes. NULL is framed as length `-1` with no payload.
    /// The value must agree with `data_type`, otherwise nothing is written
    /// and a type mismatch is reported.
    pub fn serialize(
        &self,
        data_type: DataType,
        dialect: Dialect,
        buf: &mut BytesMut,
    ) -> Result<(), WireError> {
        dialect.ensure_supported()?;

        match (data_type, self) {
            (_, Value::Null) => buf.put_i32(NULL_LENGTH),
            (DataType::Int32, Value::Int32(number)) => {
                buf.put_i32(4);
                buf.put_i32(*number);
            }
            (DataType::Int64, Value::Int64(number)) => {
                buf.put_i32(8);
                buf.put_i64(*number);
            }
            (DataType::Timestamp, Value::Timestamp(millis)) => {
                buf.put_i32(8);
                buf.put_i64(*millis);
            }
            (DataType::Float64, Value::Float64(number)) => {
                buf.put_i32(8);
                buf.put_f64(*number);
            }
            (DataType::Bool, Value::Bool(flag)) => {
                buf.put_i32(1);
                buf.put_u8(if *flag { 1 } else { 0 });
            }
            (DataType::Text, Value::Text(text)) => {
                let text_bytes = text.as_bytes();
                let length = i32::try_from(text_bytes.len()).map_err(|_| {
                    WireError::OversizeValue {
                        size: text_bytes.len(),
                    }
                })?;
                buf.put_i32(length);
                buf.put_slice(text_bytes);
            }
            _ => {
                return Err(WireError::TypeMismatch {
                    data_type,
                    value: self.type_name(),
                });
            }
        }

        Ok(())
    }

    /// Reads one value of the given column type from the front of `data`.
    ///
    /// Advances `data` past exactly the bytes the value occupies, so
    /// successive calls walk a row left to right. Fixed-size types must
    /// declare exactly their wire width; any other length is rejected
    /// rather than skipped.
    pub fn deserialize(
        data_type: DataType,
        dialect: Dialect,
        data: &mut &[u8],
    ) -> Result<Value, WireError> {
        dialect.ensure_supported()?;

        ensure_remaining(data, VALUE_LEN_SIZE, "value length")?;
        let length = data.get_i32();
        if length == NULL_LENGTH {
            return Ok(Value::Null);
        }
        if length < 0 {
            return Err(WireError::InvalidValueLength { data_type, length });
        }

        let payload_len = length as usize;
        if let Some(width) = data_type.fixed_size() {
            if payload_len != width {
                return Err(WireError::InvalidValueLength { data_type, length });
            }
        }
        ensure_remaining(data, payload_len, "value payload")?;

        let value = match data_type {
            DataType::Int32 => Value::Int32(data.get_i32()),
            DataType::Int64 => Value::Int64(data.get_i64()),
            DataType::Timestamp => Value::Timestamp(data.get_i64()),
            DataType::Float64 => Value::Float64(data.get_f64()),
            DataType::Bool => Value::Bool(data.get_u8() != 0),
            DataType::Text => {
                let text = std::str::from_utf8(&data[..payload_len])?.to_owned();
                data.advance(payload_len);
                Value::Text(text)
            }
        };

        Ok(value)
    }
}
