//! Client wire protocol: dialect selection and the byte-level value codec.
//!
//! # Wire format
//!
//! An encoded row block is framed as:
//!
//! ```text
//! row_block := count:int32 (big-endian)
//!              row * count
//! row       := value * column_count        (schema column order)
//! value     := length:int32 (big-endian)
//!              payload * length
//! ```
//!
//! A value length of `-1` encodes NULL and carries no payload. The count
//! field is always exactly 4 bytes no matter how many rows follow, which is
//! what lets [`append_rows_data`](crate::RowBlock::append_rows_data) merge
//! two encoded pages by patching the count in place.

use strum::{Display, EnumString};

use crate::common::error::WireError;

pub mod value;

/// The client protocol dialect an encoding targets.
///
/// The dialect selects the byte-level value encoding. Only
/// [`Dialect::Native`] is implemented today; every codec entry point
/// rejects the others up front so a page is never written in a mix of
/// encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Dialect {
    /// The native Scuttle client protocol.
    Native,

    /// Reserved for the PostgreSQL-compatible listener.
    Postgres,
}

impl Dialect {
    pub(crate) fn ensure_supported(self) -> Result<(), WireError> {
        match self {
            Dialect::Native => Ok(()),
            other => Err(WireError::UnsupportedDialect(other)),
        }
    }
}

/// Checks that `data` still holds at least `needed` bytes.
pub(crate) fn ensure_remaining(
    data: &[u8],
    needed: usize,
    context: &'static str,
) -> Result<(), WireError> {
    if data.len() < needed {
        return Err(WireError::Truncated {
            context,
            needed,
            remaining: data.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_dialect_parses_case_insensitive() {
        assert_eq!(
            Dialect::from_str("native").expect("Should parse dialect"),
            Dialect::Native
        );
        assert_eq!(
            Dialect::from_str("NATIVE").expect("Should parse dialect"),
            Dialect::Native
        );
        assert_eq!(
            Dialect::from_str("Postgres").expect("Should parse dialect"),
            Dialect::Postgres
        );
        assert!(Dialect::from_str("oracle").is_err());
    }

    #[test]
    fn test_only_native_dialect_is_supported() {
        assert!(Dialect::Native.ensure_supported().is_ok());
        assert!(matches!(
            Dialect::Postgres.ensure_supported(),
            Err(WireError::UnsupportedDialect(Dialect::Postgres))
        ));
    }

    #[test]
    fn test_ensure_remaining_reports_shortfall() {
        assert!(ensure_remaining(&[0u8; 4], 4, "row count").is_ok());
        let err = ensure_remaining(&[0u8; 2], 4, "row count")
            .expect_err("Should reject short input");
        assert!(matches!(
            err,
            WireError::Truncated {
                needed: 4,
                remaining: 2,
                ..
            }
        ));
    }
}
