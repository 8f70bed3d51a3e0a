//! error — типизированные ошибки декодера кэша.
//!
//! Все внутренние компоненты возвращают `Result<T, DecodeError>` и пробрасывают
//! ошибку вызывающему без изменений. Контекст ("error decoding cache record")
//! добавляет только диспетчер верхнего уровня через anyhow, поэтому исходный вид
//! ошибки остаётся доступен через `anyhow::Error::downcast_ref::<DecodeError>()`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer bytes remain than the field requires.
    #[error("truncated at offset {offset}: need {needed} byte(s), {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Negative element count for a list shape (only byte/text fields allow it).
    #[error("negative list length {len} at offset {offset}")]
    NegativeLength { offset: usize, len: i32 },

    /// List element count above `DecodeConfig::max_list_len`.
    #[error("list length {len} at offset {offset} exceeds limit {max}")]
    ListTooLong { offset: usize, len: usize, max: usize },

    /// Malformed UTF-16 in strict mode.
    #[error("invalid UTF-16 text at offset {offset}")]
    InvalidText { offset: usize },

    /// Settings block tag absent from the Block-ID registry.
    #[error("blockID not found: 0x{0:x}")]
    UnknownBlockIdentifier(u32),

    /// Recognized encoding that the decoder does not model.
    #[error("not implemented: {0}")]
    Unsupported(&'static str),

    /// Typed view does not match the static schema it was built from.
    #[error("schema mismatch: field `{0}`")]
    SchemaMismatch(&'static str),
}

impl DecodeError {
    /// True for the end-of-buffer family (used by list loops).
    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeError::Truncated { .. })
    }
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
