//! cursor — прямой (forward-only) читатель примитивов поверх неизменяемого буфера.
//!
//! Формат (LE везде):
//! - фиксированные целые: u8/u16/u32/i32/u64/i64/f64;
//! - поле с префиксом длины: [i32 len][len bytes]; len < 0 — явно пустое поле,
//!   курсор сдвигается только на 4 байта префикса.
//!
//! Чтение за концом буфера — всегда `DecodeError::Truncated`, без дозаполнения нулями.
//! При ошибке позиция не меняется.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{DecodeError, DecodeResult};

/// Byte order of every fixed-width field in the format.
pub type Endian = LittleEndian;

/// Size of the signed length prefix in front of byte/text fields and lists.
pub const LEN_PREFIX_SIZE: usize = 4;

#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read exactly `width` bytes.
    pub fn read_fixed(&mut self, width: usize) -> DecodeResult<&'a [u8]> {
        let available = self.remaining();
        if width > available {
            return Err(DecodeError::Truncated {
                offset: self.pos,
                needed: width,
                available,
            });
        }
        let start = self.pos;
        self.pos += width;
        Ok(&self.buf[start..self.pos])
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.read_fixed(1)?[0])
    }

    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        self.read_fixed(2).map(Endian::read_u16)
    }

    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        self.read_fixed(4).map(Endian::read_u32)
    }

    pub fn read_i32(&mut self) -> DecodeResult<i32> {
        self.read_fixed(4).map(Endian::read_i32)
    }

    pub fn read_u64(&mut self) -> DecodeResult<u64> {
        self.read_fixed(8).map(Endian::read_u64)
    }

    pub fn read_i64(&mut self) -> DecodeResult<i64> {
        self.read_fixed(8).map(Endian::read_i64)
    }

    pub fn read_f64(&mut self) -> DecodeResult<f64> {
        self.read_fixed(8).map(Endian::read_f64)
    }

    /// Read a `[i32 len][bytes]` field.
    ///
    /// A negative prefix yields an empty slice and consumes only the prefix.
    /// If the payload is short, the cursor stays in front of the prefix.
    pub fn read_length_prefixed(&mut self) -> DecodeResult<&'a [u8]> {
        // Читаем на копии: позиция меняется только при успехе.
        let mut probe = self.clone();
        let len = probe.read_i32()?;
        let bytes: &'a [u8] = if len < 0 {
            &[]
        } else {
            probe.read_fixed(len as usize)?
        };
        self.pos = probe.pos;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_reads_are_little_endian() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0xFF];
        let mut c = ByteCursor::new(&buf);
        assert_eq!(c.read_u16().unwrap(), 0x0201);
        assert_eq!(c.read_u16().unwrap(), 0x0403);
        assert_eq!(c.read_u8().unwrap(), 0xFF);
        assert!(c.is_empty());
    }

    #[test]
    fn short_read_is_truncated_and_keeps_position() {
        let buf = [0u8; 3];
        let mut c = ByteCursor::new(&buf);
        let err = c.read_u32().unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                offset: 0,
                needed: 4,
                available: 3
            }
        );
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn negative_prefix_is_empty_field() {
        // -1, затем мусор, который не должен читаться
        let buf = [0xFF, 0xFF, 0xFF, 0xFF, 0xAA, 0xBB];
        let mut c = ByteCursor::new(&buf);
        assert!(c.read_length_prefixed().unwrap().is_empty());
        assert_eq!(c.position(), LEN_PREFIX_SIZE);
    }

    #[test]
    fn short_payload_leaves_cursor_before_prefix() {
        let buf = [0x05, 0x00, 0x00, 0x00, b'a', b'b'];
        let mut c = ByteCursor::new(&buf);
        assert!(c.read_length_prefixed().unwrap_err().is_truncated());
        assert_eq!(c.position(), 0);
    }
}
