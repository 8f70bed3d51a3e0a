//! QString payload → String.
//!
//! Байты интерпретируются как UTF-16LE code units. Нечётный хвостовой байт и
//! непарные суррогаты: в lossy-режиме заменяются на U+FFFD, в strict — ошибка.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{DecodeError, DecodeResult};

/// Decode UTF-16LE. `offset` is only used for error reporting.
pub fn utf16_to_string(bytes: &[u8], strict: bool, offset: usize) -> DecodeResult<String> {
    let units = bytes.chunks_exact(2).map(LittleEndian::read_u16);
    let mut out = String::with_capacity(bytes.len() / 2);

    // Позиция в code units, для смещения в сообщении об ошибке.
    let mut unit = 0usize;
    for r in char::decode_utf16(units) {
        match r {
            Ok(ch) => {
                out.push(ch);
                unit += ch.len_utf16();
            }
            Err(_) if strict => {
                return Err(DecodeError::InvalidText {
                    offset: offset + unit * 2,
                });
            }
            Err(_) => {
                out.push(char::REPLACEMENT_CHARACTER);
                unit += 1;
            }
        }
    }

    if bytes.len() % 2 == 1 {
        if strict {
            return Err(DecodeError::InvalidText {
                offset: offset + bytes.len() - 1,
            });
        }
        out.push(char::REPLACEMENT_CHARACTER);
    }
    Ok(out)
}
