//! Рекурсивный декодер поля по схеме.
//!
//! Ошибки чтения пробрасываются как есть; путь к полю здесь не отслеживается —
//! контекст добавляет вызывающий код. Значения по умолчанию при ошибке не подставляются.

use crate::config::DecodeConfig;
use crate::cursor::{ByteCursor, LEN_PREFIX_SIZE};
use crate::error::{DecodeError, DecodeResult};
use crate::qt::{qdatetime, utf16_to_string};

use super::{Field, Prim, Schema, Value};

pub fn decode_field(
    cur: &mut ByteCursor<'_>,
    schema: &Schema,
    cfg: &DecodeConfig,
) -> DecodeResult<Value> {
    match schema {
        Schema::Prim(p) => decode_prim(cur, *p),

        Schema::Bytes => Ok(Value::Bytes(cur.read_length_prefixed()?.to_vec())),

        Schema::Text => {
            let offset = cur.position() + LEN_PREFIX_SIZE;
            let raw = cur.read_length_prefixed()?;
            Ok(Value::Text(utf16_to_string(raw, cfg.strict_utf16, offset)?))
        }

        Schema::Timestamp => {
            let date = cur.read_u64()?;
            let time = cur.read_u32()?;
            let _timespec = cur.read_u8()?;
            Ok(Value::Timestamp(qdatetime(date, time)))
        }

        Schema::List(elem) => {
            let offset = cur.position();
            let len = cur.read_i32()?;
            if len < 0 {
                return Err(DecodeError::NegativeLength { offset, len });
            }
            let len = len as usize;
            if len > cfg.max_list_len {
                return Err(DecodeError::ListTooLong {
                    offset,
                    len,
                    max: cfg.max_list_len,
                });
            }
            // Каждый элемент занимает хотя бы байт — больше remaining не резервируем.
            let mut items = Vec::with_capacity(len.min(cur.remaining()));
            for _ in 0..len {
                items.push(decode_field(cur, elem, cfg)?);
            }
            Ok(Value::List(items))
        }

        Schema::Record(defs) => {
            let mut fields = Vec::with_capacity(defs.len());
            for def in defs.iter() {
                let value = decode_field(cur, &def.schema, cfg)?;
                fields.push(Field {
                    name: def.name,
                    value,
                });
            }
            Ok(Value::Record(fields))
        }
    }
}

fn decode_prim(cur: &mut ByteCursor<'_>, p: Prim) -> DecodeResult<Value> {
    Ok(match p {
        Prim::U8 => Value::U8(cur.read_u8()?),
        Prim::U16 => Value::U16(cur.read_u16()?),
        Prim::I32 => Value::I32(cur.read_i32()?),
        Prim::U32 => Value::U32(cur.read_u32()?),
        Prim::I64 => Value::I64(cur.read_i64()?),
        Prim::U64 => Value::U64(cur.read_u64()?),
        Prim::F64 => Value::F64(cur.read_f64()?),
    })
}
