//! schema — декларативное описание полей и рекурсивный декодер по нему.
//!
//! Схема записи задаётся один раз как статические данные (`&'static [FieldDef]`),
//! а единственная функция `decode_field` интерпретирует узлы схемы:
//!
//!   Prim      — фиксированная ширина, LE
//!   Bytes     — [i32 len][bytes], len < 0 ⇒ пусто
//!   Text      — [i32 len][utf16le], len < 0 ⇒ ""
//!   Timestamp — [u64 date][u32 time][u8 reserved]
//!   List      — [i32 count] + count элементов (count < 0 недопустим)
//!   Record    — поля по порядку объявления

pub mod decode;
pub mod value;

use std::fmt;

pub use decode::decode_field;
pub use value::{Field, Value};

/// Fixed-width scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prim {
    U8,
    U16,
    I32,
    U32,
    I64,
    U64,
    F64,
}

impl Prim {
    pub const fn name(self) -> &'static str {
        match self {
            Prim::U8 => "u8",
            Prim::U16 => "u16",
            Prim::I32 => "i32",
            Prim::U32 => "u32",
            Prim::I64 => "i64",
            Prim::U64 => "u64",
            Prim::F64 => "f64",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Prim(Prim),
    Bytes,
    Text,
    Timestamp,
    List(&'static Schema),
    Record(&'static [FieldDef]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub schema: Schema,
}

impl FieldDef {
    pub const fn new(name: &'static str, schema: Schema) -> Self {
        Self { name, schema }
    }
}

// Короткие конструкторы для статических таблиц схем.
pub const U8: Schema = Schema::Prim(Prim::U8);
pub const U16: Schema = Schema::Prim(Prim::U16);
pub const I32: Schema = Schema::Prim(Prim::I32);
pub const U32: Schema = Schema::Prim(Prim::U32);
pub const I64: Schema = Schema::Prim(Prim::I64);
pub const U64: Schema = Schema::Prim(Prim::U64);
pub const F64: Schema = Schema::Prim(Prim::F64);

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Prim(p) => f.write_str(p.name()),
            Schema::Bytes => f.write_str("bytes"),
            Schema::Text => f.write_str("text"),
            Schema::Timestamp => f.write_str("timestamp"),
            Schema::List(elem) => write!(f, "list<{elem}>"),
            Schema::Record(fields) => {
                f.write_str("{")?;
                for (i, def) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", def.name, def.schema)?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PINNED: Schema =
        Schema::List(&Schema::Record(&[FieldDef::new("peer", U64), FieldDef::new("msg", I32)]));

    #[test]
    fn display_is_readable() {
        assert_eq!(PINNED.to_string(), "list<{peer: u64, msg: i32}>");
        assert_eq!(Schema::Timestamp.to_string(), "timestamp");
    }
}
