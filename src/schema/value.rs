//! Decoded value graph. Owns everything it holds; nothing borrows the input buffer.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::qt::Timestamp;
use crate::settings::connection::ConnectionDescriptor;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F64(f64),
    Bytes(Vec<u8>),
    Text(String),
    Timestamp(Timestamp),
    List(Vec<Value>),
    Record(Vec<Field>),
    /// `None` — tag recognised, encoding not interpreted (pass-through).
    Connection(Option<ConnectionDescriptor>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: Value,
}

impl Value {
    /// Field of a record by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.iter().find(|f| f.name == name).map(|f| &f.value),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::I32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::U32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

// Записи сериализуются как JSON-объекты с сохранением порядка полей.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::U8(v) => s.serialize_u8(*v),
            Value::U16(v) => s.serialize_u16(*v),
            Value::I32(v) => s.serialize_i32(*v),
            Value::U32(v) => s.serialize_u32(*v),
            Value::I64(v) => s.serialize_i64(*v),
            Value::U64(v) => s.serialize_u64(*v),
            Value::F64(v) => s.serialize_f64(*v),
            Value::Bytes(b) => s.serialize_bytes(b),
            Value::Text(t) => s.serialize_str(t),
            Value::Timestamp(t) => t.serialize(s),
            Value::List(items) => s.collect_seq(items),
            Value::Record(fields) => {
                let mut m = s.serialize_map(Some(fields.len()))?;
                for f in fields {
                    m.serialize_entry(f.name, &f.value)?;
                }
                m.end()
            }
            Value::Connection(c) => c.serialize(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_in_field_order() {
        let v = Value::Record(vec![
            Field { name: "z", value: Value::I32(1) },
            Field { name: "a", value: Value::Text("x".into()) },
            Field { name: "list", value: Value::List(vec![Value::U64(7)]) },
        ]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"z":1,"a":"x","list":[7]}"#);
        assert_eq!(v.get("a").and_then(Value::as_text), Some("x"));
        assert!(v.get("missing").is_none());
    }
}
