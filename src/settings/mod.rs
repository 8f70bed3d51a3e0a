//! settings — разбор записи пользовательских настроек (lskUserSettings).
//!
//! Формат:
//!   [u32 full_len] затем full_len байт последовательности
//!   [u32 block_id][value]...
//! Цикл идёт до конца среза (не по счётчику). Байты после full_len не читаются.
//!
//! Неизвестный block_id прерывает весь разбор (без частичного результата).
//! Смещения в ошибках считаются от начала среза (после 4-байтового full_len).

pub mod connection;

use log::debug;
use serde::Serialize;

use crate::config::DecodeConfig;
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, DecodeResult};
use crate::registry::SettingId;
use crate::schema::{decode_field, Value};

pub use connection::{parse_connection_type, ConnectionDescriptor, ConnectionKind, ProxyMode};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSetting {
    pub id: SettingId,
    pub value: Value,
}

impl UserSetting {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSettingsList {
    pub full_len: u32,
    /// On-disk order.
    pub entries: Vec<UserSetting>,
}

impl UserSettingsList {
    /// First entry for `id`, if present.
    pub fn get(&self, id: SettingId) -> Option<&Value> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.value)
    }
}

pub fn decode_user_settings(data: &[u8], cfg: &DecodeConfig) -> DecodeResult<UserSettingsList> {
    let mut head = ByteCursor::new(data);
    let full_len = head.read_u32()?;
    let body = head.read_fixed(full_len as usize)?;

    let mut cur = ByteCursor::new(body);
    let mut entries = Vec::new();
    while !cur.is_empty() {
        let block_id = cur.read_u32()?;
        let id = SettingId::from_block_id(block_id)
            .ok_or(DecodeError::UnknownBlockIdentifier(block_id))?;

        let at = cur.position();
        let value = decode_setting(&mut cur, id, cfg).map_err(|e| {
            debug!("settings: {} (0x{:x}) at off={} failed: {}", id.name(), block_id, at, e);
            e
        })?;
        debug!("settings: {} decoded, off={}", id.name(), cur.position());
        entries.push(UserSetting { id, value });
    }

    Ok(UserSettingsList { full_len, entries })
}

fn decode_setting(cur: &mut ByteCursor<'_>, id: SettingId, cfg: &DecodeConfig) -> DecodeResult<Value> {
    match id.schema() {
        Some(schema) => decode_field(cur, schema, cfg),
        // Единственный блок без схемы — тип соединения
        None => parse_connection_type(cur).map(Value::Connection),
    }
}
