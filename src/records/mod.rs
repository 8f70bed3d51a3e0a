//! records — диспетчер записей кэша по типу ключа.
//!
//! - FixedList:    decode_field до конца буфера;
//! - LocationList: см. location.rs;
//! - UserSettings: см. settings/.
//!
//! Неизвестный тип ключа — не ошибка: возвращается `CacheRecord::Unknown`.
//! (В отличие от неизвестного block_id в настройках, который прерывает разбор.)

pub mod location;
pub mod types;

use anyhow::Context;
use log::debug;
use serde::Serialize;

use crate::config::DecodeConfig;
use crate::cursor::ByteCursor;
use crate::error::DecodeResult;
use crate::registry::{lookup, FixedKind, RecordLayout};
use crate::schema::{decode_field, Schema, Value};
use crate::settings::{decode_user_settings, UserSettingsList};

pub use location::decode_locations;
pub use types::{FileKeyEntry, Location, LocationList, MediaKey, ReportSpamStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data")]
pub enum CacheRecord {
    Images(Vec<FileKeyEntry>),
    StickerImages(Vec<FileKeyEntry>),
    Audios(Vec<FileKeyEntry>),
    ReportSpamStatuses(Vec<ReportSpamStatus>),
    Locations(LocationList),
    UserSettings(UserSettingsList),
    /// Key type without a registered schema; nothing was decoded.
    Unknown { key_type: u32 },
}

impl CacheRecord {
    pub fn is_unknown(&self) -> bool {
        matches!(self, CacheRecord::Unknown { .. })
    }
}

/// Decode with default configuration.
pub fn decode_cache(data: &[u8], key_type: u32) -> anyhow::Result<CacheRecord> {
    decode_cache_with(&DecodeConfig::default(), data, key_type)
}

/// Decode one buffer. The underlying `DecodeError` stays reachable via
/// `downcast_ref` under the added context.
pub fn decode_cache_with(
    cfg: &DecodeConfig,
    data: &[u8],
    key_type: u32,
) -> anyhow::Result<CacheRecord> {
    decode_record(cfg, data, key_type).context("error decoding cache record")
}

pub fn decode_record(cfg: &DecodeConfig, data: &[u8], key_type: u32) -> DecodeResult<CacheRecord> {
    let Some((kt, layout)) = lookup(key_type) else {
        debug!(
            "cache: key type 0x{:x} has no schema, {} byte(s) skipped",
            key_type,
            data.len()
        );
        return Ok(CacheRecord::Unknown { key_type });
    };
    debug!("cache: decoding {} ({} bytes)", kt.name(), data.len());

    let rec = match layout {
        RecordLayout::FixedList(kind, schema) => {
            let entries = || decode_fixed(data, schema, cfg, FileKeyEntry::from_value);
            match kind {
                FixedKind::Images => CacheRecord::Images(entries()?),
                FixedKind::StickerImages => CacheRecord::StickerImages(entries()?),
                FixedKind::Audios => CacheRecord::Audios(entries()?),
                FixedKind::ReportSpamStatuses => CacheRecord::ReportSpamStatuses(decode_fixed(
                    data,
                    schema,
                    cfg,
                    ReportSpamStatus::from_value,
                )?),
            }
        }
        RecordLayout::LocationList(schema) => {
            CacheRecord::Locations(decode_locations(data, schema, cfg)?)
        }
        RecordLayout::UserSettings => CacheRecord::UserSettings(decode_user_settings(data, cfg)?),
    };
    Ok(rec)
}

/// Records back to back; clean end at a record boundary is success.
fn decode_fixed<T>(
    data: &[u8],
    schema: &Schema,
    cfg: &DecodeConfig,
    convert: fn(&Value) -> DecodeResult<T>,
) -> DecodeResult<Vec<T>> {
    let mut cur = ByteCursor::new(data);
    let mut out = Vec::new();
    while !cur.is_empty() {
        let value = decode_field(&mut cur, schema, cfg)?;
        out.push(convert(&value)?);
    }
    debug!("cache: {} fixed record(s)", out.len());
    Ok(out)
}
