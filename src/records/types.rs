//! Typed views over decoded record values.

use serde::Serialize;

use crate::error::{DecodeError, DecodeResult};
use crate::qt::Timestamp;
use crate::schema::Value;

fn req<'v, T>(
    rec: &'v Value,
    name: &'static str,
    pick: impl FnOnce(&'v Value) -> Option<T>,
) -> DecodeResult<T> {
    rec.get(name).and_then(pick).ok_or(DecodeError::SchemaMismatch(name))
}

/// Entry of the image / sticker image / audio caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileKeyEntry {
    pub first: u64,
    pub second: u64,
    pub size: i32,
}

impl FileKeyEntry {
    pub fn from_value(v: &Value) -> DecodeResult<Self> {
        Ok(Self {
            first: req(v, "first", Value::as_u64)?,
            second: req(v, "second", Value::as_u64)?,
            size: req(v, "size", Value::as_i32)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSpamStatus {
    pub peer: u64,
    pub status: i32,
}

impl ReportSpamStatus {
    pub fn from_value(v: &Value) -> DecodeResult<Self> {
        Ok(Self {
            peer: req(v, "peer", Value::as_u64)?,
            status: req(v, "status", Value::as_i32)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MediaKey {
    pub location_type: u32,
    pub dc: i32,
    pub id: u64,
}

impl MediaKey {
    pub fn is_zero(&self) -> bool {
        self.location_type == 0 && self.dc == 0 && self.id == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub media_key: MediaKey,
    pub filename: String,
    pub bookmark: Vec<u8>,
    pub modified: Timestamp,
    pub size: u32,
}

impl Location {
    pub fn from_value(v: &Value) -> DecodeResult<Self> {
        let key = req(v, "media_key", Some)?;
        Ok(Self {
            media_key: MediaKey {
                location_type: req(key, "location_type", Value::as_u32)?,
                dc: req(key, "dc", Value::as_i32)?,
                id: req(key, "id", Value::as_u64)?,
            },
            filename: req(v, "filename", Value::as_text)?.to_owned(),
            bookmark: req(v, "bookmark", Value::as_bytes)?.to_vec(),
            modified: req(v, "modified", Value::as_timestamp)?,
            size: req(v, "size", Value::as_u32)?,
        })
    }

    /// All-zero / empty entry that ends a location list.
    pub fn is_terminator(&self) -> bool {
        self.media_key.is_zero() && self.filename.is_empty() && self.size == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationList {
    /// Declared length; framing only, not an element count.
    pub full_len: u32,
    pub locations: Vec<Location>,
}
