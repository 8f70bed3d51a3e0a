//! Key-Type registry and the record schemas of the fixed/location kinds.

use serde::Serialize;

use crate::schema::{FieldDef, Schema, I32, U32, U64};

/// `[u64 first][u64 second][i32 size]` — images, sticker images, audios.
pub const FILE_KEY_ENTRY: Schema = Schema::Record(&[
    FieldDef::new("first", U64),
    FieldDef::new("second", U64),
    FieldDef::new("size", I32),
]);

/// `[u64 peer][i32 status]`
pub const REPORT_SPAM_STATUS: Schema = Schema::Record(&[
    FieldDef::new("peer", U64),
    FieldDef::new("status", I32),
]);

pub const MEDIA_KEY: Schema = Schema::Record(&[
    FieldDef::new("location_type", U32),
    FieldDef::new("dc", I32),
    FieldDef::new("id", U64),
]);

pub const LOCATION: Schema = Schema::Record(&[
    FieldDef::new("media_key", MEDIA_KEY),
    FieldDef::new("filename", Schema::Text),
    FieldDef::new("bookmark", Schema::Bytes),
    FieldDef::new("modified", Schema::Timestamp),
    FieldDef::new("size", U32),
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyType {
    Images,
    Locations,
    StickerImages,
    Audios,
    UserSettings,
    ReportSpamStatuses,
}

/// Record kinds stored as a plain run of fixed-schema records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedKind {
    Images,
    StickerImages,
    Audios,
    ReportSpamStatuses,
}

/// How a buffer of a given key type is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLayout {
    /// Records back to back until the buffer ends.
    FixedList(FixedKind, &'static Schema),
    /// `[u32 full_len]` then records up to an all-zero terminator.
    LocationList(&'static Schema),
    /// `[u32 full_len]` then `(u32 block_id, value)` pairs.
    UserSettings,
}

impl KeyType {
    pub const ALL: &'static [KeyType] = &[
        KeyType::Images,
        KeyType::Locations,
        KeyType::StickerImages,
        KeyType::Audios,
        KeyType::UserSettings,
        KeyType::ReportSpamStatuses,
    ];

    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0x03 => Some(KeyType::Images),
            0x04 => Some(KeyType::Locations),
            0x05 => Some(KeyType::StickerImages),
            0x06 => Some(KeyType::Audios),
            0x09 => Some(KeyType::UserSettings),
            0x0d => Some(KeyType::ReportSpamStatuses),
            _ => None,
        }
    }

    pub const fn raw(self) -> u32 {
        match self {
            KeyType::Images => 0x03,
            KeyType::Locations => 0x04,
            KeyType::StickerImages => 0x05,
            KeyType::Audios => 0x06,
            KeyType::UserSettings => 0x09,
            KeyType::ReportSpamStatuses => 0x0d,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            KeyType::Images => "lskImages",
            KeyType::Locations => "lskLocations",
            KeyType::StickerImages => "lskStickerImages",
            KeyType::Audios => "lskAudios",
            KeyType::UserSettings => "lskUserSettings",
            KeyType::ReportSpamStatuses => "lskReportSpamStatuses",
        }
    }

    pub fn layout(self) -> RecordLayout {
        match self {
            KeyType::Images => RecordLayout::FixedList(FixedKind::Images, &FILE_KEY_ENTRY),
            KeyType::StickerImages => {
                RecordLayout::FixedList(FixedKind::StickerImages, &FILE_KEY_ENTRY)
            }
            KeyType::Audios => RecordLayout::FixedList(FixedKind::Audios, &FILE_KEY_ENTRY),
            KeyType::ReportSpamStatuses => {
                RecordLayout::FixedList(FixedKind::ReportSpamStatuses, &REPORT_SPAM_STATUS)
            }
            KeyType::Locations => RecordLayout::LocationList(&LOCATION),
            KeyType::UserSettings => RecordLayout::UserSettings,
        }
    }
}

/// Raw key type → (KeyType, layout). `None` for key types without a schema.
pub fn lookup(raw: u32) -> Option<(KeyType, RecordLayout)> {
    KeyType::from_raw(raw).map(|kt| (kt, kt.layout()))
}
