//! registry — статические таблицы формата.
//!
//! - key_types: тип ключа локального хранилища (lsk*) → раскладка записи;
//! - settings:  идентификатор блока настроек (dbi*) → SettingId и его схема.
//!
//! Таблицы только для чтения, поэтому безопасно используются из нескольких потоков.

pub mod key_types;
pub mod settings;

pub use key_types::{
    lookup, FixedKind, KeyType, RecordLayout, FILE_KEY_ENTRY, LOCATION, MEDIA_KEY,
    REPORT_SPAM_STATUS,
};
pub use settings::SettingId;
