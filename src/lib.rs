//! tdata-cache — декодер расшифрованных записей кэша Telegram Desktop (tdata).
//!
//! Формат: производный от QDataStream, LE, поля с префиксом длины, записи с
//! фиксированной схемой, списки с терминатором и блоки настроек с тегами.
//! Расшифровка контейнера выполняется выше по стеку и здесь не рассматривается.

// Базовые модули
pub mod config;
pub mod cursor;
pub mod error;

// Адаптеры Qt (QDateTime, QString)
pub mod qt;

// Схемы и рекурсивный декодер
pub mod schema;

// Статические таблицы: lsk* и dbi*
pub mod registry;

// Настройки пользователя (block-tagged) и диспетчер записей
pub mod settings;
pub mod records;

pub mod cli;

// Удобные реэкспорты
pub use config::DecodeConfig;
pub use cursor::ByteCursor;
pub use error::{DecodeError, DecodeResult};
pub use records::{
    decode_cache, decode_cache_with, decode_record, CacheRecord, FileKeyEntry, Location,
    LocationList, MediaKey, ReportSpamStatus,
};
pub use registry::{KeyType, SettingId};
pub use schema::{decode_field, Schema, Value};
pub use settings::{UserSetting, UserSettingsList};
