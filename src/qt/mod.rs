//! qt — адаптеры для типов Qt, встречающихся в потоке: QDateTime и QString (UTF-16).
//!
//! Оба адаптера чистые и детерминированные; парсер вызывает их уже после того,
//! как сырые поля прочитаны курсором.

pub mod datetime;
pub mod text;

pub use datetime::{qdatetime, Timestamp, JULIAN_DAY_UNIX_EPOCH};
pub use text::utf16_to_string;
