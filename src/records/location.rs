//! lskLocations: [u32 full_len] затем записи Location до терминатора.
//!
//! Терминатор — запись с нулевым media key, пустым именем файла и size == 0;
//! в результат не попадает. Конец буфера ровно на границе записи — тоже успешное
//! завершение. Обрыв посреди записи — ошибка Truncated.

use log::debug;

use crate::config::DecodeConfig;
use crate::cursor::ByteCursor;
use crate::error::DecodeResult;
use crate::schema::{decode_field, Schema};

use super::types::{Location, LocationList};

pub fn decode_locations(data: &[u8], schema: &Schema, cfg: &DecodeConfig) -> DecodeResult<LocationList> {
    let mut cur = ByteCursor::new(data);
    let full_len = cur.read_u32()?;

    let mut locations = Vec::new();
    loop {
        if cur.is_empty() {
            debug!("locations: end of buffer after {} record(s)", locations.len());
            break;
        }
        let value = decode_field(&mut cur, schema, cfg)?;
        let loc = Location::from_value(&value)?;
        if loc.is_terminator() {
            debug!("locations: terminator at off={}", cur.position());
            break;
        }
        locations.push(loc);
    }

    Ok(LocationList { full_len, locations })
}
