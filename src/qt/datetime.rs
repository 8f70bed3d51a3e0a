//! QDateTime → Timestamp.
//!
//! На диске: [u64 julian_day][u32 msecs_since_midnight][u8 timespec]. Байт timespec
//! читается декодером схемы и отбрасывается; сюда приходят только date и time.

use serde::Serialize;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Julian day number of 1970-01-01.
pub const JULIAN_DAY_UNIX_EPOCH: i128 = 2_440_588;

const MS_PER_DAY: i128 = 86_400_000;

/// Milliseconds relative to the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp {
    pub unix_millis: i64,
}

impl Timestamp {
    pub const UNIX_EPOCH: Timestamp = Timestamp { unix_millis: 0 };

    pub fn to_system_time(self) -> SystemTime {
        let abs = Duration::from_millis(self.unix_millis.unsigned_abs());
        if self.unix_millis >= 0 {
            UNIX_EPOCH.checked_add(abs).unwrap_or(UNIX_EPOCH)
        } else {
            UNIX_EPOCH.checked_sub(abs).unwrap_or(UNIX_EPOCH)
        }
    }
}

/// Convert a (julian day, msecs) pair. Total: out-of-range inputs saturate.
pub fn qdatetime(date: u64, time: u32) -> Timestamp {
    let days = date as i128 - JULIAN_DAY_UNIX_EPOCH;
    let ms = days * MS_PER_DAY + time as i128;
    let unix_millis = ms.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
    Timestamp { unix_millis }
}
