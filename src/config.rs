//! Centralized configuration for the cache decoder.
//!
//! Goals:
//! - Single place to collect tunables instead of scattering env lookups.
//! - DecodeConfig::from_env() reads TDC_* variables; CLI flags override them.
//!
//! Tunables:
//! - max_list_len (ENV TDC_MAX_LIST_LEN, default 1048576): upper bound on the element
//!   count of a list field. Byte/text fields are bounded by the buffer itself.
//! - strict_utf16 (ENV TDC_STRICT_UTF16, default false): reject malformed UTF-16
//!   instead of substituting U+FFFD.

use std::fmt;

pub const DEFAULT_MAX_LIST_LEN: usize = 1 << 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Maximum element count accepted for a list field.
    /// Env: TDC_MAX_LIST_LEN (default 1048576)
    pub max_list_len: usize,

    /// Fail on unpaired surrogates / odd-length text instead of replacing them.
    /// Env: TDC_STRICT_UTF16 = 0|1|true|false (default false)
    pub strict_utf16: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_list_len: DEFAULT_MAX_LIST_LEN,
            strict_utf16: false,
        }
    }
}

fn env_flag(s: &str) -> bool {
    let s = s.trim().to_ascii_lowercase();
    s == "1" || s == "true" || s == "on" || s == "yes"
}

impl DecodeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("TDC_MAX_LIST_LEN") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.max_list_len = n;
            }
        }

        if let Ok(v) = std::env::var("TDC_STRICT_UTF16") {
            cfg.strict_utf16 = env_flag(&v);
        }

        cfg
    }

    pub fn with_max_list_len(mut self, n: usize) -> Self {
        self.max_list_len = n;
        self
    }

    pub fn with_strict_utf16(mut self, on: bool) -> Self {
        self.strict_utf16 = on;
        self
    }
}

impl fmt::Display for DecodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecodeConfig {{ max_list_len: {}, strict_utf16: {} }}",
            self.max_list_len, self.strict_utf16
        )
    }
}
