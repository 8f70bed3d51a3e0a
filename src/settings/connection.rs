//! Частичный разбор DbiConnectionType.
//!
//! [i32 conn_type], далее для dbictProxiesList:
//!   [i32 count][i32 index][i32 settings][i32 calls]
//! Поддерживается только пустой список прокси при settings = system/disabled.
//! Для остальных типов ничего не читается и возвращается None (pass-through).

use log::warn;
use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::{DecodeError, DecodeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConnectionKind {
    Auto,
    /// Not written by current clients.
    HttpAuto,
    HttpProxy,
    TcpProxy,
    ProxiesListOld,
    ProxiesList,
}

impl ConnectionKind {
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(ConnectionKind::Auto),
            1 => Some(ConnectionKind::HttpAuto),
            2 => Some(ConnectionKind::HttpProxy),
            3 => Some(ConnectionKind::TcpProxy),
            4 => Some(ConnectionKind::ProxiesListOld),
            5 => Some(ConnectionKind::ProxiesList),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProxyMode {
    System,
    Enabled,
    Disabled,
    Other(i32),
}

impl ProxyMode {
    pub fn from_raw(v: i32) -> Self {
        match v {
            0 => ProxyMode::System,
            1 => ProxyMode::Enabled,
            2 => ProxyMode::Disabled,
            other => ProxyMode::Other(other),
        }
    }
}

/// Recognized but not semantically modeled connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionDescriptor {
    pub kind: ConnectionKind,
    pub count: i32,
    pub index: i32,
    pub settings: ProxyMode,
    pub calls: i32,
}

pub fn parse_connection_type(cur: &mut ByteCursor<'_>) -> DecodeResult<Option<ConnectionDescriptor>> {
    let tag = cur.read_i32()?;

    match ConnectionKind::from_tag(tag) {
        Some(ConnectionKind::ProxiesList) => {
            let count = cur.read_i32()?;
            let index = cur.read_i32()?;
            let settings = ProxyMode::from_raw(cur.read_i32()?);
            let calls = cur.read_i32()?;

            if count > 0 {
                return Err(DecodeError::Unsupported("proxy list entries"));
            }
            if settings == ProxyMode::Enabled {
                return Err(DecodeError::Unsupported("enabled proxy settings"));
            }
            Ok(Some(ConnectionDescriptor {
                kind: ConnectionKind::ProxiesList,
                count,
                index,
                settings,
                calls,
            }))
        }
        kind => {
            // Остаток значения не читается: следующий block_id может оказаться мусором.
            warn!(
                "connection type {} ({:?}) passed through undecoded at off={}",
                tag,
                kind,
                cur.position()
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proxies_list(count: i32, settings: i32) -> Vec<u8> {
        [5, count, 0, settings, 1]
            .iter()
            .flat_map(|v: &i32| v.to_le_bytes())
            .collect()
    }

    #[test]
    fn empty_list_with_system_or_disabled_mode() {
        for mode in [0, 2] {
            let buf = proxies_list(0, mode);
            let mut cur = ByteCursor::new(&buf);
            let got = parse_connection_type(&mut cur).unwrap().unwrap();
            assert_eq!(got.kind, ConnectionKind::ProxiesList);
            assert_eq!(got.settings, ProxyMode::from_raw(mode));
            assert_eq!(got.calls, 1);
            assert!(cur.is_empty());
        }
    }

    #[test]
    fn entries_and_enabled_mode_are_unsupported() {
        let buf = proxies_list(2, 0);
        let mut cur = ByteCursor::new(&buf);
        assert_eq!(
            parse_connection_type(&mut cur).unwrap_err(),
            DecodeError::Unsupported("proxy list entries")
        );

        let buf = proxies_list(0, 1);
        let mut cur = ByteCursor::new(&buf);
        assert_eq!(
            parse_connection_type(&mut cur).unwrap_err(),
            DecodeError::Unsupported("enabled proxy settings")
        );
    }

    #[test]
    fn other_tags_pass_through_without_consuming() {
        for tag in [0i32, 2, 3, 4, 99, -1] {
            let mut buf = tag.to_le_bytes().to_vec();
            buf.extend_from_slice(&[0xAB; 8]);
            let mut cur = ByteCursor::new(&buf);
            assert_eq!(parse_connection_type(&mut cur).unwrap(), None);
            assert_eq!(cur.position(), 4);
        }
    }

    #[test]
    fn short_header_is_truncated() {
        let buf: Vec<u8> = [5i32, 0].iter().flat_map(|v| v.to_le_bytes()).collect();
        let mut cur = ByteCursor::new(&buf);
        assert!(parse_connection_type(&mut cur).unwrap_err().is_truncated());
    }
}
