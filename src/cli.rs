use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::{Path, PathBuf};

use crate::config::DecodeConfig;
use crate::records::{decode_cache_with, CacheRecord};
use crate::registry::{KeyType, RecordLayout, SettingId};

#[derive(Parser, Debug)]
#[command(
    name = "tdcache",
    version,
    about = "Decode decrypted Telegram Desktop tdata cache records",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Decode one or more decrypted cache buffers of the same key type.
    Decode {
        /// Decrypted buffer; may be repeated.
        #[arg(long = "path", required = true)]
        paths: Vec<PathBuf>,
        /// Storage key type, decimal or 0x-prefixed hex.
        #[arg(long, value_parser = parse_key_type)]
        key_type: u32,
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Overrides TDC_STRICT_UTF16.
        #[arg(long, default_value_t = false)]
        strict_utf16: bool,
        /// Overrides TDC_MAX_LIST_LEN.
        #[arg(long)]
        max_list_len: Option<usize>,
    },
    /// List key types that have a record schema.
    KeyTypes {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List known settings block identifiers.
    Settings {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

pub fn parse_key_type(s: &str) -> std::result::Result<u32, String> {
    let t = s.trim();
    let parsed = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => t.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid key type '{s}': {e}"))
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Decode {
            paths,
            key_type,
            json,
            strict_utf16,
            max_list_len,
        } => {
            let mut cfg = DecodeConfig::from_env();
            if strict_utf16 {
                cfg = cfg.with_strict_utf16(true);
            }
            if let Some(n) = max_list_len {
                cfg = cfg.with_max_list_len(n);
            }
            cmd_decode(&paths, key_type, json, &cfg)
        }
        Cmd::KeyTypes { json } => cmd_key_types(json),
        Cmd::Settings { json } => cmd_settings(json),
    }
}

fn decode_file(path: &Path, key_type: u32, cfg: &DecodeConfig) -> Result<CacheRecord> {
    let data = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    decode_cache_with(cfg, &data, key_type).with_context(|| format!("decode {}", path.display()))
}

fn cmd_decode(paths: &[PathBuf], key_type: u32, json: bool, cfg: &DecodeConfig) -> Result<()> {
    info!("decode: key_type=0x{:x}, {}", key_type, cfg);

    // Нечитаемый файл пропускаем и продолжаем с остальными.
    let mut failed = 0usize;
    for path in paths {
        let rec = match decode_file(path, key_type, cfg) {
            Ok(rec) => rec,
            Err(e) => {
                error!("{:#}", e);
                failed += 1;
                continue;
            }
        };
        if rec.is_unknown() {
            info!("{}: key type 0x{:x} has no schema", path.display(), key_type);
        }
        if json {
            let obj = serde_json::json!({ "path": path.display().to_string(), "record": rec });
            println!("{}", serde_json::to_string(&obj)?);
        } else {
            println!("{}:\n{:#?}", path.display(), rec);
        }
    }

    if failed > 0 {
        return Err(anyhow!("{} of {} file(s) could not be decoded", failed, paths.len()));
    }
    Ok(())
}

fn cmd_key_types(json: bool) -> Result<()> {
    for kt in KeyType::ALL {
        let layout = match kt.layout() {
            RecordLayout::FixedList(_, schema) => format!("fixed list of {schema}"),
            RecordLayout::LocationList(schema) => format!("location list of {schema}"),
            RecordLayout::UserSettings => "block-tagged settings".to_string(),
        };
        if json {
            let obj = serde_json::json!({ "raw": kt.raw(), "name": kt.name(), "layout": layout });
            println!("{}", serde_json::to_string(&obj)?);
        } else {
            println!("0x{:02x}  {:<24} {}", kt.raw(), kt.name(), layout);
        }
    }
    Ok(())
}

fn cmd_settings(json: bool) -> Result<()> {
    for id in SettingId::ALL {
        let schema = id
            .schema()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "connection".to_string());
        if json {
            let obj = serde_json::json!({ "block_id": id.block_id(), "name": id.name(), "schema": schema });
            println!("{}", serde_json::to_string(&obj)?);
        } else {
            println!("0x{:02x}  {:<28} {}", id.block_id(), id.name(), schema);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_type_accepts_hex_and_decimal() {
        assert_eq!(parse_key_type("0x0d"), Ok(13));
        assert_eq!(parse_key_type("0X04"), Ok(4));
        assert_eq!(parse_key_type(" 9 "), Ok(9));
        assert!(parse_key_type("zz").is_err());
    }

    #[test]
    fn cli_parses_repeated_paths() {
        let cli = Cli::try_parse_from([
            "tdcache", "decode", "--path", "a", "--path", "b", "--key-type", "0x04", "--json",
        ])
        .unwrap();
        match cli.cmd {
            Cmd::Decode { paths, key_type, json, .. } => {
                assert_eq!(paths.len(), 2);
                assert_eq!(key_type, 4);
                assert!(json);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
