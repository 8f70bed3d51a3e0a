use anyhow::Result;
use byteorder::{LittleEndian, WriteBytesExt};

use tdata_cache::records::decode_locations;
use tdata_cache::registry::{KeyType, LOCATION};
use tdata_cache::{decode_cache, CacheRecord, DecodeConfig, DecodeError};

const LOCATIONS: u32 = 0x04;
// media key (16) + filename len (4) + bookmark len (4) + timestamp (13) + size (4)
const ZERO_RECORD_LEN: usize = 41;

fn put_text(buf: &mut Vec<u8>, s: &str) -> Result<()> {
    let units: Vec<u16> = s.encode_utf16().collect();
    buf.write_i32::<LittleEndian>((units.len() * 2) as i32)?;
    for u in units {
        buf.write_u16::<LittleEndian>(u)?;
    }
    Ok(())
}

fn put_location(buf: &mut Vec<u8>, id: u64, name: &str, size: u32) -> Result<()> {
    buf.write_u32::<LittleEndian>(1)?; // location_type
    buf.write_i32::<LittleEndian>(2)?; // dc
    buf.write_u64::<LittleEndian>(id)?;
    put_text(buf, name)?;
    buf.write_i32::<LittleEndian>(-1)?; // bookmark: пусто
    buf.write_u64::<LittleEndian>(2_440_588 + 1)?; // 1970-01-02
    buf.write_u32::<LittleEndian>(500)?;
    buf.write_u8(0)?;
    buf.write_u32::<LittleEndian>(size)?;
    Ok(())
}

fn locations(rec: CacheRecord) -> tdata_cache::LocationList {
    match rec {
        CacheRecord::Locations(list) => list,
        other => panic!("expected locations, got {other:?}"),
    }
}

#[test]
fn single_location_then_zero_terminator() -> Result<()> {
    let mut body = Vec::new();
    put_location(&mut body, 77, "a.jpg", 100)?;
    body.extend_from_slice(&[0u8; ZERO_RECORD_LEN]);

    let mut buf = Vec::new();
    buf.write_u32::<LittleEndian>(body.len() as u32)?;
    buf.extend_from_slice(&body);

    let list = locations(decode_cache(&buf, LOCATIONS)?);
    assert_eq!(list.locations.len(), 1);
    let loc = &list.locations[0];
    assert_eq!(loc.filename, "a.jpg");
    assert_eq!(loc.size, 100);
    assert_eq!(loc.media_key.id, 77);
    assert_eq!(loc.media_key.dc, 2);
    assert!(loc.bookmark.is_empty());
    assert_eq!(loc.modified.unix_millis, 86_400_500);
    Ok(())
}

#[test]
fn terminator_is_never_appended() -> Result<()> {
    for n in 0..5u64 {
        let mut buf = Vec::new();
        buf.write_u32::<LittleEndian>(0)?;
        for i in 0..n {
            put_location(&mut buf, i + 1, &format!("f{i}.bin"), 10 + i as u32)?;
        }
        buf.extend_from_slice(&[0u8; ZERO_RECORD_LEN]);
        // Мусор после терминатора не читается
        buf.extend_from_slice(&[0xEE; 7]);

        let list = locations(decode_cache(&buf, LOCATIONS)?);
        assert_eq!(list.locations.len(), n as usize);
    }
    Ok(())
}

#[test]
fn end_of_buffer_at_record_boundary_is_success() -> Result<()> {
    let mut buf = Vec::new();
    buf.write_u32::<LittleEndian>(1234)?; // full_len только информационный
    put_location(&mut buf, 1, "x", 1)?;
    put_location(&mut buf, 2, "y", 2)?;

    let list = locations(decode_cache(&buf, LOCATIONS)?);
    assert_eq!(list.full_len, 1234);
    let names: Vec<&str> = list.locations.iter().map(|l| l.filename.as_str()).collect();
    assert_eq!(names, ["x", "y"]);
    Ok(())
}

#[test]
fn cut_inside_a_record_is_truncated() -> Result<()> {
    let mut buf = Vec::new();
    buf.write_u32::<LittleEndian>(0)?;
    put_location(&mut buf, 1, "x", 1)?;
    put_location(&mut buf, 2, "y", 2)?;
    buf.truncate(buf.len() - 3);

    let err = decode_cache(&buf, LOCATIONS).unwrap_err();
    let inner = err.downcast_ref::<DecodeError>().expect("typed error");
    assert!(inner.is_truncated(), "got {inner:?}");
    Ok(())
}

#[test]
fn record_with_name_but_zero_key_is_data() -> Result<()> {
    // Терминатор требует и нулевой ключ, и пустое имя, и size == 0.
    let mut buf = Vec::new();
    buf.write_u32::<LittleEndian>(0)?;
    buf.extend_from_slice(&[0u8; 16]);
    put_text(&mut buf, "only-name")?;
    buf.write_i32::<LittleEndian>(0)?;
    buf.extend_from_slice(&[0u8; 13]);
    buf.write_u32::<LittleEndian>(0)?;

    let list = decode_locations(&buf, &LOCATION, &DecodeConfig::default())?;
    assert_eq!(list.locations.len(), 1);
    assert_eq!(list.locations[0].filename, "only-name");
    Ok(())
}

#[test]
fn missing_full_len_is_an_error() {
    let err = decode_cache(&[0x01, 0x00], KeyType::Locations.raw()).unwrap_err();
    assert_eq!(err.to_string(), "error decoding cache record");
    assert!(err.downcast_ref::<DecodeError>().unwrap().is_truncated());
}
