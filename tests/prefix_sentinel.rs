use anyhow::Result;

use tdata_cache::cursor::{ByteCursor, LEN_PREFIX_SIZE};
use tdata_cache::qt::utf16_to_string;
use tdata_cache::{decode_field, DecodeConfig, Schema, Value};

fn random_tail(rng: &mut oorandom::Rand32, max: u32) -> Vec<u8> {
    let n = rng.rand_range(0..max);
    (0..n).map(|_| rng.rand_u32() as u8).collect()
}

#[test]
fn minus_one_text_prefix_is_empty_text() -> Result<()> {
    let buf = (-1i32).to_le_bytes();
    let mut cur = ByteCursor::new(&buf);
    let v = decode_field(&mut cur, &Schema::Text, &DecodeConfig::default())?;
    assert_eq!(v, Value::Text(String::new()));
    assert_eq!(cur.position(), 4);
    Ok(())
}

#[test]
fn negative_prefix_consumes_exactly_four_bytes() -> Result<()> {
    let mut rng = oorandom::Rand32::new(0x7dca);
    let cfg = DecodeConfig::default();
    for _ in 0..500 {
        let len = -(rng.rand_range(1..i32::MAX as u32) as i32);
        let mut buf = len.to_le_bytes().to_vec();
        buf.extend(random_tail(&mut rng, 64));

        for (schema, want) in [
            (Schema::Bytes, Value::Bytes(Vec::new())),
            (Schema::Text, Value::Text(String::new())),
        ] {
            let mut cur = ByteCursor::new(&buf);
            assert_eq!(decode_field(&mut cur, &schema, &cfg)?, want);
            assert_eq!(cur.position(), LEN_PREFIX_SIZE);
        }
    }
    Ok(())
}

#[test]
fn i32_min_prefix_is_empty() -> Result<()> {
    let mut buf = i32::MIN.to_le_bytes().to_vec();
    buf.push(0x42);
    let mut cur = ByteCursor::new(&buf);
    assert!(cur.read_length_prefixed()?.is_empty());
    assert_eq!(cur.remaining(), 1);
    Ok(())
}

#[test]
fn utf16_text_round_trips() -> Result<()> {
    let mut rng = oorandom::Rand32::new(42);
    for _ in 0..300 {
        let n = rng.rand_range(0..40);
        let s: String = (0..n)
            .filter_map(|_| {
                // Весь диапазон скалярных значений, суррогаты отсеиваются char::from_u32
                char::from_u32(rng.rand_range(1..0x11_0000))
            })
            .collect();

        let mut bytes = Vec::new();
        for u in s.encode_utf16() {
            bytes.extend_from_slice(&u.to_le_bytes());
        }
        assert_eq!(utf16_to_string(&bytes, true, 0)?, s);

        let mut field = (bytes.len() as i32).to_le_bytes().to_vec();
        field.extend_from_slice(&bytes);
        let mut cur = ByteCursor::new(&field);
        let strict = DecodeConfig::default().with_strict_utf16(true);
        let v = decode_field(&mut cur, &Schema::Text, &strict)?;
        assert_eq!(v, Value::Text(s));
        assert!(cur.is_empty());
    }
    Ok(())
}

#[test]
fn strict_mode_rejects_lone_surrogate_in_field() {
    let mut field = 2i32.to_le_bytes().to_vec();
    field.extend_from_slice(&0xDC00u16.to_le_bytes());
    let cfg = DecodeConfig::default().with_strict_utf16(true);
    let mut cur = ByteCursor::new(&field);
    let err = decode_field(&mut cur, &Schema::Text, &cfg).unwrap_err();
    assert_eq!(err, tdata_cache::DecodeError::InvalidText { offset: 4 });

    let mut cur = ByteCursor::new(&field);
    let v = decode_field(&mut cur, &Schema::Text, &DecodeConfig::default()).unwrap();
    assert_eq!(v, Value::Text("\u{FFFD}".into()));
}
