use bitstream::{BitReader, BitWriter};

#[test]
fn varint_roundtrip_boundaries() {
    for value in [0u64, 1, 127, 128, 300, 16383, 16384, (1 << 35) - 1] {
        let mut writer = BitWriter::new();
        writer.write_varint(value);
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_varint(), value, "roundtrip failed for {value}");
    }
}

#[test]
fn varint_roundtrip_unaligned() {
    let mut writer = BitWriter::new();
    writer.write_bits(0b101, 3).unwrap();
    for value in [0u64, 127, 128, 16384] {
        writer.write_varint(value);
    }
    let bytes = writer.finish();

    let mut reader = BitReader::new(&bytes);
    assert_eq!(reader.read_bits(3), 0b101);
    for value in [0u64, 127, 128, 16384] {
        assert_eq!(reader.read_varint(), value);
    }
}

#[test]
fn growth_past_initial_capacity_loses_nothing() {
    // Write well past any initial allocation and check every bit survives
    // the growth boundaries.
    let mut writer = BitWriter::with_capacity(16);
    let total_bits = 5000 * 8 + 3;
    for i in 0..total_bits {
        writer.write_bit(i % 3 == 0);
    }
    let bytes = writer.finish();
    assert_eq!(bytes.len(), 5001);

    let mut reader = BitReader::new(&bytes);
    for i in 0..total_bits {
        assert_eq!(reader.read_bit(), i % 3 == 0, "bit {i} corrupted");
    }
}

#[test]
fn interleaved_fields_roundtrip() {
    // The save layout interleaves flag bits, fixed-width indices and varints
    // without byte alignment; exercise that shape directly.
    let mut writer = BitWriter::new();
    writer.write_varint(987_654);
    for i in 0..23 {
        writer.write_bit(i % 4 == 1);
    }
    writer.write_bit(true);
    writer.write_bits(17, 5).unwrap();
    writer.write_bits(5, 3).unwrap();
    writer.write_varint(42);
    writer.write_varint(0);
    let bytes = writer.finish();

    let mut reader = BitReader::new(&bytes);
    assert_eq!(reader.read_varint(), 987_654);
    for i in 0..23 {
        assert_eq!(reader.read_bit(), i % 4 == 1);
    }
    assert!(reader.read_bit());
    assert_eq!(reader.read_bits(5), 17);
    assert_eq!(reader.read_bits(3), 5);
    assert_eq!(reader.read_varint(), 42);
    assert_eq!(reader.read_varint(), 0);
}

#[test]
fn strings_roundtrip_mixed_with_other_fields() {
    let mut writer = BitWriter::new();
    writer.write_bit(true);
    writer.write_string("lucky_coin");
    writer.write_varint(7);
    writer.write_string("");
    let bytes = writer.finish();

    let mut reader = BitReader::new(&bytes);
    assert!(reader.read_bit());
    assert_eq!(reader.read_string(), "lucky_coin");
    assert_eq!(reader.read_varint(), 7);
    assert_eq!(reader.read_string(), "");
}
