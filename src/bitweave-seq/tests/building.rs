use bitweave_seq::{BitSequence, BitSequenceBuilder, BitStore, Error};

#[test]
fn append_packs_nibbles_into_one_byte() {
    let mut builder = BitSequenceBuilder::new();

    builder.append_bits(4, &[0b0000_1010]);
    builder.append_bits(4, &[0b0000_0011]);
    assert_eq!(builder.bit_len(), 8);

    let seq = builder.into_bit_sequence();
    assert_eq!(seq.as_bytes(), &[0b0011_1010]);
    assert_eq!(seq.bit_len(), 8);
}

#[test]
fn append_carries_across_byte_boundaries() {
    let mut builder = BitSequenceBuilder::new();

    builder.append_bits(4, &[0x0f]);
    builder.append_bits(8, &[0xab]);

    assert_eq!(builder.bit_len(), 12);
    assert_eq!(builder.to_bit_sequence().as_bytes(), &[0xbf, 0x0a]);
}

#[test]
fn bitwise_building_matches_whole_byte_append() {
    let mut bitwise = BitSequenceBuilder::new();
    for i in 0..8 {
        bitwise.append_bits(1, &[(0xb2u8 >> i) & 1]);
    }

    let mut whole = BitSequenceBuilder::new();
    whole.append_bits(8, &[0xb2]);

    assert_eq!(bitwise.into_bit_sequence(), whole.into_bit_sequence());
}

#[test]
fn aligned_append_copies_bytes_verbatim() {
    let mut builder = BitSequenceBuilder::new();

    builder.append_bits(16, &[0xde, 0xad]);
    builder.append_bits(8, &[0xbe]);

    assert_eq!(builder.bit_len(), 24);
    assert_eq!(builder.to_bit_sequence().as_bytes(), &[0xde, 0xad, 0xbe]);
}

#[test]
fn snapshots_stay_independent_of_the_builder() {
    let mut builder = BitSequenceBuilder::new();
    builder.append_bits(8, &[0x55]);

    let snapshot = builder.to_bit_sequence();
    builder.append_bits(8, &[0xff]);

    assert_eq!(snapshot.as_bytes(), &[0x55]);
    assert_eq!(snapshot.bit_len(), 8);
    assert_eq!(builder.to_bit_sequence().as_bytes(), &[0x55, 0xff]);
}

#[test]
fn empty_builder_yields_the_empty_sequence() {
    let builder = BitSequenceBuilder::new();

    assert!(builder.is_empty());
    let seq = builder.into_bit_sequence();
    assert!(seq.is_empty());
    assert_eq!(seq, BitSequence::new());
    assert!(seq.as_bytes().is_empty());
}

#[test]
fn zero_length_append_is_a_no_op() {
    let mut builder = BitSequenceBuilder::new();
    builder.append_bits(0, &[]);

    assert_eq!(builder.bit_len(), 0);
    assert_eq!(builder.into_bit_sequence(), BitSequence::new());
}

#[test]
fn preseeded_builders_continue_at_their_count() {
    let mut builder = BitSequenceBuilder::from_bytes(vec![0xaa]);
    assert_eq!(builder.bit_len(), 8);

    builder.append_bits(4, &[0x05]);
    assert_eq!(builder.bit_len(), 12);
    assert_eq!(builder.to_bit_sequence().as_bytes(), &[0xaa, 0x05]);

    let seeded = BitSequenceBuilder::from_bytes_with_count(vec![0xff, 0x01], 9).unwrap();
    assert_eq!(seeded.bit_len(), 9);

    let err = BitSequenceBuilder::from_bytes_with_count(vec![0xff], 9).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 9, .. }));
}

#[test]
fn append_forwards_any_bit_store() {
    let mut builder = BitSequenceBuilder::new();
    builder.append_bits(4, &[0x0a]);

    let tail = BitSequence::from_bit_string("0011").unwrap();
    builder.append(&tail);

    assert_eq!(builder.to_bit_sequence().as_bytes(), &[0x3a]);
}

#[test]
fn builders_expose_bits_through_the_store_trait() {
    let mut builder = BitSequenceBuilder::new();
    builder.append_bits(2, &[0b01]);

    assert!(builder.bit(0).unwrap());
    assert!(!builder.bit(1).unwrap());
    assert!(matches!(
        builder.bit(2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    ));
}
