// Name/value block codec: exact encoding, strict parsing, size contract.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use proptest::prelude::*;
    use spdy_frame_core::{
        nv::{
            count_nv_space, normalize, pack_nv, pack_nv_into, unpack_nv, unpack_nv_bytes, NameValue,
            NameValueBlock,
        },
        types::FrameError,
    };

    fn ab_block() -> NameValueBlock {
        NameValueBlock::from_sorted(vec![NameValue::new("a", "1"), NameValue::new("b", "2")])
    }

    const AB_WIRE: &str = "00000002\
                           00000001 61 00000001 31\
                           00000001 62 00000001 32";

    fn ab_wire() -> Vec<u8> {
        hex::decode(AB_WIRE.replace(' ', "")).unwrap()
    }

    // ## 1. Exact encoding

    #[test]
    fn packs_reference_vector() {
        let packed = pack_nv(&ab_block()).unwrap();
        assert_eq!(packed, ab_wire());
        assert_eq!(count_nv_space(&ab_block()), packed.len());
    }

    #[test]
    fn unpacks_reference_vector() {
        let block = unpack_nv(&ab_wire()).unwrap();
        assert_eq!(block, ab_block());
        assert_eq!(block.get(b"b").map(|v| &v[..]), Some(&b"2"[..]));
    }

    #[test]
    fn empty_block_is_four_zero_bytes() {
        let empty = NameValueBlock::new();
        assert_eq!(count_nv_space(&empty), 4);
        assert_eq!(pack_nv(&empty).unwrap(), vec![0, 0, 0, 0]);
        assert!(unpack_nv(&[0, 0, 0, 0]).unwrap().is_empty());
    }

    #[test]
    fn merged_values_keep_their_nul() {
        let block = normalize([("accept", "text/html"), ("accept", "*/*")]);
        let packed = pack_nv(&block).unwrap();
        let back = unpack_nv(&packed).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(&back.as_slice()[0].value[..], b"text/html\0*/*");
    }

    #[test]
    fn empty_value_is_allowed() {
        let block = NameValueBlock::from_sorted(vec![NameValue::new("x-empty", "")]);
        let back = unpack_nv(&pack_nv(&block).unwrap()).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn unpacked_fields_share_one_buffer() {
        let wire = Bytes::from(ab_wire());
        let block = unpack_nv_bytes(wire.clone()).unwrap();
        let name = &block.as_slice()[0].name;
        let base = wire.as_ptr() as usize;
        let at = name.as_ptr() as usize;
        assert!(at >= base && at < base + wire.len());
    }

    // ## 2. Malformed blocks are rejected

    #[test]
    fn truncated_second_pair_is_rejected() {
        let wire = ab_wire();
        // count says 2, only the first pair is present
        let truncated = &wire[..4 + 4 + 1 + 4 + 1];
        assert!(matches!(unpack_nv(truncated), Err(FrameError::Parse(_))));
    }

    #[test]
    fn value_running_past_end_is_rejected() {
        let mut wire = ab_wire();
        wire.truncate(wire.len() - 1);
        assert!(matches!(unpack_nv(&wire), Err(FrameError::Parse(_))));
    }

    #[test]
    fn oversized_count_is_rejected_before_parsing() {
        let wire = hex::decode("ffffffff00000001610000000131").unwrap();
        match unpack_nv(&wire) {
            Err(FrameError::Parse(msg)) => assert!(msg.contains("inconsistent")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn short_count_is_rejected() {
        assert!(matches!(unpack_nv(&[0, 0, 1]), Err(FrameError::Parse(_))));
        assert!(matches!(unpack_nv(&[]), Err(FrameError::Parse(_))));
    }

    #[test]
    fn empty_name_is_rejected() {
        let wire = hex::decode("00000001000000000000000131").unwrap();
        match unpack_nv(&wire) {
            Err(FrameError::Parse(msg)) => assert!(msg.contains("empty name")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut wire = ab_wire();
        wire.push(0xaa);
        assert!(matches!(unpack_nv(&wire), Err(FrameError::Parse(_))));
    }

    #[test]
    fn empty_name_is_refused_by_packer() {
        let block = NameValueBlock::from_sorted(vec![NameValue::new("", "x")]);
        match pack_nv(&block) {
            Err(FrameError::Parse(msg)) => assert!(msg.contains("empty name")),
            other => panic!("unexpected result: {:?}", other),
        }

        let mut out = Vec::new();
        assert!(pack_nv_into(&block, &mut out).is_err());
        assert!(out.is_empty());
    }

    // ## 3. Size contract and round trip

    #[test]
    fn repeated_wire_names_are_sized_and_repacked_verbatim() {
        // a=1, a=2: legal on the wire, not normalized
        let wire = hex::decode("000000020000000161000000013100000001610000000132").unwrap();
        let block = unpack_nv(&wire).unwrap();
        assert_eq!(block.len(), 2);
        assert!(!block.is_normalized());

        assert_eq!(count_nv_space(&block), wire.len());
        assert_eq!(pack_nv(&block).unwrap(), wire);
    }

    fn arb_block() -> impl Strategy<Value = NameValueBlock> {
        proptest::collection::vec(
            (
                proptest::collection::vec(any::<u8>(), 1..12),
                proptest::collection::vec(any::<u8>(), 0..40),
            ),
            0..12,
        )
        .prop_map(normalize)
    }

    proptest! {
        #[test]
        fn prop_count_space_matches_packed_len(block in arb_block()) {
            let packed = pack_nv(&block).unwrap();
            prop_assert_eq!(count_nv_space(&block), packed.len());
        }

        #[test]
        fn prop_unpack_inverts_pack(block in arb_block()) {
            let back = unpack_nv(&pack_nv(&block).unwrap()).unwrap();
            prop_assert!(back.is_normalized());
            prop_assert_eq!(back, block);
        }

        #[test]
        fn prop_unpack_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = unpack_nv(&bytes);
        }
    }
}
