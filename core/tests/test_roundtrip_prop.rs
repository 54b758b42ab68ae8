// Property tests: round-trip fidelity for every codec and the identity law
// for UNCOMPRESSED.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use compression_core::compression::{default_registry, deflate, inflate, CompressionCodec};
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn codec_strategy() -> impl Strategy<Value = CompressionCodec> {
        prop::sample::select(CompressionCodec::ALL.to_vec())
    }

    /// Arbitrary buffers, weighted towards the empty and 1-byte boundaries.
    fn data_strategy() -> impl Strategy<Value = Vec<u8>> {
        prop_oneof![
            1 => Just(Vec::new()),
            1 => any::<u8>().prop_map(|b| vec![b]),
            6 => prop::collection::vec(any::<u8>(), 0..4096),
        ]
    }

    proptest! {
        #[test]
        fn roundtrip_any_bytes(codec in codec_strategy(), data in data_strategy()) {
            let input = Bytes::from(data);
            let packed = default_registry().deflate(codec, &input).unwrap();
            let unpacked = default_registry().inflate(codec, &packed).unwrap();
            prop_assert_eq!(unpacked, input);
        }

        #[test]
        fn roundtrip_by_name(codec in codec_strategy(), text in ".{0,512}") {
            let input = Bytes::from(text);
            let packed = deflate(codec.name(), &input).unwrap();
            prop_assert_eq!(inflate(codec.name(), &packed).unwrap(), input);
        }

        #[test]
        fn uncompressed_is_identity(data in prop::collection::vec(any::<u8>(), 0..1024)) {
            let input = Bytes::from(data);
            prop_assert_eq!(&deflate("UNCOMPRESSED", &input).unwrap(), &input);
            prop_assert_eq!(&inflate("UNCOMPRESSED", &input).unwrap(), &input);
        }

        #[test]
        fn unknown_names_always_fail(name in "[a-z_]{1,12}", data in prop::collection::vec(any::<u8>(), 0..64)) {
            let input = Bytes::from(data);
            prop_assert!(deflate(&name, &input).unwrap_err().is_unknown_codec());
            prop_assert!(inflate(&name, &input).unwrap_err().is_unknown_codec());
        }
    }

    #[test]
    fn boundary_buffers_roundtrip_for_every_codec() {
        let cases: [&[u8]; 4] = [b"", b"\x00", b"a", b"\xff\xfe"];
        for codec in CompressionCodec::ALL {
            for case in cases {
                let input = Bytes::copy_from_slice(case);
                let packed = default_registry().deflate(codec, &input).unwrap();
                let unpacked = default_registry().inflate(codec, &packed).unwrap();
                assert_eq!(unpacked, input, "codec {codec} input {case:?}");
            }
        }
    }

    #[test]
    fn large_random_buffers_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut noise = vec![0u8; 1 << 20];
        rng.fill(&mut noise[..]);
        let noise = Bytes::from(noise);

        for codec in CompressionCodec::ALL {
            let packed = default_registry().deflate(codec, &noise).unwrap();
            let unpacked = default_registry().inflate(codec, &packed).unwrap();
            assert_eq!(unpacked.len(), noise.len(), "codec {codec}");
            assert!(unpacked == noise, "codec {codec} altered the buffer");
        }
    }
}
