// Shared registry under concurrent deflate/inflate: each thread must get
// back exactly its own buffer.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use compression_core::compression::{default_registry, CodecRegistry, CompressionCodec};

    fn payload(thread: usize, round: usize) -> Bytes {
        let tag = format!("thread-{thread}-round-{round};");
        Bytes::from(tag.repeat(16 + thread * 3 + round))
    }

    #[test]
    fn parallel_roundtrips_do_not_cross_contaminate() {
        let _ = env_logger::builder().is_test(true).try_init();
        let registry = default_registry();

        crossbeam::scope(|s| {
            for thread in 0..8 {
                s.spawn(move |_| {
                    for round in 0..25 {
                        let codec = CompressionCodec::ALL[(thread + round) % CompressionCodec::ALL.len()];
                        let input = payload(thread, round);
                        let packed = registry.deflate(codec, &input).unwrap();
                        let unpacked = registry.inflate(codec, &packed).unwrap();
                        assert_eq!(unpacked, input, "thread {thread} round {round} codec {codec}");
                    }
                });
            }
        })
        .unwrap();
    }

    #[test]
    fn same_codec_from_many_threads_is_deterministic() {
        let registry = CodecRegistry::default();
        let input = payload(0, 0);
        let expected = registry.deflate(CompressionCodec::Brotli, &input).unwrap();

        crossbeam::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|_| registry.deflate(CompressionCodec::Brotli, &input).unwrap()))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        })
        .unwrap();
    }
}
