#[cfg(test)]
mod tests {
    use envelope_core::{
        envelope::{decode_with_stats, encode_with_stats, EncodeOptions},
        telemetry::Stage,
    };

    #[test]
    fn encode_snapshot_counts_every_layer() {
        let data = vec![b'z'; 10_000];
        let (text, snap) = encode_with_stats(&data, &EncodeOptions::default()).unwrap();

        assert_eq!(snap.bytes_plain, 10_000);
        assert!(snap.bytes_compressed > 0 && snap.bytes_compressed < 10_000);
        assert_eq!(snap.bytes_encoded, text.lines().nth(2).unwrap().len() as u64);
        assert_eq!(snap.bytes_envelope, text.len() as u64);
        assert!(snap.compression_ratio < 0.1);
        assert!(snap.has_all_stages(&[Stage::Compress, Stage::Encode]));
        assert!(snap.sanity_check());
    }

    #[test]
    fn decode_snapshot_mirrors_encode() {
        let (text, enc) = encode_with_stats(b"hello world", &EncodeOptions::default()).unwrap();
        let decoded = decode_with_stats(&text).unwrap();
        let dec = &decoded.snapshot;

        assert_eq!(decoded.raw, b"hello world");
        assert_eq!(decoded.envelope.descriptor, "t=gz>b64;ct=json");
        assert_eq!(dec.bytes_plain, enc.bytes_plain);
        assert_eq!(dec.bytes_compressed, enc.bytes_compressed);
        assert_eq!(dec.bytes_encoded, enc.bytes_encoded);
        assert!(dec.has_all_stages(&[Stage::Validate, Stage::Decode, Stage::Decompress]));
    }

    #[test]
    fn empty_input_ratio_is_zero() {
        let (_, snap) = encode_with_stats(b"", &EncodeOptions::default()).unwrap();
        assert_eq!(snap.compression_ratio, 0.0);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let (_, snap) = encode_with_stats(b"abc", &EncodeOptions::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
        assert_eq!(json["bytes_plain"], 3);
        assert!(json["stage_times"]["times"].get("compress").is_some());
    }
}
