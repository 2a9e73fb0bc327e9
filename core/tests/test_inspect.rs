// Descriptor-driven inspection: strict descriptor, chain from the descriptor, JSON content check.

#[cfg(test)]
mod tests {
    use base64::{Engine, engine::general_purpose};
    use envelope_core::{
        envelope::{encode, inspect, pretty_json},
        headers::DescriptorError,
        types::EnvelopeError,
    };

    #[test]
    fn encoded_json_inspects_clean() {
        let report = inspect(&encode(br#"{"id":7,"tags":["a"]}"#).unwrap()).unwrap();
        assert_eq!(report.header, "EC v1");
        assert_eq!(report.transforms, "gz>b64");
        assert_eq!(report.content_type, "json");
        assert_eq!(report.decoded_len, 21);
        assert_eq!(report.to_string(), "Valid EC v1 · t=gz>b64; ct=json");
    }

    #[test]
    fn base64_only_chain() {
        let payload = general_purpose::STANDARD.encode(br#"{"k":true}"#);
        let report = inspect(&format!("EC v1\nt=b64;ct=json\n{}", payload)).unwrap();
        assert_eq!(report.transforms, "b64");
        assert_eq!(report.decoded_len, 10);
    }

    #[test]
    fn identity_chain_with_text_content() {
        let report = inspect("EC v1\nt=none;ct=text\nplain words").unwrap();
        assert_eq!(report.content_type, "text");
        assert_eq!(report.decoded_len, 11);
    }

    #[test]
    fn missing_transform_chain() {
        let err = inspect("EC v1\nct=json\n{}").unwrap_err();
        assert!(matches!(err, EnvelopeError::Descriptor(DescriptorError::MissingTransforms { .. })));
    }

    #[test]
    fn unknown_transform_step() {
        let err = inspect("EC v1\nt=lz4;ct=json\n{}").unwrap_err();
        assert!(matches!(err, EnvelopeError::Descriptor(DescriptorError::UnknownStep { .. })));
    }

    #[test]
    fn json_tag_with_non_json_content() {
        let err = inspect(&encode(b"hello world").unwrap()).unwrap_err();
        assert!(matches!(err, EnvelopeError::Content(_)));
    }

    #[test]
    fn structural_errors_come_first() {
        assert!(matches!(inspect("EC v1\nt=b64").unwrap_err(), EnvelopeError::Format(_)));
    }

    #[test]
    fn report_serializes() {
        let report = inspect(&encode(b"[]").unwrap()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["transforms"], "gz>b64");
        assert_eq!(json["decoded_len"], 2);
    }

    #[test]
    fn pretty_json_formats_and_rejects() {
        assert_eq!(pretty_json(br#"{"a":[1]}"#).unwrap(), "{\n  \"a\": [\n    1\n  ]\n}");
        assert!(matches!(pretty_json(b"{oops").unwrap_err(), EnvelopeError::Content(_)));
    }
}
