#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use envelope_core::{
        io::{InputSource, OutputSink},
        types::EnvelopeError,
    };

    #[test]
    fn from_arg_maps_dash_to_std_streams() {
        assert!(matches!(InputSource::from_arg("-"), InputSource::Stdin));
        assert!(matches!(InputSource::from_arg("a.txt"), InputSource::File(_)));
        assert!(matches!(OutputSink::from_arg(None), OutputSink::Stdout));
        assert!(matches!(OutputSink::from_arg(Some("-")), OutputSink::Stdout));
        assert!(matches!(OutputSink::from_arg(Some("b.txt")), OutputSink::File(_)));
    }

    #[test]
    fn reads_binary_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        let bytes = vec![0x00, 0xFF, 0x42, 0x10];
        tmp.write_all(&bytes).unwrap();

        let data = InputSource::File(tmp.path().to_path_buf()).read_all().unwrap();
        assert_eq!(data, bytes);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InputSource::File(dir.path().join("absent")).read_all().unwrap_err();
        assert!(matches!(err, EnvelopeError::Io(_)));
    }

    #[test]
    fn non_utf8_text_is_io_error() {
        let err = InputSource::Memory(vec![0xC3, 0x28]).read_text().unwrap_err();
        match err {
            EnvelopeError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn file_sink_writes_text_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        OutputSink::File(path.clone()).write_text("EC v1\nt\npayload").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"EC v1\nt\npayload");
    }

    #[test]
    fn file_sink_writes_bytes_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let bytes = [0u8, 0x80, 0xFE, b'\r'];
        OutputSink::File(path.clone()).write_bytes(&bytes).unwrap();
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn stream_text_gets_single_trailing_newline() {
        let mut sink = OutputSink::Memory(Vec::new());
        sink.write_text("abc").unwrap();
        sink.write_text("def\n").unwrap();
        assert_eq!(sink.captured().unwrap(), b"abc\ndef\n");
    }

    #[test]
    fn stream_bytes_get_no_newline() {
        let mut sink = OutputSink::Memory(Vec::new());
        sink.write_bytes(b"\x00\x01").unwrap();
        assert_eq!(sink.captured().unwrap(), b"\x00\x01");
    }

    #[test]
    fn unwritable_destination_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.txt");
        let err = OutputSink::File(path).write_bytes(b"x").unwrap_err();
        assert!(matches!(err, EnvelopeError::Io(_)));
    }
}
