use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use thiserror::Error;

/// Errors from reading a screenplay file
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A decoded screenplay document
#[derive(Debug, Clone)]
pub struct Screenplay {
    /// Where the document came from
    pub source_file: PathBuf,
    /// The fully decoded text, immutable for the rest of the run
    pub text: String,
}

/// Read a screenplay file and decode it with best-effort charset
/// detection
pub fn read_screenplay(path: &Path) -> Result<Screenplay, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Screenplay {
        source_file: path.to_path_buf(),
        text: decode_bytes(&bytes),
    })
}

/// Decode raw bytes to text. Detection is best-effort and decoding uses
/// replacement characters, so this always returns some text; pathological
/// input may be silently misdecoded.
pub fn decode_bytes(bytes: &[u8]) -> String {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding: &'static encoding_rs::Encoding = detector.guess(None, true);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_utf8_roundtrip() {
        let text = "EXT. HARBOR - DAY\nJOHN\nHello there.";
        assert_eq!(decode_bytes(text.as_bytes()), text);
    }

    #[test]
    fn test_decode_never_fails_on_invalid_utf8() {
        // Latin-1 bytes with a 0xE9 (é) that is invalid as UTF-8
        let bytes = b"caf\xe9 sc\xe8ne";
        let decoded = decode_bytes(bytes);
        assert!(!decoded.is_empty());
        assert!(decoded.contains("caf"));
    }

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(decode_bytes(b""), "");
    }

    #[test]
    fn test_read_screenplay_missing_file() {
        let err = read_screenplay(Path::new("/nonexistent/script.txt"));
        assert!(err.is_err());
    }

    #[test]
    fn test_read_screenplay_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "INT. CABIN - NIGHT\nMARY\nIt's cold.").unwrap();

        let screenplay = read_screenplay(file.path()).unwrap();
        assert!(screenplay.text.starts_with("INT. CABIN - NIGHT"));
    }
}
