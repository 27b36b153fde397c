use tracing::warn;

/// Decodes UTF-8, falling back to Latin-1 (every byte is its own code point).
/// The fallback accepts any byte sequence, so decoding never fails.
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            warn!("Resume is not valid UTF-8 ({e}); decoding as Latin-1");
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}
