// Plain text uploads — strict UTF-8 decoding.

use super::ExtractError;

/// Decode raw bytes as UTF-8. Invalid sequences are a decode failure,
/// not something to paper over with replacement characters.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::Decode(e.to_string()))
}
