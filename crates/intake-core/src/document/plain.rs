//! Plain text uploads.

use tracing::trace;

use super::{DocumentDecoder, Result};
use crate::error::DecodeError;

/// Strict UTF-8 decoder for `.txt` uploads.
pub struct PlainTextDecoder;

impl DocumentDecoder for PlainTextDecoder {
    fn decode(&self, data: &[u8]) -> Result<String> {
        let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
        trace!("Decoding {} bytes of plain text", data.len());

        String::from_utf8(data.to_vec()).map_err(|e| DecodeError::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_bom() {
        let text = PlainTextDecoder.decode(b"\xEF\xBB\xBFSkills").unwrap();
        assert_eq!(text, "Skills");
    }

    #[test]
    fn test_invalid_utf8() {
        let result = PlainTextDecoder.decode(&[0x4e, 0xff, 0xfe]);
        assert!(matches!(result, Err(DecodeError::Encoding(_))));
    }
}
