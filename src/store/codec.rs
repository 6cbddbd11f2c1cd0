//! Wire format for the persisted history: a pretty-printed JSON array of
//! 2-element `[outcome, direction-token]` records, UTF-8 with the direction
//! glyphs written verbatim. Loading immediately after saving reproduces the
//! exact record sequence.

use crate::types::Spin;

pub fn encode(spins: &[Spin]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(spins)
}

/// Decodes a raw payload. Any malformed element (or a wrong top-level shape)
/// fails the whole payload.
pub fn decode(raw: &[u8]) -> Result<Vec<Spin>, serde_json::Error> {
    serde_json::from_slice(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn spin(outcome: u8, direction: Direction) -> Spin {
        Spin::new(outcome, direction).unwrap()
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let spins = vec![
            spin(0, Direction::Left),
            spin(5, Direction::Right),
            spin(36, Direction::Right),
        ];
        let text = encode(&spins).unwrap();
        assert_eq!(decode(text.as_bytes()).unwrap(), spins);
    }

    #[test]
    fn test_encoded_text_keeps_raw_tokens() {
        let text = encode(&[spin(5, Direction::Right)]).unwrap();
        // No \u escapes: the arrow glyph is written as-is.
        assert!(text.contains("➡️"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_empty_history_encodes() {
        let text = encode(&[]).unwrap();
        assert_eq!(decode(text.as_bytes()).unwrap(), vec![]);
    }

    #[test]
    fn test_decode_rejects_non_sequence_payloads() {
        assert!(decode(b"5").is_err());
        assert!(decode(b"{\"spins\": []}").is_err());
        assert!(decode(b"\"history\"").is_err());
        assert!(decode(b"not json at all").is_err());
    }

    #[test]
    fn test_decode_rejects_malformed_elements() {
        assert!(decode("[[5, \"➡️\"], [40, \"➡️\"]]".as_bytes()).is_err());
        assert!(decode("[[5, \"up\"]]".as_bytes()).is_err());
        assert!(decode("[[5]]".as_bytes()).is_err());
        assert!(decode("[[5, \"➡️\", 1]]".as_bytes()).is_err());
        assert!(decode(b"[5]").is_err());
    }
}
