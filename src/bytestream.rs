//! Byte stream extraction.
//!
//! Trace commands are variable length and freely straddle word boundaries,
//! so each lane's payload words are flattened into one byte sequence before
//! decoding.

use tracing::debug;

use crate::error::Result;
use crate::packet::parse_word;
use crate::trace::constants::IDLE_WORD;
use crate::trace::LaneMap;

/// Flatten one lane's payload words into bytes, most significant byte first.
///
/// Idle words and empty tokens carry no trace data and are skipped.
pub fn words_to_bytes(words: &[&str]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(words.len() * 4);
    for (index, token) in words.iter().enumerate() {
        if token.is_empty() || *token == IDLE_WORD {
            continue;
        }
        bytes.extend_from_slice(&parse_word(index, token)?.to_be_bytes());
    }
    Ok(bytes)
}

/// Build the byte stream of every lane.
pub fn build_byte_streams(lanes: &LaneMap<Vec<&str>>) -> Result<LaneMap<Vec<u8>>> {
    lanes.try_map(|key, words| {
        let bytes = words_to_bytes(words)?;
        debug!("{key}: byte stream {bytes:02x?}");
        Ok(bytes)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TraceError;
    use crate::trace::{LaneKey, TileLocation, TraceType};

    #[test]
    fn test_word_is_big_endian() {
        assert_eq!(
            words_to_bytes(&["AABBCCDD"]).unwrap(),
            vec![0xAA, 0xBB, 0xCC, 0xDD]
        );
    }

    #[test]
    fn test_idle_and_blank_words_skipped() {
        let bytes = words_to_bytes(&["a5a5a5a5", "", "000000ff", "a5a5a5a5"]).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0xff]);
    }

    #[test]
    fn test_order_preserved_across_words() {
        let bytes = words_to_bytes(&["01020304", "05060708"]).unwrap();
        assert_eq!(bytes, (1..=8).collect::<Vec<u8>>());
    }

    #[test]
    fn test_bad_payload_word() {
        let err = words_to_bytes(&["01020304", "xyz"]).unwrap_err();
        assert!(matches!(err, TraceError::InvalidWord { index: 1, .. }));
    }

    #[test]
    fn test_build_byte_streams_keeps_lanes() {
        let mut lanes = LaneMap::new();
        let key = LaneKey::new(TraceType::Shim, TileLocation::new(0, 0));
        lanes.insert(key, vec!["a5a5a5a5", "fe00ffff"]);
        let streams = build_byte_streams(&lanes).unwrap();
        assert_eq!(streams.get(&key), Some(&vec![0xfe, 0x00, 0xff, 0xff]));
    }
}
