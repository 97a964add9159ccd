//! Packet demultiplexing.
//!
//! The trace capture is a flat list of 32-bit hex words. The trace network
//! delivers them in blocks of eight: a stream packet header followed by seven
//! payload words. Packets from different tiles and trace units are
//! interleaved, so the first step of decoding is sorting the payload words
//! into per-lane buckets according to the header that precedes them.

use bitfield::bitfield;
use tracing::{debug, warn};

use crate::error::{Result, TraceError};
use crate::trace::constants::{EMPTY_CAPTURE_WORD, PACKET_BLOCK_WORDS};
use crate::trace::{LaneKey, LaneMap, TileLocation, TraceType};

bitfield! {
    /// Raw layout of a stream packet header word.
    #[derive(Clone, Copy)]
    pub struct PacketHeaderWord(u32);
    impl Debug;
    pub stream_id, _: 4, 0;
    reserved_low, _: 11, 5;
    pub packet_type, _: 14, 12;
    reserved_mid, _: 19, 19;
    pub row, _: 20, 16;
    pub col, _: 27, 21;
    reserved_high, _: 30, 28;
    pub parity, _: 31, 31;
}

impl PacketHeaderWord {
    fn reserved_bits_clear(&self) -> bool {
        self.reserved_low() == 0 && self.reserved_mid() == 0 && self.reserved_high() == 0
    }
}

/// Returns true if `word` has an odd number of set bits.
pub fn has_odd_parity(word: u32) -> bool {
    word.count_ones() % 2 == 1
}

/// Decoded stream packet header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacketHeader {
    /// Odd parity and all reserved bits clear.
    pub valid: bool,
    pub row: u32,
    pub col: u32,
    pub packet_type: u32,
    pub id: u32,
}

impl PacketHeader {
    pub fn parse(word: u32) -> Self {
        let raw = PacketHeaderWord(word);
        Self {
            valid: has_odd_parity(word) && raw.reserved_bits_clear(),
            row: raw.row(),
            col: raw.col(),
            packet_type: raw.packet_type(),
            id: raw.stream_id(),
        }
    }

    pub fn tile(&self) -> TileLocation {
        TileLocation::new(self.row as i32, self.col as i32)
    }
}

/// Split a capture into word tokens, one per line.
///
/// Surrounding whitespace is stripped, so a blank line (including the one
/// produced by a trailing newline) becomes an empty token.
pub fn tokenize(capture: &str) -> Vec<&str> {
    capture.split('\n').map(str::trim).collect()
}

/// Reject captures the trace unit never wrote to.
pub fn check_capture(tokens: &[&str]) -> Result<()> {
    debug!(
        "capture has {} tokens, first {:?}",
        tokens.len(),
        tokens.first()
    );
    if tokens.len() < 2 || tokens[0] == EMPTY_CAPTURE_WORD {
        return Err(TraceError::InvalidTraceFile);
    }
    Ok(())
}

/// Parse a hex token into a word, reporting its position on failure.
pub fn parse_word(index: usize, token: &str) -> Result<u32> {
    u32::from_str_radix(token, 16).map_err(|_| TraceError::InvalidWord {
        index,
        token: token.to_string(),
    })
}

/// Sort payload words into per-lane buckets.
///
/// Every eighth token (starting at the first) is a packet header. A valid
/// header selects the lane for the seven tokens that follow it. An invalid
/// header keeps the previous lane, so its payload lands wherever the last
/// valid header pointed. Payload seen before any valid header has no lane
/// and is dropped with a warning. The first empty token ends the capture.
pub fn demultiplex<'a>(tokens: &[&'a str]) -> Result<LaneMap<Vec<&'a str>>> {
    let mut lanes: LaneMap<Vec<&'a str>> = LaneMap::new();
    let mut current: Option<LaneKey> = None;
    let mut orphaned = 0usize;
    let mut invalid_headers = 0usize;

    for (index, token) in tokens.iter().copied().enumerate() {
        if token.is_empty() {
            break;
        }

        if index % PACKET_BLOCK_WORDS == 0 {
            let word = parse_word(index, token)?;
            let header = PacketHeader::parse(word);
            if !header.valid {
                invalid_headers += 1;
                continue;
            }
            let trace_type = TraceType::from_code(header.packet_type).ok_or(
                TraceError::UnknownPacketType {
                    index,
                    header: word,
                    packet_type: header.packet_type,
                },
            )?;
            let key = LaneKey::new(trace_type, header.tile());
            lanes.get_or_insert_with(key, Vec::new);
            current = Some(key);
            continue;
        }

        match current {
            Some(key) => lanes.get_or_insert_with(key, Vec::new).push(token),
            None => orphaned += 1,
        }
    }

    if invalid_headers > 0 {
        debug!("{invalid_headers} invalid packet headers, payload kept on previous lane");
    }
    if orphaned > 0 {
        warn!("Dropped {orphaned} payload words preceding the first valid packet header");
    }
    for (key, words) in lanes.iter() {
        debug!("{key}: {} raw words", words.len());
    }

    Ok(lanes)
}
