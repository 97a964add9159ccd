//! Trace command decoding.
//!
//! A trace unit compresses its event stream into variable-length commands.
//! The opcode lives in the high bits of the first byte:
//!
//! | first byte  | bytes | command                      |
//! |-------------|-------|------------------------------|
//! | `xxx1 0000` | 8     | start, 56-bit timer value    |
//! | `1101 11xx` | 4     | clock marker, ignored        |
//! | `0xxx xxxx` | 1     | single event, 4-bit cycles   |
//! | `100x xxxx` | 2     | single event, 10-bit cycles  |
//! | `101x xxxx` | 3     | single event, 18-bit cycles  |
//! | `1100 xxxx` | 2     | multiple events, 4-bit cycles  |
//! | `1101 00xx` | 3     | multiple events, 10-bit cycles |
//! | `1101 01xx` | 4     | multiple events, 18-bit cycles |
//! | `1110 xxxx` | 1     | repeat, 4-bit count          |
//! | `1101 10xx` | 2     | repeat, 10-bit count         |
//! | `1111 1110` | 1     | filler, ignored              |
//! | `1111 1111` | 1     | event sync                   |
//!
//! Decoding does not pick one row per step. Every row is probed in table
//! order against the current cursor, and a match moves the cursor before the
//! next row is probed, so one step can emit several adjacent commands.

use std::fmt;

use tracing::{debug, warn};

use crate::trace::LaneMap;

/// Set of event slots that fired together, bit `i` meaning slot `i`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EventSlots(u8);

impl EventSlots {
    pub fn from_mask(mask: u8) -> Self {
        Self(mask)
    }

    pub fn single(slot: u8) -> Self {
        Self(1 << (slot & 0x7))
    }

    pub fn mask(self) -> u8 {
        self.0
    }

    pub fn contains(self, slot: usize) -> bool {
        slot < 8 && self.0 & (1 << slot) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Slots in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..8u8).filter(move |slot| self.0 & (1 << slot) != 0)
    }
}

impl fmt::Debug for EventSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// One decoded trace command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start { timer_value: u64 },
    Single0 { slot: u8, cycles: u32 },
    Single1 { slot: u8, cycles: u32 },
    Single2 { slot: u8, cycles: u32 },
    Multiple0 { cycles: u32, slots: EventSlots },
    Multiple1 { cycles: u32, slots: EventSlots },
    Multiple2 { cycles: u32, slots: EventSlots },
    Repeat0 { repeats: u32 },
    Repeat1 { repeats: u32 },
    EventSync,
}

/// The cursor ran past the end of the byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Exhausted;

/// Decoder over one lane's byte stream.
pub struct CommandDecoder<'a> {
    data: &'a [u8],
    pos: usize,
    reconstruct_start_timer: bool,
    skipped: usize,
}

impl<'a> CommandDecoder<'a> {
    /// Create a decoder. When `reconstruct_start_timer` is false, `Start`
    /// commands report a timer value of 0 and their operand bytes are not
    /// read.
    pub fn new(data: &'a [u8], reconstruct_start_timer: bool) -> Self {
        Self {
            data,
            pos: 0,
            reconstruct_start_timer,
            skipped: 0,
        }
    }

    /// Cursor position in bytes. May exceed the stream length once a
    /// `Start` command has been skipped over the end.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes skipped because no command starts with them.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Decode until the stream is exhausted.
    pub fn decode(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        loop {
            let before = self.pos;
            match self.step(&mut commands) {
                Ok(()) if self.pos == before => {
                    // No probe matched, step over the byte.
                    self.skipped += 1;
                    self.pos += 1;
                }
                Ok(()) => {}
                Err(Exhausted) => break,
            }
        }
        if self.skipped > 0 {
            warn!("Skipped {} unrecognized trace command bytes", self.skipped);
        }
        commands
    }

    fn bytes<const N: usize>(&self) -> Result<[u8; N], Exhausted> {
        self.data
            .get(self.pos..self.pos + N)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(Exhausted)
    }

    fn probe(&self, mask: u8, pattern: u8) -> Result<bool, Exhausted> {
        let [byte] = self.bytes::<1>()?;
        Ok(byte & mask == pattern)
    }

    /// Run every probe once, in table order.
    fn step(&mut self, out: &mut Vec<Command>) -> Result<(), Exhausted> {
        if self.probe(0b1111_1011, 0b1111_0000)? {
            let mut timer_value = 0;
            if self.reconstruct_start_timer {
                let [_, timer @ ..] = self.bytes::<8>()?;
                timer_value = timer
                    .iter()
                    .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
            }
            out.push(Command::Start { timer_value });
            self.pos += 8;
        }
        if self.probe(0b1111_1100, 0b1101_1100)? {
            self.pos += 4;
        }
        if self.probe(0b1000_0000, 0b0000_0000)? {
            let [b0] = self.bytes::<1>()?;
            out.push(Command::Single0 {
                slot: (b0 >> 4) & 0b111,
                cycles: u32::from(b0 & 0b1111),
            });
            self.pos += 1;
        }
        if self.probe(0b1110_0000, 0b1000_0000)? {
            let [b0, b1] = self.bytes::<2>()?;
            out.push(Command::Single1 {
                slot: (b0 >> 2) & 0b111,
                cycles: (u32::from(b0 & 0b11) << 8) | u32::from(b1),
            });
            self.pos += 2;
        }
        if self.probe(0b1110_0000, 0b1010_0000)? {
            let [b0, b1, b2] = self.bytes::<3>()?;
            out.push(Command::Single2 {
                slot: (b0 >> 2) & 0b111,
                cycles: (u32::from(b0 & 0b11) << 16) | (u32::from(b1) << 8) | u32::from(b2),
            });
            self.pos += 3;
        }
        if self.probe(0b1111_0000, 0b1100_0000)? {
            let [b0, b1] = self.bytes::<2>()?;
            out.push(Command::Multiple0 {
                cycles: u32::from(b1 & 0b1111),
                slots: EventSlots::from_mask(((b0 & 0b1111) << 4) | (b1 >> 4)),
            });
            self.pos += 2;
        }
        if self.probe(0b1111_1100, 0b1101_0000)? {
            let [b0, b1, b2] = self.bytes::<3>()?;
            out.push(Command::Multiple1 {
                cycles: (u32::from(b1 & 0b11) << 8) | u32::from(b2),
                slots: EventSlots::from_mask(((b0 & 0b11) << 6) | (b1 >> 2)),
            });
            self.pos += 3;
        }
        if self.probe(0b1111_1100, 0b1101_0100)? {
            let [b0, b1, b2, b3] = self.bytes::<4>()?;
            out.push(Command::Multiple2 {
                cycles: (u32::from(b1 & 0b11) << 16) | (u32::from(b2) << 8) | u32::from(b3),
                slots: EventSlots::from_mask(((b0 & 0b11) << 6) | (b1 >> 2)),
            });
            self.pos += 4;
        }
        if self.probe(0b1111_0000, 0b1110_0000)? {
            let [b0] = self.bytes::<1>()?;
            out.push(Command::Repeat0 {
                repeats: u32::from(b0 & 0b1111),
            });
            self.pos += 1;
        }
        if self.probe(0b1111_1100, 0b1101_1000)? {
            let [b0, b1] = self.bytes::<2>()?;
            out.push(Command::Repeat1 {
                repeats: (u32::from(b0 & 0b11) << 8) | u32::from(b1),
            });
            self.pos += 2;
        }
        if self.probe(0b1111_1111, 0b1111_1110)? {
            self.pos += 1;
        }
        if self.probe(0b1111_1111, 0b1111_1111)? {
            out.push(Command::EventSync);
            self.pos += 1;
        }
        Ok(())
    }
}

/// Decode a whole byte stream.
pub fn decode_commands(bytes: &[u8], reconstruct_start_timer: bool) -> Vec<Command> {
    CommandDecoder::new(bytes, reconstruct_start_timer).decode()
}

/// Decode the byte stream of every lane.
pub fn decode_lanes(
    streams: &LaneMap<Vec<u8>>,
    reconstruct_start_timer: bool,
) -> LaneMap<Vec<Command>> {
    let mut lanes = LaneMap::new();
    for (key, bytes) in streams.iter() {
        let commands = decode_commands(bytes, reconstruct_start_timer);
        debug!("{key}: {} commands {commands:?}", commands.len());
        lanes.insert(*key, commands);
    }
    lanes
}

/// Expand repeat commands into copies of the command they repeat.
///
/// Repeats that precede every other command have nothing to copy and are
/// dropped.
pub fn flatten_repeats(commands: &[Command]) -> Vec<Command> {
    let mut flat = Vec::with_capacity(commands.len());
    let mut prev = None;
    for command in commands {
        match *command {
            Command::Repeat0 { repeats } | Command::Repeat1 { repeats } => {
                if let Some(prev) = prev {
                    flat.extend(std::iter::repeat(prev).take(repeats as usize));
                }
            }
            other => {
                flat.push(other);
                prev = Some(other);
            }
        }
    }
    flat
}
