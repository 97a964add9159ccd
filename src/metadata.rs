//! Trace metadata recovered from the MLIR source.
//!
//! The trace unit is configured by register writes in the runtime sequence.
//! The two Trace_Event registers of a module select which hardware events
//! feed its eight trace slots, one byte per slot. Scanning those writes tells
//! us which event each slot of a decoded lane stands for.

use regex::Captures;
use tracing::debug;

use crate::error::{Result, TraceError};
use crate::events::EventNames;
use crate::output::TraceEvent;
use crate::trace::constants::{
    CORE_TRACE_EVENT0, CORE_TRACE_EVENT1, MEMTILE_TRACE_EVENT0, MEMTILE_TRACE_EVENT1,
    MEM_TRACE_EVENT0, MEM_TRACE_EVENT1, NUM_EVENT_SLOTS, WRITE32_RE,
};
use crate::trace::{LaneKey, LaneMap, TileLocation, TraceType};

/// Event code selected for each slot of one lane.
///
/// `None` marks a slot whose Trace_Event register was never written.
pub type SlotCodes = [Option<u8>; NUM_EVENT_SLOTS];

/// Event selection of one lane plus the timeline process id assigned to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventCodeTable {
    pub slots: SlotCodes,
    pub pid: u32,
}

impl EventCodeTable {
    /// Event code of a slot, `None` if unconfigured or out of range.
    pub fn code(&self, slot: usize) -> Option<u8> {
        self.slots.get(slot).copied().flatten()
    }
}

/// One `aiex.npu.write32` op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterWrite {
    pub address: u64,
    pub row: i32,
    pub col: i32,
    pub value: u64,
}

impl RegisterWrite {
    /// Lane and first slot configured by this write, if it targets a
    /// Trace_Event register. Row 0 holds shim tiles, whose trace unit shares
    /// the core module's register offsets.
    pub fn trace_target(&self) -> Option<(LaneKey, usize)> {
        let core_or_shim = if self.row == 0 {
            TraceType::Shim
        } else {
            TraceType::Core
        };
        let (trace_type, first_slot) = match self.address {
            CORE_TRACE_EVENT0 => (core_or_shim, 0),
            CORE_TRACE_EVENT1 => (core_or_shim, 4),
            MEM_TRACE_EVENT0 => (TraceType::Memory, 0),
            MEM_TRACE_EVENT1 => (TraceType::Memory, 4),
            MEMTILE_TRACE_EVENT0 => (TraceType::MemTile, 0),
            MEMTILE_TRACE_EVENT1 => (TraceType::MemTile, 4),
            _ => return None,
        };
        let tile = TileLocation::new(self.row, self.col);
        Some((LaneKey::new(trace_type, tile), first_slot))
    }
}

/// Resolved metadata of every configured lane.
#[derive(Clone, Debug, Default)]
pub struct TraceMetadata {
    lanes: LaneMap<EventCodeTable>,
}

impl TraceMetadata {
    /// Assign process ids in lane order, starting at 0.
    pub fn from_slot_codes(codes: &LaneMap<SlotCodes>) -> Self {
        let mut lanes = LaneMap::new();
        for (pid, (key, slots)) in codes.iter().enumerate() {
            lanes.insert(
                *key,
                EventCodeTable {
                    slots: *slots,
                    pid: pid as u32,
                },
            );
        }
        Self { lanes }
    }

    pub fn get(&self, key: &LaneKey) -> Option<&EventCodeTable> {
        self.lanes.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LaneKey, &EventCodeTable)> {
        self.lanes.iter()
    }

    /// Every configured lane, in pid order.
    pub fn known_lanes(&self) -> Vec<LaneKey> {
        self.lanes.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Append process and thread naming records for every lane.
    pub fn emit_naming_events(&self, names: &EventNames, out: &mut Vec<TraceEvent>) {
        for (key, table) in self.iter() {
            out.push(TraceEvent::process_name(
                table.pid,
                format!("{} for tile{}", key.trace_type.label(), key.tile),
            ));
            for slot in 0..NUM_EVENT_SLOTS {
                out.push(TraceEvent::thread_name(
                    table.pid,
                    slot as u32,
                    names.slot_name(key.trace_type, table.code(slot)),
                ));
            }
        }
    }
}

/// Scans MLIR text for trace event configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetadataResolver {
    colshift: i32,
}

impl MetadataResolver {
    /// `colshift` is added to every column number read from the MLIR.
    pub fn new(colshift: i32) -> Self {
        Self { colshift }
    }

    /// Collect the register writes of every matching line.
    pub fn register_writes(&self, text: &str) -> Result<Vec<RegisterWrite>> {
        let mut writes = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if let Some(caps) = WRITE32_RE.captures(line) {
                writes.push(self.parse_write(index + 1, &caps)?);
            }
        }
        Ok(writes)
    }

    /// Build the per-lane event tables and assign process ids.
    pub fn resolve(&self, text: &str) -> Result<TraceMetadata> {
        let mut codes: LaneMap<SlotCodes> = LaneMap::new();
        for write in self.register_writes(text)? {
            let Some((key, first_slot)) = write.trace_target() else {
                continue;
            };
            let slots = codes.get_or_insert_with(key, || [None; NUM_EVENT_SLOTS]);
            // Little endian: the lowest byte configures the lowest slot.
            for (offset, byte) in write.value.to_le_bytes()[..4].iter().enumerate() {
                slots[first_slot + offset] = Some(*byte);
            }
        }

        let metadata = TraceMetadata::from_slot_codes(&codes);
        for (key, table) in metadata.iter() {
            debug!("{key}: pid {} slots {:?}", table.pid, table.slots);
        }
        Ok(metadata)
    }

    fn parse_write(&self, line: usize, caps: &Captures<'_>) -> Result<RegisterWrite> {
        let mut write = RegisterWrite::default();
        for arg in 0..4 {
            let name = &caps[3 * arg + 1];
            let hex = caps.get(3 * arg + 2).is_some();
            let digits = &caps[3 * arg + 3];
            let invalid = || TraceError::InvalidIrArgument {
                line,
                arg: name.to_string(),
                value: digits.to_string(),
            };
            let value = parse_int(hex, digits).ok_or_else(invalid)?;
            match name {
                "address" => write.address = value as u64,
                "row" => write.row = i32::try_from(value).map_err(|_| invalid())?,
                "column" => {
                    write.col = i32::try_from(value)
                        .ok()
                        .and_then(|col| col.checked_add(self.colshift))
                        .ok_or_else(invalid)?
                }
                "value" => write.value = value as u64,
                _ => {}
            }
        }
        Ok(write)
    }
}

fn parse_int(hex: bool, digits: &str) -> Option<i64> {
    if hex {
        i64::from_str_radix(digits, 16).ok()
    } else {
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Phase;

    fn write32(address: &str, row: &str, column: &str, value: &str) -> String {
        format!(
            "      aiex.npu.write32 {{address = {address} : ui32, column = {column} : i32, row = {row} : i32, value = {value} : ui32}}"
        )
    }

    fn lane(trace_type: TraceType, row: i32, col: i32) -> LaneKey {
        LaneKey::new(trace_type, TileLocation::new(row, col))
    }

    #[test]
    fn test_shim_row_zero() {
        let text = write32("0x340e0", "0", "2", "0x03020100");
        let metadata = MetadataResolver::new(0).resolve(&text).unwrap();
        let table = metadata.get(&lane(TraceType::Shim, 0, 2)).unwrap();
        assert_eq!(
            table.slots,
            [Some(0), Some(1), Some(2), Some(3), None, None, None, None]
        );
        assert!(metadata.get(&lane(TraceType::Core, 0, 2)).is_none());
    }

    #[test]
    fn test_core_both_registers() {
        let text = [
            write32("213216", "2", "0", "0x4B222125"),
            write32("213220", "2", "0", "0x2D2C1A4F"),
        ]
        .join("\n");
        let metadata = MetadataResolver::new(0).resolve(&text).unwrap();
        let table = metadata.get(&lane(TraceType::Core, 2, 0)).unwrap();
        assert_eq!(
            table.slots.map(|code| code.unwrap()),
            [0x25, 0x21, 0x22, 0x4B, 0x4F, 0x1A, 0x2C, 0x2D]
        );
        assert_eq!(table.pid, 0);
    }

    #[test]
    fn test_argument_order_and_colshift() {
        let text = "aiex.npu.write32 {value = 0x01 : ui32, row = 1 : i32, address = 0x940e4 : ui32, column = 0 : i32}";
        let metadata = MetadataResolver::new(1).resolve(text).unwrap();
        let table = metadata.get(&lane(TraceType::MemTile, 1, 1)).unwrap();
        assert_eq!(table.code(4), Some(1));
        assert_eq!(table.code(5), Some(0));
        assert_eq!(table.code(0), None);
        assert_eq!(table.code(9), None);
    }

    #[test]
    fn test_negative_colshift() {
        let text = write32("0x140e0", "2", "0", "0");
        let metadata = MetadataResolver::new(-1).resolve(&text).unwrap();
        assert!(metadata.get(&lane(TraceType::Memory, 2, -1)).is_some());
    }

    #[test]
    fn test_pids_follow_trace_type_then_discovery() {
        let text = [
            write32("0x940e0", "1", "0", "0"),
            write32("0x340e0", "3", "0", "0"),
            write32("0x340e0", "0", "0", "0"),
            write32("0x340e0", "2", "0", "0"),
            write32("0x140e0", "2", "0", "0"),
            write32("0x340e4", "3", "0", "0"),
        ]
        .join("\n");
        let metadata = MetadataResolver::new(0).resolve(&text).unwrap();
        let pids: Vec<(LaneKey, u32)> = metadata.iter().map(|(k, t)| (*k, t.pid)).collect();
        assert_eq!(
            pids,
            vec![
                (lane(TraceType::Core, 3, 0), 0),
                (lane(TraceType::Core, 2, 0), 1),
                (lane(TraceType::Memory, 2, 0), 2),
                (lane(TraceType::Shim, 0, 0), 3),
                (lane(TraceType::MemTile, 1, 0), 4),
            ]
        );
    }

    #[test]
    fn test_unrelated_lines_ignored() {
        let text = [
            "module {".to_string(),
            write32("0x1d204", "0", "0", "0x1"),
            "  aiex.npu.write32 {address = 0x340e0 : ui32}".to_string(),
            "}".to_string(),
        ]
        .join("\n");
        let metadata = MetadataResolver::new(0).resolve(&text).unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_bad_decimal_argument() {
        let text = format!("\n{}", write32("0x340e0", "two", "0", "0"));
        let err = MetadataResolver::new(0).resolve(&text).unwrap_err();
        match err {
            TraceError::InvalidIrArgument { line, arg, value } => {
                assert_eq!(line, 2);
                assert_eq!(arg, "row");
                assert_eq!(value, "two");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_naming_events() {
        let text = write32("0x340e0", "2", "0", "0x0000251a");
        let metadata = MetadataResolver::new(0).resolve(&text).unwrap();
        let names = EventNames::new().unwrap();
        let mut out = Vec::new();
        metadata.emit_naming_events(&names, &mut out);

        assert_eq!(out.len(), 9);
        assert_eq!(out[0].ph, Phase::Metadata);
        assert_eq!(out[0].name, "process_name");
        assert_eq!(
            out[0].args.name.as_deref(),
            Some("core_trace for tile2,0")
        );
        assert_eq!(out[1].tid, Some(0));
        assert_eq!(out[1].args.name.as_deref(), Some("LOCK_STALL"));
        assert_eq!(out[2].args.name.as_deref(), Some("INSTR_VECTOR"));
        assert_eq!(out[3].args.name.as_deref(), Some("NONE"));
        assert_eq!(out[5].args.name.as_deref(), Some("Unknown"));
    }
}
