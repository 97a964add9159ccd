//! Event code to name resolution.
//!
//! Each trace unit kind has its own event numbering. The tables in [`codes`]
//! are expanded once into a dense 256-entry lookup per trace type, so every
//! 8-bit code resolves to either a known name or [`UNKNOWN_EVENT`].

pub mod codes;

use crate::error::{Result, TraceError};
use crate::trace::TraceType;

/// Name given to codes missing from the table of their trace type.
pub const UNKNOWN_EVENT: &str = "Unknown";

/// Dense code -> name table for one trace type.
#[derive(Clone, Debug)]
struct EventNameTable {
    names: [Option<&'static str>; 256],
}

impl EventNameTable {
    fn build(trace_type: TraceType, entries: &[(u8, &'static str)]) -> Result<Self> {
        let mut names = [None; 256];
        for &(code, name) in entries {
            let slot = &mut names[usize::from(code)];
            if slot.is_some() {
                return Err(TraceError::DuplicateEventCode { trace_type, code });
            }
            *slot = Some(name);
        }
        Ok(Self { names })
    }

    fn lookup(&self, code: u8) -> Option<&'static str> {
        self.names[usize::from(code)]
    }
}

/// Event name tables for all trace types.
#[derive(Clone, Debug)]
pub struct EventNames {
    tables: [EventNameTable; 4],
}

impl EventNames {
    /// Build the tables from the built-in code lists.
    pub fn new() -> Result<Self> {
        Self::from_entries([
            codes::CORE_EVENTS,
            codes::MEM_EVENTS,
            codes::SHIM_EVENTS,
            codes::MEMTILE_EVENTS,
        ])
    }

    /// Build the tables from explicit code lists, indexed by trace type code.
    pub fn from_entries(entries: [&[(u8, &'static str)]; 4]) -> Result<Self> {
        let [core, mem, shim, memtile] = entries;
        Ok(Self {
            tables: [
                EventNameTable::build(TraceType::Core, core)?,
                EventNameTable::build(TraceType::Memory, mem)?,
                EventNameTable::build(TraceType::Shim, shim)?,
                EventNameTable::build(TraceType::MemTile, memtile)?,
            ],
        })
    }

    /// Resolve a code, falling back to [`UNKNOWN_EVENT`].
    pub fn name(&self, trace_type: TraceType, code: u8) -> &'static str {
        self.tables[trace_type.code() as usize]
            .lookup(code)
            .unwrap_or(UNKNOWN_EVENT)
    }

    /// Resolve an optional code; an unconfigured slot is unknown as well.
    pub fn slot_name(&self, trace_type: TraceType, code: Option<u8>) -> &'static str {
        code.map_or(UNKNOWN_EVENT, |code| self.name(trace_type, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_consistent() {
        let names = EventNames::new().expect("built-in tables must not repeat codes");
        assert_eq!(names.name(TraceType::Core, 0), "NONE");
        assert_eq!(names.name(TraceType::Core, 0x18), "STREAM_STALL");
        assert_eq!(names.name(TraceType::Core, 0x1A), "LOCK_STALL");
        assert_eq!(names.name(TraceType::Core, 0x25), "INSTR_VECTOR");
        assert_eq!(names.name(TraceType::Core, 0x2C), "INSTR_LOCK_ACQUIRE_REQ");
        assert_eq!(names.name(TraceType::Core, 0x2D), "INSTR_LOCK_RELEASE_REQ");
        assert_eq!(names.name(TraceType::Core, 0x4B), "PORT_RUNNING_0");
        assert_eq!(names.name(TraceType::Core, 0x4F), "PORT_RUNNING_1");
        assert_eq!(names.name(TraceType::Memory, 21), "DMA_S2MM_0_START_TASK");
    }

    #[test]
    fn test_unknown_codes() {
        let names = EventNames::new().unwrap();
        assert_eq!(names.name(TraceType::Core, 54), UNKNOWN_EVENT);
        assert_eq!(names.name(TraceType::Core, 255), UNKNOWN_EVENT);
        assert_eq!(names.slot_name(TraceType::Shim, None), UNKNOWN_EVENT);
    }

    #[test]
    fn test_every_code_resolves() {
        let names = EventNames::new().unwrap();
        for trace_type in TraceType::ALL {
            for code in 0..=255u8 {
                assert!(!names.name(trace_type, code).is_empty());
            }
        }
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let dup: &[(u8, &str)] = &[(1, "A"), (1, "B")];
        let err = EventNames::from_entries([&[], &[], dup, &[]]).unwrap_err();
        assert!(matches!(
            err,
            TraceError::DuplicateEventCode {
                trace_type: TraceType::Shim,
                code: 1
            }
        ));
    }
}
