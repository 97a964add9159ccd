//! Shared constants for trace decoding.

use std::sync::LazyLock;

use regex::Regex;

/// Number of words in a header-aligned packet block (header + payload).
pub const PACKET_BLOCK_WORDS: usize = 8;

/// Word the trace unit emits when it has nothing to report.
pub const IDLE_WORD: &str = "a5a5a5a5";

/// A capture starting with this word was never written by the hardware.
pub const EMPTY_CAPTURE_WORD: &str = "00000000";

/// Number of configurable event slots per trace unit.
pub const NUM_EVENT_SLOTS: usize = 8;

/// Number of active-event flags tracked per lane during replay.
pub const NUM_ACTIVE_FLAGS: usize = 16;

/// Cycles added on every event sync. The documented rollover period is off
/// by one bit; 0x3FFFF matches what the hardware actually does.
pub const EVENT_SYNC_CYCLES: u64 = 0x3FFFF;

/// Trace_Event0 register of the core module. Also used by shim tiles (row 0).
pub const CORE_TRACE_EVENT0: u64 = 0x340E0;
/// Trace_Event1 register of the core module.
pub const CORE_TRACE_EVENT1: u64 = 0x340E4;
/// Trace_Event0 register of the memory module.
pub const MEM_TRACE_EVENT0: u64 = 0x140E0;
/// Trace_Event1 register of the memory module.
pub const MEM_TRACE_EVENT1: u64 = 0x140E4;
/// Trace_Event0 register of a memory tile.
pub const MEMTILE_TRACE_EVENT0: u64 = 0x940E0;
/// Trace_Event1 register of a memory tile.
pub const MEMTILE_TRACE_EVENT1: u64 = 0x940E4;

/// Where users are pointed when a capture turns out to be empty.
pub const TRACE_DEBUG_HINTS_URL: &str = "https://github.com/Xilinx/mlir-aie/tree/main/programming_guide/section-4/section-4b#Additional-Debug-Hints";

/// Register write op carrying four `name = value : type` arguments.
/// Groups come in triples per argument: name, optional `0x`, digits.
pub static WRITE32_RE: LazyLock<Regex> = LazyLock::new(|| {
    let arg = r"(\w+)\s*=\s*(0x)?(\w+)\s*:\s*\w+";
    Regex::new(&format!(
        r"aiex.npu.write32\s*\{{\s*{arg}\s*,\s*{arg}\s*,\s*{arg}\s*,\s*{arg}\s*\}}"
    ))
    .expect("Invalid write32 regex pattern")
});
