//! Common test utilities for aietrace integration tests.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Idle word padding a packet block.
pub const IDLE: &str = "a5a5a5a5";

/// Core trace header for tile row 2, column 0.
pub const CORE_2_0_HEADER: &str = "00020000";

/// Core Trace_Event0 write for tile 2,0: INSTR_VECTOR, INSTR_EVENT_0,
/// INSTR_EVENT_1 and PORT_RUNNING_0 in slots 0 to 3.
pub const CORE_2_0_MLIR: &str = "module {
  aiex.runtime_sequence(%arg0: memref<4096xi32>) {
    aiex.npu.write32 {address = 213216 : ui32, column = 0 : i32, row = 2 : i32, value = 1260527909 : ui32}
  }
}
";

/// A capture and MLIR file pair in a temporary directory.
pub struct Fixture {
    pub dir: TempDir,
    pub trace: PathBuf,
    pub mlir: PathBuf,
}

impl Fixture {
    pub fn new(capture: &str, mlir: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let trace = dir.path().join("trace.txt");
        let mlir_path = dir.path().join("aie.mlir");
        fs::write(&trace, capture).expect("Failed to write trace file");
        fs::write(&mlir_path, mlir).expect("Failed to write MLIR file");
        Fixture {
            dir,
            trace,
            mlir: mlir_path,
        }
    }

    /// Run aietrace on this fixture with extra arguments.
    pub fn run(&self, extra: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_aietrace"))
            .arg("--filename")
            .arg(&self.trace)
            .arg("--mlir")
            .arg(&self.mlir)
            .args(extra)
            .output()
            .expect("Failed to run aietrace")
    }
}

/// One packet block: the header followed by seven payload words, padded
/// with idle words.
pub fn block(header: &str, payload: &[&str]) -> Vec<String> {
    assert!(payload.len() <= 7, "a block carries seven payload words");
    let mut words = vec![header.to_string()];
    words.extend(payload.iter().map(|word| word.to_string()));
    words.resize(8, IDLE.to_string());
    words
}

/// Join words into capture text with a trailing newline.
pub fn capture(blocks: &[Vec<String>]) -> String {
    let mut text = blocks.concat().join("\n");
    text.push('\n');
    text
}

/// Parse stdout as the JSON event array.
pub fn parse_events(output: &Output) -> Vec<serde_json::Value> {
    serde_json::from_slice(&output.stdout).expect("stdout is not a JSON array")
}
