//! End-to-end conversion from a raw capture to trace event records.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use crate::bytestream::build_byte_streams;
use crate::command::decode_lanes;
use crate::error::Result;
use crate::events::EventNames;
use crate::metadata::MetadataResolver;
use crate::output::TraceEvent;
use crate::packet::{check_capture, demultiplex, tokenize};
use crate::timeline::EventTimelineBuilder;

/// Runtime options of one conversion, separated from CLI parsing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw trace capture, one hex word per line
    pub trace_path: PathBuf,
    /// MLIR source holding the trace unit configuration
    pub mlir_path: PathBuf,
    /// Added to every column read from the MLIR
    pub colshift: i32,
    /// Verbose per-stage dumps
    pub debug: bool,
    /// Decode the timer value carried by Start commands
    pub reconstruct_start_timer: bool,
    /// Write the JSON here instead of stdout
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trace_path: PathBuf::from("trace.txt"),
            mlir_path: PathBuf::from("aie.mlir"),
            colshift: 0,
            debug: false,
            reconstruct_start_timer: true,
            output: None,
        }
    }
}

/// Counts gathered along the way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub words: usize,
    pub lanes: usize,
    pub bytes: usize,
    pub commands: usize,
    pub configured_lanes: usize,
    pub spans: usize,
}

/// Result of a conversion: metadata records first, then spans.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub events: Vec<TraceEvent>,
    pub stats: PipelineStats,
}

/// Convert capture text plus MLIR text into trace events.
pub fn convert(capture: &str, mlir: &str, config: &Config) -> Result<Conversion> {
    let mut stats = PipelineStats::default();

    let tokens = tokenize(capture);
    check_capture(&tokens)?;

    let words = demultiplex(&tokens)?;
    stats.words = words.iter().map(|(_, lane)| lane.len()).sum();
    stats.lanes = words.len();

    let streams = build_byte_streams(&words)?;
    stats.bytes = streams.iter().map(|(_, bytes)| bytes.len()).sum();

    let commands = decode_lanes(&streams, config.reconstruct_start_timer);
    stats.commands = commands.iter().map(|(_, lane)| lane.len()).sum();

    let names = EventNames::new()?;
    let metadata = MetadataResolver::new(config.colshift).resolve(mlir)?;
    stats.configured_lanes = metadata.len();

    let mut events = Vec::new();
    metadata.emit_naming_events(&names, &mut events);
    let naming = events.len();
    EventTimelineBuilder::new(&metadata, &names).build(&commands, &mut events)?;
    stats.spans = events.len() - naming;

    info!(
        "{} lanes, {} bytes, {} commands, {} configured lanes, {} spans",
        stats.lanes, stats.bytes, stats.commands, stats.configured_lanes, stats.spans
    );
    Ok(Conversion { events, stats })
}

/// Read both input files and convert them.
pub fn run(config: &Config) -> anyhow::Result<Conversion> {
    let capture = fs::read_to_string(&config.trace_path)
        .with_context(|| format!("Failed to read trace file {}", config.trace_path.display()))?;
    let mlir = fs::read_to_string(&config.mlir_path)
        .with_context(|| format!("Failed to read MLIR file {}", config.mlir_path.display()))?;
    Ok(convert(&capture, &mlir, config)?)
}
