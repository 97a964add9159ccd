use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use aietrace::output::{JsonTraceWriter, TraceEvent, TraceOutput};
use aietrace::pipeline::{self, Config};
use aietrace::trace::constants::TRACE_DEBUG_HINTS_URL;
use aietrace::TraceError;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Convert an AI Engine trace capture into Chrome Trace Event Format JSON.
#[derive(Debug, Parser)]
#[command(name = "aietrace", version)]
struct Command {
    /// Trace capture, one hex word per line
    #[arg(long)]
    filename: PathBuf,
    /// MLIR source that configured the trace units
    #[arg(long)]
    mlir: PathBuf,
    /// Added to every column number read from the MLIR
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    colshift: i32,
    /// Dump every decode stage to stderr
    #[arg(long)]
    debug: bool,
    /// Write the JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl From<Command> for Config {
    fn from(opts: Command) -> Self {
        Config {
            trace_path: opts.filename,
            mlir_path: opts.mlir,
            colshift: opts.colshift,
            debug: opts.debug,
            output: opts.output,
            ..Config::default()
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_events(config: &Config, events: &[TraceEvent]) -> Result<()> {
    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            JsonTraceWriter::new(BufWriter::new(file)).write_events(events)?;
        }
        None => {
            JsonTraceWriter::new(io::stdout().lock()).write_events(events)?;
        }
    }
    Ok(())
}

fn report(config: &Config, err: &anyhow::Error) {
    match err.downcast_ref::<TraceError>() {
        Some(TraceError::InvalidTraceFile) => {
            eprintln!(
                "[ERROR] Empty trace file. Valid trace was not written to {}",
                config.trace_path.display()
            );
            eprintln!("See {TRACE_DEBUG_HINTS_URL} for debug hints.");
        }
        Some(TraceError::MissingTileMetadata { lane, known }) => {
            eprintln!("[ERROR] {lane} has trace packets but no trace event configuration");
            let tiles: Vec<String> = known.iter().map(ToString::to_string).collect();
            eprintln!("Defined tiles in design are at: [{}]", tiles.join("; "));
            eprintln!("Consider changing --colshift value if you think this is an error.");
        }
        _ => eprintln!("[ERROR] {err:#}"),
    }
}

fn main() {
    let opts = Command::parse();
    init_logging(opts.debug);

    let config = Config::from(opts);
    let result = pipeline::run(&config).and_then(|conversion| write_events(&config, &conversion.events));
    if let Err(err) = result {
        report(&config, &err);
        process::exit(1);
    }
}
