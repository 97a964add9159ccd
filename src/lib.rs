//! aietrace library - decoding of AI Engine hardware trace captures.
//!
//! A capture is a list of 32-bit words produced by the trace units of one or
//! more tiles. This library turns it into Chrome Trace Event Format records
//! that a timeline viewer such as Perfetto can open.
//!
//! # Modules
//!
//! - [`packet`] - Packet header parsing and per-lane demultiplexing
//! - [`bytestream`] - Lane words to big-endian byte streams
//! - [`command`] - Trace command decoding
//! - [`metadata`] - Event slot configuration recovered from MLIR
//! - [`events`] - Event code to name tables
//! - [`timeline`] - Command replay into Begin/End spans
//! - [`output`] - Trace event records and JSON output
//! - [`pipeline`] - End-to-end conversion
//!
//! # Example
//!
//! ```no_run
//! use aietrace::pipeline::{convert, Config};
//! use aietrace::output::to_json;
//!
//! let capture = std::fs::read_to_string("trace.txt").unwrap();
//! let mlir = std::fs::read_to_string("aie.mlir").unwrap();
//! let conversion = convert(&capture, &mlir, &Config::default()).unwrap();
//! println!("{}", to_json(&conversion.events).unwrap());
//! ```

pub mod bytestream;
pub mod command;
pub mod error;
pub mod events;
pub mod metadata;
pub mod output;
pub mod packet;
pub mod pipeline;
pub mod timeline;
pub mod trace;

pub use error::{Result, TraceError};
pub use pipeline::{convert, Config, Conversion};
