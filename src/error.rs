use crate::trace::{LaneKey, TraceType};

/// Fatal conditions of a trace conversion.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("Empty trace file. Valid trace was not written")]
    InvalidTraceFile,

    #[error("Invalid packet type {packet_type} in header 0x{header:08x} at word {index}")]
    UnknownPacketType {
        index: usize,
        header: u32,
        packet_type: u32,
    },

    #[error("Invalid trace word {token:?} at word {index}")]
    InvalidWord { index: usize, token: String },

    #[error("Invalid value {value:?} for argument `{arg}` on line {line}")]
    InvalidIrArgument {
        line: usize,
        arg: String,
        value: String,
    },

    #[error("{lane} has trace packets but no trace event configuration")]
    MissingTileMetadata {
        lane: LaneKey,
        known: Vec<LaneKey>,
    },

    #[error("Event code {code} defined twice for {trace_type}")]
    DuplicateEventCode { trace_type: TraceType, code: u8 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = TraceError> = std::result::Result<T, E>;
