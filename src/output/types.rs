//! Chrome Trace Event Format records.

use serde::Serialize;

/// Event phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    #[serde(rename = "B")]
    Begin,
    #[serde(rename = "E")]
    End,
    #[serde(rename = "M")]
    Metadata,
}

/// Event arguments. Only metadata records carry a name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EventArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One record of the output array.
///
/// `pid` and `tid` are grouping keys for the viewer: one process per lane,
/// one thread per event slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceEvent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<u64>,
    pub ph: Phase,
    pub pid: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<u32>,
    pub args: EventArgs,
}

impl TraceEvent {
    pub fn begin(name: &str, ts: u64, pid: u32, tid: u32) -> Self {
        Self::span(name, Phase::Begin, ts, pid, tid)
    }

    pub fn end(name: &str, ts: u64, pid: u32, tid: u32) -> Self {
        Self::span(name, Phase::End, ts, pid, tid)
    }

    fn span(name: &str, ph: Phase, ts: u64, pid: u32, tid: u32) -> Self {
        Self {
            name: name.to_string(),
            ts: Some(ts),
            ph,
            pid,
            tid: Some(tid),
            args: EventArgs::default(),
        }
    }

    pub fn process_name(pid: u32, name: String) -> Self {
        Self {
            name: "process_name".to_string(),
            ts: None,
            ph: Phase::Metadata,
            pid,
            tid: None,
            args: EventArgs { name: Some(name) },
        }
    }

    pub fn thread_name(pid: u32, tid: u32, name: &str) -> Self {
        Self {
            name: "thread_name".to_string(),
            ts: None,
            ph: Phase::Metadata,
            pid,
            tid: Some(tid),
            args: EventArgs {
                name: Some(name.to_string()),
            },
        }
    }

    pub fn is_span(&self) -> bool {
        matches!(self.ph, Phase::Begin | Phase::End)
    }
}
