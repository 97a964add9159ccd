//! Output format abstraction layer
//!
//! Decoding produces a flat list of [`TraceEvent`]s. A [`TraceOutput`]
//! decides how that list is written out. The Chrome Trace Event Format JSON
//! array is the only format today.

mod types;

pub use types::*;

use std::io::Write;

use crate::error::Result;

/// Trait for abstracting trace output formats.
pub trait TraceOutput {
    /// Write every event, in order, as one trace.
    fn write_events(&mut self, events: &[TraceEvent]) -> Result<()>;
}

/// Writes events as a single JSON array followed by a newline.
pub struct JsonTraceWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonTraceWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceOutput for JsonTraceWriter<W> {
    fn write_events(&mut self, events: &[TraceEvent]) -> Result<()> {
        serde_json::to_writer(&mut self.writer, events)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Serialize events to a JSON array string.
pub fn to_json(events: &[TraceEvent]) -> Result<String> {
    Ok(serde_json::to_string(events)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_json_shape() {
        let json = to_json(&[TraceEvent::begin("LOCK_STALL", 12, 0, 5)]).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"LOCK_STALL","ts":12,"ph":"B","pid":0,"tid":5,"args":{}}]"#
        );
    }

    #[test]
    fn test_metadata_json_shape() {
        let events = [
            TraceEvent::process_name(3, "shim_trace for tile0,1".to_string()),
            TraceEvent::thread_name(3, 7, "Unknown"),
        ];
        let json = to_json(&events).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"[{"name":"process_name","ph":"M","pid":3,"args":{"name":"shim_trace for tile0,1"}},"#,
                r#"{"name":"thread_name","ph":"M","pid":3,"tid":7,"args":{"name":"Unknown"}}]"#
            )
        );
    }

    #[test]
    fn test_writer_emits_array_and_newline() {
        let mut writer = JsonTraceWriter::new(Vec::new());
        writer
            .write_events(&[TraceEvent::end("INSTR_VECTOR", 40, 1, 0)])
            .unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert!(text.ends_with("]\n"));

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["ph"], "E");
        assert_eq!(parsed[0]["ts"], 40);
    }

    #[test]
    fn test_empty_trace_is_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
