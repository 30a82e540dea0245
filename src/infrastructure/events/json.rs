//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{GenerateEvent, GenerateEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Serializes writes from concurrent emitters
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Terminal `error` event for a failed run
    pub fn emit_error(&self, message: &str) {
        self.write_event(serde_json::json!({
            "event": "error",
            "command": "generate",
            "message": message,
        }));
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        let json = match event {
            GenerateEvent::Started {
                source,
                destination,
                format,
            } => serde_json::json!({
                "event": "start",
                "command": "generate",
                "source": source.display().to_string(),
                "destination": destination.display().to_string(),
                "format": format.as_str(),
            }),

            GenerateEvent::ModelLoaded {
                economy_name,
                entity_count,
            } => serde_json::json!({
                "event": "loaded",
                "command": "generate",
                "economy": economy_name,
                "entity_count": entity_count,
            }),

            GenerateEvent::Generated { format, bytes } => serde_json::json!({
                "event": "generated",
                "command": "generate",
                "format": format.as_str(),
                "bytes": bytes,
            }),

            GenerateEvent::Written { destination, bytes } => serde_json::json!({
                "event": "complete",
                "command": "generate",
                "status": "success",
                "destination": destination.display().to_string(),
                "bytes": bytes,
            }),
        };

        self.write_event(json);
    }
}
