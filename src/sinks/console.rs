use chrono::Local;
use parking_lot::Mutex;
use serde_json::Value;
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::error::BoxError;
use crate::event::Event;
use crate::sink::Sink;

/// Line format produced by [`ConsoleSink`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsoleFormat {
    /// `[HH:MM:SS] LEVEL | service | message | k=v ...`
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Sink that renders events as text lines onto a writer, stdout by default.
///
/// Any `io::Write` can be plugged in via [`ConsoleSink::with_writer`], which
/// makes the same sink usable for files or in-memory buffers.
pub struct ConsoleSink {
    format: ConsoleFormat,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    /// Console sink on stdout; `pretty` selects [`ConsoleFormat::Pretty`],
    /// otherwise JSON lines.
    pub fn new(pretty: bool) -> Self {
        let format = if pretty { ConsoleFormat::Pretty } else { ConsoleFormat::Json };
        Self::with_writer(format, io::stdout())
    }

    pub fn pretty() -> Self {
        Self::new(true)
    }

    pub fn json() -> Self {
        Self::new(false)
    }

    pub fn with_writer<W>(format: ConsoleFormat, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        ConsoleSink {
            format,
            out: Mutex::new(Box::new(writer)),
        }
    }

    pub fn format(&self) -> ConsoleFormat {
        self.format
    }

    fn render(&self, event: &Event) -> Result<String, BoxError> {
        match self.format {
            ConsoleFormat::Pretty => Ok(format_pretty(event)),
            ConsoleFormat::Json => Ok(format_json(event)?),
        }
    }
}

impl Sink for ConsoleSink {
    fn write(&self, event: &Event) -> Result<(), BoxError> {
        let mut line = self.render(event)?;
        line.push('\n');
        self.out.lock().write_all(line.as_bytes())?;
        Ok(())
    }

    fn close(&self) -> Result<(), BoxError> {
        self.out.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        match self.format {
            ConsoleFormat::Pretty => "console",
            ConsoleFormat::Json => "console-json",
        }
    }
}

/// Render `[HH:MM:SS] LEVEL | service | message`, followed by
/// ` | k=v k2=v2` when the event carries fields. Time is shown in local time.
pub fn format_pretty(event: &Event) -> String {
    let mut line = format!(
        "[{}] {} | {} | {}",
        event.time.with_timezone(&Local).format("%H:%M:%S"),
        event.level,
        event.service,
        event.message,
    );

    if event.has_fields() {
        line.push_str(" |");
        for (key, value) in &event.fields {
            let _ = write!(line, " {}={}", key, display_value(value));
        }
    }
    line
}

/// Render the event as a single-line JSON object.
pub fn format_json(event: &Event) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}

// Strings print bare; everything else as JSON text.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fields, Fields, Level};
    use std::sync::Arc;

    /// Writer sharing its buffer with the test.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
    }

    #[test]
    fn test_pretty_line_without_fields() {
        let event = Event::new(Level::Info, "api", "dev", "sink initialized", Fields::new());
        let line = format_pretty(&event);

        assert!(line.starts_with('['));
        assert_eq!(&line[9..], "] INFO | api | sink initialized");
    }

    #[test]
    fn test_pretty_line_with_fields() {
        let event = Event::new(
            Level::Error,
            "api",
            "dev",
            "simulated error",
            fields! { "error_code" => "E001", "retry_count" => 3 },
        );
        let line = format_pretty(&event);

        assert!(line.ends_with("] ERROR | api | simulated error | error_code=E001 retry_count=3"));
    }

    #[test]
    fn test_json_writer_emits_one_object_per_line() {
        let buf = SharedBuf::default();
        let sink = ConsoleSink::with_writer(ConsoleFormat::Json, buf.clone());

        sink.write(&Event::new(Level::Warn, "api", "prod", "first", Fields::new())).unwrap();
        sink.write(&Event::new(Level::Debug, "api", "prod", "second", fields! { "k" => "v" }))
            .unwrap();
        sink.close().unwrap();

        let out = buf.contents();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["level"], "WARN");
        assert_eq!(first["env"], "prod");
        assert!(first.get("fields").is_none());

        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["message"], "second");
        assert_eq!(second["fields"]["k"], "v");
        assert!(chrono::DateTime::parse_from_rfc3339(second["time"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_writer_errors_are_returned() {
        let sink = ConsoleSink::with_writer(ConsoleFormat::Pretty, BrokenWriter);
        let event = Event::new(Level::Info, "api", "dev", "lost", Fields::new());

        let err = sink.write(&event).unwrap_err();
        assert!(err.to_string().contains("pipe closed"));
        // Still usable after a failed write.
        assert!(sink.write(&event).is_err());
        assert!(sink.close().unwrap_err().to_string().contains("disk full"));
    }

    #[test]
    fn test_constructor_picks_format() {
        assert_eq!(ConsoleSink::new(true).format(), ConsoleFormat::Pretty);
        assert_eq!(ConsoleSink::json().format(), ConsoleFormat::Json);
        assert_eq!(ConsoleSink::json().name(), "console-json");
    }
}
