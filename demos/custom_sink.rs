use std::sync::Arc;

use sink::init::init_diagnostics;
use sink::sinks::ConsoleSink;
use sink::{fields, BoxError, Config, Event, Logger, Sink};

/// Example of plugging in a custom destination by implementing `Sink`
/// directly. This one fails every write, so the logger's diagnostics show
/// up on stderr while the console sink keeps working.
struct FlakySink;

impl Sink for FlakySink {
    fn write(&self, event: &Event) -> Result<(), BoxError> {
        Err(format!("refusing {} event", event.level).into())
    }

    fn close(&self) -> Result<(), BoxError> {
        Err("connection already gone".into())
    }

    fn name(&self) -> &str {
        "flaky"
    }
}

fn main() {
    if let Err(e) = init_diagnostics() {
        eprintln!("diagnostics disabled: {e}");
    }

    let sinks: Vec<Arc<dyn Sink>> = vec![Arc::new(FlakySink), Arc::new(ConsoleSink::pretty())];
    let log = Logger::new(Config::new("custom-demo", "development"), sinks);

    log.info("custom sink example started", None);
    log.warn("still delivered to the console", fields! { "attempt" => 1 });

    if let Err(e) = log.shutdown() {
        eprintln!("{e}");
    }
}
