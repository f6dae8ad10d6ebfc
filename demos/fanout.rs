use std::fs::File;
use std::sync::Arc;

use sink::init::init_diagnostics;
use sink::sinks::{ConsoleFormat, ConsoleSink};
use sink::{fields, Config, Level, Logger, Sink};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_diagnostics()?;

    // Pretty lines on stdout, JSON lines in a temp file.
    let path = std::env::temp_dir().join("sink-fanout.log");
    let sinks: Vec<Arc<dyn Sink>> = vec![
        Arc::new(ConsoleSink::pretty()),
        Arc::new(ConsoleSink::with_writer(ConsoleFormat::Json, File::create(&path)?)),
    ];

    let log = Logger::new(Config::new("fanout-demo", "").with_min_level(Level::Info), sinks);

    log.debug("not shown", None);
    log.info("service started", fields! { "port" => 8080 });
    log.error("order failed", fields! { "order_id" => 123, "reason" => "card declined" });

    log.shutdown()?;
    println!("json copy written to {}", path.display());
    Ok(())
}
