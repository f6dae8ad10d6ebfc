use std::sync::Arc;

use clap::{Parser, Subcommand};
use sink::init::init_diagnostics;
use sink::sinks::ConsoleSink;
use sink::{fields, Config, Level, Logger, Sink};

/// sink - lightweight observability logger
#[derive(Parser, Debug)]
#[command(name = "sink", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit a short sequence of sample events to the console.
    Test {
        /// Print JSON lines instead of the pretty format.
        #[arg(long)]
        json: bool,

        /// Minimum level to print (debug, info, warn, error).
        #[arg(long, default_value = "debug")]
        min_level: Level,

        /// Service name stamped on every event.
        #[arg(long, default_value = "test-service")]
        service: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_diagnostics()?;

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Test { json, min_level, service }) => run_test(json, min_level, service),
        None => {
            println!("sink - lightweight observability logger");
            println!("usage: sink test [--json] [--min-level <LEVEL>]");
            Ok(())
        }
    }
}

fn run_test(json: bool, min_level: Level, service: String) -> anyhow::Result<()> {
    let console: Arc<dyn Sink> = Arc::new(ConsoleSink::new(!json));
    let log = Logger::new(
        Config::new(service, "development").with_min_level(min_level),
        vec![console],
    );

    log.info("sink initialized", None);
    log.debug(
        "starting test sequence",
        fields! { "version" => env!("CARGO_PKG_VERSION"), "mode" => "test" },
    );
    log.warn("this is a warning", fields! { "retry_count" => 3 });
    log.error(
        "simulated error",
        fields! { "error_code" => "E001", "user_id" => "u123" },
    );
    log.info("test complete", None);

    log.shutdown()?;
    Ok(())
}
