//! Built-in [`Sink`](crate::sink::Sink) implementations.

pub mod console;
pub mod memory;
pub mod noop;

pub use console::{ConsoleFormat, ConsoleSink};
pub use memory::MemorySink;
pub use noop::NoopSink;
