//! Lightweight structured logger.
//!
//! A [`Logger`] filters leveled calls against a minimum [`Level`], turns the
//! accepted ones into [`Event`]s and hands each event to every registered
//! [`Sink`] in order, under a single lock.
//!
//! ```
//! use std::sync::Arc;
//! use sink::{fields, sinks::MemorySink, Config, Level, Logger, Sink};
//!
//! let memory = Arc::new(MemorySink::new());
//! let log = Logger::new(
//!     Config::new("checkout", "staging").with_min_level(Level::Info),
//!     vec![memory.clone() as Arc<dyn Sink>],
//! );
//!
//! log.debug("filtered out", None);
//! log.error("payment failed", fields! { "order_id" => 123 });
//! log.shutdown().unwrap();
//!
//! assert_eq!(memory.len(), 1);
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod event;
pub mod init;
pub mod level;
pub mod logger;
pub mod sink;
pub mod sinks;

pub use config::Config;
pub use error::{BoxError, ConfigError, ParseLevelError, ShutdownError, SinkFailure};
pub use event::{Event, Fields};
pub use level::Level;
pub use logger::Logger;
pub use sink::Sink;

#[doc(hidden)]
pub use serde_json;
