use parking_lot::Mutex;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{ShutdownError, SinkFailure};
use crate::event::{Event, Fields};
use crate::level::Level;
use crate::sink::Sink;

/// Leveled logger that fans each accepted event out to its sinks.
///
/// Events below the configured minimum level are dropped before an [`Event`]
/// is even built. Accepted events are written to every sink in registration
/// order while holding a single lock, so sinks never observe concurrent calls
/// from the same logger. A failing sink is reported through `tracing` and does
/// not stop delivery to the remaining sinks; callers never see write errors.
/// Those reports only become visible once a `tracing` subscriber is
/// installed, e.g. with [`init_diagnostics`](crate::init::init_diagnostics).
///
/// [`Logger::shutdown`] closes every sink and aggregates close failures. If it
/// was never called, dropping the logger performs the shutdown instead.
/// Once shut down, log calls are silently ignored.
pub struct Logger {
    config: Config,
    state: Mutex<State>,
}

struct State {
    sinks: Vec<Arc<dyn Sink>>,
    shut_down: bool,
}

impl Logger {
    /// Create a logger from a [`Config`] and an ordered list of sinks.
    ///
    /// Empty service and environment names are replaced with
    /// [`DEFAULT_SERVICE`](crate::config::DEFAULT_SERVICE) and
    /// [`DEFAULT_ENV`](crate::config::DEFAULT_ENV). Sink order decides both
    /// write and close order for the lifetime of the logger.
    pub fn new(config: Config, sinks: Vec<Arc<dyn Sink>>) -> Self {
        let config = config.normalized();
        if config.async_mode {
            tracing::debug!(
                service = %config.service,
                "async mode is reserved; events are dispatched synchronously"
            );
        }

        Logger {
            config,
            state: Mutex::new(State { sinks, shut_down: false }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sink_count(&self) -> usize {
        self.state.lock().sinks.len()
    }

    /// Whether an event at `level` would pass the threshold filter.
    pub fn enabled(&self, level: Level) -> bool {
        level.rank() >= self.config.min_level.rank()
    }

    pub fn debug(&self, message: impl Into<String>, fields: impl Into<Option<Fields>>) {
        self.log(Level::Debug, message, fields);
    }

    pub fn info(&self, message: impl Into<String>, fields: impl Into<Option<Fields>>) {
        self.log(Level::Info, message, fields);
    }

    pub fn warn(&self, message: impl Into<String>, fields: impl Into<Option<Fields>>) {
        self.log(Level::Warn, message, fields);
    }

    pub fn error(&self, message: impl Into<String>, fields: impl Into<Option<Fields>>) {
        self.log(Level::Error, message, fields);
    }

    /// Dispatch a message at an explicit level.
    ///
    /// `fields` may be a [`Fields`] map or `None`; both an absent and an
    /// empty map mean "no fields".
    pub fn log(&self, level: Level, message: impl Into<String>, fields: impl Into<Option<Fields>>) {
        if !self.enabled(level) {
            return;
        }

        let event = Event::new(
            level,
            self.config.service.as_str(),
            self.config.env.as_str(),
            message,
            fields.into().unwrap_or_default(),
        );

        let state = self.state.lock();
        if state.shut_down {
            tracing::debug!(level = %level, "logger already shut down, dropping event");
            return;
        }

        for sink in &state.sinks {
            if let Err(e) = sink.write(&event) {
                tracing::warn!(sink = sink.name(), error = %e, "sink write failed");
            }
        }
    }

    /// Close every sink in registration order.
    ///
    /// **Returns**
    /// - `Ok(())` if every sink closed cleanly.
    /// - `Err(ShutdownError::Sinks(..))` listing each sink whose `close`
    ///   failed. All sinks get a close attempt regardless of earlier failures.
    /// - `Err(ShutdownError::AlreadyShutDown)` on any call after the first;
    ///   no sink is touched again.
    pub fn shutdown(&self) -> Result<(), ShutdownError> {
        let mut state = self.state.lock();
        if state.shut_down {
            return Err(ShutdownError::AlreadyShutDown);
        }
        state.shut_down = true;

        let failures: Vec<SinkFailure> = state
            .sinks
            .iter()
            .enumerate()
            .filter_map(|(index, sink)| {
                sink.close().err().map(|error| SinkFailure {
                    index,
                    sink: sink.name().to_string(),
                    error,
                })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ShutdownError::Sinks(failures))
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.state.lock().shut_down
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.state.get_mut().shut_down {
            return;
        }
        if let Err(e) = self.shutdown() {
            tracing::error!(error = %e, "logger shutdown on drop failed");
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("sinks", &self.sink_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::memory::MemorySink;

    #[test]
    fn test_enabled_follows_min_level() {
        let logger = Logger::new(Config::default().with_min_level(Level::Warn), Vec::new());
        assert!(!logger.enabled(Level::Debug));
        assert!(!logger.enabled(Level::Info));
        assert!(logger.enabled(Level::Warn));
        assert!(logger.enabled(Level::Error));
    }

    #[test]
    fn test_new_applies_defaults() {
        let logger = Logger::new(Config::default(), Vec::new());
        assert_eq!(logger.config().service, "unknown");
        assert_eq!(logger.config().env, "development");
    }

    #[test]
    fn test_no_sinks_is_fine() {
        let logger = Logger::new(Config::default(), Vec::new());
        logger.error("nobody listens", None);
        assert!(logger.shutdown().is_ok());
    }

    #[test]
    fn test_log_after_shutdown_is_ignored() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(Config::default(), vec![sink.clone() as Arc<dyn Sink>]);

        logger.info("before", None);
        logger.shutdown().unwrap();
        logger.info("after", None);

        assert!(logger.is_shut_down());
        let messages: Vec<String> = sink.events().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["before".to_string()]);
    }

    #[test]
    fn test_second_shutdown_does_not_close_again() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(Config::default(), vec![sink.clone() as Arc<dyn Sink>]);

        assert!(logger.shutdown().is_ok());
        assert!(matches!(logger.shutdown(), Err(ShutdownError::AlreadyShutDown)));
        drop(logger);

        assert_eq!(sink.close_count(), 1);
    }

    #[test]
    fn test_drop_closes_sinks() {
        let sink = Arc::new(MemorySink::new());
        {
            let logger = Logger::new(Config::default(), vec![sink.clone() as Arc<dyn Sink>]);
            logger.info("scoped", None);
        }
        assert_eq!(sink.close_count(), 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_async_mode_does_not_change_dispatch() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(
            Config::new("svc", "dev").with_async_mode(true),
            vec![sink.clone() as Arc<dyn Sink>],
        );

        logger.warn("still synchronous", None);
        // Delivered before the call returned.
        assert_eq!(sink.len(), 1);
    }
}
