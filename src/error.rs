use std::error::Error;
use std::fmt;

/// Error type returned by [`Sink`](crate::sink::Sink) implementations.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Returned when a string does not name a known [`Level`](crate::Level).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level: {0:?}")]
pub struct ParseLevelError(pub String);

/// Error type returned when loading a [`Config`](crate::Config).
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {source}")]
    InvalidLevel {
        var: &'static str,
        #[source]
        source: ParseLevelError,
    },
}

/// One sink's failure to close during shutdown.
#[derive(Debug)]
pub struct SinkFailure {
    /// Registration position of the sink.
    pub index: usize,
    pub sink: String,
    pub error: BoxError,
}

impl fmt::Display for SinkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sink #{} ({}): {}", self.index, self.sink, self.error)
    }
}

/// Error type returned by [`Logger::shutdown`](crate::Logger::shutdown).
#[derive(thiserror::Error, Debug)]
pub enum ShutdownError {
    #[error("logger already shut down")]
    AlreadyShutDown,

    #[error("shutdown errors: {}", join_failures(.0))]
    Sinks(Vec<SinkFailure>),
}

impl ShutdownError {
    /// Failures of individual sinks, in registration order.
    pub fn failures(&self) -> &[SinkFailure] {
        match self {
            ShutdownError::Sinks(failures) => failures,
            ShutdownError::AlreadyShutDown => &[],
        }
    }
}

fn join_failures(failures: &[SinkFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
