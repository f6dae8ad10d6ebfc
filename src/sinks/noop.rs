use crate::error::BoxError;
use crate::event::Event;
use crate::sink::Sink;

/// Sink whose writes and closes always succeed and leave no trace.
///
/// Handy as a placeholder destination, or to time the filter and fan-out
/// path on its own.
#[derive(Clone, Debug, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    fn write(&self, _event: &Event) -> Result<(), BoxError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
