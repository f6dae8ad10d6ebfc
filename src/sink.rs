use crate::error::BoxError;
use crate::event::Event;

/// Destination for [`Event`]s dispatched by the [`Logger`](crate::Logger).
///
/// Implementations own their output handle and formatting (console, file,
/// in-memory buffer, etc). The logger holds sinks as `Arc<dyn Sink>` and calls
/// them under its dispatch lock, so a single logger never invokes the same
/// sink concurrently. Calls may still arrive from different threads over time.
pub trait Sink: Send + Sync {
    /// Emit a single event in the sink's format.
    ///
    /// **Parameters**
    /// - `event`: the event being dispatched. It is only borrowed for the
    ///   duration of the call; clone it to keep it.
    ///
    /// **Returns**
    /// - `Ok(())` if the event was written.
    /// - `Err(..)` on a delivery problem. The logger reports the error on its
    ///   diagnostics channel and moves on to the next sink; the sink must stay
    ///   usable for subsequent writes.
    ///
    /// May block on I/O. Must not call back into the logger that owns it.
    fn write(&self, event: &Event) -> Result<(), BoxError>;

    /// Release underlying resources (flush buffers, close handles).
    ///
    /// Called exactly once by the logger during shutdown, in registration
    /// order. Failures are collected into the shutdown error.
    ///
    /// Default implementation is a no-op.
    fn close(&self) -> Result<(), BoxError> {
        Ok(())
    }

    /// Name used when reporting failures of this sink.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
