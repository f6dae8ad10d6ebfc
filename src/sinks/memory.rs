use parking_lot::Mutex;

use crate::error::BoxError;
use crate::event::Event;
use crate::sink::Sink;

/// Sink that keeps a copy of every event it receives.
///
/// Meant for tests and demos: the caller keeps an `Arc<MemorySink>` next to
/// the one handed to the logger and inspects it afterwards.
#[derive(Debug, Default)]
pub struct MemorySink {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    events: Vec<Event>,
    closes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, oldest first.
    pub fn events(&self) -> Vec<Event> {
        self.inner.lock().events.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times `close` has been called.
    pub fn close_count(&self) -> usize {
        self.inner.lock().closes
    }

    pub fn clear(&self) {
        self.inner.lock().events.clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, event: &Event) -> Result<(), BoxError> {
        self.inner.lock().events.push(event.clone());
        Ok(())
    }

    fn close(&self) -> Result<(), BoxError> {
        self.inner.lock().closes += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Fields, Level};

    #[test]
    fn test_records_and_clears() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        let event = Event::new(Level::Info, "svc", "dev", "hello", Fields::new());
        sink.write(&event).unwrap();
        sink.write(&event).unwrap();
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events()[0], event);

        sink.clear();
        assert!(sink.is_empty());

        sink.close().unwrap();
        assert_eq!(sink.close_count(), 1);
    }
}
