//! Event emitter for embedding callbacks in props.

use flume::Sender;

use crate::{Slot, SumadorEvent};

/// Handle that queues [`SumadorEvent`]s for the session.
///
/// Props carry clones of this handle inside their callbacks, so a text field
/// or button can report user interaction without touching the model.
/// Events are only queued here; the session applies them one at a time.
///
/// # Example
///
/// ```rust
/// use sumador_mvu::{Slot, SumadorEvent, TestRenderer, TestSession};
///
/// let renderer = TestRenderer::new();
/// let mut driver = TestSession::with_formatter(|n: f64| format!("{n}"), renderer.clone()).run();
///
/// let emitter = driver.emitter();
/// emitter.set_input(Slot::First, "2");
/// emitter.emit(SumadorEvent::ComputeRequested);
/// driver.process_events();
///
/// assert_eq!(driver.model().result(), "2");
/// ```
pub struct Emitter(Sender<SumadorEvent>);

impl Clone for Emitter {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Emitter {
    pub(crate) fn new(sender: Sender<SumadorEvent>) -> Self {
        Self(sender)
    }

    /// Queue an event.
    ///
    /// Events sent after the session has stopped are dropped.
    pub fn emit(&self, event: SumadorEvent) {
        self.0.send(event).ok();
    }

    pub fn set_input(&self, slot: Slot, text: impl Into<String>) {
        self.emit(SumadorEvent::InputChanged(slot, text.into()));
    }

    pub fn compute(&self) {
        self.emit(SumadorEvent::ComputeRequested);
    }

    pub fn clear_history(&self) {
        self.emit(SumadorEvent::ClearHistoryRequested);
    }
}
