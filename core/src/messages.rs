//! User-facing message sink.

use std::sync::Arc;

use parking_lot::Mutex;

/// Accepts human-readable messages. Fire-and-forget: no return value and no
/// failure visible to the caller.
pub trait MessageLog: Send + Sync {
    fn add(&self, message: String);
}

impl<L: MessageLog + ?Sized> MessageLog for Arc<L> {
    fn add(&self, message: String) {
        (**self).add(message)
    }
}

/// In-memory `MessageLog` that keeps every message in arrival order.
#[derive(Debug, Default)]
pub struct MessageService {
    messages: Mutex<Vec<String>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl MessageLog for MessageService {
    fn add(&self, message: String) {
        self.messages.lock().push(message);
    }
}
