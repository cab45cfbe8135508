//! Event delivery to the presentation layer.
//!
//! The core never renders. It emits [`UiEvent`]s into an [`EventSink`] and the
//! presentation layer decides how to show them.

use crate::types::event::{Notice, UiEvent};
use crate::types::settings::Locale;

/// Receives events emitted by the core. Delivery is fire-and-forget.
pub trait EventSink {
    fn emit(&mut self, event: UiEvent);
}

/// Buffers events until the presentation layer drains them.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<UiEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for EventQueue {
    fn emit(&mut self, event: UiEvent) {
        self.events.push(event);
    }
}

/// Turns notices into localized [`UiEvent::Notice`] events.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    locale: Locale,
    duration_ms: u64,
}

impl Notifier {
    pub fn new(locale: Locale, duration_ms: u64) -> Self {
        Self {
            locale,
            duration_ms,
        }
    }

    pub fn notify(&self, sink: &mut dyn EventSink, notice: Notice) {
        let message = notice.message(self.locale);
        log::debug!("Notice: {}", message);
        sink.emit(UiEvent::Notice {
            notice,
            message,
            duration_ms: self.duration_ms,
        });
    }
}
