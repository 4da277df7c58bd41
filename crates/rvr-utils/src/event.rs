//! Synthetic events.

use serde_json::Value;

/// A custom event built by application code rather than the user agent.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticEvent {
    pub event_type: String,
    pub detail: Value,
    pub bubbles: bool,
    pub cancelable: bool,
}

impl SyntheticEvent {
    /// A bubbling, cancelable event with no detail.
    pub fn new(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            detail: Value::Null,
            bubbles: true,
            cancelable: true,
        }
    }

    pub fn with_detail<V: Into<Value>>(mut self, detail: V) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }
}

/// Something events can be dispatched to.
pub trait EventTarget {
    /// Delivers `event`. Returns `false` if a listener cancelled it.
    fn dispatch_event(&mut self, event: &SyntheticEvent) -> bool;
}

/// Builds a default [`SyntheticEvent`] carrying `detail` and dispatches it.
pub fn emit<T, V>(target: &mut T, event_type: &str, detail: V) -> bool
where
    T: EventTarget + ?Sized,
    V: Into<Value>,
{
    let event = SyntheticEvent::new(event_type).with_detail(detail);
    target.dispatch_event(&event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Recorder {
        received: Vec<SyntheticEvent>,
        cancel: bool,
    }

    impl EventTarget for Recorder {
        fn dispatch_event(&mut self, event: &SyntheticEvent) -> bool {
            self.received.push(event.clone());
            !(self.cancel && event.cancelable)
        }
    }

    #[test]
    fn test_new_defaults() {
        let event = SyntheticEvent::new("palette-changed");
        assert!(event.bubbles);
        assert!(event.cancelable);
        assert_eq!(event.detail, Value::Null);
    }

    #[test]
    fn test_builder() {
        let event = SyntheticEvent::new("loaded")
            .with_detail(json!({"count": 3}))
            .bubbles(false)
            .cancelable(false);
        assert!(!event.bubbles);
        assert!(!event.cancelable);
        assert_eq!(event.detail["count"], 3);
    }

    #[test]
    fn test_emit_dispatches_with_detail() {
        let mut target = Recorder::default();
        assert!(emit(&mut target, "palette-changed", "night"));
        assert_eq!(target.received.len(), 1);
        assert_eq!(target.received[0].event_type, "palette-changed");
        assert_eq!(target.received[0].detail, json!("night"));
    }

    #[test]
    fn test_emit_reports_cancellation() {
        let mut target = Recorder {
            cancel: true,
            ..Default::default()
        };
        assert!(!emit(&mut target, "click", Value::Null));
    }
}
