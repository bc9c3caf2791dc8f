use std::borrow::Cow;

use crate::event::{EventType, NativeEvent};

/// One native event plus its discriminant, ready to travel through a host
/// event queue.
///
/// The discriminant is stored next to the record so it can be inspected
/// without looking into the payload. Both are taken as given: `new` does not
/// check that `event_type` matches `data.event_type`, and neither setter
/// touches the other field.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEnvelope {
    data: NativeEvent,
    event_type: EventType,
    accepted: bool,
}

impl EventEnvelope {
    pub fn new(data: NativeEvent, event_type: EventType) -> Self {
        Self {
            data,
            event_type,
            accepted: true,
        }
    }

    /// Envelope whose discriminant is taken from the record.
    pub fn from_native(data: NativeEvent) -> Self {
        Self::new(data, data.event_type)
    }

    pub fn data(&self) -> &NativeEvent {
        &self.data
    }

    /// Replaces the record. The stored discriminant is left alone.
    pub fn set_data(&mut self, data: NativeEvent) {
        self.data = data;
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn set_event_type(&mut self, event_type: EventType) {
        self.event_type = event_type;
    }

    pub fn type_name(&self) -> Cow<'static, str> {
        self.event_type.type_name()
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Marks the event as consumed or not. Has no effect on delivery.
    pub fn set_accepted(&mut self, accepted: bool) {
        self.accepted = accepted;
    }

    pub fn accept(&mut self) {
        self.set_accepted(true);
    }

    pub fn ignore(&mut self) {
        self.set_accepted(false);
    }
}
