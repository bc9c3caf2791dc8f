//! Envelopes posted to the host event queue
//!
//! [`EventEnvelope`] pairs a [`NativeEvent`] with its discriminant. The five
//! gamepad views narrow the payload for one event family each, and
//! [`Envelope`] is the closed set of everything the pump posts:
//!
//! ```text
//! discriminant ──► EnvelopeKind ──► Envelope::{Generic, Device, Button, Axis, Sensor, Touchpad}
//! ```

mod event_envelope;
mod gamepad;

use std::borrow::Cow;

use crate::event::{EventType, NativeEvent};

pub use event_envelope::EventEnvelope;
pub use gamepad::{
    GamepadAxisEnvelope, GamepadButtonEnvelope, GamepadDeviceEnvelope, GamepadSensorEnvelope,
    GamepadTouchpadEnvelope,
};

/// Which [`Envelope`] variant a discriminant is wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeKind {
    Generic,
    Device,
    Button,
    Axis,
    Sensor,
    Touchpad,
}

impl EnvelopeKind {
    pub fn for_event_type(event_type: EventType) -> Self {
        match event_type {
            EventType::GAMEPAD_ADDED
            | EventType::GAMEPAD_REMOVED
            | EventType::GAMEPAD_REMAPPED
            | EventType::GAMEPAD_UPDATE_COMPLETE
            | EventType::GAMEPAD_VENDOR_HANDLE_UPDATED => Self::Device,
            EventType::GAMEPAD_TOUCHPAD_DOWN
            | EventType::GAMEPAD_TOUCHPAD_MOTION
            | EventType::GAMEPAD_TOUCHPAD_UP => Self::Touchpad,
            EventType::GAMEPAD_SENSOR_UPDATE => Self::Sensor,
            EventType::GAMEPAD_BUTTON_DOWN | EventType::GAMEPAD_BUTTON_UP => Self::Button,
            EventType::GAMEPAD_AXIS_MOTION => Self::Axis,
            _ => Self::Generic,
        }
    }
}

/// An event on its way to, or inside, the host event queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Generic(EventEnvelope),
    Device(GamepadDeviceEnvelope),
    Button(GamepadButtonEnvelope),
    Axis(GamepadAxisEnvelope),
    Sensor(GamepadSensorEnvelope),
    Touchpad(GamepadTouchpadEnvelope),
}

impl Envelope {
    /// Wraps `data` in the variant [`EnvelopeKind::for_event_type`] picks for `event_type`.
    pub fn classify(data: NativeEvent, event_type: EventType) -> Self {
        match EnvelopeKind::for_event_type(event_type) {
            EnvelopeKind::Generic => Self::Generic(EventEnvelope::new(data, event_type)),
            EnvelopeKind::Device => Self::Device(GamepadDeviceEnvelope::new(data, event_type)),
            EnvelopeKind::Button => Self::Button(GamepadButtonEnvelope::new(data, event_type)),
            EnvelopeKind::Axis => Self::Axis(GamepadAxisEnvelope::new(data, event_type)),
            EnvelopeKind::Sensor => Self::Sensor(GamepadSensorEnvelope::new(data, event_type)),
            EnvelopeKind::Touchpad => {
                Self::Touchpad(GamepadTouchpadEnvelope::new(data, event_type))
            }
        }
    }

    pub fn kind(&self) -> EnvelopeKind {
        match self {
            Self::Generic(_) => EnvelopeKind::Generic,
            Self::Device(_) => EnvelopeKind::Device,
            Self::Button(_) => EnvelopeKind::Button,
            Self::Axis(_) => EnvelopeKind::Axis,
            Self::Sensor(_) => EnvelopeKind::Sensor,
            Self::Touchpad(_) => EnvelopeKind::Touchpad,
        }
    }

    pub fn base(&self) -> &EventEnvelope {
        match self {
            Self::Generic(e) => e,
            Self::Device(e) => &**e,
            Self::Button(e) => &**e,
            Self::Axis(e) => &**e,
            Self::Sensor(e) => &**e,
            Self::Touchpad(e) => &**e,
        }
    }

    pub fn base_mut(&mut self) -> &mut EventEnvelope {
        match self {
            Self::Generic(e) => e,
            Self::Device(e) => &mut **e,
            Self::Button(e) => &mut **e,
            Self::Axis(e) => &mut **e,
            Self::Sensor(e) => &mut **e,
            Self::Touchpad(e) => &mut **e,
        }
    }

    pub fn into_base(self) -> EventEnvelope {
        match self {
            Self::Generic(e) => e,
            Self::Device(e) => e.into_inner(),
            Self::Button(e) => e.into_inner(),
            Self::Axis(e) => e.into_inner(),
            Self::Sensor(e) => e.into_inner(),
            Self::Touchpad(e) => e.into_inner(),
        }
    }

    pub fn data(&self) -> &NativeEvent {
        self.base().data()
    }

    pub fn event_type(&self) -> EventType {
        self.base().event_type()
    }

    pub fn type_name(&self) -> Cow<'static, str> {
        self.base().type_name()
    }
}

impl From<EventEnvelope> for Envelope {
    fn from(envelope: EventEnvelope) -> Self {
        Self::Generic(envelope)
    }
}
