use std::ops::{Deref, DerefMut};

use super::EventEnvelope;
use crate::event::{
    EventPayload, EventType, GamepadAxisEvent, GamepadButtonEvent, GamepadDeviceEvent,
    GamepadSensorEvent, GamepadTouchpadEvent, NativeEvent,
};

/// Declares a typed view over [`EventEnvelope`] for one gamepad event family.
macro_rules! gamepad_envelope {
    ($(#[$meta:meta])* $name:ident, $payload:ident => $event:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(EventEnvelope);

        impl $name {
            pub fn new(data: NativeEvent, event_type: EventType) -> Self {
                Self(EventEnvelope::new(data, event_type))
            }

            /// Payload of the wrapped record.
            ///
            /// # Panics
            ///
            /// Panics if the record carries a different payload family.
            pub fn event(&self) -> &$event {
                match self.try_event() {
                    Some(event) => event,
                    None => panic!(
                        concat!(stringify!($name), " wraps a {:?} record tagged {}"),
                        self.0.data().payload,
                        self.0.event_type(),
                    ),
                }
            }

            pub fn try_event(&self) -> Option<&$event> {
                match &self.0.data().payload {
                    EventPayload::$payload(event) => Some(event),
                    _ => None,
                }
            }

            pub fn into_inner(self) -> EventEnvelope {
                self.0
            }
        }

        impl Deref for $name {
            type Target = EventEnvelope;

            fn deref(&self) -> &EventEnvelope {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut EventEnvelope {
                &mut self.0
            }
        }
    };
}

gamepad_envelope!(
    /// Gamepad added, removed, remapped, update complete or vendor handle updated.
    GamepadDeviceEnvelope, GamepadDevice => GamepadDeviceEvent
);
gamepad_envelope!(
    /// Gamepad button pressed or released.
    GamepadButtonEnvelope, GamepadButton => GamepadButtonEvent
);
gamepad_envelope!(
    /// Gamepad stick or trigger moved.
    GamepadAxisEnvelope, GamepadAxis => GamepadAxisEvent
);
gamepad_envelope!(
    /// Gamepad motion sensor sample.
    GamepadSensorEnvelope, GamepadSensor => GamepadSensorEvent
);
gamepad_envelope!(
    /// Gamepad touchpad finger down, motion or up.
    GamepadTouchpadEnvelope, GamepadTouchpad => GamepadTouchpadEvent
);
