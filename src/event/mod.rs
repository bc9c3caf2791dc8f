//! Native event records
//!
//! The data model of the input library this crate sits on top of:
//!
//! - [`EventType`] - the discriminant, with its display-name table
//! - [`NativeEvent`] - one raw event, a discriminant plus a typed payload

mod event_type;
mod record;

pub use event_type::EventType;
pub use record::{
    DeviceId, EventPayload, GamepadAxis, GamepadAxisEvent, GamepadButton, GamepadButtonEvent,
    GamepadDeviceEvent, GamepadSensorEvent, GamepadTouchpadEvent, NativeEvent, SensorType,
};
