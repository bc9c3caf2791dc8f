use super::EventType;

/// Instance id the native library assigns to a device when it connects.
pub type DeviceId = u32;

/// Raw event record as reported by a [`NativeBackend`](crate::pump::NativeBackend).
///
/// The discriminant lives inside the record. Envelopes carry a second copy
/// of it, see [`EventEnvelope`](crate::envelope::EventEnvelope).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeEvent {
    pub event_type: EventType,
    /// Nanoseconds, on the backend's own clock.
    pub timestamp_ns: u64,
    pub payload: EventPayload,
}

/// Family-specific part of a [`NativeEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventPayload {
    /// No payload beyond the discriminant and timestamp.
    Common,
    GamepadDevice(GamepadDeviceEvent),
    GamepadButton(GamepadButtonEvent),
    GamepadAxis(GamepadAxisEvent),
    GamepadSensor(GamepadSensorEvent),
    GamepadTouchpad(GamepadTouchpadEvent),
}

/// Gamepad added, removed, remapped, update complete or vendor handle updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GamepadDeviceEvent {
    pub which: DeviceId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GamepadButtonEvent {
    pub which: DeviceId,
    pub button: GamepadButton,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GamepadAxisEvent {
    pub which: DeviceId,
    pub axis: GamepadAxis,
    /// Sticks span `i16::MIN..=i16::MAX`, triggers `0..=i16::MAX`.
    pub value: i16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamepadSensorEvent {
    pub which: DeviceId,
    pub sensor: SensorType,
    pub data: [f32; 3],
    /// Timestamp reported by the sensor itself, in nanoseconds.
    pub sensor_timestamp_ns: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamepadTouchpadEvent {
    pub which: DeviceId,
    pub touchpad: u32,
    pub finger: u32,
    /// Normalized to `0.0..=1.0`, origin top left.
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

/// Gamepad buttons, named by position on a standard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    South,
    East,
    West,
    North,
    Back,
    Guide,
    Start,
    LeftStick,
    RightStick,
    LeftShoulder,
    RightShoulder,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    Misc1,
    RightPaddle1,
    LeftPaddle1,
    RightPaddle2,
    LeftPaddle2,
    Touchpad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
    LeftTrigger,
    RightTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorType {
    Accel,
    Gyro,
    AccelLeft,
    GyroLeft,
    AccelRight,
    GyroRight,
}

impl NativeEvent {
    pub fn new(event_type: EventType, payload: EventPayload) -> Self {
        Self {
            event_type,
            timestamp_ns: 0,
            payload,
        }
    }

    /// Event without a payload, e.g. [`EventType::QUIT`].
    pub fn common(event_type: EventType) -> Self {
        Self::new(event_type, EventPayload::Common)
    }

    /// Device event; `event_type` should be one of the gamepad device discriminants.
    pub fn gamepad_device(event_type: EventType, which: DeviceId) -> Self {
        Self::new(
            event_type,
            EventPayload::GamepadDevice(GamepadDeviceEvent { which }),
        )
    }

    pub fn gamepad_added(which: DeviceId) -> Self {
        Self::gamepad_device(EventType::GAMEPAD_ADDED, which)
    }

    pub fn gamepad_removed(which: DeviceId) -> Self {
        Self::gamepad_device(EventType::GAMEPAD_REMOVED, which)
    }

    pub fn gamepad_button(which: DeviceId, button: GamepadButton, down: bool) -> Self {
        let event_type = if down {
            EventType::GAMEPAD_BUTTON_DOWN
        } else {
            EventType::GAMEPAD_BUTTON_UP
        };
        Self::new(
            event_type,
            EventPayload::GamepadButton(GamepadButtonEvent {
                which,
                button,
                down,
            }),
        )
    }

    pub fn gamepad_axis(which: DeviceId, axis: GamepadAxis, value: i16) -> Self {
        Self::new(
            EventType::GAMEPAD_AXIS_MOTION,
            EventPayload::GamepadAxis(GamepadAxisEvent { which, axis, value }),
        )
    }

    pub fn gamepad_sensor(
        which: DeviceId,
        sensor: SensorType,
        data: [f32; 3],
        sensor_timestamp_ns: u64,
    ) -> Self {
        Self::new(
            EventType::GAMEPAD_SENSOR_UPDATE,
            EventPayload::GamepadSensor(GamepadSensorEvent {
                which,
                sensor,
                data,
                sensor_timestamp_ns,
            }),
        )
    }

    /// Touchpad event; `event_type` should be one of the touchpad discriminants.
    pub fn gamepad_touchpad(event_type: EventType, touchpad: GamepadTouchpadEvent) -> Self {
        Self::new(event_type, EventPayload::GamepadTouchpad(touchpad))
    }

    pub fn with_timestamp(mut self, timestamp_ns: u64) -> Self {
        self.timestamp_ns = timestamp_ns;
        self
    }

    /// Device the event refers to, for every gamepad payload.
    pub fn which(&self) -> Option<DeviceId> {
        match self.payload {
            EventPayload::Common => None,
            EventPayload::GamepadDevice(e) => Some(e.which),
            EventPayload::GamepadButton(e) => Some(e.which),
            EventPayload::GamepadAxis(e) => Some(e.which),
            EventPayload::GamepadSensor(e) => Some(e.which),
            EventPayload::GamepadTouchpad(e) => Some(e.which),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_constructor_picks_discriminant() {
        let down = NativeEvent::gamepad_button(3, GamepadButton::South, true);
        let up = NativeEvent::gamepad_button(3, GamepadButton::South, false);
        assert_eq!(down.event_type, EventType::GAMEPAD_BUTTON_DOWN);
        assert_eq!(up.event_type, EventType::GAMEPAD_BUTTON_UP);
    }

    #[test]
    fn which_follows_the_payload() {
        assert_eq!(NativeEvent::common(EventType::QUIT).which(), None);
        assert_eq!(NativeEvent::gamepad_added(7).which(), Some(7));
        assert_eq!(
            NativeEvent::gamepad_axis(2, GamepadAxis::LeftX, -100).which(),
            Some(2)
        );
        let touch = GamepadTouchpadEvent {
            which: 9,
            touchpad: 0,
            finger: 1,
            x: 0.5,
            y: 0.25,
            pressure: 1.0,
        };
        assert_eq!(
            NativeEvent::gamepad_touchpad(EventType::GAMEPAD_TOUCHPAD_DOWN, touch).which(),
            Some(9)
        );
    }
}
