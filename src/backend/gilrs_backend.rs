use std::collections::{HashMap, HashSet, VecDeque};
use std::time::{SystemTime, UNIX_EPOCH};

use gilrs::{Axis, Button, Event, EventType as GilrsEventType, GamepadId, Gilrs};
use tracing::{debug, error, info};

use crate::config::GilrsSettings;
use crate::event::{DeviceId, GamepadAxis, GamepadButton, NativeEvent};
use crate::pump::{BackendError, NativeBackend};

/// Open gamepad as tracked by [`GilrsBackend`].
///
/// gilrs keeps its devices open for as long as they are connected, so the
/// handle only records what was opened for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GilrsGamepad {
    pub which: DeviceId,
    pub name: String,
}

/// [`NativeBackend`] on top of the gilrs gamepad library.
///
/// Gamepads only; keyboard, mouse and window events are not produced.
pub struct GilrsBackend {
    gilrs: Gilrs,
    // Synthetic events queued ahead of live gilrs events.
    pending: VecDeque<NativeEvent>,
    ids: HashMap<DeviceId, GamepadId>,
    announced: HashSet<DeviceId>,
}

impl GilrsBackend {
    pub fn init(settings: &GilrsSettings) -> Result<Self, BackendError> {
        info!("Initializing gilrs controller interface");
        let gilrs = match Gilrs::new() {
            Ok(g) => {
                info!("Successfully initialized gilrs");
                g
            }
            Err(e) => {
                error!("Failed to initialize gilrs: {}", e);
                return Err(BackendError::InitializationError(e.to_string()));
            }
        };

        let mut backend = Self {
            gilrs,
            pending: VecDeque::new(),
            ids: HashMap::new(),
            announced: HashSet::new(),
        };

        if settings.announce_connected {
            backend.announce_connected();
        }
        Ok(backend)
    }

    /// Queues an added event for every gamepad plugged in before startup.
    fn announce_connected(&mut self) {
        let connected: Vec<(GamepadId, String)> = self
            .gilrs
            .gamepads()
            .map(|(id, gamepad)| (id, gamepad.name().to_string()))
            .collect();

        if connected.is_empty() {
            info!("No gamepad connected");
            return;
        }

        info!("Found {} gamepads:", connected.len());
        for (id, name) in connected {
            let which = device_id(id);
            info!("  [{}] {}", which, name);
            self.ids.insert(which, id);
            self.announced.insert(which);
            self.pending.push_back(NativeEvent::gamepad_added(which));
        }
    }

    fn translate(&mut self, event: Event) -> Option<NativeEvent> {
        let Event {
            id, event, time, ..
        } = event;
        let which = device_id(id);

        // Devices skipped at startup stay invisible until they reconnect.
        if !matches!(event, GilrsEventType::Connected) && !self.announced.contains(&which) {
            debug!("Ignoring {:?} from unannounced gamepad {}", event, which);
            return None;
        }

        let native = match event {
            GilrsEventType::Connected => {
                self.ids.insert(which, id);
                if !self.announced.insert(which) {
                    debug!("Gamepad {} already announced", which);
                    return None;
                }
                NativeEvent::gamepad_added(which)
            }
            GilrsEventType::Disconnected => {
                self.announced.remove(&which);
                NativeEvent::gamepad_removed(which)
            }
            GilrsEventType::ButtonPressed(button, _) => {
                NativeEvent::gamepad_button(which, map_button(button)?, true)
            }
            GilrsEventType::ButtonReleased(button, _) => {
                NativeEvent::gamepad_button(which, map_button(button)?, false)
            }
            GilrsEventType::ButtonChanged(button, value, _) => {
                let axis = match button {
                    Button::LeftTrigger2 => GamepadAxis::LeftTrigger,
                    Button::RightTrigger2 => GamepadAxis::RightTrigger,
                    _ => return None,
                };
                NativeEvent::gamepad_axis(which, axis, scale_trigger(value))
            }
            GilrsEventType::AxisChanged(axis, value, _) => {
                let (axis, value) = map_axis(axis, value)?;
                NativeEvent::gamepad_axis(which, axis, value)
            }
            other => {
                debug!("Ignoring gilrs event: {:?}", other);
                return None;
            }
        };

        Some(native.with_timestamp(timestamp_ns(time)))
    }
}

impl NativeBackend for GilrsBackend {
    type Gamepad = GilrsGamepad;

    fn poll_event(&mut self) -> Option<NativeEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        while let Some(event) = self.gilrs.next_event() {
            if let Some(native) = self.translate(event) {
                return Some(native);
            }
        }
        None
    }

    fn open_gamepad(&mut self, which: DeviceId) -> GilrsGamepad {
        let name = self
            .ids
            .get(&which)
            .and_then(|id| self.gilrs.connected_gamepad(*id))
            .map(|gamepad| gamepad.name().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        info!("Opened gamepad {} ({})", which, name);
        GilrsGamepad { which, name }
    }

    fn close_gamepad(&mut self, gamepad: GilrsGamepad) {
        self.ids.remove(&gamepad.which);
        info!("Closed gamepad {} ({})", gamepad.which, gamepad.name);
    }
}

fn device_id(id: GamepadId) -> DeviceId {
    DeviceId::try_from(usize::from(id)).unwrap_or(DeviceId::MAX)
}

fn timestamp_ns(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

fn map_button(button: Button) -> Option<GamepadButton> {
    match button {
        Button::South => Some(GamepadButton::South),
        Button::East => Some(GamepadButton::East),
        Button::West => Some(GamepadButton::West),
        Button::North => Some(GamepadButton::North),
        Button::Select => Some(GamepadButton::Back),
        Button::Mode => Some(GamepadButton::Guide),
        Button::Start => Some(GamepadButton::Start),
        Button::LeftThumb => Some(GamepadButton::LeftStick),
        Button::RightThumb => Some(GamepadButton::RightStick),
        Button::LeftTrigger => Some(GamepadButton::LeftShoulder),
        Button::RightTrigger => Some(GamepadButton::RightShoulder),
        Button::DPadUp => Some(GamepadButton::DpadUp),
        Button::DPadDown => Some(GamepadButton::DpadDown),
        Button::DPadLeft => Some(GamepadButton::DpadLeft),
        Button::DPadRight => Some(GamepadButton::DpadRight),
        Button::C => Some(GamepadButton::Misc1),
        // Trigger buttons are reported as axis motion via ButtonChanged.
        _ => None,
    }
}

/// gilrs reports Y up as positive; the native convention is Y down.
fn map_axis(axis: Axis, value: f32) -> Option<(GamepadAxis, i16)> {
    match axis {
        Axis::LeftStickX => Some((GamepadAxis::LeftX, scale_stick(value))),
        Axis::LeftStickY => Some((GamepadAxis::LeftY, scale_stick(-value))),
        Axis::RightStickX => Some((GamepadAxis::RightX, scale_stick(value))),
        Axis::RightStickY => Some((GamepadAxis::RightY, scale_stick(-value))),
        Axis::LeftZ => Some((GamepadAxis::LeftTrigger, scale_trigger(value))),
        Axis::RightZ => Some((GamepadAxis::RightTrigger, scale_trigger(value))),
        _ => {
            debug!("Ignoring unsupported axis: {:?}", axis);
            None
        }
    }
}

fn scale_stick(value: f32) -> i16 {
    (value.clamp(-1.0, 1.0) * f32::from(i16::MAX)).round() as i16
}

fn scale_trigger(value: f32) -> i16 {
    (value.clamp(0.0, 1.0) * f32::from(i16::MAX)).round() as i16
}
