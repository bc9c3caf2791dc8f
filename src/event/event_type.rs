use std::borrow::Cow;
use std::fmt;

/// Discriminant of a [`NativeEvent`](super::NativeEvent).
///
/// A plain `u32` newtype rather than an enum: the native library owns the
/// numbering and may hand out values this crate has never heard of (user
/// events, newer library versions). Known values are exposed as associated
/// constants and can be used directly in `match` patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventType(pub u32);

impl EventType {
    pub const FIRST: Self = Self(0x000);

    // Application lifecycle
    pub const QUIT: Self = Self(0x100);
    pub const TERMINATING: Self = Self(0x101);
    pub const LOW_MEMORY: Self = Self(0x102);
    pub const WILL_ENTER_BACKGROUND: Self = Self(0x103);
    pub const DID_ENTER_BACKGROUND: Self = Self(0x104);
    pub const WILL_ENTER_FOREGROUND: Self = Self(0x105);
    pub const DID_ENTER_FOREGROUND: Self = Self(0x106);
    pub const LOCALE_CHANGED: Self = Self(0x107);
    pub const SYSTEM_THEME_CHANGED: Self = Self(0x108);

    // Display
    pub const DISPLAY_ORIENTATION: Self = Self(0x151);
    pub const DISPLAY_ADDED: Self = Self(0x152);
    pub const DISPLAY_REMOVED: Self = Self(0x153);
    pub const DISPLAY_MOVED: Self = Self(0x154);
    pub const DISPLAY_DESKTOP_MODE_CHANGED: Self = Self(0x155);
    pub const DISPLAY_CURRENT_MODE_CHANGED: Self = Self(0x156);
    pub const DISPLAY_CONTENT_SCALE_CHANGED: Self = Self(0x157);

    // Window
    pub const WINDOW_SHOWN: Self = Self(0x202);
    pub const WINDOW_HIDDEN: Self = Self(0x203);
    pub const WINDOW_EXPOSED: Self = Self(0x204);
    pub const WINDOW_MOVED: Self = Self(0x205);
    pub const WINDOW_RESIZED: Self = Self(0x206);
    pub const WINDOW_PIXEL_SIZE_CHANGED: Self = Self(0x207);
    pub const WINDOW_METAL_VIEW_RESIZED: Self = Self(0x208);
    pub const WINDOW_MINIMIZED: Self = Self(0x209);
    pub const WINDOW_MAXIMIZED: Self = Self(0x20A);
    pub const WINDOW_RESTORED: Self = Self(0x20B);
    pub const WINDOW_MOUSE_ENTER: Self = Self(0x20C);
    pub const WINDOW_MOUSE_LEAVE: Self = Self(0x20D);
    pub const WINDOW_FOCUS_GAINED: Self = Self(0x20E);
    pub const WINDOW_FOCUS_LOST: Self = Self(0x20F);
    pub const WINDOW_CLOSE_REQUESTED: Self = Self(0x210);
    pub const WINDOW_HIT_TEST: Self = Self(0x211);
    pub const WINDOW_ICCPROF_CHANGED: Self = Self(0x212);
    pub const WINDOW_DISPLAY_CHANGED: Self = Self(0x213);
    pub const WINDOW_DISPLAY_SCALE_CHANGED: Self = Self(0x214);
    pub const WINDOW_SAFE_AREA_CHANGED: Self = Self(0x215);
    pub const WINDOW_OCCLUDED: Self = Self(0x216);
    pub const WINDOW_ENTER_FULLSCREEN: Self = Self(0x217);
    pub const WINDOW_LEAVE_FULLSCREEN: Self = Self(0x218);
    pub const WINDOW_DESTROYED: Self = Self(0x219);
    pub const WINDOW_HDR_STATE_CHANGED: Self = Self(0x21A);

    // Keyboard
    pub const KEY_DOWN: Self = Self(0x300);
    pub const KEY_UP: Self = Self(0x301);
    pub const TEXT_EDITING: Self = Self(0x302);
    pub const TEXT_INPUT: Self = Self(0x303);
    pub const KEYMAP_CHANGED: Self = Self(0x304);
    pub const KEYBOARD_ADDED: Self = Self(0x305);
    pub const KEYBOARD_REMOVED: Self = Self(0x306);
    pub const TEXT_EDITING_CANDIDATES: Self = Self(0x307);

    // Mouse
    pub const MOUSE_MOTION: Self = Self(0x400);
    pub const MOUSE_BUTTON_DOWN: Self = Self(0x401);
    pub const MOUSE_BUTTON_UP: Self = Self(0x402);
    pub const MOUSE_WHEEL: Self = Self(0x403);
    pub const MOUSE_ADDED: Self = Self(0x404);
    pub const MOUSE_REMOVED: Self = Self(0x405);

    // Joystick
    pub const JOYSTICK_AXIS_MOTION: Self = Self(0x600);
    pub const JOYSTICK_BALL_MOTION: Self = Self(0x601);
    pub const JOYSTICK_HAT_MOTION: Self = Self(0x602);
    pub const JOYSTICK_BUTTON_DOWN: Self = Self(0x603);
    pub const JOYSTICK_BUTTON_UP: Self = Self(0x604);
    pub const JOYSTICK_ADDED: Self = Self(0x605);
    pub const JOYSTICK_REMOVED: Self = Self(0x606);
    pub const JOYSTICK_BATTERY_UPDATED: Self = Self(0x607);
    pub const JOYSTICK_UPDATE_COMPLETE: Self = Self(0x608);

    // Gamepad
    pub const GAMEPAD_AXIS_MOTION: Self = Self(0x650);
    pub const GAMEPAD_BUTTON_DOWN: Self = Self(0x651);
    pub const GAMEPAD_BUTTON_UP: Self = Self(0x652);
    pub const GAMEPAD_ADDED: Self = Self(0x653);
    pub const GAMEPAD_REMOVED: Self = Self(0x654);
    pub const GAMEPAD_REMAPPED: Self = Self(0x655);
    pub const GAMEPAD_TOUCHPAD_DOWN: Self = Self(0x656);
    pub const GAMEPAD_TOUCHPAD_MOTION: Self = Self(0x657);
    pub const GAMEPAD_TOUCHPAD_UP: Self = Self(0x658);
    pub const GAMEPAD_SENSOR_UPDATE: Self = Self(0x659);
    pub const GAMEPAD_UPDATE_COMPLETE: Self = Self(0x65A);
    pub const GAMEPAD_VENDOR_HANDLE_UPDATED: Self = Self(0x65B);

    // Touch
    pub const FINGER_DOWN: Self = Self(0x700);
    pub const FINGER_UP: Self = Self(0x701);
    pub const FINGER_MOTION: Self = Self(0x702);
    pub const FINGER_CANCELED: Self = Self(0x703);

    pub const CLIPBOARD_UPDATE: Self = Self(0x900);

    // Drag and drop
    pub const DROP_FILE: Self = Self(0x1000);
    pub const DROP_TEXT: Self = Self(0x1001);
    pub const DROP_BEGIN: Self = Self(0x1002);
    pub const DROP_COMPLETE: Self = Self(0x1003);
    pub const DROP_POSITION: Self = Self(0x1004);

    // Audio
    pub const AUDIO_DEVICE_ADDED: Self = Self(0x1100);
    pub const AUDIO_DEVICE_REMOVED: Self = Self(0x1101);
    pub const AUDIO_DEVICE_FORMAT_CHANGED: Self = Self(0x1102);

    pub const SENSOR_UPDATE: Self = Self(0x1200);

    // Pen
    pub const PEN_PROXIMITY_IN: Self = Self(0x1300);
    pub const PEN_PROXIMITY_OUT: Self = Self(0x1301);
    pub const PEN_DOWN: Self = Self(0x1302);
    pub const PEN_UP: Self = Self(0x1303);
    pub const PEN_BUTTON_DOWN: Self = Self(0x1304);
    pub const PEN_BUTTON_UP: Self = Self(0x1305);
    pub const PEN_MOTION: Self = Self(0x1306);
    pub const PEN_AXIS: Self = Self(0x1307);

    // Camera
    pub const CAMERA_DEVICE_ADDED: Self = Self(0x1400);
    pub const CAMERA_DEVICE_REMOVED: Self = Self(0x1401);
    pub const CAMERA_DEVICE_APPROVED: Self = Self(0x1402);
    pub const CAMERA_DEVICE_DENIED: Self = Self(0x1403);

    // Render
    pub const RENDER_TARGETS_RESET: Self = Self(0x2000);
    pub const RENDER_DEVICE_RESET: Self = Self(0x2001);
    pub const RENDER_DEVICE_LOST: Self = Self(0x2002);

    pub const POLL_SENTINEL: Self = Self(0x7F00);

    /// First value reserved for application-defined events.
    pub const USER: Self = Self(0x8000);

    /// Raw numeric value of the discriminant.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Display name from the fixed name table, `None` for values outside it.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::FIRST => "First",
            Self::QUIT => "Quit",
            Self::TERMINATING => "Terminating",
            Self::LOW_MEMORY => "LowMemory",
            Self::WILL_ENTER_BACKGROUND => "WillEnterBackground",
            Self::DID_ENTER_BACKGROUND => "DidEnterBackground",
            Self::WILL_ENTER_FOREGROUND => "WillEnterForeground",
            Self::DID_ENTER_FOREGROUND => "DidEnterForeground",
            Self::LOCALE_CHANGED => "LocaleChanged",
            Self::SYSTEM_THEME_CHANGED => "SystemThemeChanged",
            Self::DISPLAY_ORIENTATION => "DisplayOrientation",
            Self::DISPLAY_ADDED => "DisplayAdded",
            Self::DISPLAY_REMOVED => "DisplayRemoved",
            Self::DISPLAY_MOVED => "DisplayMoved",
            Self::DISPLAY_DESKTOP_MODE_CHANGED => "DisplayDesktopModeChanged",
            Self::DISPLAY_CURRENT_MODE_CHANGED => "DisplayCurrentModeChanged",
            Self::DISPLAY_CONTENT_SCALE_CHANGED => "DisplayContentScaleChanged",
            Self::WINDOW_SHOWN => "WindowShown",
            Self::WINDOW_HIDDEN => "WindowHidden",
            Self::WINDOW_EXPOSED => "WindowExposed",
            Self::WINDOW_MOVED => "WindowMoved",
            Self::WINDOW_RESIZED => "WindowResized",
            Self::WINDOW_PIXEL_SIZE_CHANGED => "WindowPixelSizeChanged",
            Self::WINDOW_METAL_VIEW_RESIZED => "WindowMetalViewResized",
            Self::WINDOW_MINIMIZED => "WindowMinimized",
            Self::WINDOW_MAXIMIZED => "WindowMaximized",
            Self::WINDOW_RESTORED => "WindowRestored",
            Self::WINDOW_MOUSE_ENTER => "WindowMouseEnter",
            Self::WINDOW_MOUSE_LEAVE => "WindowMouseLeave",
            Self::WINDOW_FOCUS_GAINED => "WindowFocusGained",
            Self::WINDOW_FOCUS_LOST => "WindowFocusLost",
            Self::WINDOW_CLOSE_REQUESTED => "WindowCloseRequested",
            Self::WINDOW_HIT_TEST => "WindowHitTest",
            Self::WINDOW_ICCPROF_CHANGED => "WindowIccprofChanged",
            Self::WINDOW_DISPLAY_CHANGED => "WindowDisplayChanged",
            Self::WINDOW_DISPLAY_SCALE_CHANGED => "WindowDisplayScaleChanged",
            Self::WINDOW_SAFE_AREA_CHANGED => "WindowSafeAreaChanged",
            Self::WINDOW_OCCLUDED => "WindowOccluded",
            Self::WINDOW_ENTER_FULLSCREEN => "WindowEnterFullscreen",
            Self::WINDOW_LEAVE_FULLSCREEN => "WindowLeaveFullscreen",
            Self::WINDOW_DESTROYED => "WindowDestroyed",
            Self::WINDOW_HDR_STATE_CHANGED => "WindowHdrStateChanged",
            Self::KEY_DOWN => "KeyDown",
            Self::KEY_UP => "KeyUp",
            Self::TEXT_EDITING => "TextEditing",
            Self::TEXT_INPUT => "TextInput",
            Self::KEYMAP_CHANGED => "KeymapChanged",
            Self::KEYBOARD_ADDED => "KeyboardAdded",
            Self::KEYBOARD_REMOVED => "KeyboardRemoved",
            Self::TEXT_EDITING_CANDIDATES => "TextEditingCandidates",
            Self::MOUSE_MOTION => "MouseMotion",
            Self::MOUSE_BUTTON_DOWN => "MouseButtonDown",
            Self::MOUSE_BUTTON_UP => "MouseButtonUp",
            Self::MOUSE_WHEEL => "MouseWheel",
            Self::MOUSE_ADDED => "MouseAdded",
            Self::MOUSE_REMOVED => "MouseRemoved",
            Self::JOYSTICK_AXIS_MOTION => "JoystickAxisMotion",
            Self::JOYSTICK_BALL_MOTION => "JoystickBallMotion",
            Self::JOYSTICK_HAT_MOTION => "JoystickHatMotion",
            Self::JOYSTICK_BUTTON_DOWN => "JoystickButtonDown",
            Self::JOYSTICK_BUTTON_UP => "JoystickButtonUp",
            Self::JOYSTICK_ADDED => "JoystickAdded",
            Self::JOYSTICK_REMOVED => "JoystickRemoved",
            Self::JOYSTICK_BATTERY_UPDATED => "JoystickBatteryUpdated",
            Self::JOYSTICK_UPDATE_COMPLETE => "JoystickUpdateComplete",
            Self::GAMEPAD_AXIS_MOTION => "GamepadAxisMotion",
            Self::GAMEPAD_BUTTON_DOWN => "GamepadButtonDown",
            Self::GAMEPAD_BUTTON_UP => "GamepadButtonUp",
            Self::GAMEPAD_ADDED => "GamepadAdded",
            Self::GAMEPAD_REMOVED => "GamepadRemoved",
            Self::GAMEPAD_REMAPPED => "GamepadRemapped",
            Self::GAMEPAD_TOUCHPAD_DOWN => "GamepadTouchpadDown",
            Self::GAMEPAD_TOUCHPAD_MOTION => "GamepadTouchpadMotion",
            Self::GAMEPAD_TOUCHPAD_UP => "GamepadTouchpadUp",
            Self::GAMEPAD_SENSOR_UPDATE => "GamepadSensorUpdate",
            Self::GAMEPAD_UPDATE_COMPLETE => "GamepadUpdateComplete",
            Self::GAMEPAD_VENDOR_HANDLE_UPDATED => "GamepadVendorHandleUpdated",
            Self::FINGER_DOWN => "FingerDown",
            Self::FINGER_UP => "FingerUp",
            Self::FINGER_MOTION => "FingerMotion",
            Self::FINGER_CANCELED => "FingerCanceled",
            Self::CLIPBOARD_UPDATE => "ClipboardUpdate",
            Self::DROP_FILE => "DropFile",
            Self::DROP_TEXT => "DropText",
            Self::DROP_BEGIN => "DropBegin",
            Self::DROP_COMPLETE => "DropComplete",
            Self::DROP_POSITION => "DropPosition",
            Self::AUDIO_DEVICE_ADDED => "AudioDeviceAdded",
            Self::AUDIO_DEVICE_REMOVED => "AudioDeviceRemoved",
            Self::AUDIO_DEVICE_FORMAT_CHANGED => "AudioDeviceFormatChanged",
            Self::SENSOR_UPDATE => "SensorUpdate",
            Self::PEN_PROXIMITY_IN => "PenProximityIn",
            Self::PEN_PROXIMITY_OUT => "PenProximityOut",
            Self::PEN_DOWN => "PenDown",
            Self::PEN_UP => "PenUp",
            Self::PEN_BUTTON_DOWN => "PenButtonDown",
            Self::PEN_BUTTON_UP => "PenButtonUp",
            Self::PEN_MOTION => "PenMotion",
            Self::PEN_AXIS => "PenAxis",
            Self::CAMERA_DEVICE_ADDED => "CameraDeviceAdded",
            Self::CAMERA_DEVICE_REMOVED => "CameraDeviceRemoved",
            Self::CAMERA_DEVICE_APPROVED => "CameraDeviceApproved",
            Self::CAMERA_DEVICE_DENIED => "CameraDeviceDenied",
            Self::RENDER_TARGETS_RESET => "RenderTargetsReset",
            Self::RENDER_DEVICE_RESET => "RenderDeviceReset",
            Self::RENDER_DEVICE_LOST => "RenderDeviceLost",
            Self::POLL_SENTINEL => "PollSentinel",
            Self::USER => "User",
            _ => return None,
        };
        Some(name)
    }

    /// Display name for any discriminant value.
    ///
    /// Never fails: values outside the name table render as
    /// `Unknown(<decimal value>)`.
    pub fn type_name(self) -> Cow<'static, str> {
        match self.name() {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("Unknown({})", self.0)),
        }
    }

    pub fn is_gamepad(self) -> bool {
        (Self::GAMEPAD_AXIS_MOTION.0..=Self::GAMEPAD_VENDOR_HANDLE_UPDATED.0).contains(&self.0)
    }
}

impl From<u32> for EventType {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<EventType> for u32 {
    fn from(event_type: EventType) -> Self {
        event_type.0
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_have_names() {
        assert_eq!(EventType::QUIT.type_name(), "Quit");
        assert_eq!(EventType::GAMEPAD_ADDED.type_name(), "GamepadAdded");
        assert_eq!(
            EventType::GAMEPAD_VENDOR_HANDLE_UPDATED.to_string(),
            "GamepadVendorHandleUpdated"
        );
    }

    #[test]
    fn every_family_is_named() {
        let named = [
            (EventType::WINDOW_FOCUS_GAINED, "WindowFocusGained"),
            (EventType::WINDOW_CLOSE_REQUESTED, "WindowCloseRequested"),
            (EventType::WINDOW_HDR_STATE_CHANGED, "WindowHdrStateChanged"),
            (EventType::DISPLAY_CONTENT_SCALE_CHANGED, "DisplayContentScaleChanged"),
            (EventType::TEXT_EDITING_CANDIDATES, "TextEditingCandidates"),
            (EventType::FINGER_CANCELED, "FingerCanceled"),
            (EventType::DROP_POSITION, "DropPosition"),
            (EventType::AUDIO_DEVICE_FORMAT_CHANGED, "AudioDeviceFormatChanged"),
            (EventType::PEN_AXIS, "PenAxis"),
            (EventType::CAMERA_DEVICE_DENIED, "CameraDeviceDenied"),
            (EventType::RENDER_DEVICE_LOST, "RenderDeviceLost"),
        ];
        for (event_type, name) in named {
            assert_eq!(event_type.type_name(), name);
        }
        // Window events form one contiguous block.
        for raw in EventType::WINDOW_SHOWN.raw()..=EventType::WINDOW_HDR_STATE_CHANGED.raw() {
            assert!(EventType(raw).name().is_some(), "window event {raw:#x} unnamed");
        }
    }

    #[test]
    fn unknown_values_embed_the_raw_number() {
        let name = EventType(9999).type_name();
        assert_eq!(name, "Unknown(9999)");
        assert!(matches!(name, Cow::Owned(_)));
    }

    #[test]
    fn type_name_is_total() {
        let samples = (0..0x2100)
            .step_by(7)
            .chain([0x7FFF, 0x8001, u32::MAX - 1, u32::MAX]);
        for raw in samples {
            let event_type = EventType(raw);
            let name = event_type.type_name();
            assert!(!name.is_empty(), "empty name for {raw}");
            if event_type.name().is_none() {
                assert!(name.contains(&raw.to_string()), "{name} lacks {raw}");
            }
        }
    }

    #[test]
    fn gamepad_range_is_exact() {
        assert!(EventType::GAMEPAD_AXIS_MOTION.is_gamepad());
        assert!(EventType::GAMEPAD_VENDOR_HANDLE_UPDATED.is_gamepad());
        assert!(!EventType::JOYSTICK_UPDATE_COMPLETE.is_gamepad());
        assert!(!EventType(0x65C).is_gamepad());
    }
}
