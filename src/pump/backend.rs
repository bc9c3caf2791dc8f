use std::time::Duration;

use crate::event::{DeviceId, NativeEvent};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Failed to initialize native input subsystem: {0}")]
    InitializationError(String),
}

/// The native input library, as seen by the pump.
///
/// A backend is created on the pump's worker thread and never leaves it, so
/// implementations do not need to be `Send`.
pub trait NativeBackend {
    /// Open handle of a connected gamepad.
    type Gamepad;

    /// Next pending event, or `None` once the backend's queue is empty.
    fn poll_event(&mut self) -> Option<NativeEvent>;

    /// Opens the gamepad that was just reported as added.
    fn open_gamepad(&mut self, which: DeviceId) -> Self::Gamepad;

    /// Releases a handle returned by [`open_gamepad`](Self::open_gamepad).
    fn close_gamepad(&mut self, gamepad: Self::Gamepad);

    /// Idle wait between drain passes.
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
