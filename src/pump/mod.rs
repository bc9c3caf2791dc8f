//! Polling pump from the native backend to the host event queue
//!
//! ```text
//! NativeBackend ──► PumpWorker ──► HostQueue ──► host handlers
//!  (poll/open/close)  (classify, wrap,   (post)
//!                      track gamepads)
//! ```
//!
//! - [`backend`] - what the pump needs from the native library
//! - [`queue`] - what the pump needs from the host application
//! - [`gamepads`] - open gamepad handles by device id
//! - [`event_pump`] - the worker thread and its start/stop lifecycle

pub mod backend;
pub mod event_pump;
pub mod gamepads;
pub mod queue;
mod worker;

pub use backend::{BackendError, NativeBackend};
pub use event_pump::{EventPump, PumpError};
pub use gamepads::{GamepadTable, TrackingError};
pub use queue::{HostQueue, PostError};
