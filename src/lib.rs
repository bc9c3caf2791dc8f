//! # inputbridge
//!
//! Forwards events from a native gamepad/input library into the event queue
//! of a host application.
//!
//! ```text
//! NativeBackend ──► EventPump (worker thread) ──► HostQueue ──► host handlers
//!   raw events       classify, wrap, track         Envelope
//!                    gamepad handles
//! ```
//!
//! - [`event`] - native event records and their discriminants
//! - [`envelope`] - the wrappers posted to the host
//! - [`pump`] - the polling thread and its collaborators
//! - [`backend`] - the gilrs-based native backend
//! - [`config`] / [`logging`] - ambient setup

pub mod backend;
pub mod config;
pub mod envelope;
pub mod event;
pub mod logging;
pub mod pump;

pub use envelope::{Envelope, EnvelopeKind, EventEnvelope};
pub use event::{EventType, NativeEvent};
pub use pump::{EventPump, HostQueue, NativeBackend, PumpError};

/// Version of this library, fixed at build time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
