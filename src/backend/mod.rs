//! Native backends
//!
//! Implementations of [`NativeBackend`](crate::pump::NativeBackend) for real
//! input libraries.

mod gilrs_backend;

pub use gilrs_backend::{GilrsBackend, GilrsGamepad};
