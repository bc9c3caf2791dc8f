use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::backend::NativeBackend;
use super::gamepads::{GamepadTable, TrackingError};
use super::queue::HostQueue;
use crate::envelope::{Envelope, EnvelopeKind};
use crate::event::{DeviceId, EventType, NativeEvent};

const STATS_INTERVAL: Duration = Duration::from_secs(10);

/// Idle delay shared between an [`EventPump`](super::EventPump) and its worker.
///
/// Read once per loop iteration, so a change never cuts a running wait short.
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedDelay(Arc<AtomicU64>);

impl SharedDelay {
    pub(crate) fn new(delay: Duration) -> Self {
        let shared = Self::default();
        shared.set(delay);
        shared
    }

    pub(crate) fn get(&self) -> Duration {
        Duration::from_nanos(self.0.load(Ordering::Relaxed))
    }

    pub(crate) fn set(&self, delay: Duration) {
        let nanos = u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX);
        self.0.store(nanos, Ordering::Relaxed);
    }
}

/// State owned by the pump thread: the backend and the open gamepads.
pub(crate) struct PumpWorker<B: NativeBackend> {
    backend: B,
    gamepads: GamepadTable<B::Gamepad>,
    delay: SharedDelay,
}

impl<B: NativeBackend> PumpWorker<B> {
    pub(crate) fn new(backend: B, delay: SharedDelay) -> Self {
        Self {
            backend,
            gamepads: GamepadTable::new(),
            delay,
        }
    }

    /// Drains and posts until `cancel` fires or the host queue goes away,
    /// then closes every gamepad still open.
    pub(crate) fn run<Q: HostQueue + ?Sized>(&mut self, queue: &Q, cancel: &CancellationToken) {
        info!("Starting event pump loop");

        let mut event_count: usize = 0;
        let mut last_log_time = Instant::now();

        while !cancel.is_cancelled() && queue.is_alive() {
            event_count += self.drain(queue);

            if last_log_time.elapsed() >= STATS_INTERVAL {
                debug!(
                    "Event pump stats: posted {} events in last {} seconds, {} gamepads open",
                    event_count,
                    STATS_INTERVAL.as_secs(),
                    self.gamepads.len()
                );
                event_count = 0;
                last_log_time = Instant::now();
            }

            let delay = self.delay.get();
            if !delay.is_zero() {
                self.backend.delay(delay);
            }
        }

        if cancel.is_cancelled() {
            info!("Event pump stopped");
        } else {
            warn!("Host event queue closed, event pump exiting");
        }
        self.release_all();
    }

    /// Polls the backend until it runs dry, posting one envelope per event.
    /// Returns the number of envelopes the queue accepted.
    ///
    /// Stops at the first rejected post and leaves the rest unpolled.
    pub(crate) fn drain<Q: HostQueue + ?Sized>(&mut self, queue: &Q) -> usize {
        let mut posted = 0;
        while let Some(data) = self.backend.poll_event() {
            let envelope = self.dispatch(data);
            if let Err(e) = queue.post(envelope) {
                warn!("Dropping {} event: {}", data.event_type, e);
                break;
            }
            posted += 1;
        }
        posted
    }

    /// Wraps one record in its envelope variant, opening or closing the
    /// gamepad handle on added and removed events.
    pub(crate) fn dispatch(&mut self, data: NativeEvent) -> Envelope {
        let event_type = data.event_type;
        debug!("Dispatching {} event: {:?}", event_type, data.payload);

        match event_type {
            EventType::GAMEPAD_ADDED => self.connect(&data),
            EventType::GAMEPAD_REMOVED => self.disconnect(&data),
            _ if EnvelopeKind::for_event_type(event_type) != EnvelopeKind::Generic => {
                if let Some(which) = device_of(&data) {
                    if let Err(e) = self.gamepads.ensure_present(which) {
                        contract_violation(e);
                    }
                }
            }
            _ => {}
        }

        Envelope::classify(data, event_type)
    }

    #[cfg(test)]
    pub(crate) fn gamepads(&self) -> &GamepadTable<B::Gamepad> {
        &self.gamepads
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    fn connect(&mut self, data: &NativeEvent) {
        let Some(which) = device_of(data) else {
            return;
        };
        if let Err(e) = self.gamepads.ensure_absent(which) {
            contract_violation(e);
            return;
        }

        let handle = self.backend.open_gamepad(which);
        if let Err(e) = self.gamepads.insert(which, handle) {
            contract_violation(e);
        }
        info!("Gamepad {} opened ({} connected)", which, self.gamepads.len());
    }

    fn disconnect(&mut self, data: &NativeEvent) {
        let Some(which) = device_of(data) else {
            return;
        };
        match self.gamepads.remove(which) {
            Ok(handle) => {
                self.backend.close_gamepad(handle);
                info!("Gamepad {} closed ({} connected)", which, self.gamepads.len());
            }
            Err(e) => contract_violation(e),
        }
    }

    fn release_all(&mut self) {
        for (which, handle) in self.gamepads.drain() {
            debug!("Closing gamepad {} on shutdown", which);
            self.backend.close_gamepad(handle);
        }
    }
}

fn device_of(data: &NativeEvent) -> Option<DeviceId> {
    let which = data.which();
    if which.is_none() {
        contract_violation(TrackingError::MissingDevice(data.event_type));
    }
    which
}

/// The native library is trusted to report devices consistently. A broken
/// report is a bug: fatal in debug builds, logged and skipped in release.
fn contract_violation(err: TrackingError) {
    error!("Gamepad tracking contract violated: {}", err);
    if cfg!(debug_assertions) {
        panic!("gamepad tracking contract violated: {err}");
    }
}
