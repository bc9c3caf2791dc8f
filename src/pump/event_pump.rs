//! Event Pump - lifecycle of the polling thread
//!
//! Owns the worker thread that drains the native backend and posts envelopes
//! to the host queue. Stopping is cooperative: [`EventPump::stop`] fires a
//! cancellation token that the loop checks before every drain pass, so the
//! worst-case shutdown latency is one poll call plus one idle delay.

use std::sync::mpsc as std_mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::backend::{BackendError, NativeBackend};
use super::queue::HostQueue;
use super::worker::{PumpWorker, SharedDelay};
use crate::config::PumpSettings;

#[derive(Debug, thiserror::Error)]
pub enum PumpError {
    #[error("Event pump is already running")]
    AlreadyRunning,

    #[error("Backend error: {0}")]
    BackendError(#[from] BackendError),

    #[error("Failed to spawn pump thread: {0}")]
    SpawnError(#[from] std::io::Error),

    #[error("Pump thread panicked")]
    WorkerPanicked,
}

/// Background thread forwarding native events to a [`HostQueue`].
///
/// Dropping the pump stops it and waits for the thread, which closes every
/// gamepad still open.
///
/// ```rust,no_run
/// use inputbridge::backend::GilrsBackend;
/// use inputbridge::config::{GilrsSettings, PumpSettings};
/// use inputbridge::envelope::Envelope;
/// use inputbridge::pump::EventPump;
/// use tokio::sync::mpsc;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();
/// let mut pump = EventPump::new(PumpSettings::default());
/// pump.start(|| GilrsBackend::init(&GilrsSettings::default()), tx)?;
///
/// while let Some(envelope) = rx.blocking_recv() {
///     println!("{}", envelope.type_name());
/// }
/// # Ok(())
/// # }
/// ```
pub struct EventPump {
    settings: PumpSettings,
    delay: SharedDelay,
    cancel: CancellationToken,
    worker: Option<JoinHandle<()>>,
}

impl EventPump {
    pub fn new(settings: PumpSettings) -> Self {
        debug!("Creating event pump with settings: {:?}", settings);
        let delay = SharedDelay::new(settings.event_delay());
        Self {
            settings,
            delay,
            cancel: CancellationToken::new(),
            worker: None,
        }
    }

    /// Spawns the worker thread and runs `init` on it.
    ///
    /// `init` brings up the native backend. It runs on the worker because
    /// native contexts are often tied to the thread that created them; this
    /// call blocks until it returns. If it fails, the error is returned and
    /// no polling happens.
    pub fn start<B, F, Q>(&mut self, init: F, queue: Q) -> Result<(), PumpError>
    where
        B: NativeBackend + 'static,
        F: FnOnce() -> Result<B, BackendError> + Send + 'static,
        Q: HostQueue + Send + 'static,
    {
        if self.is_running() {
            warn!("Refusing to start event pump twice");
            return Err(PumpError::AlreadyRunning);
        }
        // A previous run that already ended leaves a finished handle behind.
        if let Err(e) = self.wait() {
            warn!("Previous event pump run ended badly: {}", e);
        }

        info!("Spawning event pump thread '{}'", self.settings.thread_name);

        let cancel = CancellationToken::new();
        self.cancel = cancel.clone();
        let delay = self.delay.clone();
        let (ready_tx, ready_rx) = std_mpsc::sync_channel::<Result<(), BackendError>>(1);

        let handle = thread::Builder::new()
            .name(self.settings.thread_name.clone())
            .spawn(move || {
                let backend = match init() {
                    Ok(backend) => {
                        let _ = ready_tx.send(Ok(()));
                        backend
                    }
                    Err(e) => {
                        error!("Failed to initialize native backend: {}", e);
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };

                let mut worker = PumpWorker::new(backend, delay);
                worker.run(&queue, &cancel);
                info!("Event pump thread finished");
            })?;

        match ready_rx.recv() {
            Ok(Ok(())) => {
                info!("Event pump started");
                self.worker = Some(handle);
                Ok(())
            }
            Ok(Err(e)) => {
                let _ = handle.join();
                Err(PumpError::BackendError(e))
            }
            // The sender was dropped without a message: `init` panicked.
            Err(_) => {
                let _ = handle.join();
                error!("Event pump thread panicked during initialization");
                Err(PumpError::WorkerPanicked)
            }
        }
    }

    /// Asks the worker to exit. Does not wait; see [`wait`](Self::wait).
    pub fn stop(&self) {
        debug!("Stopping event pump");
        self.cancel.cancel();
    }

    /// Blocks until the worker thread has exited. Returns immediately if the
    /// pump was never started.
    pub fn wait(&mut self) -> Result<(), PumpError> {
        match self.worker.take() {
            Some(handle) => handle.join().map_err(|_| {
                error!("Event pump thread panicked");
                PumpError::WorkerPanicked
            }),
            None => Ok(()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn event_delay(&self) -> Duration {
        self.delay.get()
    }

    /// Takes effect from the next idle wait; a wait in progress runs to completion.
    pub fn set_event_delay(&self, delay: Duration) {
        debug!("Setting event delay to {:?}", delay);
        self.delay.set(delay);
    }

    pub fn settings(&self) -> &PumpSettings {
        &self.settings
    }
}

impl Drop for EventPump {
    fn drop(&mut self) {
        self.stop();
        if let Err(e) = self.wait() {
            error!("Event pump did not shut down cleanly: {}", e);
        }
    }
}
