use tokio::sync::mpsc;

use crate::envelope::Envelope;

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("Host event queue is closed")]
    Closed,
}

/// Event queue of the host application.
///
/// `post` is called from the pump's worker thread and must not block.
/// `is_alive` is the pump's liveness signal: once it reports `false` the
/// pump finishes its current pass and exits.
pub trait HostQueue {
    fn post(&self, envelope: Envelope) -> Result<(), PostError>;

    fn is_alive(&self) -> bool;
}

/// The receiving half lives with the host; dropping it ends the pump.
impl HostQueue for mpsc::UnboundedSender<Envelope> {
    fn post(&self, envelope: Envelope) -> Result<(), PostError> {
        self.send(envelope).map_err(|_| PostError::Closed)
    }

    fn is_alive(&self) -> bool {
        !self.is_closed()
    }
}
