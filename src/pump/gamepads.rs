use std::collections::HashMap;

use crate::event::{DeviceId, EventType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackingError {
    #[error("Gamepad {0} was added twice")]
    AlreadyConnected(DeviceId),

    #[error("Gamepad {0} is not connected")]
    UnknownDevice(DeviceId),

    #[error("{0} event carries no device id")]
    MissingDevice(EventType),
}

/// Open gamepad handles by device id.
///
/// Holds an entry for a device exactly while it is connected: between its
/// added event and its removed event.
#[derive(Debug)]
pub struct GamepadTable<G> {
    handles: HashMap<DeviceId, G>,
}

impl<G> Default for GamepadTable<G> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<G> GamepadTable<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, which: DeviceId) -> bool {
        self.handles.contains_key(&which)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Fails without touching the table if `which` is already connected.
    pub fn ensure_absent(&self, which: DeviceId) -> Result<(), TrackingError> {
        if self.contains(which) {
            Err(TrackingError::AlreadyConnected(which))
        } else {
            Ok(())
        }
    }

    pub fn ensure_present(&self, which: DeviceId) -> Result<(), TrackingError> {
        if self.contains(which) {
            Ok(())
        } else {
            Err(TrackingError::UnknownDevice(which))
        }
    }

    pub fn insert(&mut self, which: DeviceId, handle: G) -> Result<(), TrackingError> {
        self.ensure_absent(which)?;
        self.handles.insert(which, handle);
        Ok(())
    }

    pub fn remove(&mut self, which: DeviceId) -> Result<G, TrackingError> {
        self.handles
            .remove(&which)
            .ok_or(TrackingError::UnknownDevice(which))
    }

    /// Empties the table, yielding every handle still open.
    pub fn drain(&mut self) -> impl Iterator<Item = (DeviceId, G)> + '_ {
        self.handles.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_remove() {
        let mut table = GamepadTable::new();
        table.insert(5, "pad-5").unwrap();
        assert!(table.contains(5));
        assert_eq!(table.remove(5), Ok("pad-5"));
        assert!(table.is_empty());
    }

    #[test]
    fn duplicate_insert_keeps_the_first_handle() {
        let mut table = GamepadTable::new();
        table.insert(1, "first").unwrap();
        assert_eq!(table.insert(1, "second"), Err(TrackingError::AlreadyConnected(1)));
        assert_eq!(table.remove(1), Ok("first"));
    }

    #[test]
    fn unknown_device_is_reported() {
        let mut table: GamepadTable<()> = GamepadTable::new();
        assert_eq!(table.ensure_present(3), Err(TrackingError::UnknownDevice(3)));
        assert_eq!(table.remove(3), Err(TrackingError::UnknownDevice(3)));
    }

    #[test]
    fn drain_empties_the_table() {
        let mut table = GamepadTable::new();
        table.insert(1, 'a').unwrap();
        table.insert(2, 'b').unwrap();
        let mut drained: Vec<_> = table.drain().collect();
        drained.sort();
        assert_eq!(drained, vec![(1, 'a'), (2, 'b')]);
        assert_eq!(table.len(), 0);
    }
}
