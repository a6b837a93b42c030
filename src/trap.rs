//! Bounded storage for received trap notifications.
//!
//! Trap *delivery* is out of scope; an external receiver decodes incoming
//! notifications and appends them here, and the facade reads them back.
//! The buffer keeps the newest [`TRAP_CAPACITY`] entries, newest first.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::SystemTime;

use crate::oid::Oid;
use crate::value::Value;

/// Maximum number of retained traps.
pub const TRAP_CAPACITY: usize = 100;

/// One received notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Trap {
    /// Address of the agent that sent the notification.
    pub source: String,
    /// Decoded OID/value pairs from the notification.
    pub varbinds: Vec<(Oid, Value)>,
    /// Arrival time.
    pub received_at: SystemTime,
}

impl Trap {
    /// Create a trap stamped with the current time.
    pub fn new(source: impl Into<String>, varbinds: Vec<(Oid, Value)>) -> Self {
        Self {
            source: source.into(),
            varbinds,
            received_at: SystemTime::now(),
        }
    }
}

/// Bounded FIFO of received traps, newest first.
///
/// Interior mutex so a receiver task and the facade can share one buffer
/// behind an `Arc`.
#[derive(Debug, Default)]
pub struct TrapBuffer {
    traps: Mutex<VecDeque<Trap>>,
}

impl TrapBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front; once the buffer exceeds [`TRAP_CAPACITY`],
    /// the oldest entries are silently dropped.
    pub fn append(&self, trap: Trap) {
        let mut traps = self.traps.lock().unwrap();
        traps.push_front(trap);
        traps.truncate(TRAP_CAPACITY);
    }

    /// Snapshot of all retained traps, newest first.
    pub fn all(&self) -> Vec<Trap> {
        self.traps.lock().unwrap().iter().cloned().collect()
    }

    /// Number of retained traps.
    pub fn count(&self) -> usize {
        self.traps.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    fn trap(n: i32) -> Trap {
        Trap::new(
            "192.0.2.1",
            vec![(oid!(1, 3, 6, 1, 4, 1, 99999, 1, 2, 0), Value::Integer(n))],
        )
    }

    #[test]
    fn test_append_is_newest_first() {
        let buffer = TrapBuffer::new();
        buffer.append(trap(1));
        buffer.append(trap(2));
        buffer.append(trap(3));

        let all = buffer.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].varbinds[0].1, Value::Integer(3));
        assert_eq!(all[2].varbinds[0].1, Value::Integer(1));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let buffer = TrapBuffer::new();
        for n in 1..=150 {
            buffer.append(trap(n));
        }

        assert_eq!(buffer.count(), TRAP_CAPACITY);
        let all = buffer.all();
        // Newest is the 150th inserted; the first 50 are gone
        assert_eq!(all[0].varbinds[0].1, Value::Integer(150));
        assert_eq!(all[99].varbinds[0].1, Value::Integer(51));
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = TrapBuffer::new();
        assert_eq!(buffer.count(), 0);
        assert!(buffer.all().is_empty());
    }
}
