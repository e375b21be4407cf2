//! Document id generation.
//!
//! Ids have the shape of a document-store object id: 24 lowercase hex
//! digits, the first 8 a big-endian seconds timestamp and the remaining 16
//! drawn from an xorshift64 stream.

use std::time::{SystemTime, UNIX_EPOCH};

/// Generates 24-hex-digit document ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    state: u64,
}

impl IdGenerator {
    /// Replaces a zero seed, which is a fixed point of xorshift.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Seeds from the system clock.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos ^ u64::from(std::process::id()))
    }

    /// Xorshift64 with shifts (13, 7, 17).
    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a new id stamped with `timestamp` (seconds since the epoch).
    pub fn next_id_at(&mut self, timestamp: u32) -> String {
        format!("{timestamp:08x}{:016x}", self.next_u64())
    }

    /// Returns a new id stamped with the current time.
    pub fn next_id(&mut self) -> String {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);
        self.next_id_at(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_24_lowercase_hex_digits() {
        let mut ids = IdGenerator::new(42);
        let id = ids.next_id();
        assert_eq!(id.len(), 24);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn timestamp_prefixes_id() {
        let mut ids = IdGenerator::new(7);
        assert!(ids.next_id_at(0x6543_21ab).starts_with("654321ab"));
    }

    #[test]
    fn same_seed_same_ids() {
        let mut a = IdGenerator::new(99);
        let mut b = IdGenerator::new(99);
        for _ in 0..10 {
            assert_eq!(a.next_id_at(1), b.next_id_at(1));
        }
    }

    #[test]
    fn consecutive_ids_differ() {
        let mut ids = IdGenerator::new(0);
        let first = ids.next_id_at(1);
        let second = ids.next_id_at(1);
        assert_ne!(first, second);
    }
}
