//! Resize events emitted by the growable array.

use std::fmt;

/// A single doubling of the backing store.
///
/// Emitted when an append finds the store full, before the value is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeEvent {
    /// 1-based ordinal of the append that triggered the resize.
    pub append_index: usize,
    pub old_capacity: usize,
    pub new_capacity: usize,
    /// Elements moved into the new store (always equal to `old_capacity`).
    pub copied: usize,
}

impl ResizeEvent {
    pub(crate) fn doubling(append_index: usize, old_capacity: usize) -> Self {
        Self {
            append_index,
            old_capacity,
            new_capacity: old_capacity * 2,
            copied: old_capacity,
        }
    }

    /// Feeds the event into a hasher in a fixed byte layout.
    pub(crate) fn hash_into(&self, hasher: &mut blake3::Hasher) {
        for field in [
            self.append_index,
            self.old_capacity,
            self.new_capacity,
            self.copied,
        ] {
            hasher.update(&(field as u64).to_le_bytes());
        }
    }
}

impl fmt::Display for ResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resizing from {} to {}",
            self.old_capacity, self.new_capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubling() {
        let event = ResizeEvent::doubling(5, 4);
        assert_eq!(event.new_capacity, 8);
        assert_eq!(event.copied, 4);
        assert_eq!(event.to_string(), "Resizing from 4 to 8");
    }
}
