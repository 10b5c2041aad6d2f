//! # Growable Array
//!
//! A fixed-length backing store that is replaced by one twice as large
//! whenever an append finds it full.
//!
//! ## Invariants:
//! - `capacity` starts at 1 and is always a power of two
//! - `len() <= capacity()`
//! - slots `0..len()` are occupied, the rest are empty

use crate::event::ResizeEvent;

/// Initial slot count of every new store.
pub const INITIAL_CAPACITY: usize = 1;

#[derive(Debug, Clone)]
pub struct GrowableArray {
    slots: Box<[Option<u64>]>,
    size: usize,
}

impl Default for GrowableArray {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowableArray {
    pub fn new() -> Self {
        Self {
            slots: vec![None; INITIAL_CAPACITY].into_boxed_slice(),
            size: 0,
        }
    }

    /// Appends `value`, doubling the store first if it is full.
    ///
    /// Returns the resize event when the append triggered one. O(1) unless a
    /// resize happens, in which case the `len()` existing values are copied.
    pub fn push(&mut self, value: u64) -> Option<ResizeEvent> {
        let event = if self.size == self.capacity() {
            Some(self.grow())
        } else {
            None
        };

        self.slots[self.size] = Some(value);
        self.size += 1;
        event
    }

    fn grow(&mut self) -> ResizeEvent {
        let event = ResizeEvent::doubling(self.size + 1, self.capacity());

        let mut replacement = vec![None; event.new_capacity].into_boxed_slice();
        replacement[..self.size].copy_from_slice(&self.slots[..self.size]);
        self.slots = replacement;

        event
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Values in the occupied prefix, in append order.
    pub fn values(&self) -> Vec<u64> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.slots[..self.size].iter().flatten().copied()
    }
}
