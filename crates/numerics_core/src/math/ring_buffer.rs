//! Fixed-capacity FIFO used as a sensor memory.

use crate::types::{KernelError, KernelResult};

/// A fixed-capacity shift register.
///
/// Pushing onto a full register evicts the oldest sample, so once filled it
/// always holds exactly the `capacity` most recent values.
///
/// # Examples
/// ```
/// use numerics_core::math::ShiftRegister;
///
/// let mut register = ShiftRegister::filled(3, 0.0_f64).unwrap();
/// register.push(1.0);
/// register.push(2.0);
/// assert_eq!(register.oldest(), Some(0.0));
/// register.push(3.0);
/// assert_eq!(register.oldest(), Some(1.0));
/// assert_eq!(register.newest(), Some(3.0));
/// assert_eq!(register.iter().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftRegister<T> {
    slots: Vec<T>,
    capacity: usize,
    /// Index of the oldest sample once the register is full.
    head: usize,
}

impl<T: Copy> ShiftRegister<T> {
    /// Creates an empty register.
    ///
    /// # Errors
    /// `InvalidParameter` when `capacity` is zero.
    pub fn new(capacity: usize) -> KernelResult<Self> {
        if capacity == 0 {
            return Err(KernelError::invalid("capacity", "must be at least 1"));
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        })
    }

    /// Creates a full register holding `capacity` copies of `value`.
    pub fn filled(capacity: usize, value: T) -> KernelResult<Self> {
        let mut register = Self::new(capacity)?;
        register.slots.resize(capacity, value);
        Ok(register)
    }

    /// Appends a sample, evicting and returning the oldest one when full.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.slots.len() < self.capacity {
            self.slots.push(value);
            return None;
        }
        let evicted = std::mem::replace(&mut self.slots[self.head], value);
        self.head = (self.head + 1) % self.capacity;
        Some(evicted)
    }

    /// Oldest retained sample.
    pub fn oldest(&self) -> Option<T> {
        if self.is_full() {
            self.slots.get(self.head).copied()
        } else {
            self.slots.first().copied()
        }
    }

    /// Most recent sample.
    pub fn newest(&self) -> Option<T> {
        if self.slots.is_empty() {
            return None;
        }
        if self.is_full() {
            let idx = (self.head + self.capacity - 1) % self.capacity;
            Some(self.slots[idx])
        } else {
            self.slots.last().copied()
        }
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of retained samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True once `capacity` samples are retained.
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let split = if self.is_full() { self.head } else { 0 };
        self.slots[split..]
            .iter()
            .chain(self.slots[..split].iter())
            .copied()
    }
}

impl<T: Copy + std::ops::Sub<Output = T>> ShiftRegister<T> {
    /// Newest minus oldest sample.
    pub fn span(&self) -> Option<T> {
        Some(self.newest()? - self.oldest()?)
    }
}
