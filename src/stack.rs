use std::fmt;

/// Slots allocated up front by [`Stack::new`].
pub const DEFAULT_CAPACITY: usize = 20;

/// LIFO stack of `i32` values.
///
/// Storage is a single owned block of `capacity` slots. Slots
/// `[0, count)` hold live values in insertion order, with the top of
/// the stack at index `count - 1`; the remaining slots are spare room
/// for future pushes. The buffer only ever grows--popping never gives
/// capacity back.
#[derive(Debug)]
pub struct Stack {
    buffer: Box<[i32]>,
    count: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buffer: vec![0; capacity].into_boxed_slice(), count: 0 }
    }

    /// Add `value` to the top of the stack, growing the buffer first
    /// if every slot is already in use.
    pub fn push(&mut self, value: i32) {
        if self.count == self.capacity() {
            self.grow();
        }
        self.buffer[self.count] = value;
        self.count += 1;
    }

    /// Remove and return the top value, or `None` if the stack is
    /// empty. The slot itself is kept; capacity never shrinks.
    pub fn pop(&mut self) -> Option<i32> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        Some(self.buffer[self.count])
    }

    /// Return the top value without removing it, or `None` if the
    /// stack is empty.
    pub fn peek(&self) -> Option<i32> {
        if self.count == 0 {
            None
        } else {
            Some(self.buffer[self.count - 1])
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn size(&self) -> usize {
        self.count
    }

    /// Total allocated slots, live or not.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Swap the buffer for one twice as large, copying the live slots
    /// across in place. Doubling, rather than growing by a fixed step,
    /// is what keeps push amortized O(1).
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        // A zero-capacity stack needs a nonzero base to double from.
        let new_capacity = if old_capacity == 0 { 1 } else { old_capacity * 2 };
        let mut buffer = vec![0; new_capacity].into_boxed_slice();
        buffer[..self.count].copy_from_slice(&self.buffer[..self.count]);
        self.buffer = buffer;
        log::trace!("GROW: capacity {old_capacity} -> {new_capacity}");
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.buffer[..self.count].iter().rev() {
            writeln!(f, "{value}")?;
        }
        write!(f, "")
    }
}
