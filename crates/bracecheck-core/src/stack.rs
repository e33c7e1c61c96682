//! Fixed-capacity LIFO stack.

use thiserror::Error;

/// Capacity used by [`BoundedStack::with_default_capacity`].
pub const DEFAULT_CAPACITY: usize = 1000;

/// Errors returned by [`BoundedStack`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// A push was attempted while the stack held `capacity` items.
    #[error("stack is full (capacity {capacity})")]
    Overflow {
        /// The fixed capacity of the stack.
        capacity: usize,
    },
    /// Storage for `capacity` items could not be reserved.
    #[error("cannot reserve stack storage for {capacity} items")]
    Reserve {
        /// The requested capacity.
        capacity: usize,
    },
}

/// A last-in-first-out stack whose capacity is fixed at construction.
///
/// Storage for a bounded stack is reserved up front, so `push` never
/// reallocates. The unbounded variant grows on demand and never overflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: Option<usize>,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack holding at most `capacity` items.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Reserve`] if storage for `capacity` items
    /// cannot be reserved.
    pub fn new(capacity: usize) -> Result<Self, StackError> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| StackError::Reserve { capacity })?;
        Ok(Self {
            items,
            capacity: Some(capacity),
        })
    }

    /// Create an empty stack with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: Some(DEFAULT_CAPACITY),
        }
    }

    /// Create an empty stack holding at most `capacity` items, without
    /// reserving storage up front.
    #[must_use]
    pub const fn growable(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Create an empty stack with no capacity limit.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            items: Vec::new(),
            capacity: None,
        }
    }

    /// Insert `item` at the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Overflow`] if the stack is already full; the
    /// stack is left unchanged.
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if let Some(capacity) = self.capacity
            && self.items.len() == capacity
        {
            return Err(StackError::Overflow { capacity });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Return the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items currently on the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The fixed capacity, or `None` for an unbounded stack.
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Whether the next `push` would overflow.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|capacity| self.items.len() == capacity)
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
