// SPDX-License-Identifier: MPL-2.0
//! Fixed-size event history.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// Keeps the most recent elements, oldest first.
///
/// ```
/// use iced_subscriptions::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::default());
/// assert_eq!(buffer.push(1), None);
/// assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    limit: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let limit = capacity.value().max(1);
        Self {
            data: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Appends an element and hands back the one it displaced, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.data.len() >= self.limit {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(item);
        evicted
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
