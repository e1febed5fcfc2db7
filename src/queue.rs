use crate::config::BufConfig;
use crate::error::{CollectionError, OrPanic};
use crate::iter::QueueIter;
use crate::raw_buf::RawBuf;

/// Positions of the oldest and newest live elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    front: usize,
    rear: usize,
}

/// A bounded FIFO queue over a circular [`RawBuf`].
///
/// The capacity is fixed at construction. One slot always stays unused to
/// tell a full queue from an empty one, so a queue of capacity `N` holds at
/// most `N - 1` elements.
///
/// States:
/// - Empty: `front()` and `rear()` are both `None`.
/// - Full: the slot right after `rear` is the reserved one, that is
///   `(rear + 2) % capacity == front`. This is deliberately not
///   `(rear + 1) % capacity == front`, which would let the queue fill every slot.
/// - Anything else is non-empty and not full.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    buf: RawBuf<T>,
    span: Option<Span>,
}

impl<T> Queue<T> {
    /// Creates an empty queue with the default capacity (16).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BufConfig::queue())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(BufConfig::queue().with_capacity(capacity))
    }

    #[must_use]
    pub fn with_config(config: BufConfig) -> Self {
        Self {
            buf: RawBuf::with_config(config),
            span: None,
        }
    }

    /// # Errors
    ///
    /// Returns `CollectionError::AllocationFailure` if the buffer cannot be
    /// allocated.
    pub fn try_with_config(config: BufConfig) -> Result<Self, CollectionError> {
        Ok(Self {
            buf: RawBuf::try_with_config(config)?,
            span: None,
        })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Slot index of the oldest element, `None` when empty.
    #[must_use]
    pub fn front(&self) -> Option<usize> {
        self.span.map(|span| span.front)
    }

    /// Slot index of the newest element, `None` when empty.
    #[must_use]
    pub fn rear(&self) -> Option<usize> {
        self.span.map(|span| span.rear)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        match self.span {
            Some(span) => (span.rear + 2) % self.capacity() == span.front,
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self.span {
            Some(span) if span.rear >= span.front => span.rear - span.front + 1,
            Some(span) => self.capacity() - span.front + span.rear + 1,
            None => 0,
        }
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.buf.is_released()
    }

    /// Appends `value` at the rear.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Full` if the queue is full,
    /// `CollectionError::Released` after `release()`.
    pub fn try_enqueue(&mut self, value: T) -> Result<(), CollectionError> {
        self.buf.ensure_live()?;
        if self.is_full() {
            return Err(CollectionError::Full {
                capacity: self.capacity(),
            });
        }

        let span = match self.span {
            Some(span) => Span {
                front: span.front,
                rear: (span.rear + 1) % self.capacity(),
            },
            None => Span { front: 0, rear: 0 },
        };
        self.buf.put(span.rear, value);
        self.span = Some(span);
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if the queue is full.
    #[track_caller]
    pub fn enqueue(&mut self, value: T) {
        self.try_enqueue(value).or_panic();
    }

    /// Removes and returns the front element.
    ///
    /// Removing the last element puts the queue back in the empty state, so
    /// the next enqueue starts again at slot 0.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Empty` if the queue is empty,
    /// `CollectionError::Released` after `release()`.
    pub fn try_dequeue(&mut self) -> Result<T, CollectionError> {
        self.buf.ensure_live()?;
        let span = self.span.ok_or(CollectionError::Empty)?;
        let value = self.buf.take(span.front).ok_or(CollectionError::Empty)?;

        self.span = if span.front == span.rear {
            None
        } else {
            Some(Span {
                front: (span.front + 1) % self.capacity(),
                rear: span.rear,
            })
        };
        Ok(value)
    }

    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[track_caller]
    pub fn dequeue(&mut self) -> T {
        self.try_dequeue().or_panic()
    }

    /// Returns the front element without removing it.
    ///
    /// # Errors
    ///
    /// Same as [`Queue::try_dequeue`].
    pub fn try_peek(&self) -> Result<&T, CollectionError> {
        self.buf.ensure_live()?;
        let span = self.span.ok_or(CollectionError::Empty)?;
        self.buf.slot(span.front).ok_or(CollectionError::Empty)
    }

    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[must_use]
    #[track_caller]
    pub fn peek(&self) -> &T {
        self.try_peek().or_panic()
    }

    /// Drops the live elements. Only the slots between `front` and `rear`
    /// are touched.
    pub fn clear(&mut self) {
        if let Some(span) = self.span.take() {
            if span.rear >= span.front {
                self.buf.clear(span.front, span.rear + 1);
            } else {
                let capacity = self.capacity();
                self.buf.clear(span.front, capacity);
                self.buf.clear(0, span.rear + 1);
            }
        }
    }

    /// Frees the buffer. Calling it again is a no-op.
    pub fn release(&mut self) {
        self.buf.release();
        self.span = None;
    }

    /// Returns an iterator from front to rear, wrapping around the buffer end.
    #[must_use]
    pub fn iter(&self) -> QueueIter<'_, T> {
        let front = self.front().unwrap_or(0);
        QueueIter::new(self.buf.slots(self.capacity()), front, self.len())
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = QueueIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
