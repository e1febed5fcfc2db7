use crate::config::BufConfig;
use crate::error::{CollectionError, OrPanic};
use crate::iter::SlotIter;
use crate::raw_buf::RawBuf;

/// What a push does when the stack is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthMode {
    /// The capacity is fixed; pushing onto a full stack is an error.
    Static,
    /// The capacity doubles when a push finds the stack full.
    Dynamic,
}

/// A LIFO stack over a [`RawBuf`].
///
/// The bottom of the stack is slot 0 and the top is slot `size() - 1`.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    buf: RawBuf<T>,
    len: usize,
    mode: GrowthMode,
}

impl<T> Stack<T> {
    /// Creates an empty stack with the default capacity (16).
    #[must_use]
    pub fn new(mode: GrowthMode) -> Self {
        Self::with_config(mode, BufConfig::stack())
    }

    #[must_use]
    pub fn with_capacity(mode: GrowthMode, capacity: usize) -> Self {
        Self::with_config(mode, BufConfig::stack().with_capacity(capacity))
    }

    #[must_use]
    pub fn with_config(mode: GrowthMode, config: BufConfig) -> Self {
        Self {
            buf: RawBuf::with_config(config),
            len: 0,
            mode,
        }
    }

    /// # Errors
    ///
    /// Returns `CollectionError::AllocationFailure` if the buffer cannot be
    /// allocated.
    pub fn try_with_config(mode: GrowthMode, config: BufConfig) -> Result<Self, CollectionError> {
        Ok(Self {
            buf: RawBuf::try_with_config(config)?,
            len: 0,
            mode,
        })
    }

    /// A growing stack with the default capacity.
    #[must_use]
    pub fn dynamic() -> Self {
        Self::new(GrowthMode::Dynamic)
    }

    /// A fixed-size stack holding at most `capacity` elements (after
    /// clamping to the minimum capacity).
    #[must_use]
    pub fn fixed(capacity: usize) -> Self {
        Self::with_capacity(GrowthMode::Static, capacity)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Index of the top element, `None` when the stack is empty.
    #[must_use]
    pub fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[must_use]
    pub fn mode(&self) -> GrowthMode {
        self.mode
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A released stack is never full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.buf.is_released() && self.len == self.buf.capacity()
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.buf.is_released()
    }

    /// Pushes `value` onto the stack.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Full` when a static stack is full,
    /// `CollectionError::AllocationFailure` when a dynamic stack cannot grow,
    /// and `CollectionError::Released` after `release()`.
    pub fn try_push(&mut self, value: T) -> Result<(), CollectionError> {
        self.buf.ensure_live()?;
        if self.is_full() {
            match self.mode {
                GrowthMode::Static => {
                    return Err(CollectionError::Full {
                        capacity: self.capacity(),
                    })
                }
                GrowthMode::Dynamic => {
                    self.buf.grow()?;
                }
            }
        }

        self.buf.put(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// # Panics
    ///
    /// Panics when a static stack is full.
    #[track_caller]
    pub fn push(&mut self, value: T) {
        self.try_push(value).or_panic();
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Empty` if the stack is empty,
    /// `CollectionError::Released` after `release()`.
    pub fn try_pop(&mut self) -> Result<T, CollectionError> {
        self.buf.ensure_live()?;
        let top = self.top().ok_or(CollectionError::Empty)?;
        let value = self.buf.take(top).ok_or(CollectionError::Empty)?;
        self.len = top;
        Ok(value)
    }

    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        self.try_pop().or_panic()
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// Same as [`Stack::try_pop`].
    pub fn try_peek(&self) -> Result<&T, CollectionError> {
        self.buf.ensure_live()?;
        let top = self.top().ok_or(CollectionError::Empty)?;
        self.buf.slot(top).ok_or(CollectionError::Empty)
    }

    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[must_use]
    #[track_caller]
    pub fn peek(&self) -> &T {
        self.try_peek().or_panic()
    }

    /// # Errors
    ///
    /// Same as [`Stack::try_pop`].
    pub fn try_peek_mut(&mut self) -> Result<&mut T, CollectionError> {
        self.buf.ensure_live()?;
        let top = self.top().ok_or(CollectionError::Empty)?;
        self.buf.slot_mut(top).ok_or(CollectionError::Empty)
    }

    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[track_caller]
    pub fn peek_mut(&mut self) -> &mut T {
        self.try_peek_mut().or_panic()
    }

    pub fn clear(&mut self) {
        self.buf.clear(0, self.len);
        self.len = 0;
    }

    /// Frees the buffer. Calling it again is a no-op.
    pub fn release(&mut self) {
        self.buf.release();
        self.len = 0;
    }

    /// Returns an iterator from the bottom of the stack to the top.
    #[must_use]
    pub fn iter(&self) -> SlotIter<'_, T> {
        SlotIter::new(self.buf.slots(self.len))
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = SlotIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
