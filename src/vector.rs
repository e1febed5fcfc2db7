use crate::config::BufConfig;
use crate::error::{CollectionError, OrPanic};
use crate::iter::{SlotIter, SlotIterMut};
use crate::raw_buf::RawBuf;

/// A growable array over a [`RawBuf`].
///
/// Appending is O(1) amortized, inserting or removing at an arbitrary index
/// shifts the tail in one block move. The capacity doubles when an insert
/// finds the vector full and never shrinks.
///
/// Every index-checked operation comes in two forms: `try_*` returns
/// `CollectionError`, the plain form panics with the same message.
#[derive(Debug, Clone)]
pub struct Vector<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector with the default capacity (8).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BufConfig::vector())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(BufConfig::vector().with_capacity(capacity))
    }

    #[must_use]
    pub fn with_config(config: BufConfig) -> Self {
        Self {
            buf: RawBuf::with_config(config),
            len: 0,
        }
    }

    /// # Errors
    ///
    /// Returns `CollectionError::AllocationFailure` if the buffer cannot be
    /// allocated.
    pub fn try_with_config(config: BufConfig) -> Result<Self, CollectionError> {
        Ok(Self {
            buf: RawBuf::try_with_config(config)?,
            len: 0,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the next insert has to grow the buffer.
    ///
    /// A released vector is never full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.buf.is_released() && self.len == self.buf.capacity()
    }

    #[must_use]
    pub const fn element_size(&self) -> usize {
        self.buf.element_size()
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.buf.is_released()
    }

    fn check_index(&self, index: usize) -> Result<(), CollectionError> {
        self.buf.ensure_live()?;
        if index >= self.len {
            return Err(CollectionError::IndexOutOfRange {
                index,
                length: self.len,
            });
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> CollectionError {
        CollectionError::IndexOutOfRange {
            index,
            length: self.len,
        }
    }

    /// Tries to get the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index` is not below
    /// `len()`, `CollectionError::Released` after `release()`.
    pub fn try_get(&self, index: usize) -> Result<&T, CollectionError> {
        self.check_index(index)?;
        self.buf.slot(index).ok_or_else(|| self.out_of_range(index))
    }

    /// Gets the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).or_panic()
    }

    /// Tries to get a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::try_get`].
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        self.check_index(index)?;
        let err = self.out_of_range(index);
        self.buf.slot_mut(index).ok_or(err)
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).or_panic()
    }

    /// Overwrites the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::try_get`].
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        self.check_index(index)?;
        let err = self.out_of_range(index);
        self.buf.put(index, value).ok_or(err)
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).or_panic()
    }

    /// Inserts `value` at `index`, shifting the elements at `index..len` up
    /// by one. `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index > len()`,
    /// `CollectionError::AllocationFailure` if growing fails, and
    /// `CollectionError::Released` after `release()`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        self.buf.ensure_live()?;
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        if self.is_full() {
            self.buf.grow()?;
        }

        self.buf.shift_up(index, self.len);
        self.buf.put(index, value);
        self.len += 1;
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `index > len()` or the buffer cannot grow.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).or_panic();
    }

    /// Removes the element at `index`, shifting the elements after it down
    /// by one. The capacity is left unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::try_get`].
    pub fn try_remove(&mut self, index: usize) -> Result<T, CollectionError> {
        self.check_index(index)?;
        let err = self.out_of_range(index);

        let removed = self.buf.take(index).ok_or(err)?;
        self.buf.shift_down(index, self.len);
        self.len -= 1;
        Ok(removed)
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).or_panic()
    }

    /// Appends `value` at the tail.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::AllocationFailure` if growing fails,
    /// `CollectionError::Released` after `release()`.
    pub fn try_push(&mut self, value: T) -> Result<(), CollectionError> {
        self.try_insert(self.len, value)
    }

    /// # Panics
    ///
    /// Panics if the buffer cannot grow or was released.
    #[track_caller]
    pub fn push(&mut self, value: T) {
        self.try_push(value).or_panic();
    }

    /// # Errors
    ///
    /// Same as [`Vector::try_push`].
    pub fn try_push_front(&mut self, value: T) -> Result<(), CollectionError> {
        self.try_insert(0, value)
    }

    /// # Panics
    ///
    /// Panics if the buffer cannot grow or was released.
    #[track_caller]
    pub fn push_front(&mut self, value: T) {
        self.try_push_front(value).or_panic();
    }

    /// Removes the tail element.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Empty` on an empty vector,
    /// `CollectionError::Released` after `release()`.
    pub fn try_pop(&mut self) -> Result<T, CollectionError> {
        self.buf.ensure_live()?;
        let last = self.len.checked_sub(1).ok_or(CollectionError::Empty)?;
        self.try_remove(last)
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        self.try_pop().or_panic()
    }

    /// Removes the head element, shifting the rest down.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::try_pop`].
    pub fn try_pop_front(&mut self) -> Result<T, CollectionError> {
        self.buf.ensure_live()?;
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }
        self.try_remove(0)
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().or_panic()
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.try_get(0).ok()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.try_get(self.len.checked_sub(1)?).ok()
    }

    /// Drops every element; the capacity is kept.
    pub fn clear(&mut self) {
        self.buf.clear(0, self.len);
        self.len = 0;
    }

    /// Frees the buffer. Calling it again is a no-op.
    ///
    /// Afterwards the vector reports a length and capacity of 0 and every
    /// `try_*` operation returns `CollectionError::Released`.
    pub fn release(&mut self) {
        self.buf.release();
        self.len = 0;
    }

    /// Returns an iterator over the elements in index order.
    #[must_use]
    pub fn iter(&self) -> SlotIter<'_, T> {
        SlotIter::new(self.buf.slots(self.len))
    }

    #[must_use]
    pub fn iter_mut(&mut self) -> SlotIterMut<'_, T> {
        SlotIterMut::new(self.buf.slots_mut(self.len))
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = SlotIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = SlotIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
