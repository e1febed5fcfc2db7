use alloc::vec::Vec;
use core::mem::size_of;

use crate::config::BufConfig;
use crate::error::CollectionError;

/// Contiguous slot storage shared by `Vector`, `Stack` and `Queue`.
///
/// The buffer always holds exactly `capacity` slots. A slot is `None` until a
/// container writes into it. The owning container tracks which slots are live;
/// the buffer itself does no occupancy bookkeeping.
///
/// A released buffer has no slots and a capacity of 0. Every constructed
/// buffer has a capacity of at least [`crate::MIN_CAPACITY`], so capacity 0
/// and "released" are the same state.
#[derive(Debug, Clone)]
pub struct RawBuf<T> {
    slots: Vec<Option<T>>,
}

impl<T> RawBuf<T> {
    /// Allocates a buffer with the config's effective capacity.
    ///
    /// Allocation failure aborts, as for any `Vec`. Use
    /// [`RawBuf::try_with_config`] to get an error instead.
    #[must_use]
    pub fn with_config(config: BufConfig) -> Self {
        let capacity = config.effective_capacity();
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        log_allocation::<T>(capacity);
        Self { slots }
    }

    /// Allocates a buffer with the config's effective capacity.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::AllocationFailure` if the allocator cannot
    /// provide the slots.
    pub fn try_with_config(config: BufConfig) -> Result<Self, CollectionError> {
        let capacity = config.effective_capacity();
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| CollectionError::AllocationFailure {
                requested: capacity,
            })?;
        slots.resize_with(capacity, || None);
        log_allocation::<T>(capacity);
        Ok(Self { slots })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Byte width of one slot's element type.
    #[must_use]
    pub const fn element_size(&self) -> usize {
        size_of::<T>()
    }

    /// Byte offset of slot `index` from the start of the element region.
    ///
    /// No bounds check: the caller validates `index` first.
    #[must_use]
    pub const fn offset(&self, index: usize) -> usize {
        index * size_of::<T>()
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.slots.is_empty()
    }

    /// # Errors
    ///
    /// Returns `CollectionError::Released` if the buffer was released.
    pub fn ensure_live(&self) -> Result<(), CollectionError> {
        if self.is_released() {
            Err(CollectionError::Released)
        } else {
            Ok(())
        }
    }

    /// Doubles the capacity, keeping every slot at its index.
    ///
    /// Returns the new capacity.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Released` on a released buffer and
    /// `CollectionError::AllocationFailure` if the allocator refuses the new
    /// size.
    pub fn grow(&mut self) -> Result<usize, CollectionError> {
        self.ensure_live()?;

        let old_capacity = self.capacity();
        let new_capacity =
            old_capacity
                .checked_mul(2)
                .ok_or(CollectionError::AllocationFailure {
                    requested: usize::MAX,
                })?;
        self.slots
            .try_reserve_exact(new_capacity - old_capacity)
            .map_err(|_| CollectionError::AllocationFailure {
                requested: new_capacity,
            })?;
        self.slots.resize_with(new_capacity, || None);

        tracing::debug!(
            old_capacity,
            capacity = new_capacity,
            element_size = size_of::<T>(),
            bytes = new_capacity * size_of::<T>(),
            "slot buffer grown"
        );
        Ok(new_capacity)
    }

    /// Frees the storage. Calling it again is a no-op.
    pub fn release(&mut self) {
        if self.is_released() {
            return;
        }
        let capacity = self.capacity();
        self.slots = Vec::new();
        tracing::debug!(capacity, "slot buffer released");
    }

    /// Shared access to slot `index`.
    ///
    /// Bounds are only asserted in debug builds; an index past the capacity
    /// still panics in release builds through slice indexing.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&T> {
        debug_assert!(index < self.capacity(), "slot {index} past capacity");
        self.slots[index].as_ref()
    }

    #[must_use]
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        debug_assert!(index < self.capacity(), "slot {index} past capacity");
        self.slots[index].as_mut()
    }

    /// Writes `value` into slot `index` and returns what was there.
    pub fn put(&mut self, index: usize, value: T) -> Option<T> {
        debug_assert!(index < self.capacity(), "slot {index} past capacity");
        self.slots[index].replace(value)
    }

    /// Empties slot `index` and returns its value.
    pub fn take(&mut self, index: usize) -> Option<T> {
        debug_assert!(index < self.capacity(), "slot {index} past capacity");
        self.slots[index].take()
    }

    /// Moves slots `[index, end)` one position up, into `[index + 1, end]`.
    ///
    /// Slot `end` must be empty; afterwards slot `index` is empty.
    pub fn shift_up(&mut self, index: usize, end: usize) {
        debug_assert!(index <= end && end < self.capacity());
        debug_assert!(self.slots[end].is_none(), "shift_up target not empty");
        self.slots[index..=end].rotate_right(1);
    }

    /// Moves slots `[index + 1, end)` one position down, into `[index, end - 1)`.
    ///
    /// Slot `index` must be empty; afterwards slot `end - 1` is empty.
    pub fn shift_down(&mut self, index: usize, end: usize) {
        debug_assert!(index < end && end <= self.capacity());
        debug_assert!(self.slots[index].is_none(), "shift_down source not empty");
        self.slots[index..end].rotate_left(1);
    }

    /// Empties slots `[start, end)` without touching the capacity.
    pub fn clear(&mut self, start: usize, end: usize) {
        debug_assert!(end <= self.capacity(), "clear end {end} past capacity");
        self.slots[start..end].fill_with(|| None);
    }

    /// The slots in `[0, end)`.
    #[must_use]
    pub fn slots(&self, end: usize) -> &[Option<T>] {
        &self.slots[..end]
    }

    #[must_use]
    pub fn slots_mut(&mut self, end: usize) -> &mut [Option<T>] {
        &mut self.slots[..end]
    }
}

fn log_allocation<T>(capacity: usize) {
    tracing::debug!(
        capacity,
        element_size = size_of::<T>(),
        bytes = capacity * size_of::<T>(),
        "slot buffer allocated"
    );
}
