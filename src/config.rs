/// Lower bound for any container capacity.
///
/// Doubling from this value always makes progress, and a queue of this
/// capacity can hold one element.
pub const MIN_CAPACITY: usize = 2;

/// Initial slot count of a [`Vector`](crate::Vector) built with `new()`.
pub const DEFAULT_VECTOR_CAPACITY: usize = 8;
/// Initial slot count of a [`Stack`](crate::Stack) built with `new()`.
pub const DEFAULT_STACK_CAPACITY: usize = 16;
/// Capacity of a [`Queue`](crate::Queue) built with `new()`.
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

/// Construction options shared by all containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufConfig {
    /// Initial number of slots.
    pub capacity: usize,
    /// Capacities below this value are clamped up to it.
    pub min_capacity: usize,
}

impl BufConfig {
    /// Config for `capacity` slots with the [`MIN_CAPACITY`] floor.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            min_capacity: MIN_CAPACITY,
        }
    }

    /// Config with [`DEFAULT_VECTOR_CAPACITY`].
    #[must_use]
    pub const fn vector() -> Self {
        Self::new(DEFAULT_VECTOR_CAPACITY)
    }

    /// Config with [`DEFAULT_STACK_CAPACITY`].
    #[must_use]
    pub const fn stack() -> Self {
        Self::new(DEFAULT_STACK_CAPACITY)
    }

    /// Config with [`DEFAULT_QUEUE_CAPACITY`].
    #[must_use]
    pub const fn queue() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY)
    }

    /// Replaces the requested capacity.
    #[must_use]
    pub const fn with_capacity(self, capacity: usize) -> Self {
        Self { capacity, ..self }
    }

    /// Replaces the clamping floor.
    #[must_use]
    pub const fn with_min_capacity(self, min_capacity: usize) -> Self {
        Self {
            min_capacity,
            ..self
        }
    }

    /// Number of slots a buffer built from this config allocates.
    ///
    /// `min_capacity` is itself never allowed below [`MIN_CAPACITY`].
    #[must_use]
    pub fn effective_capacity(&self) -> usize {
        self.capacity.max(self.min_capacity).max(MIN_CAPACITY)
    }
}

impl Default for BufConfig {
    fn default() -> Self {
        Self::vector()
    }
}
