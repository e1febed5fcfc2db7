#![no_std]

//! `bufcoll`: a vector, a stack and a circular queue over one growable slot buffer.
//!
//! All three containers store their elements in a [`RawBuf`], a contiguous
//! block of exactly `capacity` slots. The containers differ only in how they
//! track occupancy and move elements around:
//!
//! - [`Vector`]: length-tracked, O(1) amortized append, O(n) insert/remove
//!   with a block shift of the tail.
//! - [`Stack`]: top-of-stack over the same layout, either fixed-size
//!   ([`GrowthMode::Static`]) or doubling ([`GrowthMode::Dynamic`]).
//! - [`Queue`]: fixed-size FIFO with `front`/`rear` indices wrapping modulo
//!   the capacity.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Performance Characteristics
//!
//! - `Vector::push()`, `Stack::push()`: O(1) amortized, doubling on overflow
//! - `Vector::insert()`, `Vector::remove()`: O(n) - one block move of the tail
//! - `Queue::enqueue()`, `Queue::dequeue()`: O(1), no element is ever moved
//! - `get()`, `peek()`: O(1)
//! - Capacity never shrinks; `clear()` keeps the buffer
//!
//! # Configuration
//!
//! Every container is built from a [`BufConfig`]. The initial capacity
//! defaults to 8 for a vector and 16 for a stack or a queue, and any capacity
//! below `min_capacity` is clamped up to it:
//!
//! ```
//! # use bufcoll::{BufConfig, Queue, Vector};
//! let vector: Vector<u32> = Vector::new();
//! assert_eq!(vector.capacity(), 8);
//!
//! let queue: Queue<u32> = Queue::with_config(BufConfig::queue().with_capacity(3).with_min_capacity(10));
//! assert_eq!(queue.capacity(), 10);
//! ```
//!
//! # Error Handling
//!
//! Operations with a precondition exist twice. The `try_*` form returns a
//! [`CollectionError`]; the plain form panics with the error's message:
//!
//! ```
//! # use bufcoll::{CollectionError, Vector};
//! let mut vector = Vector::new();
//! vector.push("first");
//!
//! assert_eq!(vector.get(0), &"first");
//! assert_eq!(
//!     vector.try_get(1),
//!     Err(CollectionError::IndexOutOfRange { index: 1, length: 1 })
//! );
//! ```
//!
//! # Vector Interface
//!
//! ```
//! # use bufcoll::Vector;
//! let mut vector = Vector::new();
//! vector.push(1);
//! vector.push(3);
//! vector.insert(1, 2);
//! assert_eq!(vector.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! assert_eq!(vector.remove(0), 1);
//! for value in &mut vector {
//!     *value *= 10;
//! }
//! assert_eq!(vector.iter().copied().collect::<Vec<_>>(), [20, 30]);
//! ```
//!
//! # Stack Interface
//!
//! ```
//! # use bufcoll::{CollectionError, GrowthMode, Stack};
//! let mut stack = Stack::with_capacity(GrowthMode::Static, 2);
//! stack.push("first");
//! stack.push("second");
//!
//! assert_eq!(stack.peek(), &"second");
//! assert_eq!(stack.try_push("third"), Err(CollectionError::Full { capacity: 2 }));
//!
//! assert_eq!(stack.pop(), "second");
//! assert_eq!(stack.pop(), "first");
//! assert!(stack.try_pop().is_err());
//! ```
//!
//! # Queue Interface
//!
//! One slot of the queue is always kept free, so a queue of capacity `N`
//! holds at most `N - 1` elements:
//!
//! ```
//! # use bufcoll::Queue;
//! let mut queue = Queue::with_capacity(3);
//! queue.enqueue('a');
//! queue.enqueue('b');
//! assert!(queue.is_full());
//!
//! assert_eq!(queue.dequeue(), 'a');
//! queue.enqueue('c');
//! assert_eq!(queue.iter().collect::<String>(), "bc");
//! ```
//!
//! # Teardown
//!
//! `release()` frees the buffer ahead of drop. It is idempotent, and any later
//! fallible operation reports [`CollectionError::Released`].

extern crate alloc;

mod config;
mod error;
mod iter;
mod queue;
mod raw_buf;
mod stack;
mod vector;

// Re-export public types and traits
pub use config::{
    BufConfig, DEFAULT_QUEUE_CAPACITY, DEFAULT_STACK_CAPACITY, DEFAULT_VECTOR_CAPACITY,
    MIN_CAPACITY,
};
pub use error::CollectionError;
pub use iter::{QueueIter, SlotIter, SlotIterMut};
pub use queue::Queue;
pub use raw_buf::RawBuf;
pub use stack::{GrowthMode, Stack};
pub use vector::Vector;
